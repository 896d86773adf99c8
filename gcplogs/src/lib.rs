#![warn(missing_docs)]
//! Best-effort helpers for services running on [Google Cloud](https://cloud.google.com/):
//! discovering the current project ID and turning the `X-Cloud-Trace-Context`
//! request header into a [Cloud Trace](https://cloud.google.com/trace) resource
//! name for log entries.
//!
//! Neither helper fails. Anything missing or malformed yields an empty
//! string, and what to do with an unknown project is up to the caller.
//!
//! ### Examples
//!
//! #### Project ID
//!
//! ```
//! use gcplogs::default_project_id;
//!
//! // reads GOOGLE_CLOUD_PROJECT
//! # std::env::set_var("GOOGLE_CLOUD_PROJECT", "my-project");
//! let project_id = default_project_id();
//! assert_eq!(project_id, "my-project");
//! ```
//!
//! #### Trace resource name
//!
//! ```
//! use gcplogs::{TraceContext, Tracer};
//!
//! let tracer = Tracer::new("my-project");
//! let request = http::Request::builder()
//!     .header(TraceContext::NAME, "105445aa7843bc8bf206b120001000/0;o=1")
//!     .body(())
//!     .unwrap();
//! assert_eq!(
//!     tracer.from_request(&request),
//!     "projects/my-project/traces/105445aa7843bc8bf206b120001000",
//! );
//! ```
//!
//! #### Custom sources
//!
//! The project lookup reads its inputs through [`Environment`] and
//! [`CommandRunner`], so they can be replaced:
//!
//! ```
//! use std::{io, path::Path};
//! use gcplogs::{CommandRunner, Environment, ProjectIdResolver};
//!
//! #[derive(Debug)]
//! struct Empty;
//!
//! impl Environment for Empty {
//!     fn var(&self, _name: &str) -> Option<String> {
//!         None
//!     }
//!     fn read_file(&self, _path: &Path) -> io::Result<Vec<u8>> {
//!         Err(io::ErrorKind::NotFound.into())
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct Gcloud;
//!
//! impl CommandRunner for Gcloud {
//!     fn run(&self, _program: &str, _args: &[&str]) -> gcplogs::Result<String> {
//!         Ok("from-gcloud\n".to_string())
//!     }
//! }
//!
//! let resolver = ProjectIdResolver::new(Empty, Gcloud);
//! assert_eq!(resolver.resolve(), "from-gcloud");
//! ```

mod credentials;
mod error;
mod header;
mod project;
mod source;
mod tracer;

pub use crate::{
    credentials::ServiceAccountKey,
    error::{Error, Result},
    header::TraceContext,
    project::{
        default_project_id, ProjectIdResolver, CREDENTIALS_ENV_VAR, GCLOUD_PROGRAM,
        GCLOUD_PROJECT_ARGS, PROJECT_ENV_VAR,
    },
    source::{CommandRunner, Environment, ProcessEnvironment, SystemCommandRunner},
    tracer::Tracer,
};
