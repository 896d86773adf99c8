//! Trace resource names from inbound requests.

use http::{HeaderMap, Request};
use tracing::debug;

use crate::header::TraceContext;
use crate::project::default_project_id;

/// Builds Cloud Trace resource names for a project.
///
/// A tracer with an empty project ID never produces a name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tracer {
    project_id: String,
}

impl Tracer {
    /// Creates a tracer for a given project.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
        }
    }

    /// Creates a tracer for the project returned by
    /// [`default_project_id`](crate::default_project_id).
    pub fn from_default_project() -> Self {
        Self::new(default_project_id())
    }

    /// Project ID.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the trace resource name of a request, or `""` if the request
    /// carries no usable `X-Cloud-Trace-Context` header.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_request<B>(&self, request: &Request<B>) -> String {
        self.from_headers(request.headers())
    }

    /// Same as [`Tracer::from_request`] for a bare header map.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_headers(&self, headers: &HeaderMap) -> String {
        if self.project_id.is_empty() {
            return String::new();
        }
        let Some(value) = headers.get(TraceContext::NAME) else {
            return String::new();
        };
        match value
            .to_str()
            .ok()
            .and_then(|v| v.parse::<TraceContext>().ok())
        {
            Some(context) => self.trace_name(context.trace_id()),
            None => {
                debug!(header = ?value, "ignoring malformed {}", TraceContext::NAME);
                String::new()
            }
        }
    }

    /// Formats `projects/{project_id}/traces/{trace_id}`.
    pub fn trace_name(&self, trace_id: &str) -> String {
        format!("projects/{}/traces/{}", self.project_id, trace_id)
    }
}
