//! Project ID discovery.

use std::path::Path;

use tracing::debug;

use crate::credentials::ServiceAccountKey;
use crate::error::{Error, Result};
use crate::source::{CommandRunner, Environment, ProcessEnvironment, SystemCommandRunner};

/// Environment variable that overrides every other source.
///
/// Set by Cloud Shell and the newer App Engine runtimes.
pub const PROJECT_ENV_VAR: &str = "GOOGLE_CLOUD_PROJECT";

/// Environment variable naming the application default credentials file.
pub const CREDENTIALS_ENV_VAR: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// Cloud SDK command line tool.
pub const GCLOUD_PROGRAM: &str = "gcloud";

/// Arguments that make `gcloud` print the configured project.
pub const GCLOUD_PROJECT_ARGS: &[&str] = &["config", "get-value", "core/project"];

/// Returns the project ID of the current environment, or `""` if none can be
/// found.
///
/// The sources are tried in this order:
/// 1. `GOOGLE_CLOUD_PROJECT`
/// 2. `project_id` of the key file named by `GOOGLE_APPLICATION_CREDENTIALS`
/// 3. `gcloud config get-value core/project`
///
/// Nothing is cached. The last step blocks until `gcloud` exits, so this is
/// meant to be called once at startup.
pub fn default_project_id() -> String {
    ProjectIdResolver::system().resolve()
}

/// Resolves a project ID from an [`Environment`] and a [`CommandRunner`].
#[derive(Clone, Debug, Default)]
pub struct ProjectIdResolver<E, R> {
    env: E,
    runner: R,
}

impl ProjectIdResolver<ProcessEnvironment, SystemCommandRunner> {
    /// Creates a resolver over the current process environment, filesystem
    /// and `PATH`.
    pub fn system() -> Self {
        Self::new(ProcessEnvironment, SystemCommandRunner)
    }
}

impl<E, R> ProjectIdResolver<E, R>
where
    E: Environment,
    R: CommandRunner,
{
    /// Creates a resolver with given sources.
    pub fn new(env: E, runner: R) -> Self {
        Self { env, runner }
    }

    /// Returns the first project ID found, or `""`.
    pub fn resolve(&self) -> String {
        self.env_var_project()
            .or_else(|| self.credentials_file_project())
            .or_else(|| self.gcloud_project())
            .unwrap_or_default()
    }

    /// Reads `GOOGLE_CLOUD_PROJECT`. Empty values count as unset.
    pub fn env_var_project(&self) -> Option<String> {
        let project_id = self.env.var(PROJECT_ENV_VAR).filter(|id| !id.is_empty());
        match &project_id {
            Some(id) => debug!(project_id = %id, "project ID from {PROJECT_ENV_VAR}"),
            None => debug!("{PROJECT_ENV_VAR} is not set"),
        }
        project_id
    }

    /// Reads `project_id` from the key file named by
    /// `GOOGLE_APPLICATION_CREDENTIALS`.
    pub fn credentials_file_project(&self) -> Option<String> {
        match self.credentials_project_id() {
            Ok(id) => {
                debug!(project_id = %id, "project ID from {CREDENTIALS_ENV_VAR}");
                Some(id)
            }
            Err(e) => {
                debug!(error = %e, "no project ID from credentials file");
                None
            }
        }
    }

    /// Asks `gcloud` for the configured project.
    pub fn gcloud_project(&self) -> Option<String> {
        match self.runner.run(GCLOUD_PROGRAM, GCLOUD_PROJECT_ARGS) {
            Ok(stdout) => {
                let id = stdout.trim();
                if id.is_empty() {
                    debug!("{GCLOUD_PROGRAM} printed no project");
                    return None;
                }
                debug!(project_id = %id, "project ID from {GCLOUD_PROGRAM}");
                Some(id.to_string())
            }
            Err(e) => {
                debug!(error = %e, "no project ID from {GCLOUD_PROGRAM}");
                None
            }
        }
    }

    fn credentials_project_id(&self) -> Result<String> {
        let path = self
            .env
            .var(CREDENTIALS_ENV_VAR)
            .ok_or(Error::MissingEnvVar(CREDENTIALS_ENV_VAR))?;
        let bytes = self.env.read_file(Path::new(&path))?;
        ServiceAccountKey::from_slice(&bytes)?
            .project_id
            .filter(|id| !id.is_empty())
            .ok_or(Error::MissingField("project_id"))
    }
}
