use std::env;

/// Environment variable holding the deployment mode.
pub const APP_ENV_VAR: &str = "APP_ENV";

/// Deployment mode derived from the `APP_ENV` environment variable.
///
/// `production` selects the remote configuration store for the bot token;
/// every other value, including an unset variable, selects the local
/// environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentMode {
    Production,
    Other,
}

impl DeploymentMode {
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("production") => DeploymentMode::Production,
            _ => DeploymentMode::Other,
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::parse(env::var(APP_ENV_VAR).ok().as_deref())
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub deployment_mode: DeploymentMode,
}

impl AppConfig {
    // No required variables: an unset APP_ENV is a valid non-production run.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            deployment_mode: DeploymentMode::from_env(),
        }
    }
}
