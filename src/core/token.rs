use async_trait::async_trait;
use aws_sdk_ssm::Client as SsmClient;
use std::env;

use super::config::DeploymentMode;
use crate::errors::BotError;

/// Configuration group holding production secrets in SSM Parameter Store.
const PROD_CONFIG_GROUP: &str = "prod-config";

/// Key of the bot token inside the production configuration group.
const TOKEN_KEY: &str = "telegram/token";

/// Environment variable holding the bot token outside production.
pub const TOKEN_VAR: &str = "TELEGRAM_TOKEN";

/// A source for the bot's secret token, resolved once per invocation.
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the backing store cannot produce a token.
    async fn resolve(&self) -> Result<String, BotError>;
}

/// Select the token source for the given deployment mode.
#[must_use]
pub fn for_mode(mode: DeploymentMode) -> Box<dyn TokenSource> {
    match mode {
        DeploymentMode::Production => Box::new(SsmTokenSource::new()),
        DeploymentMode::Other => Box::new(EnvTokenSource::new()),
    }
}

fn key_for_group(group: &str, key: &str) -> String {
    format!("/{group}/{key}")
}

/// Token source backed by SSM Parameter Store. Used in production; a failed
/// or empty lookup is an error, never a fallback value.
pub struct SsmTokenSource {
    parameter_name: String,
}

impl SsmTokenSource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            parameter_name: key_for_group(PROD_CONFIG_GROUP, TOKEN_KEY),
        }
    }

    #[must_use]
    pub fn parameter_name(&self) -> &str {
        &self.parameter_name
    }
}

impl Default for SsmTokenSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenSource for SsmTokenSource {
    async fn resolve(&self) -> Result<String, BotError> {
        let shared = aws_config::from_env().load().await;
        let client = SsmClient::new(&shared);

        let resp = client
            .get_parameter()
            .name(&self.parameter_name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| BotError::TokenError(format!("ssm get_parameter: {e}")))?;

        let Some(param) = resp.parameter else {
            return Err(BotError::TokenError(format!(
                "parameter {} missing from response",
                self.parameter_name
            )));
        };
        let Some(value) = param.value() else {
            return Err(BotError::TokenError(format!(
                "parameter {} has no value",
                self.parameter_name
            )));
        };

        Ok(value.to_string())
    }
}

/// Token source backed by a process environment variable. An unset variable
/// resolves to the empty string; the invalid credential is left for the
/// Telegram API to reject.
pub struct EnvTokenSource {
    var: String,
}

impl EnvTokenSource {
    #[must_use]
    pub fn new() -> Self {
        Self::with_var(TOKEN_VAR)
    }

    #[must_use]
    pub fn with_var(var: &str) -> Self {
        Self {
            var: var.to_string(),
        }
    }
}

impl Default for EnvTokenSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenSource for EnvTokenSource {
    async fn resolve(&self) -> Result<String, BotError> {
        Ok(env::var(&self.var).unwrap_or_default())
    }
}
