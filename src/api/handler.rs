//! API Lambda handler - the webhook relay.
//!
//! This module handles:
//! - Request body extraction and validation
//! - Echo reply construction
//! - Token resolution and the outbound `sendMessage` call

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use super::helpers;
use crate::core::config::AppConfig;
use crate::core::models::{SendMessage, Update};
use crate::core::token::{self, TokenSource};
use crate::errors::BotError;
use crate::telegram::TelegramClient;

pub use self::function_handler as handler;

/// Lambda handler for the webhook entrypoint.
///
/// Wires the token source for the current deployment mode and the production
/// Telegram endpoint into the relay.
///
/// # Errors
///
/// Never fails the invocation itself: every failure is mapped to a 500
/// response payload so the platform does not retry the webhook.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env();
    let source = token::for_mode(config.deployment_mode);

    relay_update(event, source.as_ref(), &TelegramClient::new()).await
}

/// Webhook relay over explicit collaborators.
///
/// Extracts the inbound chat message, resolves the bot token through
/// `source`, and relays an echo reply through `client`. Split out from
/// `function_handler` so tests can substitute the token source and point the
/// client at a local server.
#[tracing::instrument(level = "info", skip_all)]
pub async fn relay_update(
    event: LambdaEvent<Value>,
    source: &dyn TokenSource,
    client: &TelegramClient,
) -> Result<Value, Error> {
    let correlation_id = Uuid::new_v4().to_string();
    info!(%correlation_id, "Webhook received request");

    // ========================================================================
    // Extract and parse the update before any outbound work
    // ========================================================================

    let body = match extract_body(&event.payload) {
        Ok(b) => b,
        Err(response) => return Ok(response),
    };

    let update: Update = match serde_json::from_str(body) {
        Ok(update) => update,
        Err(e) => {
            let err = BotError::ParseError(e.to_string());
            error!(%correlation_id, "{}", err);
            return Ok(helpers::err_response(500, &err.to_string()));
        }
    };

    let reply = SendMessage::echo_reply(&update);

    // ========================================================================
    // Resolve the token for the current deployment mode
    // ========================================================================

    let bot_token = match source.resolve().await {
        Ok(bot_token) => bot_token,
        Err(e) => {
            error!(%correlation_id, "{}", e);
            return Ok(helpers::err_response(500, &e.to_string()));
        }
    };

    // ========================================================================
    // Relay the echo and map the outcome
    // ========================================================================

    match client.send_message(&bot_token, &reply).await {
        Ok(response_body) => {
            info!(%correlation_id, chat_id = reply.chat_id, "Echo relayed");
            Ok(helpers::ok_response(&response_body))
        }
        Err(e) => {
            error!(%correlation_id, "{}", e);
            Ok(helpers::err_response(500, &e.to_string()))
        }
    }
}

// ============================================================================
// Request Validation Helpers
// ============================================================================

fn extract_body(payload: &Value) -> Result<&str, Value> {
    let Some(body) = payload.get("body") else {
        error!("Request missing body");
        return Err(helpers::err_response(500, "Missing body"));
    };

    let Some(body_str) = body.as_str() else {
        error!("Request body is not a string");
        return Err(helpers::err_response(500, "Invalid body format"));
    };

    Ok(body_str)
}
