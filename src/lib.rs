//! Echobot - a Telegram chatbot that echoes every inbound message back to its chat.
//!
//! This crate implements a single-Lambda webhook relay:
//! 1. An API Lambda receives a Telegram webhook update over HTTP
//! 2. It resolves the bot token (SSM Parameter Store in production, an
//!    environment variable everywhere else)
//! 3. It posts an echo reply through the Telegram Bot API and forwards the
//!    API's response to the webhook caller
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - SSM Parameter Store for production secret storage
//! - reqwest for Telegram Bot API interactions
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! #[tokio::main]
//! async fn main() -> Result<(), lambda_runtime::Error> {
//!     // Set up structured logging
//!     echobot::setup_logging();
//!
//!     // Serve the webhook handler
//!     lambda_runtime::run(lambda_runtime::service_fn(echobot::api::handler)).await
//! }
//! ```

// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod telegram;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of the
/// Lambda binary.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// echobot::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
