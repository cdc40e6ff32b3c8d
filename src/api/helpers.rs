//! Common helper functions for API handlers.
//!
//! Response builders for the Lambda proxy envelope.

use serde_json::{Value, json};

/// Returns a 200 OK response forwarding the given body verbatim.
#[must_use]
pub fn ok_response(body: &str) -> Value {
    json!({ "statusCode": 200, "body": body })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": json!({ "error": message }).to_string()
    })
}
