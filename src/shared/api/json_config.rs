// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Upload payloads travel base64-encoded inside the form body, so the
/// default 32 KiB JSON limit is raised to fit a full-size attachment.
const MAX_JSON_PAYLOAD_BYTES: usize = 8 * 1024 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_JSON_PAYLOAD_BYTES)
        .error_handler(|err, _req| {
            let message = err.to_string();
            tracing::debug!(error = %message, "rejected malformed JSON body");
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
