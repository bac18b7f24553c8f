use actix_web::error::JsonPayloadError;
use serde::Serialize;

use crate::api::job::ServiceError;

/// Failure envelope shared by every endpoint
#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// Creates a configured JsonConfig with standardized error handling for the entire project
pub fn json_config() -> actix_web_validator::JsonConfig {
    actix_web_validator::JsonConfig::default().error_handler(|err, _req| {
        let message = match err {
            actix_web_validator::Error::Validate(validation_errors) => {
                let messages: Vec<String> = validation_errors
                    .field_errors()
                    .into_iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| format!("Validation error in field: {}", field))
                        })
                    })
                    .collect();
                messages.join(", ")
            }
            actix_web_validator::Error::Deserialize(de_err) => {
                let err_string = de_err.to_string();

                if err_string.contains("EOF while parsing") {
                    "Request body is empty. Expected JSON payload".to_string()
                } else {
                    "Invalid JSON format".to_string()
                }
            }
            actix_web_validator::Error::JsonPayloadError(payload_err) => match payload_err {
                JsonPayloadError::Deserialize(de_err) if de_err.is_eof() => {
                    "Request body is empty. Expected JSON payload".to_string()
                }
                JsonPayloadError::Deserialize(_) => "Invalid JSON format".to_string(),
                JsonPayloadError::ContentType => {
                    "Content-Type must be application/json".to_string()
                }
                other => format!("Invalid JSON payload: {}", other),
            },
            _ => "Validation error".to_string(),
        };

        ServiceError::Validation(message).into()
    })
}
