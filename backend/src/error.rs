use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Problems found while loading configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid Resend API key format")]
    InvalidResendKey,

    #[error("Invalid email address in {0}")]
    InvalidEmail(&'static str),

    #[error("Invalid URL in {0}")]
    InvalidUrl(&'static str),

    #[error("Invalid port number: {0:?}")]
    InvalidPort(String),

    #[error("Invalid contact rate limit: {0:?}")]
    InvalidRate(String),
}

/// The email provider did not accept a message.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("email provider rejected the message: {0}")]
    Provider(String),
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Too many messages, try again later")]
    RateLimited,

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

impl ContactError {
    pub fn status(&self) -> StatusCode {
        match self {
            ContactError::MissingField(_) => StatusCode::BAD_REQUEST,
            ContactError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ContactError::Delivery(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let message = match &self {
            // Provider details stay in the logs
            ContactError::Delivery(_) => "Failed to send message".to_string(),
            other => other.to_string(),
        };
        (self.status(), Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_error_kind() {
        assert_eq!(ContactError::MissingField("name").status(), StatusCode::BAD_REQUEST);
        assert_eq!(ContactError::RateLimited.status(), StatusCode::TOO_MANY_REQUESTS);
        let delivery = ContactError::from(DeliveryError::Provider("boom".into()));
        assert_eq!(delivery.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn missing_field_names_the_field() {
        assert_eq!(ContactError::MissingField("email").to_string(), "email is required");
    }
}
