use std::sync::Arc;

use axum::{extract::State, Json};
use governor::{Quota, RateLimiter};

use crate::error::ContactError;
use crate::handlers::contact_dtos::{ContactRequest, ContactResponse};
use crate::AppState;

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, ContactError> {
    let request = request.trimmed();
    if let Some(field) = request.missing_field() {
        return Err(ContactError::MissingField(field));
    }

    // The sender address is caller-chosen, so the site-wide cap goes first
    if state.contact_global_limiter.check().is_err() {
        tracing::warn!("Global rate limit exceeded for contact form");
        return Err(ContactError::RateLimited);
    }

    // Per sender address, the limiter guard must be gone before awaiting
    {
        let quota = Quota::per_hour(state.config.contact_rate_per_hour);
        let limiter_key = request.email.to_lowercase();
        let entry = state
            .contact_limiter
            .entry(limiter_key.clone())
            .or_insert_with(|| RateLimiter::keyed(quota));
        let limiter = entry.value();
        if limiter.check_key(&limiter_key).is_err() {
            tracing::warn!("Rate limit exceeded for contact form: [redacted email]");
            return Err(ContactError::RateLimited);
        }
    }

    if let Err(e) = state.mailer.deliver(&request).await {
        tracing::error!("Failed to deliver contact message: {}", e);
        return Err(e.into());
    }

    tracing::info!("Contact message accepted");
    Ok(Json(ContactResponse {
        message: "Message sent".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::error::DeliveryError;
    use crate::utils::email::MockEmailDelivery;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::num::NonZeroU32;
    use tower::ServiceExt;

    fn app_with(mailer: MockEmailDelivery) -> Router {
        app_with_config(SiteConfig::sample(), mailer)
    }

    fn app_with_config(config: SiteConfig, mailer: MockEmailDelivery) -> Router {
        let state = AppState::new(config, Arc::new(mailer));
        crate::app(Arc::new(state))
    }

    fn contact_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn valid_body() -> Value {
        json!({
            "name": "Asha",
            "email": "asha@example.com",
            "message": "I have an app idea."
        })
    }

    #[tokio::test]
    async fn accepted_message_is_delivered_once() {
        let mut mailer = MockEmailDelivery::new();
        mailer
            .expect_deliver()
            .withf(|m| m.name == "Asha" && m.email == "asha@example.com")
            .times(1)
            .returning(|_| Ok(()));

        let response = app_with(mailer).oneshot(contact_request(valid_body())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["message"], "Message sent");
    }

    #[tokio::test]
    async fn fields_are_trimmed_before_delivery() {
        let mut mailer = MockEmailDelivery::new();
        mailer
            .expect_deliver()
            .withf(|m| m.name == "Asha" && m.message == "hi")
            .times(1)
            .returning(|_| Ok(()));

        let body = json!({ "name": "  Asha ", "email": "asha@example.com", "message": "\nhi  " });
        let response = app_with(mailer).oneshot(contact_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn blank_field_is_rejected_without_sending() {
        let mut mailer = MockEmailDelivery::new();
        mailer.expect_deliver().never();

        let body = json!({ "name": "Asha", "email": "   ", "message": "hello" });
        let response = app_with(mailer).oneshot(contact_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "email is required");
    }

    #[tokio::test]
    async fn absent_field_is_rejected_without_sending() {
        let mut mailer = MockEmailDelivery::new();
        mailer.expect_deliver().never();

        let body = json!({ "email": "asha@example.com", "message": "hello" });
        let response = app_with(mailer).oneshot(contact_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "name is required");
    }

    #[tokio::test]
    async fn provider_failure_maps_to_bad_gateway() {
        let mut mailer = MockEmailDelivery::new();
        mailer
            .expect_deliver()
            .times(1)
            .returning(|_| Err(DeliveryError::Provider("invalid api key".to_string())));

        let response = app_with(mailer).oneshot(contact_request(valid_body())).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_json(response).await["error"], "Failed to send message");
    }

    #[tokio::test]
    async fn repeated_sender_hits_the_rate_limit() {
        let mut mailer = MockEmailDelivery::new();
        // sample config allows five per hour
        mailer.expect_deliver().times(5).returning(|_| Ok(()));
        let app = app_with(mailer);

        for _ in 0..5 {
            let response = app.clone().oneshot(contact_request(valid_body())).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        // Case differences do not dodge the limit
        let mut shouted = valid_body();
        shouted["email"] = json!("ASHA@example.com");
        let response = app.oneshot(contact_request(shouted)).await.unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn changing_sender_address_does_not_dodge_the_global_limit() {
        let config = SiteConfig {
            contact_global_rate_per_hour: NonZeroU32::new(3).unwrap(),
            ..SiteConfig::sample()
        };
        let mut mailer = MockEmailDelivery::new();
        mailer.expect_deliver().times(3).returning(|_| Ok(()));
        let state = Arc::new(AppState::new(config, Arc::new(mailer)));
        let app = crate::app(state.clone());

        for i in 0..6 {
            let mut body = valid_body();
            body["email"] = json!(format!("visitor{i}@example.com"));
            let response = app.clone().oneshot(contact_request(body)).await.unwrap();
            let expected = if i < 3 { StatusCode::OK } else { StatusCode::TOO_MANY_REQUESTS };
            assert_eq!(response.status(), expected, "request {i}");
        }
        // Rejected senders never get a per-address limiter
        assert_eq!(state.contact_limiter.len(), 3);
    }
}
