use async_trait::async_trait;
use resend_rs::types::CreateEmailBaseOptions;
use resend_rs::Resend;

#[cfg(test)]
use mockall::automock;

use crate::config::EmailConfig;
use crate::error::DeliveryError;
use crate::handlers::contact_dtos::ContactRequest;

/// Hands a contact message to whoever delivers it. One attempt, no retry.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EmailDelivery: Send + Sync {
    async fn deliver(&self, message: &ContactRequest) -> Result<(), DeliveryError>;
}

/// The email the studio receives for one enquiry.
#[derive(Debug, PartialEq)]
pub struct Enquiry {
    pub subject: String,
    pub body: String,
    /// The visitor, so the studio can answer with a plain reply.
    pub reply_to: String,
}

impl Enquiry {
    pub fn from_request(request: &ContactRequest) -> Self {
        Self {
            subject: format!("New enquiry from {}", request.name),
            body: format!(
                "Name: {}\nEmail: {}\n\nMessage:\n{}\n",
                request.name, request.email, request.message
            ),
            reply_to: request.email.clone(),
        }
    }
}

pub struct ResendDelivery {
    client: Resend,
    from: String,
    to: String,
}

impl ResendDelivery {
    pub fn new(config: &EmailConfig) -> Self {
        Self {
            client: Resend::new(&config.resend_api_key),
            from: config.from_header(),
            to: config.to_email.clone(),
        }
    }
}

#[async_trait]
impl EmailDelivery for ResendDelivery {
    async fn deliver(&self, message: &ContactRequest) -> Result<(), DeliveryError> {
        let enquiry = Enquiry::from_request(message);
        let email = CreateEmailBaseOptions::new(&self.from, [self.to.as_str()], &enquiry.subject)
            .with_text(&enquiry.body)
            .with_reply(&enquiry.reply_to);

        self.client
            .emails
            .send(email)
            .await
            .map_err(|e| DeliveryError::Provider(e.to_string()))?;

        tracing::info!("Contact enquiry forwarded to {}", self.to);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enquiry_includes_every_field() {
        let request = ContactRequest {
            name: "Meera".to_string(),
            email: "meera@example.com".to_string(),
            message: "We need an AI agent.".to_string(),
        };
        let enquiry = Enquiry::from_request(&request);
        assert_eq!(enquiry.subject, "New enquiry from Meera");
        assert!(enquiry.body.contains("Email: meera@example.com"));
        assert!(enquiry.body.ends_with("We need an AI agent.\n"));
        assert_eq!(enquiry.reply_to, "meera@example.com");
    }

    #[tokio::test]
    async fn mock_delivery_reports_failure() {
        let mut mailer = MockEmailDelivery::new();
        mailer
            .expect_deliver()
            .times(1)
            .returning(|_| Err(DeliveryError::Provider("quota exceeded".to_string())));

        let result = mailer.deliver(&ContactRequest::default()).await;
        assert!(matches!(result, Err(DeliveryError::Provider(reason)) if reason == "quota exceeded"));
    }
}
