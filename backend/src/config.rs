//! Server configuration read from the environment (and `.env` via dotenvy).

use std::num::NonZeroU32;
use std::path::PathBuf;

use crate::error::ConfigError;

const DEFAULT_SITE_URL: &str = "https://absolutation.space";
const DEFAULT_FRONTEND_URL: &str = "http://localhost:8080";
const DEFAULT_STATIC_DIR: &str = "../frontend/dist";
const DEFAULT_RATE_PER_HOUR: u32 = 5;
const DEFAULT_GLOBAL_RATE_PER_HOUR: u32 = 20;

/// Where contact form messages go and who they come from (Resend).
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub resend_api_key: String,
    pub from_email: String,
    pub from_name: String,
    pub to_email: String,
}

impl EmailConfig {
    /// Formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resend_api_key.is_empty() {
            return Err(ConfigError::MissingRequired("RESEND_API_KEY"));
        }
        if !self.resend_api_key.starts_with("re_") {
            return Err(ConfigError::InvalidResendKey);
        }
        if !self.from_email.contains('@') {
            return Err(ConfigError::InvalidEmail("CONTACT_FROM_EMAIL"));
        }
        if !self.to_email.contains('@') {
            return Err(ConfigError::InvalidEmail("CONTACT_TO_EMAIL"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub environment: String,
    pub port: u16,
    /// Public base URL without a trailing slash.
    pub site_url: String,
    /// Allowed CORS origin for a separately hosted frontend.
    pub frontend_url: String,
    pub static_dir: PathBuf,
    pub email: EmailConfig,
    pub contact_rate_per_hour: NonZeroU32,
    /// Cap across all senders, since the sender address is caller-chosen.
    pub contact_global_rate_per_hour: NonZeroU32,
    pub sentry_dsn: Option<String>,
}

fn parse_rate(raw: Option<String>, default: u32) -> Result<NonZeroU32, ConfigError> {
    match raw {
        Some(raw) => raw
            .parse::<u32>()
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(ConfigError::InvalidRate(raw)),
        None => NonZeroU32::new(default).ok_or(ConfigError::InvalidRate(default.to_string())),
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = get("ENVIRONMENT").unwrap_or_else(|| "development".to_string());
        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            // staging is the public deployment
            None if environment == "staging" => 3100,
            None => 3000,
        };

        let site_url = get("SITE_URL")
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if !site_url.starts_with("http://") && !site_url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl("SITE_URL"));
        }
        let frontend_url = get("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string());
        if !frontend_url.starts_with("http://") && !frontend_url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl("FRONTEND_URL"));
        }

        let contact_rate_per_hour = parse_rate(get("CONTACT_RATE_PER_HOUR"), DEFAULT_RATE_PER_HOUR)?;
        let contact_global_rate_per_hour =
            parse_rate(get("CONTACT_GLOBAL_RATE_PER_HOUR"), DEFAULT_GLOBAL_RATE_PER_HOUR)?;

        let to_email = get("CONTACT_TO_EMAIL").ok_or(ConfigError::MissingRequired("CONTACT_TO_EMAIL"))?;
        let email = EmailConfig {
            resend_api_key: get("RESEND_API_KEY").unwrap_or_default(),
            from_email: get("CONTACT_FROM_EMAIL").unwrap_or_else(|| "noreply@absolutation.space".to_string()),
            from_name: get("CONTACT_FROM_NAME").unwrap_or_else(|| "AbSolution Website".to_string()),
            to_email,
        };
        email.validate()?;

        Ok(Self {
            environment,
            port,
            site_url,
            frontend_url,
            static_dir: PathBuf::from(get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())),
            email,
            contact_rate_per_hour,
            contact_global_rate_per_hour,
            sentry_dsn: get("SENTRY_DSN"),
        })
    }

    #[cfg(test)]
    pub fn sample() -> Self {
        Self::from_lookup(|key| match key {
            "RESEND_API_KEY" => Some("re_test_key".to_string()),
            "CONTACT_TO_EMAIL" => Some("studio@example.com".to_string()),
            "SITE_URL" => Some("https://example.com/".to_string()),
            "STATIC_DIR" => Some("does-not-exist".to_string()),
            _ => None,
        })
        .expect("sample config is valid")
    }
}
