use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use chrono::{NaiveDate, Utc};
use dashmap::DashMap;
use governor::{
    clock::DefaultClock, state::keyed::DefaultKeyedStateStore, DefaultDirectRateLimiter, Quota,
    RateLimiter,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod error;

pub mod handlers {
    pub mod contact_dtos;
    pub mod contact_handlers;
    pub mod seo_handlers;
}

pub mod utils {
    pub mod email;
}

use config::SiteConfig;
use handlers::{contact_handlers, seo_handlers};
use utils::email::EmailDelivery;

type KeyedLimiter = RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>;

const LIMITER_PRUNE_INTERVAL: Duration = Duration::from_secs(10 * 60);

pub struct AppState {
    pub config: SiteConfig,
    pub mailer: Arc<dyn EmailDelivery>,
    /// Per sender address.
    pub contact_limiter: DashMap<String, KeyedLimiter>,
    /// Across all senders. Checked first, so it also bounds how fast
    /// `contact_limiter` can grow.
    pub contact_global_limiter: DefaultDirectRateLimiter,
    /// Reported as `lastmod` in the sitemap.
    pub started_on: NaiveDate,
}

impl AppState {
    pub fn new(config: SiteConfig, mailer: Arc<dyn EmailDelivery>) -> Self {
        let global_quota = Quota::per_hour(config.contact_global_rate_per_hour);
        Self {
            config,
            mailer,
            contact_limiter: DashMap::new(),
            contact_global_limiter: RateLimiter::direct(global_quota),
            started_on: Utc::now().date_naive(),
        }
    }
}

/// Drops per-sender limiters whose quota has fully recovered. Returns how
/// many remain.
pub fn prune_contact_limiters(state: &AppState) -> usize {
    state.contact_limiter.retain(|_, limiter| {
        limiter.retain_recent();
        !limiter.is_empty()
    });
    state.contact_limiter.shrink_to_fit();
    state.contact_limiter.len()
}

pub fn spawn_limiter_pruning(state: Arc<AppState>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(LIMITER_PRUNE_INTERVAL);
        loop {
            interval.tick().await;
            let remaining = prune_contact_limiters(&state);
            tracing::debug!("Pruned contact limiters, {} senders still limited", remaining);
        }
    });
}

async fn health_check() -> &'static str {
    "OK"
}

fn cors_layer(frontend_url: &str) -> CorsLayer {
    let origin = frontend_url.parse::<HeaderValue>().unwrap_or_else(|e| {
        tracing::warn!("FRONTEND_URL {:?} is not a valid origin ({}), using localhost", frontend_url, e);
        HeaderValue::from_static("http://localhost:8080")
    });

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(AllowOrigin::exact(origin))
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
        .expose_headers([header::CONTENT_TYPE, header::CONTENT_LENGTH])
        .allow_credentials(true)
}

pub fn app(state: Arc<AppState>) -> Router {
    let static_dir = &state.config.static_dir;
    // Unknown paths get the SPA shell so the client router can answer them
    let frontend = ServeDir::new(static_dir)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .route("/robots.txt", get(seo_handlers::robots_txt))
        .route("/sitemap.xml", get(seo_handlers::sitemap_xml))
        .fallback_service(frontend)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer(&state.config.frontend_url))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::email::MockEmailDelivery;
    use axum::{body::Body, http::Request, http::StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let state = AppState::new(SiteConfig::sample(), Arc::new(MockEmailDelivery::new()));
        app(Arc::new(state))
    }

    async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = get_text(test_app(), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn seo_files_use_configured_site() {
        let (status, robots) = get_text(test_app(), "/robots.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert!(robots.contains("Sitemap: https://example.com/sitemap.xml"));

        let (status, sitemap) = get_text(test_app(), "/sitemap.xml").await;
        assert_eq!(status, StatusCode::OK);
        assert!(sitemap.contains("<loc>https://example.com/</loc>"));
    }

    #[tokio::test]
    async fn contact_route_rejects_get() {
        let (status, _) = get_text(test_app(), "/api/contact").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn pruning_drops_recovered_senders() {
        let state = AppState::new(SiteConfig::sample(), Arc::new(MockEmailDelivery::new()));
        let quota = Quota::per_hour(state.config.contact_rate_per_hour);

        let active = "active@example.com".to_string();
        let limiter: KeyedLimiter = RateLimiter::keyed(quota);
        assert!(limiter.check_key(&active).is_ok());
        state.contact_limiter.insert(active.clone(), limiter);
        // Never used, so nothing to remember
        state.contact_limiter.insert("idle@example.com".to_string(), RateLimiter::keyed(quota));

        assert_eq!(prune_contact_limiters(&state), 1);
        assert!(state.contact_limiter.contains_key(&active));
    }

    #[test]
    fn bad_frontend_origin_does_not_panic() {
        let _ = cors_layer("not a header\nvalue");
    }
}
