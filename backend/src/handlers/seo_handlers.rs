use std::sync::Arc;

use axum::{extract::State, http::header, response::IntoResponse};
use chrono::NaiveDate;

use crate::AppState;

/// Client routes that belong in the sitemap. The 404 route stays out.
pub const PUBLIC_PAGES: &[&str] = &["/"];

const CHANGE_FREQUENCY: &str = "daily";
const PRIORITY: &str = "0.7";

pub fn render_robots(site_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nHost: {site_url}\nSitemap: {site_url}/sitemap.xml\n"
    )
}

pub fn render_sitemap(site_url: &str, last_modified: NaiveDate) -> String {
    let lastmod = last_modified.format("%Y-%m-%d");
    let urls: String = PUBLIC_PAGES
        .iter()
        .map(|path| {
            let loc = if *path == "/" {
                format!("{site_url}/")
            } else {
                format!("{site_url}{path}")
            };
            format!(
                "  <url>\n    <loc>{loc}</loc>\n    <lastmod>{lastmod}</lastmod>\n    <changefreq>{CHANGE_FREQUENCY}</changefreq>\n    <priority>{PRIORITY}</priority>\n  </url>\n"
            )
        })
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{urls}</urlset>\n"
    )
}

pub async fn robots_txt(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_robots(&state.config.site_url),
    )
}

pub async fn sitemap_xml(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render_sitemap(&state.config.site_url, state.started_on),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn robots_points_at_sitemap() {
        let robots = render_robots("https://absolutation.space");
        assert!(robots.starts_with("User-agent: *\nAllow: /\n"));
        assert!(robots.contains("Host: https://absolutation.space\n"));
        assert!(robots.contains("Sitemap: https://absolutation.space/sitemap.xml"));
    }

    #[test]
    fn sitemap_lists_home_only() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let xml = render_sitemap("https://absolutation.space", date);
        assert_eq!(xml.matches("<url>").count(), 1);
        assert!(xml.contains("<loc>https://absolutation.space/</loc>"));
        assert!(xml.contains("<lastmod>2025-03-14</lastmod>"));
        assert!(xml.contains("<changefreq>daily</changefreq>"));
        assert!(xml.contains("<priority>0.7</priority>"));
        assert!(!xml.contains("404"));
    }
}
