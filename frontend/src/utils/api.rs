use gloo_net::http::{Request, Response};
use gloo_net::Error as GlooError;
use serde::{Deserialize, Serialize};
use web_sys::RequestCredentials;

use crate::config;

/// Thin client for the site backend.
pub struct Api;

/// Request builder that prefixes the backend URL.
pub struct RequestWrapper {
    request: Request,
    path: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl RequestWrapper {
    fn new(path: &str, method: &str) -> Self {
        let full_url = format!("{}{}", config::get_backend_url(), path);
        let request = match method {
            "POST" => Request::post(&full_url),
            _ => Request::get(&full_url),
        }
        .credentials(RequestCredentials::SameOrigin);

        Self {
            request,
            path: path.to_string(),
        }
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, serde_json::Error> {
        let body_string = serde_json::to_string(data)?;
        self.request = self
            .request
            .header("Content-Type", "application/json")
            .body(body_string);
        Ok(self)
    }

    pub async fn send(self) -> Result<Response, GlooError> {
        let response = self.request.send().await?;
        if !response.ok() {
            gloo_console::log!(format!("{} returned status {}", self.path, response.status()));
        }
        Ok(response)
    }
}

impl Api {
    pub fn post(path: &str) -> RequestWrapper {
        RequestWrapper::new(path, "POST")
    }
}

/// Pulls a readable reason out of a failed response.
pub async fn error_reason(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("status {}", status),
    }
}
