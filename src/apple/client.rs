use reqwest::{
    Client, Response,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::{AmpError, config::Config, types::ErrorResponse};

pub const MUSIC_USER_TOKEN_HEADER: &str = "Music-User-Token";

/// Authenticated Apple Music API client.
#[derive(Debug, Clone)]
pub struct AppleMusicClient {
    pub(super) http: Client,
    pub(super) api_url: String,
}

impl AppleMusicClient {
    /// Builds a client that sends both tokens from `config` with every request.
    ///
    /// # Errors
    ///
    /// Returns [`AmpError::Config`] if a token contains characters that are not
    /// valid in an HTTP header, and [`AmpError::Remote`] if the TLS backend
    /// cannot be initialised.
    pub fn new(config: &Config) -> Result<Self, AmpError> {
        let mut headers = HeaderMap::new();

        let mut bearer = header_value(&format!("Bearer {}", config.developer_token))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let mut user_token = header_value(&config.user_token)?;
        user_token.set_sensitive(true);
        headers.insert(MUSIC_USER_TOKEN_HEADER, user_token);

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

fn header_value(value: &str) -> Result<HeaderValue, AmpError> {
    HeaderValue::from_str(value)
        .map_err(|e| AmpError::Config(format!("Token is not a valid header value: {}", e)))
}

/// Passes a success response through and turns anything else into
/// [`AmpError::Remote`].
pub(super) async fn check_status(response: Response) -> Result<Response, AmpError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .ok()
        .and_then(|e| e.errors.into_iter().next())
        .map(|e| match (e.title.is_empty(), e.detail.is_empty()) {
            (false, false) => format!("{}: {}", e.title, e.detail),
            (false, true) => e.title,
            _ => e.detail,
        })
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            let body = body.trim();
            if body.is_empty() {
                status.canonical_reason().unwrap_or("unknown error").to_string()
            } else {
                body.to_string()
            }
        });

    Err(AmpError::remote(Some(status.as_u16()), message))
}
