use once_cell::sync::Lazy;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::Deserialize;
use url::Url;

use crate::models::{CaptureRecord, RawCapture};

// ── Constants ────────────────────────────────────────────────────────────────

const API_HOST: &str = "https://api.gyazo.com";
const REDIRECT_URI: &str = "https://gyazo.com/oauth/obsidian/callback";
const CLIENT_ID: &str = "YOUR_CLIENT_ID";
const CLIENT_SECRET: &str = "YOUR_CLIENT_SECRET";
const OAUTH_SCOPE: &str = "public upload";
const USER_AGENT: &str = "gyazo-embed/0.1";

/// Largest page the image-list endpoint accepts.
pub const MAX_PER_PAGE: u32 = 100;

const STATE_LEN: usize = 24;

// ── Shared HTTP client ───────────────────────────────────────────────────────

// Clients are rebuilt on every token rotation; the transport pool is shared so
// rotation does not tear down connections.
static HTTP: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::ClientBuilder::new()
        .connect_timeout(std::time::Duration::from_secs(5))
        .timeout(std::time::Duration::from_secs(10))
        .user_agent(USER_AGENT)
        .build()
        .expect("default reqwest client")
});

// ── Error type ───────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no access token is set")]
    Unauthenticated,
    #[error("{0}")]
    Network(String),
    #[error("unexpected response shape: {0}")]
    MalformedResponse(String),
    #[error("token exchange failed: {0}")]
    AuthExchange(String),
}

fn transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Network(format!("TimeoutError: {}", e))
    } else if e.is_connect() {
        ApiError::Network(format!("ConnectError: {}", e))
    } else {
        ApiError::Network(format!("RequestError: {}", e))
    }
}

// ── Authentication state ─────────────────────────────────────────────────────

/// Where the client stands with the service. `Verified` means the last token
/// probe succeeded; listing captures is allowed from `Authenticated` too, and
/// an expired token surfaces as a network error at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
    Verified,
}

// ── Client ───────────────────────────────────────────────────────────────────

/// Client for the Gyazo REST API. Holds exactly one bearer token; the token
/// is replaced wholesale, never partially updated.
#[derive(Debug, Clone)]
pub struct GyazoClient {
    host: String,
    access_token: String,
    verified: bool,
}

impl GyazoClient {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_host(API_HOST, access_token)
    }

    pub(crate) fn with_host(host: impl Into<String>, access_token: impl Into<String>) -> Self {
        GyazoClient {
            host: host.into(),
            access_token: access_token.into(),
            verified: false,
        }
    }

    /// Replace the stored token. Any prior verification no longer applies.
    pub fn set_token(&mut self, access_token: impl Into<String>) {
        self.access_token = access_token.into();
        self.verified = false;
        tracing::debug!(state = ?self.auth_state(), "access token replaced");
    }

    pub fn auth_state(&self) -> AuthState {
        if self.access_token.is_empty() {
            AuthState::Unauthenticated
        } else if self.verified {
            AuthState::Verified
        } else {
            AuthState::Authenticated
        }
    }

    /// Fetch up to `limit` captures, newest first, in the order the server
    /// returns them. `limit` is clamped to the service maximum. No retry is
    /// attempted; transient failures are the caller's to handle.
    pub async fn list_captures(&self, limit: u32) -> Result<Vec<CaptureRecord>, ApiError> {
        if self.access_token.is_empty() {
            return Err(ApiError::Unauthenticated);
        }

        let per_page = limit.min(MAX_PER_PAGE).to_string();
        let response = HTTP
            .get(format!("{}/api/images", self.host))
            .query(&[
                ("access_token", self.access_token.as_str()),
                ("per_page", per_page.as_str()),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "image list request rejected");
            return Err(ApiError::Network(format!("image list returned {}", status)));
        }

        let body = response.text().await.map_err(transport_error)?;
        let raw: Vec<RawCapture> = serde_json::from_str(&body)
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;

        Ok(raw.into_iter().map(CaptureRecord::from_raw).collect())
    }

    /// Exchange an OAuth authorization code for an access token. The stored
    /// token is left untouched; adopting the new one is the caller's call.
    pub async fn exchange_code(&self, code: &str) -> Result<String, ApiError> {
        if code.is_empty() {
            return Err(ApiError::AuthExchange("empty authorization code".to_string()));
        }

        let body = serde_json::json!({
            "client_id": CLIENT_ID,
            "client_secret": CLIENT_SECRET,
            "redirect_uri": REDIRECT_URI,
            "grant_type": "authorization_code",
            "code": code,
        });

        let response = HTTP
            .post(format!("{}/oauth/token", self.host))
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::AuthExchange(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "token exchange rejected");
            return Err(ApiError::AuthExchange(format!("token endpoint returned {}", status)));
        }

        #[derive(Deserialize)]
        struct TokenResponse {
            #[serde(default)]
            access_token: Option<String>,
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| ApiError::AuthExchange(e.to_string()))?;

        match token.access_token {
            Some(t) if !t.is_empty() => Ok(t),
            _ => Err(ApiError::AuthExchange("response carried no access token".to_string())),
        }
    }

    /// Best-effort probe of the stored token against the current-user
    /// endpoint. Any failure, of any kind, is reported as `false`.
    pub async fn validate_token(&mut self) -> bool {
        if self.access_token.is_empty() {
            return false;
        }

        let result = HTTP
            .get(format!("{}/api/users/me", self.host))
            .query(&[("access_token", self.access_token.as_str())])
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                self.verified = true;
                true
            }
            Ok(response) => {
                tracing::debug!(status = %response.status(), "token validation rejected");
                false
            }
            Err(e) => {
                tracing::debug!(error = %e, "token validation request failed");
                false
            }
        }
    }

    /// Build the browser URL for the OAuth authorization step. Each call
    /// carries a freshly generated anti-forgery `state` value.
    pub fn authorize_url(&self) -> String {
        let mut url = Url::parse(&format!("{}/oauth/authorize", self.host))
            .unwrap_or_else(|_| Url::parse(API_HOST).unwrap());
        url.query_pairs_mut()
            .append_pair("client_id", CLIENT_ID)
            .append_pair("redirect_uri", REDIRECT_URI)
            .append_pair("response_type", "code")
            .append_pair("scope", OAUTH_SCOPE)
            .append_pair("state", &random_state());
        url.to_string()
    }
}

// ── OAuth helpers ────────────────────────────────────────────────────────────

/// Pull the `code` query parameter out of an OAuth redirect URL. Malformed
/// URLs and missing parameters both come back as `None`.
pub fn extract_code(redirect_url: &str) -> Option<String> {
    let parsed = Url::parse(redirect_url).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == "code")
        .map(|(_, value)| value.into_owned())
}

// Session-scoped anti-forgery value, not a cryptographic secret.
fn random_state() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_LEN)
        .map(char::from)
        .collect()
}

// ── Tests ────────────────────────────────────────────────────────────────────
