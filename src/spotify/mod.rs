//! # Spotify Integration Module
//!
//! This module is the catalog side of the pipeline: given an artist name it
//! produces the artist's album tracks together with their audio mood
//! (Spotify's `valence` audio feature).
//!
//! ## Architecture
//!
//! ```text
//! Pipeline (CatalogClient)
//!          ↓
//! SpotifyClient
//!     ├── Authentication (client credentials, cached token)
//!     └── Catalog lookups (artist, albums, tracks, audio features)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Client-credentials flow:
//! - **Basic Auth**: `client_id:client_secret` sent as a Basic authorization header
//! - **Token Caching**: Tokens are held by [`TokenManager`] and reused until
//!   four minutes before they expire, across runs
//! - **Fatal Failures**: A rejected token request aborts the run
//!
//! ### Catalog Module
//!
//! [`tracks`] - Artist discography walk:
//! - **Artist Resolution**: `GET /search?type=artist`, exact name match
//! - **Albums**: `GET /artists/{id}/albums?include_groups=album`, all pages
//! - **Tracks**: `GET /albums/{id}/tracks`, all pages
//! - **Audio Features**: `GET /audio-features?ids=...`, 100 ids per request
//!
//! ## Error Handling
//!
//! - **502 Bad Gateway**: retried after a fixed delay
//! - **429 Too Many Requests**: waits for `Retry-After` when it is at most
//!   two minutes, gives up otherwise
//! - **Everything else**: surfaced as a [`CatalogError`]; catalog failures are
//!   fatal for the whole run
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Client-credentials token
//! - `GET /search` - Artist search
//! - `GET /artists/{id}/albums` - Artist's albums
//! - `GET /albums/{id}/tracks` - Album track listing
//! - `GET /audio-features` - Batch audio features

pub mod auth;
pub mod tracks;

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::{sync::Mutex, time::sleep};

use crate::{config::SpotifyConfig, error::CatalogError, management::TokenManager, warning};

const MAX_ATTEMPTS: u32 = 3;
const BAD_GATEWAY_DELAY: Duration = Duration::from_secs(10);
const MAX_RETRY_AFTER_SECS: u64 = 120;

/// Catalog client for the Spotify Web API.
///
/// Authenticates with client credentials and shares one token between all
/// requests of a run. The token sits behind an async mutex so that concurrent
/// callers refresh it only once.
pub struct SpotifyClient {
    config: SpotifyConfig,
    http: Client,
    tokens: Mutex<TokenManager>,
}

impl SpotifyClient {
    /// Creates a client without a token; the first request fetches one.
    ///
    /// # Example
    ///
    /// ```
    /// let config = Config::from_env()?;
    /// let catalog = SpotifyClient::new(config.spotify.clone());
    /// let artist = catalog.search_artist("The Rasmus").await?;
    /// ```
    pub fn new(config: SpotifyConfig) -> Self {
        Self::with_tokens(config, TokenManager::default())
    }

    /// Creates a client that starts from the given token state.
    ///
    /// A token in `tokens` is used as long as it is valid; once it expires a
    /// new one is requested and written to the cache.
    pub fn with_tokens(config: SpotifyConfig, tokens: TokenManager) -> Self {
        Self {
            config,
            http: Client::new(),
            tokens: Mutex::new(tokens),
        }
    }

    /// Creates a client that starts from the token cached by a previous run.
    pub async fn with_cached_token(config: SpotifyConfig) -> Self {
        Self::with_tokens(config, TokenManager::load_or_default().await)
    }

    /// Base URL of the Web API, without a trailing path.
    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }

    /// GETs `url` with a bearer token and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let mut attempt = 1;

        loop {
            let token = self.access_token().await?;
            let response = self.http.get(url).bearer_auth(token).send().await?;
            let status = response.status();

            if status.is_success() {
                return Ok(response.json::<T>().await?);
            }

            if attempt < MAX_ATTEMPTS {
                if status == StatusCode::BAD_GATEWAY {
                    attempt += 1;
                    sleep(BAD_GATEWAY_DELAY).await;
                    continue; // retry
                }

                if status == StatusCode::TOO_MANY_REQUESTS {
                    let retry_after = response
                        .headers()
                        .get("retry-after")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|v| v.parse::<u64>().ok())
                        .unwrap_or(1);

                    if retry_after <= MAX_RETRY_AFTER_SECS {
                        attempt += 1;
                        sleep(Duration::from_secs(retry_after)).await;
                        continue; // retry
                    }

                    warning!(
                        "Spotify asked to retry after {} seconds. Try again later.",
                        retry_after
                    );
                }
            }

            if status == StatusCode::UNAUTHORIZED {
                self.tokens.lock().await.clear();
                return Err(CatalogError::Auth(format!("{} rejected the access token", url)));
            }

            return Err(CatalogError::Status {
                status,
                url: url.to_string(),
            });
        }
    }
}
