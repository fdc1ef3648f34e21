use chrono::Utc;
use reqwest::{Client, header::AUTHORIZATION};

use super::SpotifyClient;
use crate::{
    config::SpotifyConfig,
    error::CatalogError,
    types::{ClientCredentialsResponse, Token},
    utils, warning,
};

impl SpotifyClient {
    /// Returns a valid access token, requesting a new one when needed.
    ///
    /// The cached token is reused until it is within four minutes of its
    /// expiry. A fresh token is written back to the on-disk cache; failing to
    /// write it only produces a warning.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Auth`] if Spotify rejects the client
    /// credentials, or [`CatalogError::Http`] on network failures.
    pub async fn access_token(&self) -> Result<String, CatalogError> {
        let mut tokens = self.tokens.lock().await;
        if let Some(token) = tokens.valid_token() {
            return Ok(token.to_string());
        }

        let token = request_token(&self.http, &self.config).await?;
        let access_token = token.access_token.clone();
        tokens.replace(token);

        if let Err(e) = tokens.persist().await {
            warning!("Failed to save token to cache: {}", e);
        }

        Ok(access_token)
    }
}

/// Requests a client-credentials token from the Spotify accounts service.
pub async fn request_token(http: &Client, config: &SpotifyConfig) -> Result<Token, CatalogError> {
    let response = http
        .post(&config.token_url)
        .header(
            AUTHORIZATION,
            utils::basic_auth_header(&config.client_id, &config.client_secret),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let reason = status.canonical_reason().unwrap_or("unknown reason");
        return Err(CatalogError::Auth(format!("{} {}", status.as_u16(), reason)));
    }

    let json = response.json::<ClientCredentialsResponse>().await?;

    Ok(Token {
        access_token: json.access_token,
        token_type: json.token_type,
        expires_in: json.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
