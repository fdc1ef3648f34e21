use std::path::PathBuf;

use chrono::Utc;

use crate::{config, types::Token};

/// Seconds before the real expiry at which a token is already treated as expired.
const EXPIRY_BUFFER_SECS: u64 = 240;

/// Holds the Spotify client-credentials token between requests and runs.
#[derive(Debug, Clone, Default)]
pub struct TokenManager {
    token: Option<Token>,
}

impl TokenManager {
    /// Creates a manager holding `token`, expired or not.
    pub fn new(token: Token) -> Self {
        TokenManager { token: Some(token) }
    }

    /// Loads the token cached by a previous run.
    ///
    /// The cache lives at `<data dir>/cache/token.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache file is missing, unreadable, or does not
    /// hold a token. Callers that can start without a token should use
    /// [`TokenManager::load_or_default`].
    pub async fn load() -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self::new(token))
    }

    /// Loads the cached token, or starts empty if there is none.
    pub async fn load_or_default() -> Self {
        Self::load().await.unwrap_or_default()
    }

    /// Writes the held token to the cache file, creating its directory.
    ///
    /// Does nothing when no token is held.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or the file cannot be written.
    pub async fn persist(&self) -> Result<(), String> {
        let Some(token) = &self.token else {
            return Ok(());
        };

        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(token).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    /// The access token, if one is held and not (about to be) expired.
    pub fn valid_token(&self) -> Option<&str> {
        self.token
            .as_ref()
            .filter(|_| !self.is_expired())
            .map(|t| t.access_token.as_str())
    }

    /// Swaps in a freshly requested token. The cache is not touched.
    pub fn replace(&mut self, token: Token) {
        self.token = Some(token);
    }

    /// Forgets the held token, e.g. after Spotify rejected it.
    pub fn clear(&mut self) {
        self.token = None;
    }

    /// Whether the token is missing or within four minutes of its expiry.
    pub fn is_expired(&self) -> bool {
        match &self.token {
            Some(token) => {
                let now = Utc::now().timestamp() as u64;
                let lifetime = token.expires_in.saturating_sub(EXPIRY_BUFFER_SECS);
                now >= token.obtained_at + lifetime
            }
            None => true,
        }
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    fn token_path() -> PathBuf {
        config::data_dir().join("cache/token.json")
    }
}
