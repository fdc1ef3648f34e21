//! Configuration management for the saddest song finder.
//!
//! Credentials and tunables are read once, from the process environment and
//! an optional `.env` file, into an explicit [`Config`] struct. The struct is
//! handed to the Spotify and Genius clients; nothing below the CLI layer
//! reads the environment.
//!
//! The configuration sources follow this order:
//! 1. Command-line flags (applied by the CLI on top of [`Config`])
//! 2. Environment variables
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use crate::{
    error::ConfigError,
    pipeline::runner::{DEFAULT_LYRIC_TIMEOUT, DEFAULT_WORKERS, PipelineOptions},
};

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_GENIUS_API_URL: &str = "https://api.genius.com";
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/sadsong/.env`
/// - macOS: `~/Library/Application Support/sadsong/.env`
/// - Windows: `%LOCALAPPDATA%/sadsong/.env`
///
/// A missing file is fine: the variables may come straight from the
/// environment. A file that exists but cannot be parsed is an error.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// The lexicon path from `SADSONG_LEXICON`, or the default one in the data directory.
///
/// Lets offline commands find the lexicon without requiring API credentials.
pub fn lexicon_path_from_env() -> PathBuf {
    env::var("SADSONG_LEXICON")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(default_lexicon_path)
}

pub fn default_lexicon_path() -> PathBuf {
    data_dir().join("lexicon.txt")
}

/// The application's data directory, `<data_local_dir>/sadsong`.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sadsong");
    path
}

#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub api_url: String,
    pub token_url: String,
}

#[derive(Debug, Clone)]
pub struct GeniusConfig {
    pub access_token: String,
    pub api_url: String,
    pub user_agent: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub spotify: SpotifyConfig,
    pub genius: GeniusConfig,
    pub lexicon_path: PathBuf,
    pub workers: usize,
    pub lyric_timeout: Duration,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// # Required Variables
    ///
    /// - `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET` - client-credentials app
    /// - `GENIUS_ACCESS_TOKEN` - Genius API client access token
    ///
    /// # Optional Variables
    ///
    /// - `SPOTIFY_API_URL`, `SPOTIFY_API_TOKEN_URL`, `GENIUS_API_URL`
    /// - `SADSONG_LEXICON` - defaults to `<data dir>/lexicon.txt`
    /// - `SADSONG_WORKERS` - defaults to 4
    /// - `SADSONG_LYRIC_TIMEOUT_SECS` - defaults to 15
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let workers = match get("SADSONG_WORKERS") {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "SADSONG_WORKERS",
                        value,
                    });
                }
            },
            None => DEFAULT_WORKERS,
        };

        let lyric_timeout = match get("SADSONG_LYRIC_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) => lyric_timeout("SADSONG_LYRIC_TIMEOUT_SECS", secs)?,
                Err(_) => {
                    return Err(ConfigError::Invalid {
                        var: "SADSONG_LYRIC_TIMEOUT_SECS",
                        value,
                    });
                }
            },
            None => DEFAULT_LYRIC_TIMEOUT,
        };

        Ok(Self {
            spotify: SpotifyConfig {
                client_id: required("SPOTIFY_CLIENT_ID")?,
                client_secret: required("SPOTIFY_CLIENT_SECRET")?,
                api_url: get("SPOTIFY_API_URL")
                    .unwrap_or_else(|| DEFAULT_SPOTIFY_API_URL.to_string()),
                token_url: get("SPOTIFY_API_TOKEN_URL")
                    .unwrap_or_else(|| DEFAULT_SPOTIFY_TOKEN_URL.to_string()),
            },
            genius: GeniusConfig {
                access_token: required("GENIUS_ACCESS_TOKEN")?,
                api_url: get("GENIUS_API_URL")
                    .unwrap_or_else(|| DEFAULT_GENIUS_API_URL.to_string()),
                user_agent: USER_AGENT.to_string(),
            },
            lexicon_path: get("SADSONG_LEXICON")
                .map(PathBuf::from)
                .unwrap_or_else(default_lexicon_path),
            workers,
            lyric_timeout,
        })
    }

    /// Overrides the per-track lyric timeout, e.g. from `--timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for 0: every lookup would expire at
    /// once and all tracks would fall back to the audio-only score.
    pub fn set_lyric_timeout(&mut self, secs: u64) -> Result<(), ConfigError> {
        self.lyric_timeout = lyric_timeout("--timeout", secs)?;
        Ok(())
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            workers: self.workers,
            lyric_timeout: self.lyric_timeout,
        }
    }
}

fn lyric_timeout(var: &'static str, secs: u64) -> Result<Duration, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::Invalid {
            var,
            value: secs.to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}
