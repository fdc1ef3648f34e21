//! # Genius Lyrics Module
//!
//! The lyrics side of the pipeline. A lookup is two requests:
//!
//! 1. `GET /search?q=<artist> <track>` on the Genius API; the first hit is
//!    taken and its primary artist must be the requested one
//! 2. `GET <hit url>` on genius.com; the lyric containers of the page are
//!    scraped into plain text by [`scrape::extract_lyrics`]
//!
//! Every failure maps to a [`LyricsError`], which the pipeline treats as
//! "lyrics unavailable" for that one track.

pub mod scrape;

use reqwest::{Client, StatusCode, Url, header::USER_AGENT};

use crate::{
    config::GeniusConfig,
    error::LyricsError,
    pipeline::LyricsProvider,
    types::{GeniusHit, GeniusSearchResponse, GeniusSong},
    utils,
};

/// Lyrics provider backed by the Genius API and genius.com song pages.
///
/// Holds one `reqwest` client for both hosts. Every request carries the
/// configured user agent; only API calls carry the bearer token.
pub struct GeniusClient {
    config: GeniusConfig,
    http: Client,
}

impl GeniusClient {
    /// Creates a client for the API at `config.api_url`.
    ///
    /// # Example
    ///
    /// ```
    /// let config = Config::from_env()?;
    /// let lyrics = GeniusClient::new(config.genius.clone());
    /// ```
    pub fn new(config: GeniusConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Finds the song page for `artist` - `track`.
    ///
    /// # Errors
    ///
    /// - [`LyricsError::NotFound`] when the search has no hits
    /// - [`LyricsError::ArtistMismatch`] when the first hit belongs to another artist
    pub async fn search_song(&self, artist: &str, track: &str) -> Result<GeniusSong, LyricsError> {
        let base = format!("{}/search", self.config.api_url.trim_end_matches('/'));
        let query = format!("{artist} {track}");
        let url = Url::parse_with_params(&base, &[("q", query.as_str())]).map_err(|e| {
            LyricsError::Parse {
                url: base.clone(),
                reason: e.to_string(),
            }
        })?;

        let res = self
            .http
            .get(url)
            .bearer_auth(&self.config.access_token)
            .header(USER_AGENT, &self.config.user_agent)
            .send()
            .await?
            .error_for_status()?
            .json::<GeniusSearchResponse>()
            .await?;

        select_song(res.response.hits, artist, track)
    }

    /// Downloads the HTML of a song page.
    ///
    /// # Errors
    ///
    /// - [`LyricsError::Parse`] when the page does not exist (404)
    /// - [`LyricsError::Http`] on network failures and other non-2xx answers
    pub async fn fetch_page(&self, url: &str) -> Result<String, LyricsError> {
        let response = self
            .http
            .get(url)
            .header(USER_AGENT, &self.config.user_agent)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(LyricsError::Parse {
                url: url.to_string(),
                reason: "page not found".to_string(),
            });
        }

        Ok(response.error_for_status()?.text().await?)
    }
}

/// Picks the song page for `artist` - `track` out of Genius search hits.
///
/// Only the first hit is considered. Its primary artist must match `artist`
/// (case-insensitive, whitespace-normalized); a later hit by the right artist
/// does not rescue a mismatched first one.
///
/// # Errors
///
/// - [`LyricsError::NotFound`] when `hits` is empty
/// - [`LyricsError::ArtistMismatch`] when the first hit belongs to another artist
pub fn select_song(
    hits: Vec<GeniusHit>,
    artist: &str,
    track: &str,
) -> Result<GeniusSong, LyricsError> {
    let song = hits
        .into_iter()
        .next()
        .map(|hit| hit.result)
        .ok_or_else(|| LyricsError::NotFound {
            artist: artist.to_string(),
            track: track.to_string(),
        })?;

    if !utils::names_match(&song.primary_artist.name, artist) {
        return Err(LyricsError::ArtistMismatch {
            expected: artist.to_string(),
            found: song.primary_artist.name,
        });
    }

    Ok(song)
}

impl LyricsProvider for GeniusClient {
    async fn get_lyrics(&self, artist: &str, track: &str) -> Result<String, LyricsError> {
        let song = self.search_song(artist, track).await?;
        let html = self.fetch_page(&song.url).await?;
        scrape::extract_lyrics(&html, &song.url)
    }
}
