//! Error types for the sadsong pipeline.
//!
//! Every collaborator boundary has its own error enum. Lexicon, catalog and
//! configuration errors are fatal for a run; lyrics errors are recovered per
//! track by the pipeline and only turn that track's lyric signal off.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("cannot read lexicon {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed lexicon entry on line {line}: {content:?} (expected `word weight`)")]
    Format { line: usize, content: String },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("spotify authentication failed: {0}")]
    Auth(String),

    #[error("artist {0:?} not found in the spotify catalog")]
    ArtistNotFound(String),

    #[error("spotify request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid spotify api url: {0}")]
    InvalidUrl(String),

    #[error("spotify answered {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

#[derive(Debug, Error)]
pub enum LyricsError {
    #[error("no lyrics found for {artist} - {track}")]
    NotFound { artist: String, track: String },

    #[error("lyrics search returned artist {found:?} instead of {expected:?}")]
    ArtistMismatch { expected: String, found: String },

    #[error("genius request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("cannot parse lyrics page {url}: {reason}")]
    Parse { url: String, reason: String },

    #[error("lyrics lookup timed out after {0} seconds")]
    Timeout(u64),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("the catalog returned no tracks for {0:?}")]
    NoTracks(String),
}
