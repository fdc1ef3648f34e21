//! # Pipeline Module
//!
//! Combines the audio and lyric signals of every track into one composite
//! score and orders the tracks by it.
//!
//! ```text
//! CatalogClient ──► TrackStub ──► Track::from_stub (audio sadness)
//!                                      │
//! LyricsProvider ──► lyrics ──► score ─┤  (per track, bounded concurrency)
//!                                      ▼
//!                                  aggregate
//!                                      │   join
//!                                      ▼
//!                               ranking::build ──► RankedReport
//! ```
//!
//! - [`aggregate`] - the two-branch scoring policy and the in-flight [`Track`]
//! - [`ranking`] - projection to report rows and the stable descending sort
//! - [`runner`] - collaborator traits and the [`Pipeline`] that drives a run

pub mod aggregate;
pub mod ranking;
pub mod runner;

pub use aggregate::{LyricScore, Track, aggregate, composite_score};
pub use ranking::{RankedReport, build};
pub use runner::{CatalogClient, LyricsProvider, Pipeline, PipelineOptions};
