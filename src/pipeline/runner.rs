use std::time::Duration;

use futures::{StreamExt, stream};
use indicatif::ProgressBar;

use super::{
    aggregate::{LyricScore, Track, aggregate},
    ranking::{self, RankedReport},
};
use crate::{
    error::{CatalogError, LyricsError, PipelineError},
    sentiment::{Lexicon, score_text},
    types::TrackStub,
    utils, warning,
};

pub const DEFAULT_WORKERS: usize = 4;
pub const DEFAULT_LYRIC_TIMEOUT: Duration = Duration::from_secs(15);

/// Source of an artist's tracks and their audio mood.
#[allow(async_fn_in_trait)]
pub trait CatalogClient {
    async fn get_tracks(&self, artist: &str) -> Result<Vec<TrackStub>, CatalogError>;
}

/// Source of raw lyric text for a single track.
#[allow(async_fn_in_trait)]
pub trait LyricsProvider {
    async fn get_lyrics(&self, artist: &str, track: &str) -> Result<String, LyricsError>;
}

#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    /// Lyric lookups in flight at the same time.
    pub workers: usize,
    /// Per-track deadline; an expired lookup counts as unavailable lyrics.
    pub lyric_timeout: Duration,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            lyric_timeout: DEFAULT_LYRIC_TIMEOUT,
        }
    }
}

/// Runs the whole ranking for one artist.
///
/// 1. fetch the catalog tracks (any failure, or no tracks, aborts the run)
/// 2. resolve and score lyrics per track, `workers` lookups at a time
/// 3. aggregate each track into its composite score
/// 4. once every track is done, sort them into a [`RankedReport`]
///
/// A failed, mismatched or timed out lyric lookup only affects its own track,
/// which falls back to the audio-only score.
pub struct Pipeline<'a, C, L> {
    catalog: &'a C,
    lyrics: &'a L,
    lexicon: &'a Lexicon,
    options: PipelineOptions,
}

impl<'a, C: CatalogClient, L: LyricsProvider> Pipeline<'a, C, L> {
    pub fn new(catalog: &'a C, lyrics: &'a L, lexicon: &'a Lexicon) -> Self {
        Self {
            catalog,
            lyrics,
            lexicon,
            options: PipelineOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    pub async fn run(&self, artist: &str) -> Result<RankedReport, PipelineError> {
        let stubs = self.catalog.get_tracks(artist).await?;
        if stubs.is_empty() {
            return Err(PipelineError::NoTracks(artist.to_string()));
        }

        let pb = utils::progress_bar(stubs.len() as u64, "Scoring lyrics...");

        // `buffered` yields in input order, so the catalog order survives
        // for the stable sort in the ranking step.
        let tracks: Vec<Track> = stream::iter(stubs)
            .map(|stub| {
                let pb = &pb;
                async move {
                    let track = Track::from_stub(stub);
                    pb.set_message(track.name.clone());
                    let lyric = self.lyric_score(artist, &track.name, pb).await;
                    pb.inc(1);
                    aggregate(track.with_lyric(lyric))
                }
            })
            .buffered(self.options.workers.max(1))
            .collect()
            .await;

        pb.finish_and_clear();

        Ok(ranking::build(tracks))
    }

    async fn lyric_score(&self, artist: &str, track: &str, pb: &ProgressBar) -> LyricScore {
        match self.fetch_lyrics(artist, track).await {
            Ok(lyrics) => LyricScore::Scored(score_text(&lyrics, self.lexicon)),
            Err(e) => {
                pb.suspend(|| warning!("No lyric score for {}: {}", track, e));
                LyricScore::Unavailable
            }
        }
    }

    async fn fetch_lyrics(&self, artist: &str, track: &str) -> Result<String, LyricsError> {
        let timeout = self.options.lyric_timeout;
        match tokio::time::timeout(timeout, self.lyrics.get_lyrics(artist, track)).await {
            Ok(result) => result,
            Err(_) => Err(LyricsError::Timeout(timeout.as_secs())),
        }
    }
}
