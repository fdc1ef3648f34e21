use crate::{sentiment, types::TrackStub};

/// Outcome of resolving and scoring a track's lyrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LyricScore {
    Scored(f64),
    Unavailable,
}

impl LyricScore {
    /// The lyric sadness shown in the report. Unavailable lyrics display as `0`.
    pub fn reported(&self) -> f64 {
        match self {
            LyricScore::Scored(value) => *value,
            LyricScore::Unavailable => 0.0,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, LyricScore::Scored(_))
    }
}

/// A song candidate moving through the pipeline.
///
/// Created from a catalog [`TrackStub`], which fixes `sadness_audio`. The
/// lyric score is attached by the runner and `composite_score` by
/// [`aggregate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub name: String,
    pub audio_mood: f64,
    pub sadness_audio: f64,
    pub lyric: LyricScore,
    pub composite_score: Option<f64>,
}

impl Track {
    pub fn from_stub(stub: TrackStub) -> Self {
        Self {
            sadness_audio: sentiment::normalize(stub.audio_mood),
            name: stub.name,
            audio_mood: stub.audio_mood,
            lyric: LyricScore::Unavailable,
            composite_score: None,
        }
    }

    pub fn with_lyric(mut self, lyric: LyricScore) -> Self {
        self.lyric = lyric;
        self
    }

    pub fn sadness_lyric(&self) -> f64 {
        self.lyric.reported()
    }
}

/// Blends audio and lyric sadness.
///
/// - lyrics scored: `(sadness_lyric + sadness_audio) / 2`
/// - lyrics unavailable: `sadness_audio / 2`
pub fn composite_score(sadness_audio: f64, lyric: LyricScore) -> f64 {
    match lyric {
        LyricScore::Scored(sadness_lyric) => (sadness_lyric + sadness_audio) / 2.0,
        LyricScore::Unavailable => sadness_audio / 2.0,
    }
}

/// Sets the track's composite score from its current signals.
///
/// Only reads `sadness_audio` and `lyric`, so running it again on an
/// aggregated track yields the same score.
pub fn aggregate(mut track: Track) -> Track {
    track.composite_score = Some(composite_score(track.sadness_audio, track.lyric));
    track
}
