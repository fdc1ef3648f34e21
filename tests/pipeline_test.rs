use std::{collections::HashMap, time::Duration};

use sadsong::error::{CatalogError, LyricsError, PipelineError};
use sadsong::pipeline::*;
use sadsong::sentiment::Lexicon;
use sadsong::types::TrackStub;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn stub(name: &str, audio_mood: f64) -> TrackStub {
    TrackStub {
        name: name.to_string(),
        audio_mood,
    }
}

fn sad_lexicon() -> Lexicon {
    [("sad", 1.0)].into_iter().collect()
}

struct FakeCatalog {
    tracks: Result<Vec<TrackStub>, String>,
}

impl CatalogClient for FakeCatalog {
    async fn get_tracks(&self, _artist: &str) -> Result<Vec<TrackStub>, CatalogError> {
        self.tracks.clone().map_err(CatalogError::Auth)
    }
}

#[derive(Default)]
struct FakeLyrics {
    lyrics: HashMap<String, String>,
    slow: Vec<String>,
    mismatched: Vec<String>,
}

impl FakeLyrics {
    fn with(mut self, track: &str, text: &str) -> Self {
        self.lyrics.insert(track.to_string(), text.to_string());
        self
    }
}

impl LyricsProvider for FakeLyrics {
    async fn get_lyrics(&self, artist: &str, track: &str) -> Result<String, LyricsError> {
        if self.slow.iter().any(|t| t == track) {
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
        if self.mismatched.iter().any(|t| t == track) {
            return Err(LyricsError::ArtistMismatch {
                expected: artist.to_string(),
                found: "Somebody Else".to_string(),
            });
        }
        self.lyrics
            .get(track)
            .cloned()
            .ok_or_else(|| LyricsError::NotFound {
                artist: artist.to_string(),
                track: track.to_string(),
            })
    }
}

#[test]
fn test_track_from_stub_sets_audio_sadness() {
    let track = Track::from_stub(stub("A", 0.8));
    assert_eq!(track.name, "A");
    assert_eq!(track.audio_mood, 0.8);
    assert!(approx_eq(track.sadness_audio, 0.2));
    assert_eq!(track.lyric, LyricScore::Unavailable);
    assert_eq!(track.composite_score, None);
}

#[test]
fn test_aggregate_with_lyrics() {
    // audio sadness 0.4, lyric tokens ["sad","happy","sad","day"] -> 0.5
    let track = Track::from_stub(stub("A", 0.6)).with_lyric(LyricScore::Scored(0.5));
    let track = aggregate(track);

    assert_eq!(track.sadness_lyric(), 0.5);
    assert!(approx_eq(track.composite_score.unwrap(), 0.45));
}

#[test]
fn test_aggregate_fallback_halves_audio_sadness() {
    let track = aggregate(Track::from_stub(stub("B", 0.6)));

    assert_eq!(track.lyric, LyricScore::Unavailable);
    assert_eq!(track.sadness_lyric(), 0.0);
    assert!(approx_eq(track.composite_score.unwrap(), 0.2));
}

#[test]
fn test_composite_score_branches() {
    assert_eq!(composite_score(0.4, LyricScore::Scored(0.6)), 0.5);
    assert_eq!(composite_score(0.4, LyricScore::Unavailable), 0.2);
    assert_eq!(composite_score(1.0, LyricScore::Scored(1.0)), 1.0);
    assert_eq!(composite_score(0.0, LyricScore::Unavailable), 0.0);
}

#[test]
fn test_aggregate_is_idempotent() {
    let once = aggregate(Track::from_stub(stub("A", 0.3)).with_lyric(LyricScore::Scored(0.25)));
    let twice = aggregate(once.clone());
    assert_eq!(once.composite_score, twice.composite_score);

    let once = aggregate(Track::from_stub(stub("B", 0.3)));
    let twice = aggregate(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn test_lyric_score_reported() {
    assert_eq!(LyricScore::Scored(0.3).reported(), 0.3);
    assert_eq!(LyricScore::Unavailable.reported(), 0.0);
    assert!(LyricScore::Scored(0.0).is_available());
    assert!(!LyricScore::Unavailable.is_available());
}

fn scored_track(name: &str, composite: f64) -> Track {
    // audio sadness == lyric sadness == composite
    let track = Track::from_stub(stub(name, 1.0 - composite));
    aggregate(track.with_lyric(LyricScore::Scored(composite)))
}

#[test]
fn test_build_sorts_descending_and_keeps_ties_stable() {
    let report = build(vec![
        scored_track("A", 0.5),
        scored_track("B", 0.5),
        scored_track("C", 0.9),
    ]);

    let names: Vec<&str> = report.rows().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["C", "A", "B"]);
    assert_eq!(report.saddest().unwrap().name, "C");
    assert_eq!(report.len(), 3);
}

#[test]
fn test_build_projects_columns() {
    let track = aggregate(Track::from_stub(stub("A", 0.6)).with_lyric(LyricScore::Scored(0.5)));
    let report = build(vec![track]);
    let row = &report.rows()[0];

    assert_eq!(row.name, "A");
    assert!(approx_eq(row.sadness_audio, 0.4));
    assert_eq!(row.sadness_lyric, 0.5);
    assert!(approx_eq(row.composite_score, 0.45));
}

#[test]
fn test_build_scores_unaggregated_tracks() {
    let report = build(vec![Track::from_stub(stub("A", 0.6))]);
    assert!(approx_eq(report.rows()[0].composite_score, 0.2));
}

#[test]
fn test_build_keeps_duplicate_names() {
    let report = build(vec![scored_track("Same", 0.3), scored_track("Same", 0.7)]);
    assert_eq!(report.len(), 2);
    assert!(report.rows().iter().all(|r| r.name == "Same"));
}

#[test]
fn test_empty_report() {
    let report = build(Vec::new());
    assert!(report.is_empty());
    assert!(report.saddest().is_none());
    assert!(report.table_rows().is_empty());
}

#[test]
fn test_report_table_rows_and_truncate() {
    let mut report = build(vec![scored_track("A", 0.25), scored_track("B", 0.75)]);

    let rows = report.table_rows();
    assert_eq!(rows[0].rank, 1);
    assert_eq!(rows[0].name, "B");
    assert_eq!(rows[0].composite_score, "0.750");
    assert_eq!(rows[1].rank, 2);

    let rendered = report.to_string();
    assert!(rendered.contains("composite_score"));
    assert!(rendered.contains("B"));

    report.truncate(1);
    assert_eq!(report.len(), 1);
    assert_eq!(report.saddest().unwrap().name, "B");
}

#[tokio::test]
async fn test_end_to_end_ranking() {
    // "A": 10 tokens, 3 of them sad -> lyric sadness 0.3
    let catalog = FakeCatalog {
        tracks: Ok(vec![stub("A", 0.8), stub("B", 0.2)]),
    };
    let lyrics = FakeLyrics::default().with("A", "sad sad sad one two three four five six seven");
    let lexicon = sad_lexicon();

    let report = Pipeline::new(&catalog, &lyrics, &lexicon)
        .run("X")
        .await
        .unwrap();

    let rows = report.rows();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].name, "B");
    assert!(approx_eq(rows[0].composite_score, 0.4));
    assert_eq!(rows[0].sadness_lyric, 0.0);

    assert_eq!(rows[1].name, "A");
    assert!(approx_eq(rows[1].sadness_lyric, 0.3));
    assert!(approx_eq(rows[1].composite_score, 0.25));
}

#[tokio::test]
async fn test_catalog_failure_is_fatal() {
    let catalog = FakeCatalog {
        tracks: Err("invalid client".to_string()),
    };
    let lyrics = FakeLyrics::default();
    let lexicon = sad_lexicon();

    let result = Pipeline::new(&catalog, &lyrics, &lexicon).run("X").await;
    assert!(matches!(result, Err(PipelineError::Catalog(CatalogError::Auth(_)))));
}

#[tokio::test]
async fn test_no_tracks_is_fatal() {
    let catalog = FakeCatalog { tracks: Ok(vec![]) };
    let lyrics = FakeLyrics::default();
    let lexicon = sad_lexicon();

    let result = Pipeline::new(&catalog, &lyrics, &lexicon).run("X").await;
    assert!(matches!(result, Err(PipelineError::NoTracks(artist)) if artist == "X"));
}

#[tokio::test]
async fn test_artist_mismatch_degrades_single_track() {
    let catalog = FakeCatalog {
        tracks: Ok(vec![stub("A", 0.6), stub("B", 0.6)]),
    };
    let lyrics = FakeLyrics {
        mismatched: vec!["A".to_string()],
        ..FakeLyrics::default()
    }
    .with("A", "sad")
    .with("B", "sad");
    let lexicon = sad_lexicon();

    let report = Pipeline::new(&catalog, &lyrics, &lexicon)
        .run("X")
        .await
        .unwrap();

    let rows = report.rows();
    assert_eq!(rows[0].name, "B");
    assert!(approx_eq(rows[0].composite_score, 0.7));
    assert_eq!(rows[1].name, "A");
    assert!(approx_eq(rows[1].composite_score, 0.2));
}

#[tokio::test(start_paused = true)]
async fn test_lyric_timeout_counts_as_unavailable() {
    let catalog = FakeCatalog {
        tracks: Ok(vec![stub("Slow", 0.6), stub("Fast", 0.6)]),
    };
    let lyrics = FakeLyrics {
        slow: vec!["Slow".to_string()],
        ..FakeLyrics::default()
    }
    .with("Slow", "sad")
    .with("Fast", "happy");
    let lexicon = sad_lexicon();

    let report = Pipeline::new(&catalog, &lyrics, &lexicon)
        .with_options(PipelineOptions {
            workers: 2,
            lyric_timeout: Duration::from_secs(1),
        })
        .run("X")
        .await
        .unwrap();

    let rows = report.rows();
    // both fall back to / score 0.2: Slow timed out, Fast has no sad words
    assert_eq!(rows[0].name, "Slow");
    assert_eq!(rows[0].sadness_lyric, 0.0);
    assert!(approx_eq(rows[0].composite_score, 0.2));
    assert_eq!(rows[1].name, "Fast");
    assert!(approx_eq(rows[1].composite_score, 0.2));
}

#[tokio::test]
async fn test_concurrent_run_keeps_catalog_order_for_ties() {
    let names: Vec<String> = (0..20).map(|i| format!("T{i:02}")).collect();
    let catalog = FakeCatalog {
        tracks: Ok(names.iter().map(|n| stub(n, 0.5)).collect()),
    };
    let lyrics = FakeLyrics::default();
    let lexicon = sad_lexicon();

    for workers in [1, 3, 8] {
        let report = Pipeline::new(&catalog, &lyrics, &lexicon)
            .with_options(PipelineOptions {
                workers,
                lyric_timeout: Duration::from_secs(5),
            })
            .run("X")
            .await
            .unwrap();

        let ranked: Vec<&str> = report.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(ranked, names.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
