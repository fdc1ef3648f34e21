use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientCredentialsResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// A song candidate as yielded by the catalog: name and raw audio mood.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackStub {
    pub name: String,
    pub audio_mood: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchArtistsResponse {
    pub artists: Paging<Artist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeaturesResponse {
    pub audio_features: Vec<Option<AudioFeatures>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub id: String,
    pub valence: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeniusSearchResponse {
    pub response: GeniusHits,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeniusHits {
    pub hits: Vec<GeniusHit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeniusHit {
    pub result: GeniusSong,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeniusSong {
    pub url: String,
    pub primary_artist: GeniusArtist,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeniusArtist {
    pub name: String,
}

/// One row of the ranked report, columns in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub sadness_audio: f64,
    pub sadness_lyric: f64,
    pub composite_score: f64,
}

#[derive(Tabled)]
pub struct ReportTableRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    pub name: String,
    pub sadness_audio: String,
    pub sadness_lyric: String,
    pub composite_score: String,
}
