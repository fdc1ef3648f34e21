use std::collections::HashMap;

use reqwest::Url;
use serde::de::DeserializeOwned;

use super::SpotifyClient;
use crate::{
    error::CatalogError,
    pipeline::CatalogClient,
    types::{
        Album, Artist, AudioFeaturesResponse, Paging, SearchArtistsResponse, Track, TrackStub,
    },
    utils, warning,
};

const PAGE_LIMIT: u32 = 50;
const AUDIO_FEATURES_BATCH: usize = 100;

impl SpotifyClient {
    /// Resolves an artist by name.
    ///
    /// Searches the catalog and picks the first result whose name matches
    /// `name` case-insensitively, so "the rasmus" finds "The Rasmus" but a
    /// fuzzy search hit for a different artist is not accepted.
    pub async fn search_artist(&self, name: &str) -> Result<Artist, CatalogError> {
        let url = self.endpoint("search", &[("q", name), ("type", "artist")])?;
        let res = self.get_json::<SearchArtistsResponse>(url.as_str()).await?;

        select_artist(res.artists.items, name)
    }

    /// All albums of an artist (singles and compilations are excluded).
    pub async fn get_albums(&self, artist_id: &str) -> Result<Vec<Album>, CatalogError> {
        let limit = PAGE_LIMIT.to_string();
        let url = self.endpoint(
            &format!("artists/{artist_id}/albums"),
            &[("include_groups", "album"), ("limit", &limit)],
        )?;
        self.get_all_pages(url.as_str()).await
    }

    pub async fn get_album_tracks(&self, album_id: &str) -> Result<Vec<Track>, CatalogError> {
        let limit = PAGE_LIMIT.to_string();
        let url = self.endpoint(&format!("albums/{album_id}/tracks"), &[("limit", &limit)])?;
        self.get_all_pages(url.as_str()).await
    }

    /// Looks up the valence of each track id, keyed by id.
    ///
    /// Ids Spotify has no audio features for are absent from the map.
    pub async fn get_audio_moods(
        &self,
        track_ids: &[String],
    ) -> Result<HashMap<String, f64>, CatalogError> {
        let mut moods = HashMap::with_capacity(track_ids.len());

        for chunk in track_ids.chunks(AUDIO_FEATURES_BATCH) {
            let ids = chunk.join(",");
            let url = self.endpoint("audio-features", &[("ids", &ids)])?;
            let res = self.get_json::<AudioFeaturesResponse>(url.as_str()).await?;

            moods.extend(moods_from(res));
        }

        Ok(moods)
    }

    async fn get_all_pages<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, CatalogError> {
        let mut items = Vec::new();
        let mut next = Some(url.to_string());

        while let Some(page_url) = next {
            let page = self.get_json::<Paging<T>>(&page_url).await?;
            items.extend(page.items);
            next = page.next;
        }

        Ok(items)
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, CatalogError> {
        let base = format!("{}/{}", self.api_url().trim_end_matches('/'), path);
        Url::parse_with_params(&base, params)
            .map_err(|e| CatalogError::InvalidUrl(format!("{base}: {e}")))
    }
}

/// Picks the artist whose name matches `name` out of search results.
///
/// Spotify's search is fuzzy: "Muse" also returns "Muse Dash" or "Mused".
/// Only a case-insensitive, whitespace-normalized match is accepted; the
/// first such result wins.
///
/// # Errors
///
/// Returns [`CatalogError::ArtistNotFound`] if no result matches.
pub fn select_artist(candidates: Vec<Artist>, name: &str) -> Result<Artist, CatalogError> {
    candidates
        .into_iter()
        .find(|artist| utils::names_match(&artist.name, name))
        .ok_or_else(|| CatalogError::ArtistNotFound(name.to_string()))
}

/// Valence per track id from one audio-features answer.
///
/// Spotify answers `null` for ids it has no features for; those are dropped.
pub fn moods_from(response: AudioFeaturesResponse) -> impl Iterator<Item = (String, f64)> {
    response
        .audio_features
        .into_iter()
        .flatten()
        .map(|features| (features.id, features.valence))
}

/// Pairs album tracks with their audio mood, keeping catalog order.
///
/// Returns the stubs and the names of the tracks that were dropped because
/// they have no id (local files) or no entry in `moods`.
pub fn stubs_from(
    tracks: Vec<Track>,
    moods: &HashMap<String, f64>,
) -> (Vec<TrackStub>, Vec<String>) {
    let mut stubs = Vec::with_capacity(tracks.len());
    let mut skipped = Vec::new();

    for track in tracks {
        match track.id.as_ref().and_then(|id| moods.get(id)) {
            Some(&audio_mood) => stubs.push(TrackStub {
                name: track.name,
                audio_mood,
            }),
            None => skipped.push(track.name),
        }
    }

    (stubs, skipped)
}

impl CatalogClient for SpotifyClient {
    /// Walks the artist's albums and returns every album track with its mood.
    ///
    /// Tracks come back in album order, then track order. Duplicate names
    /// across albums are kept. Tracks without an id or without audio
    /// features are skipped with a warning.
    async fn get_tracks(&self, artist: &str) -> Result<Vec<TrackStub>, CatalogError> {
        let pb = utils::spinner(&format!("Fetching catalog for {artist}..."));

        let result = async {
            let found = self.search_artist(artist).await?;
            let albums = self.get_albums(&found.id).await?;

            let mut tracks: Vec<Track> = Vec::new();
            for album in &albums {
                pb.set_message(format!("Fetching tracks of {}...", album.name));
                tracks.extend(self.get_album_tracks(&album.id).await?);
            }

            let ids: Vec<String> = tracks.iter().filter_map(|t| t.id.clone()).collect();
            pb.set_message(format!("Fetching audio features for {} tracks...", ids.len()));
            let moods = self.get_audio_moods(&ids).await?;

            let (stubs, skipped) = stubs_from(tracks, &moods);
            for name in skipped {
                pb.suspend(|| warning!("No audio features for {}, skipping.", name));
            }

            Ok::<_, CatalogError>(stubs)
        }
        .await;

        pb.finish_and_clear();
        result
    }
}
