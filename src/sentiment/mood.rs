/// Maps a catalog audio mood (valence) to audio sadness: `1 - audio_mood`.
///
/// The input is expected in `[0, 1]`. Out-of-range values are passed
/// through unchanged instead of being clamped.
pub fn normalize(audio_mood: f64) -> f64 {
    1.0 - audio_mood
}
