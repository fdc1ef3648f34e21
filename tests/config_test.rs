use std::{collections::HashMap, path::PathBuf, time::Duration};

use sadsong::config::*;
use sadsong::error::ConfigError;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

const REQUIRED: [(&str, &str); 3] = [
    ("SPOTIFY_CLIENT_ID", "client-id"),
    ("SPOTIFY_CLIENT_SECRET", "client-secret"),
    ("GENIUS_ACCESS_TOKEN", "genius-token"),
];

#[test]
fn test_config_defaults() {
    let config = Config::from_lookup(lookup_from(&REQUIRED)).unwrap();

    assert_eq!(config.spotify.client_id, "client-id");
    assert_eq!(config.spotify.client_secret, "client-secret");
    assert_eq!(config.spotify.api_url, DEFAULT_SPOTIFY_API_URL);
    assert_eq!(config.spotify.token_url, DEFAULT_SPOTIFY_TOKEN_URL);
    assert_eq!(config.genius.access_token, "genius-token");
    assert_eq!(config.genius.api_url, DEFAULT_GENIUS_API_URL);
    assert_eq!(config.genius.user_agent, USER_AGENT);
    assert_eq!(config.lexicon_path, default_lexicon_path());
    assert_eq!(config.workers, 4);
    assert_eq!(config.lyric_timeout, Duration::from_secs(15));
}

#[test]
fn test_config_overrides() {
    let mut pairs = REQUIRED.to_vec();
    pairs.extend([
        ("SPOTIFY_API_URL", "http://localhost:9000/v1"),
        ("GENIUS_API_URL", "http://localhost:9001"),
        ("SADSONG_LEXICON", "/tmp/sad.txt"),
        ("SADSONG_WORKERS", "8"),
        ("SADSONG_LYRIC_TIMEOUT_SECS", " 30 "),
    ]);

    let config = Config::from_lookup(lookup_from(&pairs)).unwrap();

    assert_eq!(config.spotify.api_url, "http://localhost:9000/v1");
    assert_eq!(config.genius.api_url, "http://localhost:9001");
    assert_eq!(config.lexicon_path, PathBuf::from("/tmp/sad.txt"));
    assert_eq!(config.workers, 8);
    assert_eq!(config.lyric_timeout, Duration::from_secs(30));

    let options = config.pipeline_options();
    assert_eq!(options.workers, 8);
    assert_eq!(options.lyric_timeout, Duration::from_secs(30));
}

#[test]
fn test_config_missing_required() {
    let result = Config::from_lookup(lookup_from(&REQUIRED[..2]));
    assert!(matches!(result, Err(ConfigError::Missing("GENIUS_ACCESS_TOKEN"))));

    let result = Config::from_lookup(lookup_from(&[]));
    assert!(matches!(result, Err(ConfigError::Missing("SPOTIFY_CLIENT_ID"))));
}

#[test]
fn test_config_blank_value_counts_as_missing() {
    let mut pairs = REQUIRED.to_vec();
    pairs[1] = ("SPOTIFY_CLIENT_SECRET", "   ");

    let result = Config::from_lookup(lookup_from(&pairs));
    assert!(matches!(result, Err(ConfigError::Missing("SPOTIFY_CLIENT_SECRET"))));
}

#[test]
fn test_config_invalid_numbers() {
    for (var, value) in [
        ("SADSONG_WORKERS", "many"),
        ("SADSONG_WORKERS", "0"),
        ("SADSONG_LYRIC_TIMEOUT_SECS", "-1"),
        ("SADSONG_LYRIC_TIMEOUT_SECS", "0"),
    ] {
        let mut pairs = REQUIRED.to_vec();
        pairs.push((var, value));

        match Config::from_lookup(lookup_from(&pairs)) {
            Err(ConfigError::Invalid { var: got, value: v }) => {
                assert_eq!(got, var);
                assert_eq!(v, value);
            }
            other => panic!("expected invalid {} error, got {:?}", var, other),
        }
    }
}

#[test]
fn test_config_timeout_override() {
    let mut config = Config::from_lookup(lookup_from(&REQUIRED)).unwrap();

    config.set_lyric_timeout(5).unwrap();
    assert_eq!(config.pipeline_options().lyric_timeout, Duration::from_secs(5));

    match config.set_lyric_timeout(0) {
        Err(ConfigError::Invalid { var, value }) => {
            assert_eq!(var, "--timeout");
            assert_eq!(value, "0");
        }
        other => panic!("expected invalid timeout, got {:?}", other),
    }
    assert_eq!(config.lyric_timeout, Duration::from_secs(5));
}

#[test]
fn test_data_dir_layout() {
    assert!(data_dir().ends_with("sadsong"));
    assert_eq!(default_lexicon_path(), data_dir().join("lexicon.txt"));
}
