use std::path::PathBuf;

use tokio::io::AsyncReadExt;

use crate::{
    config, error, info,
    sentiment::{Lexicon, score, tokenize},
    success, utils,
};

/// Scores a lyric text against the lexicon and prints the breakdown.
///
/// Reads `file`, or stdin when no file is given. The lexicon comes from
/// `--lexicon`, then `SADSONG_LEXICON`, then the data directory.
pub async fn score_lyrics(file: Option<PathBuf>, lexicon: Option<PathBuf>) {
    let lexicon_path = lexicon.unwrap_or_else(config::lexicon_path_from_env);
    let lexicon = match Lexicon::load(&lexicon_path).await {
        Ok(lexicon) => lexicon,
        Err(e) => error!("Cannot load lexicon: {}", e),
    };

    let text = match file {
        Some(path) => match async_fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) => error!("Cannot read {}: {}", path.display(), e),
        },
        None => {
            let mut text = String::new();
            if let Err(e) = tokio::io::stdin().read_to_string(&mut text).await {
                error!("Cannot read lyrics from stdin: {}", e);
            }
            text
        }
    };

    let tokens = tokenize(&text);
    let matched = tokens.iter().filter(|t| lexicon.contains(t)).count();

    info!("Tokens: {}", tokens.len());
    info!("Lexicon matches: {}", matched);
    success!("Lyric sadness: {}", utils::format_score(score(&tokens, &lexicon)));
}
