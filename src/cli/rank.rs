use std::path::PathBuf;

use crate::{
    config::Config,
    error,
    genius::GeniusClient,
    info,
    pipeline::Pipeline,
    sentiment::Lexicon,
    spotify::SpotifyClient,
    success, utils, warning,
};

/// Command-line overrides for a ranking run.
#[derive(Debug, Clone, Default)]
pub struct RankArgs {
    pub lexicon: Option<PathBuf>,
    pub workers: Option<usize>,
    pub timeout: Option<u64>,
    pub top: Option<usize>,
}

/// Ranks the tracks of `artist` by sadness and prints the report.
///
/// # Process Flow
///
/// 1. **Configuration**: builds [`Config`] from the environment, then applies
///    the command-line overrides
/// 2. **Lexicon**: loads the sentiment lexicon once
/// 3. **Pipeline**: fetches the catalog, scores lyrics per track and ranks
/// 4. **Output**: prints the table (optionally only the `top` rows) and the
///    saddest song
///
/// Any failure before the report exists terminates the program.
pub async fn rank(artist: String, args: RankArgs) {
    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Invalid configuration: {}", e),
    };

    if let Some(path) = args.lexicon {
        config.lexicon_path = path;
    }
    if let Some(workers) = args.workers {
        config.workers = workers.max(1);
    }
    if let Some(secs) = args.timeout {
        match config.set_lyric_timeout(secs) {
            Ok(()) => {}
            Err(e) => error!("Invalid configuration: {}", e),
        }
    }

    let lexicon = match Lexicon::load(&config.lexicon_path).await {
        Ok(lexicon) => lexicon,
        Err(e) => error!("Cannot load lexicon: {}", e),
    };
    info!(
        "Loaded {} lexicon entries from {}",
        lexicon.len(),
        config.lexicon_path.display()
    );
    if lexicon.is_empty() {
        warning!("The lexicon is empty, every lyric will score 0.");
    }

    let catalog = SpotifyClient::with_cached_token(config.spotify.clone()).await;
    let lyrics = GeniusClient::new(config.genius.clone());

    let mut report = match Pipeline::new(&catalog, &lyrics, &lexicon)
        .with_options(config.pipeline_options())
        .run(&artist)
        .await
    {
        Ok(report) => report,
        Err(e) => error!("Cannot rank songs of {}: {}", artist, e),
    };

    let total = report.len();
    if let Some(n) = args.top {
        report.truncate(n);
    }

    println!("{}", report);

    if let Some(saddest) = report.saddest() {
        success!(
            "Saddest song of {} ({} tracks ranked): {} with a score of {}",
            artist,
            total,
            saddest.name,
            utils::format_score(saddest.composite_score)
        );
    }
}
