use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use sadsong::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank the songs of an artist by sadness
    Rank(RankOptions),

    /// Score a lyric text against the sentiment lexicon
    Score(ScoreOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct RankOptions {
    /// Artist name as listed on Spotify
    pub artist: String,

    /// Sentiment lexicon file (`word weight` per line)
    #[clap(long)]
    pub lexicon: Option<PathBuf>,

    /// Number of concurrent lyric lookups
    #[clap(long)]
    pub workers: Option<usize>,

    /// Per-track lyric lookup timeout in seconds
    #[clap(long)]
    pub timeout: Option<u64>,

    /// Only show the N saddest songs
    #[clap(long)]
    pub top: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct ScoreOptions {
    /// Lyric text file; reads stdin when omitted
    pub file: Option<PathBuf>,

    /// Sentiment lexicon file (`word weight` per line)
    #[clap(long)]
    pub lexicon: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Rank(opt) => {
            cli::rank(
                opt.artist,
                cli::RankArgs {
                    lexicon: opt.lexicon,
                    workers: opt.workers,
                    timeout: opt.timeout,
                    top: opt.top,
                },
            )
            .await
        }
        Command::Score(opt) => cli::score_lyrics(opt.file, opt.lexicon).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
