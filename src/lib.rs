//! Saddest Song Finder Library
//!
//! This library ranks the songs of an artist by how sad they are. Each track
//! gets an audio signal from the Spotify catalog (its valence) and a lyric
//! signal from Genius lyrics scored against a sentiment lexicon. Both signals
//! are blended into a composite score and the tracks are sorted by it.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration struct and `.env` loading
//! - `error` - Error types for every collaborator boundary
//! - `genius` - Genius lyrics provider (search and page scraping)
//! - `management` - Token caching for the Spotify client
//! - `pipeline` - Aggregation, ranking and the concurrent pipeline runner
//! - `sentiment` - Lexicon, tokenizer, lyric scorer and mood normalizer
//! - `spotify` - Spotify Web API catalog client
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use sadsong::{config, sentiment::{Lexicon, score_text}};
//!
//! #[tokio::main]
//! async fn main() -> sadsong::Res<()> {
//!     config::load_env().await?;
//!     let lexicon = Lexicon::parse("tears 1\nalone 1")?;
//!     println!("{}", score_text("All alone in tears", &lexicon));
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod genius;
pub mod management;
pub mod pipeline;
pub mod sentiment;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the command-line glue where errors from several boundaries meet
/// and are only reported, never matched on.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching catalog for {}", artist);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Ranked {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used for fatal errors: the process terminates with exit code 1
/// right after the message is printed.
///
/// # Example
///
/// ```
/// error!("Cannot load lexicon: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, such as a track whose lyrics could not be
/// resolved.
///
/// # Example
///
/// ```
/// warning!("No lyrics for {}: {}", track, e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
