//! # CLI Module
//!
//! User-facing commands of sadsong. Each command loads what it needs
//! (configuration, lexicon, API clients), delegates to the library, and
//! renders the outcome on the console.
//!
//! ## Commands
//!
//! - [`rank`] - Ranks all album tracks of an artist by sadness and prints the
//!   table, saddest song first
//! - [`score_lyrics`] - Scores a lyric text (file or stdin) against the lexicon,
//!   without any network access
//!
//! ## Layering
//!
//! ```text
//! CLI Layer (arguments, console output)
//!     ↓
//! Pipeline (aggregation and ranking)
//!     ↓                    ↓
//! Spotify client      Genius client
//!     ↓                    ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! ## Error Handling
//!
//! Fatal conditions (missing credentials, unreadable or malformed lexicon,
//! catalog failures, an artist without tracks) end the process through the
//! `error!` macro with exit status 1. Per-track lyric failures are reported as
//! warnings while the run continues.
//!
//! ## Usage Patterns
//!
//! ```bash
//! sadsong rank "The Rasmus"                       # Full ranking
//! sadsong rank Adele --top 10 --workers 8         # Ten saddest, more parallel lookups
//! sadsong score lyrics.txt --lexicon sad.txt      # Offline lyric score
//! cat lyrics.txt | sadsong score                  # Same, from stdin
//! ```

mod rank;
mod score;

pub use rank::{RankArgs, rank};
pub use score::score_lyrics;
