//! # Sentiment Module
//!
//! Turns raw lyric text and raw catalog audio features into sadness values.
//!
//! ```text
//! lyric text ──► tokenizer ──► scorer ◄── lexicon
//!                                │
//!                                ▼
//!                         lyric sadness [0,1]
//!
//! valence ──► mood::normalize ──► audio sadness (1 - valence)
//! ```
//!
//! All functions here are pure. The only I/O is [`Lexicon::load`], which
//! reads the lexicon file once at startup; the resulting lexicon is never
//! mutated afterwards and can be shared freely between workers.

pub mod lexicon;
pub mod mood;
pub mod scorer;
pub mod tokenizer;

pub use lexicon::Lexicon;
pub use mood::normalize;
pub use scorer::{score, score_text};
pub use tokenizer::tokenize;
