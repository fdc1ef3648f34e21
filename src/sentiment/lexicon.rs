use std::{collections::HashMap, path::Path};

use crate::error::LexiconError;

/// A static word list used as a presence-based sentiment dictionary.
///
/// Keys are stored lowercase. Weights are parsed and kept, but scoring only
/// looks at whether a word is present.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashMap<String, f64>,
}

impl Lexicon {
    /// Parses lexicon text, one `word weight` entry per line.
    ///
    /// Every line must split into exactly two whitespace-separated fields and
    /// the second one must be a number, so a blank line inside the text is
    /// malformed too. The first malformed line aborts parsing with
    /// [`LexiconError::Format`].
    ///
    /// # Example
    ///
    /// ```
    /// let lexicon = Lexicon::parse("gloomy 1\nbright 1")?;
    /// assert_eq!(lexicon.len(), 2);
    /// ```
    pub fn parse(content: &str) -> Result<Self, LexiconError> {
        let mut words = HashMap::new();

        for (idx, line) in content.lines().enumerate() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let [word, weight] = fields.as_slice() else {
                return Err(Self::format_error(idx, line));
            };

            let weight = weight
                .parse::<f64>()
                .map_err(|_| Self::format_error(idx, line))?;

            words.insert(word.to_lowercase(), weight);
        }

        Ok(Self { words })
    }

    /// Reads and parses the lexicon file at `path`.
    ///
    /// # Errors
    ///
    /// - [`LexiconError::Io`] if the file is missing or unreadable
    /// - [`LexiconError::Format`] if any entry is malformed
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let content = async_fs::read_to_string(path)
            .await
            .map_err(|source| LexiconError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        Self::parse(&content)
    }

    /// Case-insensitive presence check. A miss is never an error.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    pub fn weight(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn format_error(idx: usize, line: &str) -> LexiconError {
        LexiconError::Format {
            line: idx + 1,
            content: line.to_string(),
        }
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|(word, weight)| (word.into().to_lowercase(), weight))
                .collect(),
        }
    }
}
