//! Configuration management and validation.
//!
//! Provides configuration structures for the dump format labels used by the
//! record parser and the thresholds used by reporting.

use crate::constants::{
    COMMENT_MARKER, DEFAULT_CUSTOM_WORDS, DEFAULT_HISTOGRAM_BINS, DEFAULT_INPUT_FILE,
    DEFAULT_MAX_WORDS, DEFAULT_MIN_COMMENT_CHARS, DEFAULT_MIN_TOKEN_CHARS, DEFAULT_STOP_WORDS,
    DEFAULT_TOP_N, HEADER_WORD, NAME_LABEL, POPULARITY_LABEL, RATING_LABEL,
};
use crate::error::{Result, ScenicError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::debug;

/// Labels recognised by the record parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Word opening each attraction header
    pub header_word: String,

    /// Label of the name line
    pub name_label: String,

    /// Label of the popularity line
    pub popularity_label: String,

    /// Label of the rating line
    pub rating_label: String,

    /// Phrase marking the start of the comment block
    pub comment_marker: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            header_word: HEADER_WORD.to_string(),
            name_label: NAME_LABEL.to_string(),
            popularity_label: POPULARITY_LABEL.to_string(),
            rating_label: RATING_LABEL.to_string(),
            comment_marker: COMMENT_MARKER.to_string(),
        }
    }
}

/// Thresholds for chart data and the comment word cloud
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Number of equal-width popularity histogram bins
    pub histogram_bins: usize,

    /// Number of attractions in the top-rated listing
    pub top_n: usize,

    /// Comments at or below this character count are left out of the corpus
    pub min_comment_chars: usize,

    /// Shortest token kept in the word cloud
    pub min_token_chars: usize,

    /// Maximum number of words in the word cloud
    pub max_words: usize,

    /// Tokens dropped from the word cloud
    pub stop_words: BTreeSet<String>,

    /// Dictionary words the tokenizer never splits
    pub custom_words: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            top_n: DEFAULT_TOP_N,
            min_comment_chars: DEFAULT_MIN_COMMENT_CHARS,
            min_token_chars: DEFAULT_MIN_TOKEN_CHARS,
            max_words: DEFAULT_MAX_WORDS,
            stop_words: DEFAULT_STOP_WORDS.iter().map(|s| s.to_string()).collect(),
            custom_words: DEFAULT_CUSTOM_WORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenicConfig {
    pub parser: ParserConfig,
    pub report: ReportConfig,
}

impl ScenicConfig {
    /// Set the number of histogram bins
    pub fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.report.histogram_bins = bins;
        self
    }

    /// Set the size of the top-rated listing
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.report.top_n = top_n;
        self
    }

    /// Set the word cloud size
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.report.max_words = max_words;
        self
    }

    /// Add extra stop words on top of the defaults
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.report.stop_words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Reject configurations the parser or reporting cannot work with
    pub fn validate(&self) -> Result<()> {
        let labels = [
            ("header_word", &self.parser.header_word),
            ("name_label", &self.parser.name_label),
            ("popularity_label", &self.parser.popularity_label),
            ("rating_label", &self.parser.rating_label),
            ("comment_marker", &self.parser.comment_marker),
        ];
        for (field, value) in labels {
            if value.trim().is_empty() {
                return Err(ScenicError::Configuration {
                    message: format!("{} must not be empty", field),
                });
            }
        }

        if self.report.histogram_bins == 0 {
            return Err(ScenicError::Configuration {
                message: "histogram_bins must be at least 1".to_string(),
            });
        }
        if self.report.top_n == 0 {
            return Err(ScenicError::Configuration {
                message: "top_n must be at least 1".to_string(),
            });
        }
        if self.report.max_words == 0 {
            return Err(ScenicError::Configuration {
                message: "max_words must be at least 1".to_string(),
            });
        }

        debug!("Configuration validated: {:?}", self.report);
        Ok(())
    }
}

/// Default location of the attraction dump: the user's desktop, falling back
/// to the home directory and then the working directory
pub fn default_input_path() -> PathBuf {
    dirs::desktop_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Desktop")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_INPUT_FILE)
}
