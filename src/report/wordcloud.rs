//! Term frequencies for the comment word cloud.
//!
//! Comments are segmented with jieba's dictionary (HMM off). Custom place
//! names are registered as extra dictionary words so they are never split.

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use jieba_rs::Jieba;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ReportConfig;

static ASCII_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9a-zA-Z]+").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermFrequency {
    pub term: String,
    pub count: usize,
}

/// Chinese word segmenter with the custom dictionary loaded
pub struct Tokenizer {
    jieba: Jieba,
}

impl Tokenizer {
    pub fn new<S: AsRef<str>>(custom_words: &[S]) -> Self {
        let mut jieba = Jieba::new();
        for word in custom_words.iter().map(|w| w.as_ref().trim()) {
            if !word.is_empty() {
                jieba.add_word(word, None, None);
            }
        }
        Self { jieba }
    }

    /// Words of `text` in order; whitespace and punctuation are dropped
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.jieba
            .cut(text, false)
            .into_iter()
            .filter(|token| token.chars().any(char::is_alphanumeric))
            .map(str::to_string)
            .collect()
    }
}

/// Word cloud input: comments longer than the configured minimum
pub fn comment_corpus<'a>(
    comments: impl IntoIterator<Item = &'a str>,
    min_comment_chars: usize,
) -> Vec<&'a str> {
    comments
        .into_iter()
        .filter(|c| c.chars().count() > min_comment_chars)
        .collect()
}

/// Whether a token survives the word cloud filters
pub fn keep_token(token: &str, min_token_chars: usize, stop_words: &BTreeSet<String>) -> bool {
    token.chars().count() >= min_token_chars
        && !stop_words.contains(token)
        && !ASCII_WORD_RE.is_match(token)
}

/// Count filtered tokens across the corpus, most frequent first
pub fn term_frequencies<'a>(
    comments: impl IntoIterator<Item = &'a str>,
    config: &ReportConfig,
) -> Vec<TermFrequency> {
    let tokenizer = Tokenizer::new(&config.custom_words);
    let corpus = comment_corpus(comments, config.min_comment_chars);

    let mut counts: HashMap<String, usize> = HashMap::new();
    for comment in &corpus {
        for token in tokenizer.tokenize(comment) {
            if keep_token(&token, config.min_token_chars, &config.stop_words) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }
    }

    let mut frequencies: Vec<TermFrequency> = counts
        .into_iter()
        .map(|(term, count)| TermFrequency { term, count })
        .collect();
    frequencies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
    frequencies.truncate(config.max_words);

    debug!(
        "Word cloud: {} comments in corpus, {} distinct terms kept",
        corpus.len(),
        frequencies.len()
    );
    frequencies
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> Tokenizer {
        Tokenizer::new(&["乌篷船", "鲁迅故里"])
    }

    #[test]
    fn test_custom_words_kept_whole() {
        let tokens = tokenizer().tokenize("坐乌篷船游鲁迅故里");
        assert!(tokens.iter().any(|t| t == "乌篷船"));
        assert!(tokens.iter().any(|t| t == "鲁迅故里"));
        assert_eq!(tokens.concat(), "坐乌篷船游鲁迅故里");
    }

    #[test]
    fn test_punctuation_and_spaces_dropped() {
        let tokens = tokenizer().tokenize("好看，好玩！ 乌篷船");
        assert!(tokens.iter().all(|t| !t.contains('，') && !t.contains('！') && !t.contains(' ')));
        assert_eq!(tokens.concat(), "好看好玩乌篷船");
    }

    #[test]
    fn test_latin_words_whole() {
        let tokens = tokenizer().tokenize("nice 风景");
        assert_eq!(tokens[0], "nice");
        assert_eq!(tokens.concat(), "nice风景");
    }

    #[test]
    fn test_keep_token_filters() {
        let stop: BTreeSet<String> = ["这里".to_string()].into_iter().collect();
        assert!(keep_token("风景", 2, &stop));
        assert!(!keep_token("好", 2, &stop));
        assert!(!keep_token("这里", 2, &stop));
        assert!(!keep_token("5A景区", 2, &stop));
        assert!(!keep_token("nice", 2, &stop));
    }

    #[test]
    fn test_corpus_drops_short_comments() {
        let corpus = comment_corpus(["很好", "风景非常优美值得", "一二三四五"], 5);
        assert_eq!(corpus, vec!["风景非常优美值得"]);
    }

    #[test]
    fn test_term_frequencies_sorted_and_truncated() {
        let config = ReportConfig {
            max_words: 2,
            ..ReportConfig::default()
        };
        let comments = ["乌篷船真的很有意思", "坐乌篷船游览古镇"];
        let frequencies = term_frequencies(comments, &config);

        assert_eq!(frequencies.len(), 2);
        assert_eq!(frequencies[0].term, "乌篷船");
        assert_eq!(frequencies[0].count, 2);
        assert_eq!(frequencies[1].count, 1);
    }

    #[test]
    fn test_term_frequencies_apply_filters() {
        let config = ReportConfig::default();
        let comments = ["这里的乌篷船非常好, great", "乌篷船，这里可以坐"];
        let frequencies = term_frequencies(comments, &config);

        let terms: Vec<&str> = frequencies.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(frequencies[0].term, "乌篷船");
        assert!(!terms.contains(&"这里"));
        assert!(!terms.contains(&"非常"));
        assert!(!terms.contains(&"great"));
        assert!(terms.iter().all(|t| t.chars().count() >= 2));
    }
}
