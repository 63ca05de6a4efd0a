//! Splitting a dump into per-attraction segments.
//!
//! A segment is the text between the end of one header marker
//! (`景点 3:`, `景点二:`) and the start of the next one, or the end of the
//! document. The dashed separator the collector writes after each attraction
//! is a delimiter and is trimmed off the segment.

use regex::Regex;
use tracing::debug;

use crate::config::ParserConfig;
use crate::constants::{MIN_SEPARATOR_DASHES, ORDINAL_WORDS};
use crate::error::{Result, ScenicError};

/// Text belonging to one attraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// 1-based position in the document
    pub index: usize,

    /// Content after the header marker, separator lines removed
    pub content: &'a str,
}

/// Locates header markers and cuts the document between them
#[derive(Debug, Clone)]
pub struct SegmentSplitter {
    header: Regex,
}

impl SegmentSplitter {
    pub fn new(config: &ParserConfig) -> Result<Self> {
        let pattern = format!(
            r"{}\s*(?:{}|[0-9]+)[:：]",
            regex::escape(config.header_word.trim()),
            ORDINAL_WORDS.join("|")
        );
        let header = Regex::new(&pattern).map_err(|source| ScenicError::InvalidPattern {
            label: config.header_word.clone(),
            source,
        })?;
        Ok(Self { header })
    }

    /// Split `text` into segments in document order. No headers means no segments.
    pub fn split<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let headers: Vec<_> = self.header.find_iter(text).collect();
        debug!("Found {} header markers", headers.len());

        headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let end = headers
                    .get(i + 1)
                    .map(|next| next.start())
                    .unwrap_or(text.len());
                Segment {
                    index: i + 1,
                    content: trim_trailing_separators(&text[header.end()..end]),
                }
            })
            .collect()
    }
}

/// Drop trailing blank and dashed separator lines from a segment
fn trim_trailing_separators(content: &str) -> &str {
    let mut remaining = content.trim_end();
    loop {
        let line_start = remaining.rfind('\n').map(|i| i + 1).unwrap_or(0);
        if !is_separator_line(&remaining[line_start..]) {
            return remaining;
        }
        remaining = remaining[..line_start].trim_end();
    }
}

/// A line made only of dashes, long enough not to be punctuation in a comment
pub fn is_separator_line(line: &str) -> bool {
    let line = line.trim();
    line.chars().count() >= MIN_SEPARATOR_DASHES && line.chars().all(|c| c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_trailing_separators() {
        let content = "\n  名称: 兰亭\n\n--------------------------------------------------\n";
        assert_eq!(trim_trailing_separators(content), "\n  名称: 兰亭");
    }

    #[test]
    fn test_trim_keeps_short_dash_comment() {
        assert_eq!(trim_trailing_separators("好\n--"), "好\n--");
    }

    #[test]
    fn test_trim_only_separators() {
        assert_eq!(trim_trailing_separators("\n-----\n\n-----\n"), "");
    }

    #[test]
    fn test_is_separator_line() {
        assert!(is_separator_line("  -----  "));
        assert!(!is_separator_line("--"));
        assert!(!is_separator_line("--x--"));
        assert!(!is_separator_line(""));
    }
}
