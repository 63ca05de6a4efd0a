//! Field extraction for a single attraction segment.
//!
//! Each trimmed, non-empty line is offered to an ordered rule table and the
//! first rule that is enabled and matches consumes the line:
//!
//! 1. name (`名称: ...`)
//! 2. popularity (`热度值: 87.5`)
//! 3. rating (`评分: 4.6`)
//! 4. comment start (line containing `用户评论:`, only once a name is known)
//! 5. comment line (only after the comment start, a bracketed tag such as
//!    `[3] ` or `[三] ` is stripped; any other line is kept verbatim)
//!
//! Repeated labels overwrite earlier values (last wins). A name written as
//! the collector's `None` placeholder counts as missing, so such a segment is
//! never admitted even when it carries a score.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use super::segments::Segment;
use crate::config::ParserConfig;
use crate::constants::{MISSING_VALUE, ORDINAL_WORDS};
use crate::error::{Result, ScenicError};
use crate::models::ParseStats;

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]*)?").unwrap());

static COMMENT_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?:\[(?:[0-9]+|{})\] )?(.*)$",
        ORDINAL_WORDS.join("|")
    ))
    .unwrap()
});

/// Which field a rule populates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Name,
    Popularity,
    Rating,
    CommentStart,
    CommentLine,
}

impl RuleKind {
    /// Whether the rule may fire given what the segment has seen so far
    fn is_enabled(self, acc: &SegmentAccumulator) -> bool {
        match self {
            RuleKind::CommentStart => acc.name.is_some(),
            RuleKind::CommentLine => acc.capturing_comments,
            _ => true,
        }
    }
}

/// One entry of the dispatch table
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub kind: RuleKind,
    pattern: Regex,
}

/// Candidate record built from one segment, before admission
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateRecord {
    pub sequence_number: u32,
    pub name: Option<String>,
    pub popularity: Option<f64>,
    pub rating: Option<f64>,
    pub comments: Vec<String>,
}

/// Per-segment state; a fresh one is created for every segment
#[derive(Debug, Default)]
struct SegmentAccumulator {
    name: Option<String>,
    popularity: Option<f64>,
    rating: Option<f64>,
    comments: Vec<String>,
    capturing_comments: bool,
}

impl SegmentAccumulator {
    fn into_candidate(self, sequence_number: u32) -> CandidateRecord {
        CandidateRecord {
            sequence_number,
            name: self.name,
            popularity: self.popularity,
            rating: self.rating,
            comments: self.comments,
        }
    }
}

/// Ordered rule table shared by every segment of a parse
#[derive(Debug, Clone)]
pub struct FieldRules {
    rules: Vec<FieldRule>,
}

impl FieldRules {
    pub fn new(config: &ParserConfig) -> Result<Self> {
        let rules = vec![
            FieldRule {
                kind: RuleKind::Name,
                pattern: label_pattern(&config.name_label)?,
            },
            FieldRule {
                kind: RuleKind::Popularity,
                pattern: label_pattern(&config.popularity_label)?,
            },
            FieldRule {
                kind: RuleKind::Rating,
                pattern: label_pattern(&config.rating_label)?,
            },
            FieldRule {
                kind: RuleKind::CommentStart,
                pattern: marker_pattern(&config.comment_marker)?,
            },
            FieldRule {
                kind: RuleKind::CommentLine,
                pattern: COMMENT_LINE_RE.clone(),
            },
        ];
        Ok(Self { rules })
    }

    /// Rule kinds in evaluation order
    pub fn order(&self) -> Vec<RuleKind> {
        self.rules.iter().map(|rule| rule.kind).collect()
    }

    /// Build a candidate record from one segment
    pub fn extract(&self, segment: &Segment<'_>, stats: &mut ParseStats) -> CandidateRecord {
        let mut acc = SegmentAccumulator::default();

        for line in segment.content.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let matched = self.rules.iter().find_map(|rule| {
                if !rule.kind.is_enabled(&acc) {
                    return None;
                }
                rule.pattern.captures(line).map(|caps| {
                    let value = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
                    (rule.kind, value)
                })
            });

            if let Some((kind, value)) = matched {
                apply(&mut acc, kind, value, segment.index, stats);
            }
        }

        acc.into_candidate(u32::try_from(segment.index).unwrap_or(u32::MAX))
    }
}

fn apply(
    acc: &mut SegmentAccumulator,
    kind: RuleKind,
    value: &str,
    segment: usize,
    stats: &mut ParseStats,
) {
    match kind {
        RuleKind::Name => {
            acc.name = if value.is_empty() || value == MISSING_VALUE {
                None
            } else {
                Some(value.to_string())
            };
        }
        RuleKind::Popularity => {
            if let Some(v) = parse_decimal(value, "popularity", segment, stats) {
                acc.popularity = Some(v);
            }
        }
        RuleKind::Rating => {
            if let Some(v) = parse_decimal(value, "rating", segment, stats) {
                acc.rating = Some(v);
            }
        }
        RuleKind::CommentStart => acc.capturing_comments = true,
        RuleKind::CommentLine => acc.comments.push(value.to_string()),
    }
}

/// Read a non-negative decimal; anything else leaves the field untouched
fn parse_decimal(value: &str, field: &str, segment: usize, stats: &mut ParseStats) -> Option<f64> {
    if value.is_empty() || value == MISSING_VALUE {
        debug!("Segment {}: {} not available", segment, field);
        return None;
    }

    match NUMBER_RE.find(value).map(|m| m.as_str().parse::<f64>()) {
        Some(Ok(number)) => Some(number),
        _ => {
            warn!("Segment {}: skipping malformed {} '{}'", segment, field, value);
            stats.add_malformed(format!("segment {}: {} '{}'", segment, field, value));
            None
        }
    }
}

/// `^<label>[:：]\s*(.*)$`
fn label_pattern(label: &str) -> Result<Regex> {
    Regex::new(&format!(r"^{}[:：]\s*(.*)$", regex::escape(label.trim()))).map_err(|source| {
        ScenicError::InvalidPattern {
            label: label.to_string(),
            source,
        }
    })
}

/// `<marker>[:：]` anywhere in the line
fn marker_pattern(marker: &str) -> Result<Regex> {
    Regex::new(&format!(r"{}[:：]", regex::escape(marker.trim()))).map_err(|source| {
        ScenicError::InvalidPattern {
            label: marker.to_string(),
            source,
        }
    })
}
