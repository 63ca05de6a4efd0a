//! Test utilities for the record parser
//!
//! Shared fixtures and helpers used across the parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

use super::AttractionParser;
use super::fields::FieldRules;
use super::segments::Segment;
use crate::config::ParserConfig;
use crate::models::ParseStats;

mod parser_tests;
mod segment_tests;

/// Parser with the default labels
pub fn default_parser() -> AttractionParser {
    AttractionParser::new(&ParserConfig::default()).unwrap()
}

/// Extract one candidate from raw segment content
pub fn extract(content: &str) -> (super::fields::CandidateRecord, ParseStats) {
    let rules = FieldRules::new(&ParserConfig::default()).unwrap();
    let mut stats = ParseStats::new();
    let candidate = rules.extract(&Segment { index: 1, content }, &mut stats);
    (candidate, stats)
}

/// Three attractions in collector layout: complete, name-only, rating-only
pub fn create_test_document() -> String {
    r#"景点 1:
  名称: 兰亭
  热度值: 87.5
  评分: 4.6
  地址: 绍兴市柯桥区兰亭镇
  用户评论:
    1. 风景优美
    [2] 书法圣地，值得一去
    曲水流觞很有意思

--------------------------------------------------
景点 2:
  名称: 沈园
  热度值: None
  评分: None
  地址: 绍兴市越城区
  用户评论:
    1. 陆游和唐婉

--------------------------------------------------
景点 3:
  热度值: 75.0
  评分: 4.2
  用户评论:
    1. 没有名字

--------------------------------------------------
"#
    .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
