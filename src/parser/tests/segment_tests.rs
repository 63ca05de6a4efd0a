//! Tests for splitting documents into attraction segments

use crate::config::ParserConfig;
use crate::parser::segments::SegmentSplitter;

fn splitter() -> SegmentSplitter {
    SegmentSplitter::new(&ParserConfig::default()).unwrap()
}

#[test]
fn test_numeric_and_ordinal_headers() {
    let text = "景点 1:\n名称: 兰亭\n景点二:\n名称: 沈园\n景点  10:\n名称: 东湖";
    let segments = splitter().split(text);

    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].index, 1);
    assert_eq!(segments[0].content.trim(), "名称: 兰亭");
    assert_eq!(segments[1].content.trim(), "名称: 沈园");
    assert_eq!(segments[2].index, 3);
    assert_eq!(segments[2].content.trim(), "名称: 东湖");
}

#[test]
fn test_no_headers_no_segments() {
    assert!(splitter().split("名称: 兰亭\n评分: 4.6").is_empty());
    assert!(splitter().split("").is_empty());
}

#[test]
fn test_header_needs_colon() {
    let segments = splitter().split("景点 1\n名称: 兰亭\n景点 2:\n名称: 沈园");
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].content.trim(), "名称: 沈园");
}

#[test]
fn test_full_width_colon_header() {
    let segments = splitter().split("景点 1：\n名称: 兰亭");
    assert_eq!(segments.len(), 1);
}

#[test]
fn test_text_before_first_header_ignored() {
    let segments = splitter().split("绍兴景点数据\n名称: 无关\n景点 1:\n名称: 兰亭");
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].content.trim(), "名称: 兰亭");
}

#[test]
fn test_header_word_in_comment_does_not_split() {
    let text = "景点 1:\n名称: 兰亭\n用户评论:\n这个景点很好\n景点 2:\n名称: 沈园";
    let segments = splitter().split(text);
    assert_eq!(segments.len(), 2);
    assert!(segments[0].content.contains("这个景点很好"));
}

#[test]
fn test_separator_removed_from_segment() {
    let text = "景点 1:\n名称: 兰亭\n\n--------------------------------------------------\n景点 2:\n名称: 沈园\n\n-----\n";
    let segments = splitter().split(text);
    assert_eq!(segments.len(), 2);
    assert!(!segments[0].content.contains('-'));
    assert!(!segments[1].content.contains('-'));
}

#[test]
fn test_custom_header_word() {
    let config = ParserConfig {
        header_word: "Attraction".to_string(),
        ..ParserConfig::default()
    };
    let segments = SegmentSplitter::new(&config)
        .unwrap()
        .split("Attraction 1:\n名称: A\nAttraction 2:\n名称: B");
    assert_eq!(segments.len(), 2);
}
