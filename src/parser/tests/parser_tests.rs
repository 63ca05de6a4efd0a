//! Tests for the document parse orchestrator

use super::*;
use crate::error::ScenicError;
use crate::parser::load_attractions;
use std::path::Path;

#[test]
fn test_parse_document_admission() {
    let result = default_parser().parse_str(&create_test_document());

    assert_eq!(result.stats.segments_found, 3);
    assert_eq!(result.stats.records_admitted, 1);
    assert_eq!(result.stats.records_rejected, 2);

    let record = &result.records[0];
    assert_eq!(record.sequence_number, 1);
    assert_eq!(record.name, "兰亭");
    assert_eq!(record.popularity, Some(87.5));
    assert_eq!(record.rating, Some(4.6));
    assert_eq!(
        record.comments,
        vec!["1. 风景优美", "书法圣地，值得一去", "曲水流觞很有意思"]
    );
}

#[test]
fn test_candidates_bounded_by_headers() {
    let text = "景点 1:\n名称: A\n评分: 4\n景点 2:\n景点 3:\n名称: C\n热度值: 5";
    let result = default_parser().parse_str(text);

    assert_eq!(result.stats.segments_found, 3);
    assert!(result.records.len() <= result.stats.segments_found);
    assert_eq!(
        result.stats.records_admitted + result.stats.records_rejected,
        result.stats.segments_found
    );
}

#[test]
fn test_sequence_numbers_follow_segment_order() {
    // Source numbering is ignored; rejected segments still consume a number
    let text = "景点 9:\n名称: A\n评分: 4\n景点 5:\n名称: B\n景点 1:\n名称: C\n热度值: 5";
    let result = default_parser().parse_str(text);

    let numbers: Vec<u32> = result.records.iter().map(|r| r.sequence_number).collect();
    assert_eq!(numbers, vec![1, 3]);
}

#[test]
fn test_separator_not_captured_as_comment() {
    let result = default_parser().parse_str(&create_test_document());
    assert!(
        result.records[0]
            .comments
            .iter()
            .all(|c| !c.starts_with("---"))
    );
}

#[test]
fn test_no_headers_yields_no_records() {
    let result = default_parser().parse_str("名称: 兰亭\n热度值: 87.5");
    assert_eq!(result.stats.segments_found, 0);
    assert!(result.records.is_empty());
}

#[test]
fn test_placeholder_name_rejected_despite_score() {
    let result = default_parser().parse_str("景点 1:\n名称: None\n评分: 4.5\n");
    assert_eq!(result.stats.records_rejected, 1);
    assert!(result.records.is_empty());
}

#[test]
fn test_parse_file() {
    let temp_file = create_temp_file(&create_test_document());
    let result = default_parser().parse_file(temp_file.path()).unwrap();
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].name, "兰亭");
}

#[test]
fn test_reparse_is_identical() {
    let temp_file = create_temp_file(&create_test_document());
    let parser = default_parser();

    let first = parser.parse_file(temp_file.path()).unwrap();
    let second = parser.parse_file(temp_file.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_file() {
    let path = Path::new("/nonexistent/dir/绍兴景点数据.txt");

    match default_parser().parse_file(path) {
        Err(ScenicError::FileNotFound { path: reported }) => assert_eq!(reported, path),
        other => panic!("Expected FileNotFound, got {:?}", other),
    }
    assert!(default_parser().load_table(path).is_none());
    assert!(load_attractions(path).is_none());
}

#[test]
fn test_empty_result() {
    let temp_file = create_temp_file("景点 1:\n名称: 沈园\n用户评论:\n1. 很好\n");

    let err = default_parser().parse_file(temp_file.path()).unwrap_err();
    assert!(matches!(err, ScenicError::EmptyResult { .. }));
    assert!(err.is_no_data());
    assert!(default_parser().load_table(temp_file.path()).is_none());
}

#[test]
fn test_directory_is_parse_failure() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let err = default_parser().parse_file(temp_dir.path()).unwrap_err();
    assert!(matches!(err, ScenicError::ParseFailed { .. }));
    assert!(default_parser().load_table(temp_dir.path()).is_none());
}

#[test]
fn test_invalid_utf8_bytes_dropped() {
    let mut bytes = "景点 1:\n名称: 兰亭".as_bytes().to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe]);
    bytes.extend_from_slice("\n热度值: 87.5\n".as_bytes());
    let temp_file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), &bytes).unwrap();

    let result = default_parser().parse_file(temp_file.path()).unwrap();
    assert_eq!(result.records[0].name, "兰亭");
    assert_eq!(result.records[0].popularity, Some(87.5));
}

#[test]
fn test_encoded_replacement_character_survives() {
    let mut bytes = "景点 1:\n名称: 兰亭\n评分: 4.6\n用户评论:\n好\u{FFFD}看".as_bytes().to_vec();
    bytes.push(0xff);
    bytes.extend_from_slice("极了\n".as_bytes());
    let temp_file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), &bytes).unwrap();

    let result = default_parser().parse_file(temp_file.path()).unwrap();
    assert_eq!(result.records[0].comments, vec!["好\u{FFFD}看极了"]);
}

#[test]
fn test_load_table() {
    let temp_file = create_temp_file(&create_test_document());
    let table = load_attractions(temp_file.path()).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.records()[0].name, "兰亭");
}
