//! Application constants for the scenic processor
//!
//! Literal labels of the attraction dump format, ordinal words, default
//! file names and reporting defaults.

// =============================================================================
// Dump Format Labels
// =============================================================================

/// Word introducing each attraction header ("attraction")
pub const HEADER_WORD: &str = "景点";

/// Name field label
pub const NAME_LABEL: &str = "名称";

/// Popularity (heat score) field label
pub const POPULARITY_LABEL: &str = "热度值";

/// Rating field label
pub const RATING_LABEL: &str = "评分";

/// Address field label; written by the collector, never bound by the parser
pub const ADDRESS_LABEL: &str = "地址";

/// Marker line announcing that user comments follow
pub const COMMENT_MARKER: &str = "用户评论";

/// Chinese ordinal words accepted in headers and comment tags (one..ten)
pub const ORDINAL_WORDS: &[&str] = &["一", "二", "三", "四", "五", "六", "七", "八", "九", "十"];

/// Value written by the collector for a field the detail page did not carry
pub const MISSING_VALUE: &str = "None";

/// Width of the dashed separator written after each attraction
pub const SEPARATOR_WIDTH: usize = 50;

/// Shortest run of dashes recognised as a record separator
pub const MIN_SEPARATOR_DASHES: usize = 3;

// =============================================================================
// Files
// =============================================================================

/// Default dump file name, looked up on the user's desktop
pub const DEFAULT_INPUT_FILE: &str = "绍兴景点数据.txt";

pub const ATTRACTIONS_PARQUET: &str = "attractions.parquet";
pub const HISTOGRAM_CSV: &str = "popularity_histogram.csv";
pub const TOP_RATED_CSV: &str = "top_rated.csv";
pub const WORD_FREQUENCIES_CSV: &str = "word_frequencies.csv";

// =============================================================================
// Reporting Defaults
// =============================================================================

pub const DEFAULT_HISTOGRAM_BINS: usize = 10;
pub const DEFAULT_TOP_N: usize = 10;

/// Comments must be strictly longer than this many characters to enter the corpus
pub const DEFAULT_MIN_COMMENT_CHARS: usize = 5;

pub const DEFAULT_MIN_TOKEN_CHARS: usize = 2;
pub const DEFAULT_MAX_WORDS: usize = 500;

/// Filler words dropped from the word cloud
pub const DEFAULT_STOP_WORDS: &[&str] = &["这里", "非常", "感觉", "这个", "可以", "就是", "景点"];

/// Place names kept whole by the tokenizer
pub const DEFAULT_CUSTOM_WORDS: &[&str] = &["乌篷船", "鲁迅故里", "曲水流觞"];
