use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub number: String,
    pub title: String,
    pub prerequisites: Vec<String>,
}

/// 課號大小寫的處理方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierCase {
    /// 載入時轉成大寫
    #[default]
    Upper,
    /// 保留檔案中的寫法
    Preserve,
}

impl IdentifierCase {
    pub fn apply(self, identifier: &str) -> String {
        match self {
            IdentifierCase::Upper => identifier.to_ascii_uppercase(),
            IdentifierCase::Preserve => identifier.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingCourseNumber,
    MissingTitle { course: String },
    Unreadable { detail: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingCourseNumber => write!(f, "Skipping a row with no course number."),
            SkipReason::MissingTitle { course } => write!(f, "Skipping {} (no title found).", course),
            SkipReason::Unreadable { detail } => write!(f, "Skipping an unreadable row ({}).", detail),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub source: String,
    pub loaded: usize,
    pub skipped: Vec<SkippedRow>,
}
