use crate::core::parser::{parse_fields, ParseOutcome, FIELD_DELIMITER};
use crate::domain::catalog::CourseTable;
use crate::domain::model::{IdentifierCase, LoadReport, SkipReason, SkippedRow};
use crate::domain::ports::CourseSource;
use crate::utils::error::Result;
use std::io::{BufRead, BufReader, Read};

pub struct CourseLoader<S: CourseSource> {
    source: S,
    case: IdentifierCase,
}

impl<S: CourseSource> CourseLoader<S> {
    pub fn new(source: S, case: IdentifierCase) -> Self {
        Self { source, case }
    }

    /// 開啟來源並建立一份新的課程表
    pub fn load(&self, name: &str) -> Result<(CourseTable, LoadReport)> {
        tracing::debug!("Opening course source: {}", name);
        let reader = self.source.open(name)?;
        read_courses(reader, name, self.case)
    }

    /// Replaces `table` with the contents of `name`.
    ///
    /// The table is only swapped once the whole source has been read, so an
    /// open failure or a read error leaves the previous contents in place.
    pub fn reload(&self, table: &mut CourseTable, name: &str) -> Result<LoadReport> {
        let (fresh, report) = self.load(name)?;
        *table = fresh;
        Ok(report)
    }
}

/// 單行欄位切割：不處理引號、去除欄位前後空白
fn row_reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(FIELD_DELIMITER as u8)
        .trim(csv::Trim::All);
    builder
}

/// Reads every row of `reader` into a fresh table.
///
/// Physical lines are counted here rather than taken from the csv record
/// position, which points at the first of any skipped empty lines.
pub fn read_courses<R: Read>(
    reader: R,
    name: &str,
    case: IdentifierCase,
) -> Result<(CourseTable, LoadReport)> {
    let row_reader = row_reader_builder();
    let mut record = csv::ByteRecord::new();

    let mut table = CourseTable::new();
    let mut skipped = Vec::new();

    for (index, raw_line) in BufReader::new(reader).split(b'\n').enumerate() {
        let raw_line = raw_line?;
        let line = index as u64 + 1;

        // 空行沒有任何 record
        if !row_reader
            .from_reader(raw_line.as_slice())
            .read_byte_record(&mut record)?
        {
            continue;
        }

        let fields = match record
            .iter()
            .map(std::str::from_utf8)
            .collect::<std::result::Result<Vec<&str>, _>>()
        {
            Ok(fields) => fields,
            Err(e) => {
                let reason = SkipReason::Unreadable {
                    detail: e.to_string(),
                };
                tracing::warn!("⚠️ {}:{} {}", name, line, reason);
                skipped.push(SkippedRow { line, reason });
                continue;
            }
        };

        match parse_fields(fields, case) {
            ParseOutcome::Course(course) => {
                tracing::debug!(
                    "Parsed {} ({} prerequisites) at line {}",
                    course.number,
                    course.prerequisites.len(),
                    line
                );
                if let Some(previous) = table.insert(course) {
                    tracing::debug!("Course {} redefined at line {}", previous.number, line);
                }
            }
            ParseOutcome::Skip(reason) => {
                tracing::warn!("⚠️ {}:{} {}", name, line, reason);
                skipped.push(SkippedRow { line, reason });
            }
            ParseOutcome::Blank => {}
        }
    }

    let report = LoadReport {
        source: name.to_string(),
        loaded: table.len(),
        skipped,
    };
    tracing::info!(
        "✅ Loaded {} courses from {} ({} rows skipped)",
        report.loaded,
        name,
        report.skipped.len()
    );

    Ok((table, report))
}
