use crate::domain::model::{Course, IdentifierCase, SkipReason};

pub const FIELD_DELIMITER: char = ',';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Course(Course),
    Skip(SkipReason),
    /// 空白行，直接略過不提示
    Blank,
}

/// 解析一行 `課號,名稱[,先修]*`
pub fn parse_line(line: &str, case: IdentifierCase) -> ParseOutcome {
    parse_fields(line.split(FIELD_DELIMITER), case)
}

/// Parses a row that has already been split into fields.
///
/// Fields are trimmed here, so callers may pass them raw. A row consisting of
/// a single empty field (or no field at all) is a blank line.
pub fn parse_fields<'a, I>(fields: I, case: IdentifierCase) -> ParseOutcome
where
    I: IntoIterator<Item = &'a str>,
{
    let mut fields = fields.into_iter().map(str::trim);

    let number = fields.next().unwrap_or("");
    let title = fields.next();

    if number.is_empty() {
        return match title {
            None => ParseOutcome::Blank,
            Some(_) => ParseOutcome::Skip(SkipReason::MissingCourseNumber),
        };
    }

    let mut rest = fields.peekable();

    // 名稱欄缺少，或是行尾逗號後面什麼都沒有，都視為沒有名稱
    let title = match title {
        Some(title) if !title.is_empty() || rest.peek().is_some() => title,
        _ => {
            return ParseOutcome::Skip(SkipReason::MissingTitle {
                course: number.to_string(),
            })
        }
    };

    // 空的先修欄位丟掉，其餘照檔案順序保留（不去重）
    let prerequisites = rest
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect();

    ParseOutcome::Course(Course {
        number: case.apply(number),
        title: title.to_string(),
        prerequisites,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_course(outcome: ParseOutcome) -> Course {
        match outcome {
            ParseOutcome::Course(course) => course,
            other => panic!("expected a course, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_course_with_prerequisites() {
        let course = expect_course(parse_line(
            "CSCI400,Capstone,CSCI300,CSCI350",
            IdentifierCase::Upper,
        ));

        assert_eq!(course.number, "CSCI400");
        assert_eq!(course.title, "Capstone");
        assert_eq!(course.prerequisites, vec!["CSCI300", "CSCI350"]);
    }

    #[test]
    fn test_fields_are_trimmed_and_empty_prerequisites_dropped() {
        let course = expect_course(parse_line(
            "  CSCI300 ,  Intro to Algorithms , CSCI200, ,MATH201 ,",
            IdentifierCase::Upper,
        ));

        assert_eq!(course.number, "CSCI300");
        assert_eq!(course.title, "Intro to Algorithms");
        assert_eq!(course.prerequisites, vec!["CSCI200", "MATH201"]);
    }

    #[test]
    fn test_duplicate_prerequisites_are_kept() {
        let course = expect_course(parse_line("CSCI500,Thesis,CSCI400,CSCI400", IdentifierCase::Upper));
        assert_eq!(course.prerequisites, vec!["CSCI400", "CSCI400"]);
    }

    #[test]
    fn test_identifier_only_row_is_skipped() {
        assert_eq!(
            parse_line("CSCI999", IdentifierCase::Upper),
            ParseOutcome::Skip(SkipReason::MissingTitle {
                course: "CSCI999".to_string()
            })
        );
    }

    #[test]
    fn test_trailing_comma_without_title_is_skipped() {
        let expected = ParseOutcome::Skip(SkipReason::MissingTitle {
            course: "CSCI100".to_string(),
        });
        assert_eq!(parse_line("CSCI100,", IdentifierCase::Upper), expected);
        assert_eq!(parse_line("CSCI100,  ", IdentifierCase::Upper), expected);
    }

    #[test]
    fn test_empty_title_followed_by_fields_is_accepted() {
        let course = expect_course(parse_line("CSCI100, ,X", IdentifierCase::Upper));
        assert_eq!(course.title, "");
        assert_eq!(course.prerequisites, vec!["X"]);

        let course = expect_course(parse_line("CSCI100,,", IdentifierCase::Upper));
        assert_eq!(course.title, "");
        assert!(course.prerequisites.is_empty());
    }

    #[test]
    fn test_missing_course_number() {
        assert_eq!(
            parse_line("  ,Orphan Title", IdentifierCase::Upper),
            ParseOutcome::Skip(SkipReason::MissingCourseNumber)
        );
    }

    #[test]
    fn test_blank_lines_are_silent() {
        assert_eq!(parse_line("", IdentifierCase::Upper), ParseOutcome::Blank);
        assert_eq!(parse_line(" \t ", IdentifierCase::Upper), ParseOutcome::Blank);
        assert_eq!(parse_fields(Vec::<&str>::new(), IdentifierCase::Upper), ParseOutcome::Blank);
    }

    #[test]
    fn test_identifier_case_policy() {
        let upper = expect_course(parse_line("csci101,Intro,math101", IdentifierCase::Upper));
        assert_eq!(upper.number, "CSCI101");
        // 先修課號不做正規化
        assert_eq!(upper.prerequisites, vec!["math101"]);

        let preserved = expect_course(parse_line("csci101,Intro", IdentifierCase::Preserve));
        assert_eq!(preserved.number, "csci101");
    }
}
