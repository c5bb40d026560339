use crate::domain::catalog::CourseTable;
use crate::domain::model::Course;
use crate::utils::error::{CatalogError, Result};

/// 依課號排序列出全部課程
pub fn list_courses(table: &CourseTable) -> Result<Vec<&Course>> {
    if table.is_empty() {
        return Err(CatalogError::NotLoaded);
    }
    Ok(table.iter().collect())
}

/// Looks up one course. The query is trimmed and upper-cased before the
/// search, so `csci200` finds `CSCI200`.
pub fn find_course<'t>(table: &'t CourseTable, query: &str) -> Result<&'t Course> {
    if table.is_empty() {
        return Err(CatalogError::NotLoaded);
    }

    let key = normalize_query(query);
    tracing::debug!("Looking up course {}", key);
    table
        .get(&key)
        .ok_or(CatalogError::CourseNotFound { query: key })
}

pub fn normalize_query(query: &str) -> String {
    query.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::{parse_line, ParseOutcome};
    use crate::domain::model::IdentifierCase;

    fn table_from(lines: &[&str], case: IdentifierCase) -> CourseTable {
        lines
            .iter()
            .filter_map(|line| match parse_line(line, case) {
                ParseOutcome::Course(course) => Some(course),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_list_requires_loaded_data() {
        let table = CourseTable::new();
        assert!(matches!(list_courses(&table), Err(CatalogError::NotLoaded)));
        assert!(matches!(find_course(&table, "CSCI100"), Err(CatalogError::NotLoaded)));
    }

    #[test]
    fn test_list_is_sorted() {
        let table = table_from(
            &["CSCI300,Algorithms", "CSCI200,Data Structures", "CSCI101,Intro"],
            IdentifierCase::Upper,
        );

        let numbers: Vec<&str> = list_courses(&table)
            .unwrap()
            .iter()
            .map(|c| c.number.as_str())
            .collect();
        assert_eq!(numbers, vec!["CSCI101", "CSCI200", "CSCI300"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = table_from(&["CSCI200,Data Structures,CSCI101"], IdentifierCase::Upper);

        let lower = find_course(&table, "csci200").unwrap();
        let upper = find_course(&table, " CSCI200 ").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.title, "Data Structures");
    }

    #[test]
    fn test_normalize_query_is_ascii_only() {
        assert_eq!(normalize_query(" csci200 "), "CSCI200");
        assert_eq!(normalize_query("straße"), "STRAßE");
    }

    #[test]
    fn test_lookup_unknown_course() {
        let table = table_from(&["CSCI200,Data Structures"], IdentifierCase::Upper);
        match find_course(&table, "math101") {
            Err(CatalogError::CourseNotFound { query }) => assert_eq!(query, "MATH101"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_preserved_lowercase_key_is_not_reachable() {
        // Preserve 模式下小寫課號查不到（查詢一律轉大寫）
        let table = table_from(&["csci200,Data Structures"], IdentifierCase::Preserve);
        assert!(matches!(
            find_course(&table, "csci200"),
            Err(CatalogError::CourseNotFound { .. })
        ));
        assert_eq!(list_courses(&table).unwrap()[0].number, "csci200");
    }
}
