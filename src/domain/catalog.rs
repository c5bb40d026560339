use crate::domain::model::Course;
use std::collections::BTreeMap;

/// In-memory course table keyed by course number.
///
/// Iteration follows the byte-wise order of the stored keys, so listing is
/// case-sensitive and needs no extra sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseTable {
    courses: BTreeMap<String, Course>,
}

impl CourseTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同課號後寫入者覆蓋前者，回傳被覆蓋的舊紀錄
    pub fn insert(&mut self, course: Course) -> Option<Course> {
        self.courses.insert(course.number.clone(), course)
    }

    pub fn get(&self, number: &str) -> Option<&Course> {
        self.courses.get(number)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }
}

impl FromIterator<Course> for CourseTable {
    fn from_iter<I: IntoIterator<Item = Course>>(iter: I) -> Self {
        let mut table = CourseTable::new();
        for course in iter {
            table.insert(course);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(number: &str, title: &str) -> Course {
        Course {
            number: number.to_string(),
            title: title.to_string(),
            prerequisites: vec![],
        }
    }

    #[test]
    fn test_last_insert_wins() {
        let mut table = CourseTable::new();
        assert!(table.insert(course("CSCI100", "Old Title")).is_none());
        let replaced = table.insert(course("CSCI100", "New Title"));

        assert_eq!(replaced.map(|c| c.title), Some("Old Title".to_string()));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("CSCI100").unwrap().title, "New Title");
    }

    #[test]
    fn test_numbers_are_sorted_case_sensitive() {
        let table: CourseTable = vec![
            course("CSCI300", "C"),
            course("csci050", "lower"),
            course("CSCI101", "A"),
        ]
        .into_iter()
        .collect();

        let numbers: Vec<&str> = table.iter().map(|c| c.number.as_str()).collect();
        assert_eq!(numbers, vec!["CSCI101", "CSCI300", "csci050"]);
    }
}
