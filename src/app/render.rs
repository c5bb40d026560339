//! Console text for query results and load reports.

use crate::domain::model::{Course, LoadReport};

pub const NO_PREREQUISITES: &str = "None";
pub const PREREQUISITE_SEPARATOR: &str = ", ";

pub fn course_row(course: &Course) -> String {
    format!("{}  |  {}", course.number, course.title)
}

pub fn prerequisites(course: &Course) -> String {
    if course.prerequisites.is_empty() {
        NO_PREREQUISITES.to_string()
    } else {
        course.prerequisites.join(PREREQUISITE_SEPARATOR)
    }
}

pub fn course_list(courses: &[&Course]) -> String {
    let mut text = String::from("\nCourse List (A-Z)\n-----------------\n");
    for course in courses {
        text.push_str(&course_row(course));
        text.push('\n');
    }
    text.push('\n');
    text
}

pub fn course_detail(course: &Course) -> String {
    format!(
        "\n{}\nPrerequisites: {}\n\n",
        course_row(course),
        prerequisites(course)
    )
}

/// 每個略過的列一行，最後是載入筆數
pub fn load_summary(report: &LoadReport) -> String {
    let mut text = String::new();
    for row in &report.skipped {
        text.push_str(&format!("Line {}: {}\n", row.line, row.reason));
    }
    text.push_str(&format!(
        "Loaded {} courses from \"{}\".\n\n",
        report.loaded, report.source
    ));
    text
}
