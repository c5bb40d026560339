pub mod loader;
pub mod parser;
pub mod queries;

pub use crate::domain::catalog::CourseTable;
pub use crate::domain::model::{Course, IdentifierCase, LoadReport, SkipReason, SkippedRow};
pub use crate::domain::ports::CourseSource;
pub use crate::utils::error::Result;
