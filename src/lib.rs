pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::storage::LocalSource;
pub use crate::app::menu::{AdvisorMenu, MenuChoice, MenuState};
pub use crate::config::{CliConfig, Settings};
pub use crate::core::loader::CourseLoader;
pub use crate::domain::catalog::CourseTable;
pub use crate::domain::model::{Course, IdentifierCase, LoadReport};
pub use crate::utils::error::{CatalogError, Result};
