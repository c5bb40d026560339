use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Could not open source '{name}': {source}")]
    SourceUnavailable {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Course data not loaded yet")]
    NotLoaded,

    #[error("Course not found: {query}")]
    CourseNotFound { query: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CatalogError {
    /// 給使用者看的訊息 (console)
    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::SourceUnavailable { name, .. } => {
                format!("Couldn't open \"{}\", check the path and try again.", name)
            }
            CatalogError::CsvError(_) | CatalogError::IoError(_) => {
                format!("Reading the course data failed: {}", self)
            }
            CatalogError::NotLoaded => "Please load data first (menu option 1).".to_string(),
            CatalogError::CourseNotFound { .. } => {
                "Course not found, double-check the code and try again.".to_string()
            }
            CatalogError::ConfigError { message } => format!("Configuration problem: {}", message),
            CatalogError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
        }
    }

    /// 建議的修復方式，主要寫進日誌
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::SourceUnavailable { .. } => {
                "Verify the file name and the configured data directory"
            }
            CatalogError::CsvError(_) | CatalogError::IoError(_) => {
                "Make sure the file is a readable text file and try loading it again"
            }
            CatalogError::NotLoaded => "Choose option 1 and load a course file",
            CatalogError::CourseNotFound { .. } => {
                "Use option 2 to list the available course numbers"
            }
            CatalogError::ConfigError { .. } | CatalogError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line flags and restart"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
