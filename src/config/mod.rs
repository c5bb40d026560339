pub mod toml_config;

use crate::domain::model::IdentifierCase;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::PathBuf;
use self::toml_config::TomlConfig;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "course-advisor")]
#[command(about = "Interactive course catalog lookup for academic advisors")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory that relative course file names are resolved against
    #[arg(long)]
    pub data_dir: Option<String>,

    /// File loaded when the file name prompt is left empty
    #[arg(long)]
    pub default_file: Option<String>,

    /// Keep course numbers as written instead of upper-casing them
    #[arg(long)]
    pub preserve_case: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// 合併 TOML 與命令列之後的最終設定
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: Option<PathBuf>,
    pub default_file: Option<String>,
    pub identifier_case: IdentifierCase,
    pub log_level: Option<String>,
    pub verbose: bool,
}

impl CliConfig {
    /// 讀取 (可選的) TOML 檔，命令列參數優先
    pub fn resolve(&self) -> Result<Settings> {
        let file_config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        file_config.validate()?;
        self.merge(&file_config)
    }

    pub fn merge(&self, file_config: &TomlConfig) -> Result<Settings> {
        let identifier_case = if self.preserve_case {
            IdentifierCase::Preserve
        } else {
            file_config.identifier_case()
        };

        let settings = Settings {
            data_dir: self
                .data_dir
                .as_deref()
                .or(file_config.data_dir())
                .map(PathBuf::from),
            default_file: self
                .default_file
                .clone()
                .or_else(|| file_config.default_file().map(str::to_string)),
            identifier_case,
            log_level: file_config.log_level().map(str::to_string),
            verbose: self.verbose,
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.data_dir {
            validation::validate_path("--data-dir", dir)?;
        }
        if let Some(file) = &self.default_file {
            validation::validate_non_empty_string("--default-file", file)?;
        }
        Ok(())
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if let Some(file) = &self.default_file {
            validation::validate_path("default_file", file)?;
        }
        Ok(())
    }
}
