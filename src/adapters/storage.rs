use crate::domain::ports::CourseSource;
use crate::utils::error::{CatalogError, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// 從本機檔案系統讀取課程檔
#[derive(Debug, Clone, Default)]
pub struct LocalSource {
    base_path: Option<PathBuf>,
}

impl LocalSource {
    pub fn new(base_path: Option<PathBuf>) -> Self {
        Self { base_path }
    }

    /// 相對路徑接在 base_path 之後，絕對路徑維持原樣
    pub fn resolve(&self, name: &str) -> PathBuf {
        match &self.base_path {
            Some(base) => base.join(name),
            None => Path::new(name).to_path_buf(),
        }
    }
}

impl CourseSource for LocalSource {
    type Reader = BufReader<File>;

    fn open(&self, name: &str) -> Result<Self::Reader> {
        let full_path = self.resolve(name);
        let file = File::open(&full_path).map_err(|source| CatalogError::SourceUnavailable {
            name: name.to_string(),
            source,
        })?;
        Ok(BufReader::new(file))
    }
}
