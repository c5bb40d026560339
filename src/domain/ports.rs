use crate::utils::error::Result;
use std::io::Read;

/// 以名稱開啟課程資料來源
pub trait CourseSource {
    type Reader: Read;

    /// 開啟失敗時回傳 `CatalogError::SourceUnavailable`
    fn open(&self, name: &str) -> Result<Self::Reader>;
}

impl<S: CourseSource + ?Sized> CourseSource for &S {
    type Reader = S::Reader;

    fn open(&self, name: &str) -> Result<Self::Reader> {
        (**self).open(name)
    }
}
