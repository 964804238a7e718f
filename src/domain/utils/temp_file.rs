use crate::domain::utils::sanitise_filename;
use std::io;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

/// An image staged on local disk. The file is removed when this is dropped,
/// on every exit path of the code holding it.
#[derive(Debug)]
pub struct TempImage {
    file: NamedTempFile,
}

impl TempImage {
    pub async fn write(dir: &Path, key: &str, bytes: &[u8]) -> io::Result<Self> {
        let file = Builder::new()
            .suffix(&format!("-{}", sanitise_filename(key)))
            .tempfile_in(dir)?;
        tokio::fs::write(file.path(), bytes).await?;
        Ok(Self { file })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub async fn read(&self) -> io::Result<Vec<u8>> {
        tokio::fs::read(self.file.path()).await
    }
}
