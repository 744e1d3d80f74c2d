/*!
# Model Files

A model file on disk, identified by its stem. Reads split the content into a
[`SourceLines`] buffer; writes overwrite the file in place with no backup.
*/

use std::fs;
use std::path::{Path, PathBuf};

use crate::patcher::SourceLines;
use crate::{MagentoifyError, Result};

/// One `app/models/*.rb` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelFile {
    path: PathBuf,
    name: String,
}

impl ModelFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without extension, which is also the table name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn read_lines(&self) -> Result<SourceLines> {
        let text = fs::read_to_string(&self.path).map_err(|e| MagentoifyError::io(&self.path, e))?;
        Ok(SourceLines::from_text(&text))
    }

    pub fn write_lines(&self, lines: &SourceLines) -> Result<()> {
        fs::write(&self.path, lines.to_text()).map_err(|e| MagentoifyError::io(&self.path, e))
    }
}
