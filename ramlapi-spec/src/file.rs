use std::path::{Path, PathBuf};

use crate::{ApiDefinition, Error, Result};

/// A RAML file on disk with both raw content and parsed definition.
pub struct RamlFile {
    path: PathBuf,
    content: String,
    api: ApiDefinition,
}

impl RamlFile {
    /// Open and parse a RAML file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let api = ApiDefinition::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, content, api })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed API definition.
    pub fn api(&self) -> &ApiDefinition {
        &self.api
    }
}
