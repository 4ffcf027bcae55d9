//! Builder for creating and configuring JsonStorage instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::JsonStorage;
use crate::error::{CircleError, IoResultExt, Result};

/// Builder for creating and configuring [`JsonStorage`] instances.
#[derive(Debug, Clone, Default)]
pub struct StorageBuilder {
    data_path: Option<PathBuf>,
}

impl StorageBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { data_path: None }
    }

    /// Sets a custom address book file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/circle/addressbook.json` or
    /// `~/.local/share/circle/addressbook.json`
    pub fn with_data_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured storage, creating the parent directory of the
    /// data file if needed.
    ///
    /// # Errors
    ///
    /// Returns `CircleError::XdgDirectory` if no default path can be resolved
    /// Returns `CircleError::FileSystem` if the parent directory cannot be
    /// created
    pub fn build(self) -> Result<JsonStorage> {
        let data_path = match self.data_path {
            Some(path) => path,
            None => Self::default_data_path()?,
        };

        if let Some(parent) = data_path.parent() {
            std::fs::create_dir_all(parent).path_context(parent)?;
        }

        debug!("Using address book file {}", data_path.display());
        Ok(JsonStorage::new(data_path))
    }

    /// Returns the default data path following XDG Base Directory
    /// specification.
    fn default_data_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("circle")
            .place_data_file("addressbook.json")
            .map_err(|e| CircleError::XdgDirectory(e.to_string()))
    }
}
