//! File-backed theme preference
//!
//! The file holds a single string, `light` or `dark`. A missing file means
//! the default light theme; an unreadable value is ignored with a warning.

use crate::error::{DashboardError, DashboardResult};
use fra_core::Theme;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Stores the theme preference in a file
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// Store at a path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File location
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored theme, light when nothing usable is stored
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Preference`] if the file exists but cannot be read.
    pub async fn load(&self) -> DashboardResult<Theme> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no stored theme");
                return Ok(Theme::default());
            }
            Err(source) => {
                return Err(DashboardError::Preference {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        Ok(content.parse().unwrap_or_else(|_| {
            warn!(path = %self.path.display(), value = content.trim(), "ignoring stored theme");
            Theme::default()
        }))
    }

    /// Persist a theme
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Preference`] if the file cannot be written.
    pub async fn save(&self, theme: Theme) -> DashboardResult<()> {
        let io_err = |source| DashboardError::Preference {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(io_err)?;
        }
        fs::write(&self.path, theme.as_str()).await.map_err(io_err)?;
        debug!(%theme, "theme saved");
        Ok(())
    }
}
