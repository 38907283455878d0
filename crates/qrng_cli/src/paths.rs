//! Cross-platform config location

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
}

impl AppPaths {
    /// `None` when the OS has no notion of a per-user config directory.
    pub fn new() -> Option<Self> {
        let base = dirs::config_dir()?;
        Some(Self::with_base(base))
    }

    pub fn with_base(base: PathBuf) -> Self {
        Self {
            config_dir: base.join("qrng"),
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }
}
