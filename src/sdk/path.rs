use super::{PluginError, PluginResult};
use directories::BaseDirs;
use std::{
    fmt,
    path::{Path, PathBuf},
};

/// A file location relative to the user's home directory, written as
/// `~/some/file`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPath(&'static str);

impl FixedPath {
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    pub fn resolve(&self, home: &Path) -> PathBuf {
        match self.0.strip_prefix("~/") {
            Some(relative) => home.join(relative),
            None if self.0 == "~" => home.to_path_buf(),
            None => PathBuf::from(self.0),
        }
    }
}

impl fmt::Display for FixedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub fn home_dir() -> PluginResult<PathBuf> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(PluginError::MissingHomeDir)
}
