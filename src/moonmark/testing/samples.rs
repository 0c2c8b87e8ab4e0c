//! Loader for the reading samples in `samples/`

use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("Sample not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Access to named reading samples, e.g. `Samples::load("full-reading")` reads
/// `samples/full-reading.txt`.
pub struct Samples;

impl Samples {
    pub fn dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples")
    }

    pub fn path(name: &str) -> PathBuf {
        Self::dir().join(format!("{}.txt", name))
    }

    pub fn try_load(name: &str) -> Result<String, SampleError> {
        let path = Self::path(name);
        if !path.exists() {
            return Err(SampleError::NotFound(path));
        }
        fs::read_to_string(&path).map_err(SampleError::Io)
    }

    /// Load a sample, panicking with the missing path if it does not exist.
    pub fn load(name: &str) -> String {
        Self::try_load(name).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Names of all available samples, sorted.
    pub fn names() -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(Self::dir())
            .map(|entries| {
                entries
                    .filter_map(Result::ok)
                    .map(|entry| entry.path())
                    .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
                    .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }
}
