//! High score persistence
//!
//! A single decimal integer in a plain text file, overwritten on every save.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::consts::HIGH_SCORE_FILE;
use crate::error::HighScoreError;

/// Handle on the high score file
#[derive(Debug, Clone)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl Default for HighScoreFile {
    fn default() -> Self {
        Self::new(HIGH_SCORE_FILE)
    }
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored high score.
    ///
    /// A missing file is a first run: `current` is written out to create it,
    /// then read back.
    pub fn load(&self, current: u32) -> Result<u32, HighScoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!("No high score file at {:?}, creating one", self.path);
                self.save(current)?;
                fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?
            }
            Err(source) => return Err(self.io_error(source)),
        };

        content
            .trim()
            .parse::<u32>()
            .map_err(|_| HighScoreError::CorruptState {
                path: self.path.clone(),
                content,
            })
    }

    /// Like [`load`](Self::load), but a corrupt or unreadable file counts as
    /// a high score of zero.
    pub fn load_or_zero(&self, current: u32) -> u32 {
        match self.load(current) {
            Ok(score) => {
                log::info!("Loaded high score {score}");
                score
            }
            Err(err) => {
                log::warn!("{err}; using a high score of 0");
                0
            }
        }
    }

    /// Overwrite the file with `score` in decimal (no trailing newline)
    pub fn save(&self, score: u32) -> Result<(), HighScoreError> {
        fs::write(&self.path, score.to_string()).map_err(|source| self.io_error(source))?;
        log::info!("High score {score} saved to {:?}", self.path);
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> HighScoreError {
        HighScoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_in(dir: &tempfile::TempDir) -> HighScoreFile {
        HighScoreFile::new(dir.path().join(HIGH_SCORE_FILE))
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let file = file_in(&dir);
        file.save(42).unwrap();
        assert_eq!(file.load(0).unwrap(), 42);
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "42");
    }

    #[test]
    fn test_missing_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let file = file_in(&dir);
        assert!(!file.path().exists());
        assert_eq!(file.load(0).unwrap(), 0);
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "0");
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let file = file_in(&dir);
        file.save(1234).unwrap();
        file.save(7).unwrap();
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "7");
    }

    #[test]
    fn test_trailing_newline_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let file = file_in(&dir);
        fs::write(file.path(), "17\n").unwrap();
        assert_eq!(file.load(0).unwrap(), 17);
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = file_in(&dir);
        fs::write(file.path(), "lots").unwrap();

        let err = file.load(0).unwrap_err();
        assert!(matches!(
            err,
            HighScoreError::CorruptState { ref content, .. } if content == "lots"
        ));
        assert_eq!(file.load_or_zero(0), 0);
    }

    #[test]
    fn test_negative_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let file = file_in(&dir);
        fs::write(file.path(), "-3").unwrap();
        assert!(matches!(
            file.load(0),
            Err(HighScoreError::CorruptState { .. })
        ));
    }

    #[test]
    fn test_unwritable_location() {
        let dir = tempfile::tempdir().unwrap();
        let file = HighScoreFile::new(dir.path().join("missing").join(HIGH_SCORE_FILE));
        assert!(matches!(file.load(0), Err(HighScoreError::Io { .. })));
        assert_eq!(file.load_or_zero(0), 0);
    }
}
