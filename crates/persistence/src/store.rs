// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::PersistenceError;

/// File holding user records.
pub const USERS_FILE_NAME: &str = "users.txt";

/// File holding the club header and player records.
pub const PLAYERS_FILE_NAME: &str = "players.txt";

/// Line-oriented text files under one data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `data_dir`. Nothing is touched on disk
    /// until the first save.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Resolves a file name inside the data directory.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InvalidFileName` for empty names or names
    /// containing path separators.
    pub fn path_of(&self, name: &str) -> Result<PathBuf, PersistenceError> {
        let is_plain: bool = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\']);
        if !is_plain {
            return Err(PersistenceError::InvalidFileName(name.to_string()));
        }
        Ok(self.data_dir.join(name))
    }

    /// Returns true if the named file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid.
    pub fn exists(&self, name: &str) -> Result<bool, PersistenceError> {
        Ok(self.path_of(name)?.is_file())
    }

    /// Reads the named file as non-blank lines.
    ///
    /// A missing file yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load_lines(&self, name: &str) -> Result<Vec<String>, PersistenceError> {
        let path: PathBuf = self.path_of(name)?;
        let text: String = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "File not found; starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(PersistenceError::io(path, err)),
        };

        let lines: Vec<String> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();
        debug!(path = %path.display(), lines = lines.len(), "File loaded");
        Ok(lines)
    }

    /// Replaces the named file with `text`.
    ///
    /// The data directory is created if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub fn save_text(&self, name: &str, text: &str) -> Result<(), PersistenceError> {
        let path: PathBuf = self.path_of(name)?;
        fs::create_dir_all(&self.data_dir)
            .map_err(|err| PersistenceError::io(&self.data_dir, err))?;

        let mut staged: NamedTempFile = NamedTempFile::new_in(&self.data_dir)
            .map_err(|err| PersistenceError::io(&self.data_dir, err))?;
        staged
            .write_all(text.as_bytes())
            .and_then(|()| staged.as_file().sync_all())
            .map_err(|err| PersistenceError::io(staged.path(), err))?;
        staged
            .persist(&path)
            .map_err(|err| PersistenceError::io(&path, err.error))?;

        info!(path = %path.display(), bytes = text.len(), "File saved");
        Ok(())
    }

    /// Writes `lines`, each terminated by a newline.
    ///
    /// # Errors
    ///
    /// As for [`FileStore::save_text`].
    pub fn save_lines<I, S>(&self, name: &str, lines: I) -> Result<(), PersistenceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text: String = String::new();
        for line in lines {
            text.push_str(line.as_ref());
            text.push('\n');
        }
        self.save_text(name, &text)
    }

    /// Removes the named file.
    ///
    /// # Returns
    ///
    /// True if a file was removed, false if none existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn delete(&self, name: &str) -> Result<bool, PersistenceError> {
        let path: PathBuf = self.path_of(name)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(path = %path.display(), "File deleted");
                Ok(true)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(PersistenceError::io(path, err)),
        }
    }
}
