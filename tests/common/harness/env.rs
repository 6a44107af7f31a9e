//! Isolated test environment with temp directory.

// Allow dead code since this is a test utility shared across test binaries
#![allow(dead_code)]

use super::{JotCommand, TestNote};
use jot::domain::Note;
use jot::store::{FileStorage, NoteStore};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary data directory.
///
/// Creates a temp directory that is automatically cleaned up on drop. The
/// config directory also points inside it so a user's own config never leaks
/// into a test run.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the data directory
    data_dir: PathBuf,
    /// Path used as the config home
    config_home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().join("data");
        let config_home = temp_dir.path().join("config");
        std::fs::create_dir_all(&config_home).expect("Failed to create config home");
        Self {
            _temp_dir: temp_dir,
            data_dir,
            config_home,
        }
    }

    /// Returns the path to the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the path of the file holding the notes.
    pub fn notes_file(&self) -> PathBuf {
        self.data_dir.join("notes.json")
    }

    /// Adds notes through the store, oldest first, so the last one ends up at index 0.
    pub fn add_notes(&self, notes: &[TestNote]) {
        let mut store = self.store();
        for note in notes {
            store.add(note.to_note()).expect("Failed to add test note");
        }
    }

    /// Reads back the persisted notes.
    pub fn stored_notes(&self) -> Vec<Note> {
        self.store().load()
    }

    /// Writes the raw notes file, bypassing the store.
    pub fn write_raw(&self, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data directory");
        std::fs::write(self.notes_file(), contents).expect("Failed to write notes file");
    }

    /// Writes the jot config file.
    pub fn write_config(&self, contents: &str) {
        let dir = self.config_home.join("jot");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        std::fs::write(dir.join("config.toml"), contents).expect("Failed to write config");
    }

    /// Creates a JotCommand configured for this test environment.
    pub fn cmd(&self) -> JotCommand {
        JotCommand::new()
            .config_home(&self.config_home)
            .dir(&self.data_dir)
    }

    /// Creates a JotCommand with no `--dir`, relying on config instead.
    pub fn cmd_without_dir(&self) -> JotCommand {
        JotCommand::new().config_home(&self.config_home)
    }

    fn store(&self) -> NoteStore<FileStorage> {
        NoteStore::open(FileStorage::new(&self.data_dir))
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.data_dir().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_add_notes_newest_first() {
        let env = TestEnv::new();
        env.add_notes(&[TestNote::new("Older"), TestNote::new("Newer")]);

        let titles: Vec<_> = env
            .stored_notes()
            .iter()
            .map(|n| n.title().to_string())
            .collect();
        assert_eq!(titles, vec!["Newer", "Older"]);
        assert!(env.notes_file().exists());
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let args = env.cmd().get_args().to_vec();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.data_dir().to_string_lossy());
    }
}
