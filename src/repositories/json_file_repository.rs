//! JSON snapshot file implementation of AddressBookRepository.

use super::traits::AddressBookRepository;
use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Record};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotOut<'a> {
    version: u32,
    records: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct SnapshotHeader {
    version: u32,
}

#[derive(Deserialize)]
struct SnapshotIn {
    #[serde(default)]
    records: Vec<Record>,
}

/// Stores the address book as a versioned JSON document on disk.
///
/// Saves go through a sibling temporary file that is renamed over the
/// target, so readers see either the old or the new snapshot.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("addressbook"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn decode(contents: &str) -> StorageResult<AddressBook> {
        let header: SnapshotHeader = serde_json::from_str(contents)?;
        if header.version != SNAPSHOT_VERSION {
            return Err(StorageError::UnsupportedVersion(header.version));
        }

        let snapshot: SnapshotIn = serde_json::from_str(contents)?;
        Ok(snapshot.records.into_iter().collect())
    }
}

impl AddressBookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No snapshot found, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let book = Self::decode(&contents)?;
        info!(path = %self.path.display(), records = book.len(), "Loaded address book");
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let snapshot = SnapshotOut {
            version: SNAPSHOT_VERSION,
            records: book.records().collect(),
        };
        let json = serde_json::to_vec_pretty(&snapshot)?;

        let temp_path = self.temp_path();
        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(&json)?;
            file.sync_all()?;
        }
        debug!(temp = %temp_path.display(), "Wrote temporary snapshot");
        fs::rename(&temp_path, &self.path)?;

        info!(path = %self.path.display(), records = book.len(), "Saved address book");
        Ok(())
    }
}
