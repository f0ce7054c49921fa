//! Store repository contract and JSON file implementation.
//!
//! # Responsibility
//! - Round-trip the session store through a single JSON document.
//! - Create the storage directory on demand.
//!
//! # Invariants
//! - Saving then loading yields an equal store, order included.
//! - Documents missing a field load that field as empty.
//! - Output is pretty-printed with four-space indentation.

use crate::model::store::Store;
use log::{error, info};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

const JSON_INDENT: &[u8] = b"    ";

pub type RepoResult<T> = Result<T, RepoError>;

/// Failure while reading or writing the persisted document.
#[derive(Debug)]
pub enum RepoError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Decode { path, source } => {
                write!(f, "invalid chore data in {}: {source}", path.display())
            }
            Self::Encode(err) => write!(f, "failed to encode chore data: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
        }
    }
}

/// Repository interface for whole-store persistence.
pub trait StoreRepository {
    /// Loads the persisted store; `Ok(None)` when nothing was saved yet.
    fn load(&self) -> RepoResult<Option<Store>>;
    /// Writes the store, returning the location written.
    fn save(&self, store: &Store) -> RepoResult<PathBuf>;
    /// Location backing this repository.
    fn location(&self) -> &Path;
}

/// JSON document stored in a single file.
pub struct JsonFileStoreRepository {
    path: PathBuf,
}

impl JsonFileStoreRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Repository for `file_name` inside `storage_dir`.
    pub fn in_dir(storage_dir: impl AsRef<Path>, file_name: &str) -> Self {
        Self::new(storage_dir.as_ref().join(file_name))
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> RepoError {
        RepoError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl StoreRepository for JsonFileStoreRepository {
    fn load(&self) -> RepoResult<Option<Store>> {
        let started_at = Instant::now();
        info!("event=store_load module=repo status=start");

        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=store_load module=repo status=ok found=false duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                return Ok(None);
            }
            Err(err) => {
                error!(
                    "event=store_load module=repo status=error error_code=read_failed error={}",
                    err
                );
                return Err(self.io_error(&self.path, err));
            }
        };

        let store: Store = serde_json::from_slice(&bytes).map_err(|source| {
            error!(
                "event=store_load module=repo status=error error_code=decode_failed error={}",
                source
            );
            RepoError::Decode {
                path: self.path.clone(),
                source,
            }
        })?;

        info!(
            "event=store_load module=repo status=ok found=true chores={} members={} history={} duration_ms={}",
            store.chores.len(),
            store.members.len(),
            store.history.len(),
            started_at.elapsed().as_millis()
        );
        Ok(Some(store))
    }

    fn save(&self, store: &Store) -> RepoResult<PathBuf> {
        let started_at = Instant::now();
        info!("event=store_save module=repo status=start");

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|err| {
                error!(
                    "event=store_save module=repo status=error error_code=mkdir_failed error={}",
                    err
                );
                self.io_error(parent, err)
            })?;
        }

        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        store
            .serialize(&mut serializer)
            .map_err(RepoError::Encode)?;

        std::fs::write(&self.path, &buffer).map_err(|err| {
            error!(
                "event=store_save module=repo status=error error_code=write_failed error={}",
                err
            );
            self.io_error(&self.path, err)
        })?;

        info!(
            "event=store_save module=repo status=ok bytes={} duration_ms={}",
            buffer.len(),
            started_at.elapsed().as_millis()
        );
        Ok(self.path.clone())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
