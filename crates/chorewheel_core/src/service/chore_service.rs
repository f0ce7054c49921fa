//! Chore session use-case service.
//!
//! # Responsibility
//! - Load the session store, degrading to an empty store on any failure.
//! - Run assignment rounds against the store.
//! - Persist the store through the configured repository.
//!
//! # Invariants
//! - Loading never fails outright; the status says what happened.
//! - Assignment only appends to history.

use crate::assign::policy::assign_store;
use crate::assign::report::AssignReport;
use crate::model::store::Store;
use crate::repo::store_repo::{RepoError, RepoResult, StoreRepository};
use log::{info, warn};
use rand::Rng;
use std::path::PathBuf;

/// How the startup load went.
#[derive(Debug)]
pub enum LoadStatus {
    /// A saved document was read from this path.
    Loaded(PathBuf),
    /// Nothing saved yet.
    Missing,
    /// The document exists but could not be read or decoded.
    Failed(RepoError),
}

/// Session service facade over a store repository.
pub struct ChoreService<R: StoreRepository> {
    repo: R,
}

impl<R: StoreRepository> ChoreService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Loads the saved store, or an empty one when nothing usable exists.
    pub fn load_store(&self) -> (Store, LoadStatus) {
        match self.repo.load() {
            Ok(Some(store)) => (store, LoadStatus::Loaded(self.repo.location().to_path_buf())),
            Ok(None) => (Store::new(), LoadStatus::Missing),
            Err(err) => {
                warn!(
                    "event=session_load module=service status=degraded fallback=empty error={}",
                    err
                );
                (Store::new(), LoadStatus::Failed(err))
            }
        }
    }

    /// Persists the store, returning the written path.
    pub fn save_store(&self, store: &Store) -> RepoResult<PathBuf> {
        self.repo.save(store)
    }

    /// Runs one assignment round against `store`.
    pub fn assign_chores<G: Rng + ?Sized>(&self, store: &mut Store, rng: &mut G) -> AssignReport {
        let history_before = store.history.len();
        let report = assign_store(store, rng);
        let repeats = report
            .outcomes()
            .iter()
            .filter(|outcome| outcome.is_repeat())
            .count();
        info!(
            "event=assign_round module=service status=ok assigned={} repeats={} chores_left={} history_added={}",
            report.assigned_count(),
            repeats,
            store.chores.len(),
            store.history.len() - history_before
        );
        report
    }
}
