//! In-memory session store.
//!
//! # Responsibility
//! - Hold chores, members and history for one session.
//! - Define the persisted document shape.
//!
//! # Invariants
//! - Collection order is significant and preserved through persistence.
//! - `history` only grows during a session.
//!
//! # See also
//! - `repo::store_repo` for the file format.

use crate::model::history::HistoryEntry;
use crate::model::label::{Chore, Member};
use serde::{Deserialize, Serialize};

/// Owned state for one running session.
///
/// Field names are renamed to match the persisted document, and each field
/// falls back to an empty sequence when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub chores: Vec<Chore>,
    #[serde(default, rename = "family_members")]
    pub members: Vec<Member>,
    #[serde(default, rename = "chore_history")]
    pub history: Vec<HistoryEntry>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether nothing has been entered or recorded yet.
    pub fn is_empty(&self) -> bool {
        self.chores.is_empty() && self.members.is_empty() && self.history.is_empty()
    }
}
