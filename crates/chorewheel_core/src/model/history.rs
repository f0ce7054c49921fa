//! Assignment history records.
//!
//! # Invariants
//! - An entry is written once and never mutated.
//! - Wire shape is a two-element `[member, chore]` array.

use crate::model::label::{Chore, Member};
use serde::{Deserialize, Serialize};

/// Records that `member` was handed `chore` in some past round.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(Member, Chore)", into = "(Member, Chore)")]
pub struct HistoryEntry {
    pub member: Member,
    pub chore: Chore,
}

impl HistoryEntry {
    pub fn new(member: Member, chore: Chore) -> Self {
        Self { member, chore }
    }
}

impl From<(Member, Chore)> for HistoryEntry {
    fn from((member, chore): (Member, Chore)) -> Self {
        Self::new(member, chore)
    }
}

impl From<HistoryEntry> for (Member, Chore) {
    fn from(value: HistoryEntry) -> Self {
        (value.member, value.chore)
    }
}
