//! Per-member lookup of previously assigned chores.

use crate::model::history::HistoryEntry;
use crate::model::label::{Chore, Member};
use std::collections::{HashMap, HashSet};

/// Member -> chores that member has ever been assigned.
///
/// Built once per round and kept current while the round appends entries, so
/// a member listed twice sees their own earlier pick.
#[derive(Debug, Default)]
pub struct HistoryIndex {
    assigned: HashMap<Member, HashSet<Chore>>,
}

impl HistoryIndex {
    pub fn from_history(history: &[HistoryEntry]) -> Self {
        let mut index = Self::default();
        for entry in history {
            index.record(entry);
        }
        index
    }

    pub fn record(&mut self, entry: &HistoryEntry) {
        self.assigned
            .entry(entry.member.clone())
            .or_default()
            .insert(entry.chore.clone());
    }

    /// Returns whether `(member, chore)` already appears in history.
    pub fn has_assigned(&self, member: &Member, chore: &Chore) -> bool {
        self.assigned
            .get(member)
            .is_some_and(|chores| chores.contains(chore))
    }

    /// Position of the first chore in `chores` not yet given to `member`.
    pub fn first_fresh(&self, member: &Member, chores: &[Chore]) -> Option<usize> {
        chores
            .iter()
            .position(|chore| !self.has_assigned(member, chore))
    }
}
