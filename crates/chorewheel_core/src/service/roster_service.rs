//! Roster CRUD over chores and family members.
//!
//! # Responsibility
//! - Add, edit and delete entries in the store's chore and member lists.
//!
//! # Invariants
//! - Input labels are trimmed; blank labels are never stored.
//! - History is never touched by roster edits.
//! - Indices are zero-based; callers translate from 1-based prompts.

use crate::model::label::{Chore, Member};
use crate::model::store::Store;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RosterResult<T> = Result<T, RosterError>;

/// Which roster list an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Chores,
    FamilyMembers,
}

impl ListKind {
    pub fn plural(self) -> &'static str {
        match self {
            Self::Chores => "chores",
            Self::FamilyMembers => "family members",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            Self::Chores => "chore",
            Self::FamilyMembers => "family member",
        }
    }
}

/// Roster operation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Target list has no entries.
    EmptyList(ListKind),
    /// Index does not address an entry.
    OutOfRange { index: usize, len: usize },
    /// Replacement label was blank.
    EmptyValue,
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyList(kind) => write!(f, "no {} recorded", kind.plural()),
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} is out of range for {len} entries")
            }
            Self::EmptyValue => f.write_str("label cannot be empty"),
        }
    }
}

impl Error for RosterError {}

/// Roster use-case service over a borrowed session store.
pub struct RosterService<'store> {
    store: &'store mut Store,
}

impl<'store> RosterService<'store> {
    pub fn new(store: &'store mut Store) -> Self {
        Self { store }
    }

    /// Appends a chore. Returns `false` when the trimmed label is blank.
    pub fn add_chore(&mut self, label: &str) -> bool {
        push_label(&mut self.store.chores, label)
    }

    /// Appends a family member. Returns `false` when the trimmed label is blank.
    pub fn add_member(&mut self, label: &str) -> bool {
        push_label(&mut self.store.members, label)
    }

    /// Current labels of one list, in stored order.
    pub fn labels(&self, kind: ListKind) -> Vec<String> {
        match kind {
            ListKind::Chores => self.store.chores.iter().map(Chore::to_string).collect(),
            ListKind::FamilyMembers => self.store.members.iter().map(Member::to_string).collect(),
        }
    }

    /// Replaces the entry at `index`, returning the previous label.
    pub fn edit(&mut self, kind: ListKind, index: usize, new_label: &str) -> RosterResult<String> {
        let previous = match kind {
            ListKind::Chores => replace_label(&mut self.store.chores, kind, index, new_label)?,
            ListKind::FamilyMembers => {
                replace_label(&mut self.store.members, kind, index, new_label)?
            }
        };
        debug!(
            "event=roster_edit module=service status=ok list={} index={}",
            kind.plural(),
            index
        );
        Ok(previous)
    }

    /// Removes the entry at `index`, returning its label.
    pub fn delete(&mut self, kind: ListKind, index: usize) -> RosterResult<String> {
        let removed = match kind {
            ListKind::Chores => remove_label(&mut self.store.chores, kind, index)?,
            ListKind::FamilyMembers => remove_label(&mut self.store.members, kind, index)?,
        };
        debug!(
            "event=roster_delete module=service status=ok list={} index={}",
            kind.plural(),
            index
        );
        Ok(removed)
    }
}

fn push_label<T: From<String>>(list: &mut Vec<T>, label: &str) -> bool {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return false;
    }
    list.push(T::from(trimmed.to_string()));
    true
}

fn check_index<T>(list: &[T], kind: ListKind, index: usize) -> RosterResult<()> {
    if list.is_empty() {
        return Err(RosterError::EmptyList(kind));
    }
    if index >= list.len() {
        return Err(RosterError::OutOfRange {
            index,
            len: list.len(),
        });
    }
    Ok(())
}

fn replace_label<T: From<String> + Display>(
    list: &mut [T],
    kind: ListKind,
    index: usize,
    new_label: &str,
) -> RosterResult<String> {
    check_index(list, kind, index)?;
    let trimmed = new_label.trim();
    if trimmed.is_empty() {
        return Err(RosterError::EmptyValue);
    }
    let previous = std::mem::replace(&mut list[index], T::from(trimmed.to_string()));
    Ok(previous.to_string())
}

fn remove_label<T: Display>(list: &mut Vec<T>, kind: ListKind, index: usize) -> RosterResult<String> {
    check_index(list, kind, index)?;
    Ok(list.remove(index).to_string())
}
