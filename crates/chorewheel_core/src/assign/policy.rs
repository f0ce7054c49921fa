//! Assignment round policy.
//!
//! # Responsibility
//! - Hand one chore to each member, preferring chores the member has never
//!   been given.
//! - Fall back to a repeat only when every remaining chore is stale for that
//!   member.
//!
//! # Invariants
//! - Chores are shuffled once per round, not once per member.
//! - Every handed-out chore is removed from `chores` and appended to
//!   `history` as `(member, chore)`.
//! - The no-members suggestion leaves `chores` and `history` untouched.

use crate::assign::index::HistoryIndex;
use crate::assign::insufficiency::Insufficiency;
use crate::assign::report::{AssignReport, MemberOutcome};
use crate::model::history::HistoryEntry;
use crate::model::label::{Chore, Member};
use crate::model::store::Store;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

/// Runs one assignment call over explicit collections.
///
/// `chores` is consumed by assignment and `history` is appended to;
/// `members` is only read. The returned report describes every outcome.
pub fn assign<R: Rng + ?Sized>(
    chores: &mut Vec<Chore>,
    members: &[Member],
    history: &mut Vec<HistoryEntry>,
    rng: &mut R,
) -> AssignReport {
    match Insufficiency::classify(chores.is_empty(), members.is_empty()) {
        Some(Insufficiency::NoMembers) => {
            return match chores.choose(rng) {
                Some(chore) => AssignReport::Suggestion(chore.clone()),
                None => AssignReport::Insufficient(Insufficiency::NeedBoth),
            };
        }
        Some(reason) => return AssignReport::Insufficient(reason),
        None => {}
    }

    chores.shuffle(rng);
    let mut index = HistoryIndex::from_history(history);
    let mut outcomes = Vec::with_capacity(members.len());

    for member in members {
        if chores.is_empty() {
            outcomes.push(MemberOutcome::NoChoresLeft {
                member: member.clone(),
            });
            continue;
        }

        let (position, repeat) = match index.first_fresh(member, chores) {
            Some(position) => (position, false),
            None => (0, true),
        };
        let chore = chores.remove(position);
        let entry = HistoryEntry::new(member.clone(), chore.clone());
        index.record(&entry);
        history.push(entry);

        outcomes.push(MemberOutcome::Assigned {
            member: member.clone(),
            chore,
            repeat,
        });
    }

    AssignReport::Round(outcomes)
}

/// Runs one assignment call against a session store.
pub fn assign_store<R: Rng + ?Sized>(store: &mut Store, rng: &mut R) -> AssignReport {
    let Store {
        chores,
        members,
        history,
    } = store;
    assign(chores, members, history, rng)
}
