//! History-aware chore assignment.
//!
//! # Responsibility
//! - Classify inputs that cannot produce a round.
//! - Run one assignment round over a shuffled chore list.
//! - Describe every outcome as data; rendering is left to callers.
//!
//! # Invariants
//! - A round never removes or rewrites history entries.
//! - Member order decides who picks first among the shuffled chores.
//! - Lookback is the whole history, not a recent window.

pub mod index;
pub mod insufficiency;
pub mod policy;
pub mod report;
