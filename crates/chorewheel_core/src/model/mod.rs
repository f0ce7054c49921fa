//! Household roster domain model.
//!
//! # Responsibility
//! - Define the labels, history pairs and the session store shared by
//!   assignment and persistence.
//!
//! # Invariants
//! - Labels are opaque; duplicates are independent entries.
//! - History is append-only within a session.

pub mod history;
pub mod label;
pub mod store;
