//! Core domain logic for Chorewheel.
//! This crate is the single source of truth for roster and assignment
//! invariants.

pub mod assign;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use assign::index::HistoryIndex;
pub use assign::insufficiency::Insufficiency;
pub use assign::policy::{assign, assign_store};
pub use assign::report::{AssignReport, MemberOutcome};
pub use config::AppConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::history::HistoryEntry;
pub use model::label::{Chore, Member};
pub use model::store::Store;
pub use repo::store_repo::{JsonFileStoreRepository, RepoError, RepoResult, StoreRepository};
pub use service::chore_service::{ChoreService, LoadStatus};
pub use service::roster_service::{ListKind, RosterError, RosterResult, RosterService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
