//! Persistence contracts and implementations.
//!
//! # Responsibility
//! - Define how a session store is loaded and saved.
//! - Keep file format details out of service and CLI code.
//!
//! # Invariants
//! - A missing document is not an error; it means "start empty".
//! - Every other failure carries the path and underlying cause.

pub mod store_repo;
