//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutation, assignment and persistence into use-case
//!   level APIs.
//! - Keep the CLI decoupled from storage details.

pub mod chore_service;
pub mod roster_service;
