//! Interactive console front end for Chorewheel.
//!
//! # Responsibility
//! - Drive the numbered menu over any line-based input and output.
//! - Translate 1-based console selections into roster operations.
//! - Render core reports as console text.
//!
//! # Invariants
//! - No recognized failure ends the session; only save-and-exit or closed
//!   input does.

pub mod console;
pub mod menu;
pub mod session;

pub use console::Console;
pub use menu::{parse_selection, MenuChoice, SelectionError};
pub use session::{Session, SessionEnd};
