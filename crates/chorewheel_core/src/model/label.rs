//! Chore and member labels.
//!
//! # Responsibility
//! - Give free-text labels distinct types so chores and members cannot be
//!   swapped in signatures.
//!
//! # Invariants
//! - Serialized form is the bare string.
//! - No uniqueness is enforced; two equal labels are two entries.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One household task, identified only by its text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chore(String);

/// One family member, identified only by their name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Member(String);

macro_rules! label_impls {
    ($ty:ident) => {
        impl $ty {
            pub fn new(label: impl Into<String>) -> Self {
                Self(label.into())
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $ty {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $ty {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

label_impls!(Chore);
label_impls!(Member);
