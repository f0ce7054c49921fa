//! Menu choices and selection parsing.

use chorewheel_core::ListKind;
use std::fmt::{Display, Formatter};

pub const MENU_LINES: [&str; 9] = [
    "1. Add chores",
    "2. Add family members",
    "3. View chores and family members",
    "4. Edit chores",
    "5. Edit family members",
    "6. Delete chores",
    "7. Delete family members",
    "8. Randomly assign chores",
    "9. Save and exit",
];

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddChores,
    AddMembers,
    View,
    Edit(ListKind),
    Delete(ListKind),
    Assign,
    SaveAndExit,
}

impl MenuChoice {
    /// Parses the trimmed menu number; anything else is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddChores),
            "2" => Some(Self::AddMembers),
            "3" => Some(Self::View),
            "4" => Some(Self::Edit(ListKind::Chores)),
            "5" => Some(Self::Edit(ListKind::FamilyMembers)),
            "6" => Some(Self::Delete(ListKind::Chores)),
            "7" => Some(Self::Delete(ListKind::FamilyMembers)),
            "8" => Some(Self::Assign),
            "9" => Some(Self::SaveAndExit),
            _ => None,
        }
    }
}

/// Why a list selection was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    NotANumber,
    OutOfRange,
}

impl Display for SelectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber => f.write_str("Invalid input. Please enter a number."),
            Self::OutOfRange => f.write_str("Invalid selection."),
        }
    }
}

/// Converts a 1-based console selection into a zero-based index below `len`.
pub fn parse_selection(input: &str, len: usize) -> Result<usize, SelectionError> {
    let number: i64 = input
        .trim()
        .parse()
        .map_err(|_| SelectionError::NotANumber)?;
    usize::try_from(number)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .filter(|index| *index < len)
        .ok_or(SelectionError::OutOfRange)
}
