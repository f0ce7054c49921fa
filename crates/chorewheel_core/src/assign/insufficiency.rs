//! Classification of inputs that cannot produce an assignment round.

use std::fmt::{Display, Formatter};

/// Why a round could not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insufficiency {
    /// Neither chores nor members were entered.
    NeedBoth,
    /// Chores exist but nobody to give them to; a suggestion is offered.
    NoMembers,
    /// Members exist but there is nothing to hand out.
    NoChores,
}

impl Insufficiency {
    /// Pure classification; `None` means a round can run.
    pub fn classify(chores_empty: bool, members_empty: bool) -> Option<Self> {
        match (chores_empty, members_empty) {
            (true, true) => Some(Self::NeedBoth),
            (false, true) => Some(Self::NoMembers),
            (true, false) => Some(Self::NoChores),
            (false, false) => None,
        }
    }
}

impl Display for Insufficiency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NeedBoth => f.write_str(
                "Either no chores or no family members were added. Please try again.",
            ),
            Self::NoMembers => f.write_str(
                "No family members were added. Here's a random chore you can do yourself:",
            ),
            Self::NoChores => {
                f.write_str("No chores were added, so there is nothing to assign.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Insufficiency;

    #[test]
    fn classify_covers_every_combination() {
        assert_eq!(
            Insufficiency::classify(true, true),
            Some(Insufficiency::NeedBoth)
        );
        assert_eq!(
            Insufficiency::classify(false, true),
            Some(Insufficiency::NoMembers)
        );
        assert_eq!(
            Insufficiency::classify(true, false),
            Some(Insufficiency::NoChores)
        );
        assert_eq!(Insufficiency::classify(false, false), None);
    }
}
