//! Assignment outcomes and their user-facing wording.

use crate::assign::insufficiency::Insufficiency;
use crate::model::label::{Chore, Member};
use std::fmt::{Display, Formatter};

/// What happened to one member during a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberOutcome {
    /// `member` received `chore`. `repeat` marks a fallback pick that the
    /// member had been assigned before.
    Assigned {
        member: Member,
        chore: Chore,
        repeat: bool,
    },
    /// The round ran out of chores before reaching `member`.
    NoChoresLeft { member: Member },
}

impl MemberOutcome {
    pub fn member(&self) -> &Member {
        match self {
            Self::Assigned { member, .. } | Self::NoChoresLeft { member } => member,
        }
    }

    pub fn chore(&self) -> Option<&Chore> {
        match self {
            Self::Assigned { chore, .. } => Some(chore),
            Self::NoChoresLeft { .. } => None,
        }
    }

    pub fn is_repeat(&self) -> bool {
        matches!(self, Self::Assigned { repeat: true, .. })
    }
}

impl Display for MemberOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assigned {
                member,
                chore,
                repeat,
            } => {
                if *repeat {
                    writeln!(
                        f,
                        "No unique chore available for {member}, assigning randomly!"
                    )?;
                }
                write!(f, "{member}'s chore is: {chore}")
            }
            Self::NoChoresLeft { member } => write!(f, "No more chores left for {member}!"),
        }
    }
}

/// Result of one `assign` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignReport {
    /// Inputs could not produce a round; nothing changed.
    Insufficient(Insufficiency),
    /// No members: a read-only random pick the user could do themselves.
    Suggestion(Chore),
    /// One outcome per member, in member order.
    Round(Vec<MemberOutcome>),
}

impl AssignReport {
    /// Number of members that received a chore this call.
    pub fn assigned_count(&self) -> usize {
        match self {
            Self::Round(outcomes) => outcomes
                .iter()
                .filter(|outcome| outcome.chore().is_some())
                .count(),
            Self::Insufficient(_) | Self::Suggestion(_) => 0,
        }
    }

    pub fn outcomes(&self) -> &[MemberOutcome] {
        match self {
            Self::Round(outcomes) => outcomes,
            Self::Insufficient(_) | Self::Suggestion(_) => &[],
        }
    }
}

impl Display for AssignReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Insufficient(reason) => write!(f, "{reason}"),
            Self::Suggestion(chore) => {
                writeln!(f, "{}", Insufficiency::NoMembers)?;
                write!(f, "Random chore: {chore}")
            }
            Self::Round(outcomes) => {
                for (position, outcome) in outcomes.iter().enumerate() {
                    if position > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{outcome}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AssignReport, MemberOutcome};
    use crate::model::label::{Chore, Member};

    #[test]
    fn fallback_outcome_renders_warning_before_pairing() {
        let outcome = MemberOutcome::Assigned {
            member: Member::from("Al"),
            chore: Chore::from("dishes"),
            repeat: true,
        };
        assert_eq!(
            outcome.to_string(),
            "No unique chore available for Al, assigning randomly!\nAl's chore is: dishes"
        );
    }

    #[test]
    fn round_renders_one_line_per_member() {
        let report = AssignReport::Round(vec![
            MemberOutcome::Assigned {
                member: Member::from("Al"),
                chore: Chore::from("dishes"),
                repeat: false,
            },
            MemberOutcome::NoChoresLeft {
                member: Member::from("Bo"),
            },
        ]);
        assert_eq!(
            report.to_string(),
            "Al's chore is: dishes\nNo more chores left for Bo!"
        );
        assert_eq!(report.assigned_count(), 1);
    }
}
