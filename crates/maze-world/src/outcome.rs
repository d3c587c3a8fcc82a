//! Round outcome.

use std::fmt;

/// Why a round was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefeatCause {
    /// An enemy stepped onto the player.
    Caught,
    /// The countdown ran out.
    TimeExpired,
}

/// The terminal classification of a round.
///
/// Starts as `Pending` and is finalized exactly once by the dispatcher:
///
/// ```text
/// Pending ──→ Won | Lost(cause) | Aborted
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Pending,
    Won,
    Lost(DefeatCause),
    Aborted,
}

impl Outcome {
    /// Returns `true` once the round has been decided.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Message shown to the player after the round, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Won => Some("Congratulations, you won!"),
            Self::Lost(DefeatCause::Caught) => Some("Please do better... an enemy caught you."),
            Self::Lost(DefeatCause::TimeExpired) => Some("Please do better... time ran out."),
            Self::Pending | Self::Aborted => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Won => write!(f, "Won"),
            Self::Lost(DefeatCause::Caught) => write!(f, "Lost (caught)"),
            Self::Lost(DefeatCause::TimeExpired) => write!(f, "Lost (time expired)"),
            Self::Aborted => write!(f, "Aborted"),
        }
    }
}
