use core::fmt;
use std::fmt::Display;

use crate::card::Color;

/// Direction the turn order moves around the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub(crate) fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// A draw penalty queued against the next player. At most one is tracked at
/// a time; penalties do not stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingDraw {
    Two,
    Four,
}

impl PendingDraw {
    pub fn count(self) -> usize {
        match self {
            PendingDraw::Two => 2,
            PendingDraw::Four => 4,
        }
    }
}

/// What an accepted move did, so a shell can narrate the turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppliedEffect {
    /// A plain number card; the turn passed on.
    Neutral,
    /// The named player's turn was consumed without an action.
    Skip { skipped: String },
    /// Turn order flipped; play continues in the new direction.
    Reverse { direction: Direction },
    /// The named player force-drew two cards and forfeited the turn.
    DrawTwo { victim: String },
    /// A wild bound to the chosen color.
    Wild { color: Color },
    /// A wild bound to the chosen color and the named player force-drew
    /// four cards, forfeiting the turn.
    WildDrawFour { color: Color, victim: String },
}

/// Why a submitted move was turned down. Rejection is expected player
/// input, not a failure: nothing changes and the same player tries again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// The card is not in the active player's hand.
    NotInHand,
    /// The card matches neither the color nor the face of the top card.
    Mismatch,
    /// A wild was played without choosing a color.
    MissingColorChoice,
    /// A color choice was supplied for a card that is not a wild.
    UnexpectedColorChoice,
}

impl Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::NotInHand => write!(f, "that card is not in your hand"),
            RejectReason::Mismatch => write!(f, "that card matches neither color nor face"),
            RejectReason::MissingColorChoice => write!(f, "a wild needs a color choice"),
            RejectReason::UnexpectedColorChoice => {
                write!(f, "only wilds take a color choice")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// The move was legal and has been applied.
    Accepted(AppliedEffect),
    /// The move was turned down; state is untouched.
    Rejected(RejectReason),
    /// The game is over; no further moves are processed.
    GameOver { winner: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flipping_direction_twice_is_identity() {
        assert_eq!(Direction::Forward.flipped(), Direction::Backward);
        assert_eq!(Direction::Forward.flipped().flipped(), Direction::Forward);
    }

    #[test]
    fn pending_draw_counts() {
        assert_eq!(PendingDraw::Two.count(), 2);
        assert_eq!(PendingDraw::Four.count(), 4);
    }
}
