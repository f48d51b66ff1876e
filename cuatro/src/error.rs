use std::fmt::Debug;

use thiserror::Error;

/// Fatal session errors. Illegal move attempts are not errors; they come
/// back as [`MoveResult::Rejected`](crate::turn::MoveResult) values.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("not enough players")]
    NotEnoughPlayers,
    #[error("too many players")]
    TooManyPlayers,
    #[error("player names must be non-empty")]
    EmptyPlayerName,
    /// The draw pile ran dry. The played pile is never recycled, so this
    /// ends the session.
    #[error("draw pile exhausted: needed {requested}, only {remaining} left")]
    DeckExhausted { requested: usize, remaining: usize },
    /// The active player holds no playable card and this ruleset has no
    /// voluntary draw.
    #[error("{player} has no playable card")]
    NoLegalMoves { player: String },
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
