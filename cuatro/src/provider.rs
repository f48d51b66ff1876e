use tracing::warn;

use crate::card::{Card, Color};
use crate::error::{GameError, Result};
use crate::session::{Prompt, Session};
use crate::turn::MoveResult;

/// The seam to whatever supplies decisions: a console, a bot, a test
/// script. Calls are synchronous and the engine never does I/O itself.
pub trait DecisionProvider {
    /// Pick a card from the active player's hand for the given prompt.
    fn request_move(&mut self, prompt: &Prompt) -> Card;

    /// Pick the color the just-played wild binds to.
    fn request_color(&mut self, prompt: &Prompt) -> Color;
}

/// Drives `session` to completion, requesting a decision from `provider`
/// each turn. Rejected moves are re-requested from the same player; a
/// player left without a playable card ends the run, since this ruleset
/// has no voluntary draw to fall back on.
pub fn play_to_completion<P: DecisionProvider>(
    session: &mut Session,
    provider: &mut P,
) -> Result<String> {
    loop {
        let prompt = session.prompt();
        if prompt.legal_moves.is_empty() {
            return Err(GameError::NoLegalMoves {
                player: prompt.active_player,
            });
        }

        let card = provider.request_move(&prompt);
        let chosen_color = match card {
            Card::Wild | Card::WildDrawFour => Some(provider.request_color(&prompt)),
            Card::Colored(..) => None,
        };

        match session.submit_move(card, chosen_color)? {
            MoveResult::Accepted(_) => {}
            MoveResult::Rejected(reason) => {
                warn!(player = %prompt.active_player, %reason, "move rejected, asking again");
            }
            MoveResult::GameOver { winner } => return Ok(winner),
        }
    }
}
