use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};
use tracing::{debug, info};

use crate::card::{Card, Color, Face, TopCard};
use crate::config::GameConfig;
use crate::constants::{MAX_PLAYERS, MIN_PLAYERS};
use crate::deck::Deck;
use crate::error::{GameError, Result};
use crate::player::Player;
use crate::table::Table;
use crate::turn::{AppliedEffect, Direction, MoveResult, PendingDraw, RejectReason};

/// Read-only snapshot of one decision point, for rendering.
#[derive(Clone, Debug)]
pub struct Prompt {
    pub active_player: String,
    pub top_card: TopCard,
    pub hand: Vec<Card>,
    pub legal_moves: Vec<Card>,
    pub pending_effect: Option<PendingDraw>,
}

/// One game from deal to win. Owns the table, the players and the turn
/// state; all rule enforcement happens here.
#[derive(Debug)]
pub struct Session {
    table: Table,
    players: Vec<Player>,
    active: usize,
    direction: Direction,
    pending_draw: Option<PendingDraw>,
    winner: Option<usize>,
}

impl Session {
    pub fn new(player_names: Vec<String>) -> Result<Self> {
        Self::with_config(player_names, GameConfig::default())
    }

    pub fn with_config(player_names: Vec<String>, config: GameConfig) -> Result<Self> {
        if player_names.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers);
        }
        if player_names.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers);
        }
        if player_names.iter().any(|name| name.is_empty()) {
            return Err(GameError::EmptyPlayerName);
        }

        let mut deck = Deck::new();
        match config.shuffle_seed {
            Some(seed) => deck.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => deck.shuffle(&mut thread_rng()),
        }

        let mut table = Table::new(deck);
        let mut players = Vec::with_capacity(player_names.len());
        for name in player_names {
            let hand = table.draw(config.initial_hand_size)?;
            debug!(player = %name, cards = hand.len(), "dealt opening hand");
            players.push(Player::new(name, hand));
        }

        // The first played card is whatever tops the shuffled deck. It is
        // not validated, and a wild here stays unbound until covered.
        let seed_card = table
            .draw(1)?
            .pop()
            .expect("draw(1) returns exactly one card");
        table.play(seed_card.into_top_card(None));
        info!(top = %table.top_card(), players = players.len(), "session ready");

        Ok(Self {
            table,
            players,
            active: 0,
            direction: Direction::Forward,
            pending_draw: None,
            winner: None,
        })
    }

    /// Validates and applies the active player's chosen card. Illegal
    /// choices come back as [`MoveResult::Rejected`] with nothing changed;
    /// only an empty draw pile during a forced draw is a real error.
    pub fn submit_move(&mut self, card: Card, chosen_color: Option<Color>) -> Result<MoveResult> {
        if let Some(winner) = self.winner {
            return Ok(MoveResult::GameOver {
                winner: self.players[winner].name().to_owned(),
            });
        }

        let played_by = self.active;
        let player = &self.players[played_by];

        let Some(hand_index) = player.card_index(&card) else {
            return Ok(MoveResult::Rejected(RejectReason::NotInHand));
        };
        match card {
            Card::Wild | Card::WildDrawFour if chosen_color.is_none() => {
                return Ok(MoveResult::Rejected(RejectReason::MissingColorChoice));
            }
            Card::Colored(..) if chosen_color.is_some() => {
                return Ok(MoveResult::Rejected(RejectReason::UnexpectedColorChoice));
            }
            _ => {}
        }
        if !card.matches(self.table.top_card()) {
            return Ok(MoveResult::Rejected(RejectReason::Mismatch));
        }

        self.players[played_by].remove_card(hand_index);
        self.table.play(card.into_top_card(chosen_color));
        info!(player = %self.players[played_by].name(), card = %card, "played");

        let effect = self.apply_effect(card, chosen_color);

        // Win is checked before any queued penalty resolves: a winning draw
        // card ends the game with the penalty undelivered.
        if self.players[played_by].hand_count() == 0 {
            let winner = self.players[played_by].name().to_owned();
            self.winner = Some(played_by);
            info!(winner = %winner, "game over");
            return Ok(MoveResult::GameOver { winner });
        }

        // A queued penalty consumes the whole of the victim's turn; no
        // decision is requested from them.
        self.resolve_pending_draw()?;

        Ok(MoveResult::Accepted(effect))
    }

    /// Rank-specific effect plus the turn advance, leaving `active` on the
    /// player who decides next (or on a penalty victim still to be served).
    fn apply_effect(&mut self, card: Card, chosen_color: Option<Color>) -> AppliedEffect {
        match card {
            Card::Colored(_, Face::Number(_)) => {
                self.advance(1);
                AppliedEffect::Neutral
            }
            Card::Colored(_, Face::Skip) => {
                let skipped = self.players[self.nth_from_active(1)].name().to_owned();
                self.advance(2);
                debug!(skipped = %skipped, "turn skipped");
                AppliedEffect::Skip { skipped }
            }
            Card::Colored(_, Face::Reverse) => {
                self.direction = self.direction.flipped();
                // With two players a reverse consumes the other player's
                // turn, same as a skip; otherwise play passes to the
                // previous player in the old order.
                let steps = if self.players.len() == 2 { 2 } else { 1 };
                self.advance(steps);
                debug!(direction = ?self.direction, "direction reversed");
                AppliedEffect::Reverse {
                    direction: self.direction,
                }
            }
            Card::Colored(_, Face::DrawTwo) => {
                self.pending_draw = Some(PendingDraw::Two);
                self.advance(1);
                AppliedEffect::DrawTwo {
                    victim: self.players[self.active].name().to_owned(),
                }
            }
            Card::Wild => {
                let color = chosen_color.expect("a color choice was verified before applying");
                self.advance(1);
                AppliedEffect::Wild { color }
            }
            Card::WildDrawFour => {
                let color = chosen_color.expect("a color choice was verified before applying");
                self.pending_draw = Some(PendingDraw::Four);
                self.advance(1);
                AppliedEffect::WildDrawFour {
                    color,
                    victim: self.players[self.active].name().to_owned(),
                }
            }
        }
    }

    fn resolve_pending_draw(&mut self) -> Result<()> {
        let Some(pending) = self.pending_draw else {
            return Ok(());
        };

        let cards = self.table.draw(pending.count())?;
        self.pending_draw = None;
        let victim = &mut self.players[self.active];
        victim.add_cards(cards);
        info!(player = %victim.name(), count = pending.count(), "forced draw consumed the turn");
        self.advance(1);
        Ok(())
    }

    pub fn prompt(&self) -> Prompt {
        let player = &self.players[self.active];
        let top_card = *self.table.top_card();
        Prompt {
            active_player: player.name().to_owned(),
            top_card,
            hand: player.hand.clone(),
            legal_moves: player
                .hand
                .iter()
                .copied()
                .filter(|card| card.matches(&top_card))
                .collect(),
            pending_effect: self.pending_draw,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    pub fn top_card(&self) -> &TopCard {
        self.table.top_card()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|index| &self.players[index])
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    fn nth_from_active(&self, n: usize) -> usize {
        let count = self.players.len();
        let step = match self.direction {
            Direction::Forward => 1,
            Direction::Backward => count - 1,
        };
        (self.active + step * n) % count
    }

    fn advance(&mut self, steps: usize) {
        self.active = self.nth_from_active(steps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_player_names(count: usize) -> Vec<String> {
        let mut player_names = Vec::new();
        for i in 0..count {
            player_names.push(format!("Player {}", i + 1));
        }
        player_names
    }

    fn create_session(count: usize) -> Session {
        Session::new(create_player_names(count)).unwrap()
    }

    #[test]
    fn return_ok_if_enough_players() {
        assert!(Session::new(create_player_names(2)).is_ok());
    }

    #[test]
    fn return_err_if_not_enough_players() {
        let error = Session::new(create_player_names(1)).unwrap_err();
        assert!(matches!(error, GameError::NotEnoughPlayers));
    }

    #[test]
    fn return_err_if_too_many_players() {
        let error = Session::new(create_player_names(9)).unwrap_err();
        assert!(matches!(error, GameError::TooManyPlayers));
    }

    #[test]
    fn return_err_if_a_name_is_empty() {
        let error = Session::new(vec!["Alice".to_owned(), String::new()]).unwrap_err();
        assert!(matches!(error, GameError::EmptyPlayerName));
    }

    #[test]
    fn all_players_start_with_7_cards() {
        let session = create_session(4);
        for player in session.players() {
            assert_eq!(player.hand_count(), 7);
        }
    }

    #[test]
    fn every_card_is_dealt_seeded_or_left_in_the_pile() {
        let session = create_session(4);
        let in_hands: usize = session.players().iter().map(Player::hand_count).sum();

        assert_eq!(session.table().played_pile_size(), 1);
        assert_eq!(
            session.table().draw_pile_size() + session.table().played_pile_size() + in_hands,
            60
        );
    }

    #[test]
    fn advancing_wraps_forward() {
        let mut session = create_session(4);

        session.advance(1);
        assert_eq!(session.active_index(), 1);

        session.active = 3;
        session.advance(1);
        assert_eq!(session.active_index(), 0);
    }

    #[test]
    fn advancing_wraps_backward() {
        let mut session = create_session(4);
        session.direction = Direction::Backward;

        session.advance(1);
        assert_eq!(session.active_index(), 3);

        session.advance(2);
        assert_eq!(session.active_index(), 1);
    }

    #[test]
    fn seeded_sessions_deal_identically() {
        let first =
            Session::with_config(create_player_names(3), GameConfig::seeded(9)).unwrap();
        let second =
            Session::with_config(create_player_names(3), GameConfig::seeded(9)).unwrap();

        for (a, b) in first.players().iter().zip(second.players()) {
            assert_eq!(a.hand, b.hand);
        }
        assert_eq!(first.top_card(), second.top_card());
    }

    #[test]
    fn prompt_reflects_the_active_player() {
        let session = create_session(3);
        let prompt = session.prompt();

        assert_eq!(prompt.active_player, "Player 1");
        assert_eq!(prompt.hand, session.players()[0].hand);
        assert_eq!(prompt.pending_effect, None);
        for card in &prompt.legal_moves {
            assert!(prompt.hand.contains(card));
            assert!(card.matches(&prompt.top_card));
        }
    }
}
