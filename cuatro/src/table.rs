use crate::card::{Card, TopCard};
use crate::deck::Deck;
use crate::error::{GameError, Result};

/// The two stacks in the middle of the table: the face-down draw pile and
/// the face-up played pile whose top card is the matching target.
#[derive(Debug)]
pub struct Table {
    draw_pile: Vec<Card>,
    played_pile: Vec<TopCard>,
}

impl Table {
    pub(crate) fn new(deck: Deck) -> Self {
        Self {
            draw_pile: deck.into_cards(),
            played_pile: Vec::new(),
        }
    }

    /// Pops `count` cards off the draw pile, topmost first.
    pub(crate) fn draw(&mut self, count: usize) -> Result<Vec<Card>> {
        if self.draw_pile.len() < count {
            return Err(GameError::DeckExhausted {
                requested: count,
                remaining: self.draw_pile.len(),
            });
        }

        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            drawn.push(
                self.draw_pile
                    .pop()
                    .expect("length was checked before popping"),
            );
        }
        Ok(drawn)
    }

    /// Pushes a card onto the played pile. Whether the card was legal to
    /// play is the session's concern, not the table's.
    pub(crate) fn play(&mut self, card: TopCard) {
        self.played_pile.push(card);
    }

    pub fn top_card(&self) -> &TopCard {
        self.played_pile
            .last()
            .expect("the played pile is seeded at setup and never emptied")
    }

    pub fn draw_pile_size(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn played_pile_size(&self) -> usize {
        self.played_pile.len()
    }
}
