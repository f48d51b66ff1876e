use rand::seq::SliceRandom;
use rand::Rng;
use strum::IntoEnumIterator;

use crate::{
    card::{Card, Color, Face},
    constants::*,
};

#[derive(Debug)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    /// Enumerates the full deck in a fixed order. No randomness here; two
    /// fresh decks are identical until shuffled.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        for color in Color::iter() {
            // Number Cards
            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, Face::Number(*number)));
            }

            // Skip Cards
            for _ in 0..SKIP_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, Face::Skip));
            }

            // Reverse Cards
            for _ in 0..REVERSE_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, Face::Reverse));
            }

            // Draw Two Cards
            for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, Face::DrawTwo));
            }
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push(Card::Wild);
        }

        for _ in 0..WILD_DRAW_FOUR_CARDS_IN_DECK {
            cards.push(Card::WildDrawFour);
        }

        Self(cards)
    }

    /// Permutes the deck in place. The randomness source is supplied by the
    /// caller, so a seeded generator gives a reproducible order.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.0.shuffle(rng);
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn into_cards(self) -> Vec<Card> {
        self.0
    }
}
