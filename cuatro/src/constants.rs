use strum::EnumCount;

use crate::card::Color;

// One card per non-zero number plus a single zero, per color.
pub(crate) const NUMBER_CARDS_PER_COLOR: &[u8] = &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
pub(crate) const SKIP_CARDS_PER_COLOR: u8 = 1;
pub(crate) const REVERSE_CARDS_PER_COLOR: u8 = 1;
pub(crate) const DRAW_TWO_CARDS_PER_COLOR: u8 = 1;

pub(crate) const NUMBER_CARDS_IN_DECK: u8 = (NUMBER_CARDS_PER_COLOR.len() * Color::COUNT) as u8;
pub(crate) const SKIP_CARDS_IN_DECK: u8 = SKIP_CARDS_PER_COLOR * Color::COUNT as u8;
pub(crate) const REVERSE_CARDS_IN_DECK: u8 = REVERSE_CARDS_PER_COLOR * Color::COUNT as u8;
pub(crate) const DRAW_TWO_CARDS_IN_DECK: u8 = DRAW_TWO_CARDS_PER_COLOR * Color::COUNT as u8;

pub(crate) const WILD_CARDS_IN_DECK: u8 = 4;
pub(crate) const WILD_DRAW_FOUR_CARDS_IN_DECK: u8 = 4;

pub(crate) const TOTAL_CARDS_IN_DECK: u8 = NUMBER_CARDS_IN_DECK
    + SKIP_CARDS_IN_DECK
    + REVERSE_CARDS_IN_DECK
    + DRAW_TWO_CARDS_IN_DECK
    + WILD_CARDS_IN_DECK
    + WILD_DRAW_FOUR_CARDS_IN_DECK;

pub(crate) const INITIAL_HAND_SIZE: usize = 7;

pub(crate) const MIN_PLAYERS: usize = 2;
// Dealing 7 cards each plus the seeded top card must fit in the deck.
pub(crate) const MAX_PLAYERS: usize = 8;
