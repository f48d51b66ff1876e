use crate::card::Card;

#[derive(Debug)]
pub struct Player {
    name: String,
    pub hand: Vec<Card>,
}

impl Player {
    pub(crate) fn new(name: String, hand: Vec<Card>) -> Self {
        Self { name, hand }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hand size is derived from the hand itself, never stored separately.
    pub fn hand_count(&self) -> usize {
        self.hand.len()
    }

    pub(crate) fn card_index(&self, card: &Card) -> Option<usize> {
        self.hand.iter().position(|held| held == card)
    }

    pub(crate) fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    pub(crate) fn remove_card(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }
}
