use crate::constants::INITIAL_HAND_SIZE;

/// Knobs for a session. `Default` is the standard game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Cards dealt to each player at the start.
    pub initial_hand_size: usize,
    /// Fixed shuffle seed; `None` shuffles from thread entropy.
    pub shuffle_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_hand_size: INITIAL_HAND_SIZE,
            shuffle_seed: None,
        }
    }
}

impl GameConfig {
    /// Standard game with a reproducible shuffle.
    pub fn seeded(seed: u64) -> Self {
        Self {
            shuffle_seed: Some(seed),
            ..Self::default()
        }
    }
}
