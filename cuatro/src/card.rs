use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

/// Face of a colored card. The wild faces live directly on [`Card`] so that
/// a wild can never carry a preset color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Card {
    Colored(Color, Face),
    Wild,
    WildDrawFour,
}

/// A card sitting face-up on the played pile. Wilds carry the color they
/// were bound to when played; only the seeded first card may be unbound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopCard {
    Colored(Color, Face),
    Wild(Option<Color>),
    WildDrawFour(Option<Color>),
}

impl Card {
    /// Whether playing `self` from a hand onto `top` is legal: same color or
    /// same face. A wild still in hand is always legal.
    pub fn matches(&self, top: &TopCard) -> bool {
        match self {
            Card::Wild | Card::WildDrawFour => true,
            Card::Colored(color, face) => {
                top.color() == Some(*color)
                    || matches!(top, TopCard::Colored(_, top_face) if top_face == face)
            }
        }
    }

    pub(crate) fn into_top_card(self, chosen_color: Option<Color>) -> TopCard {
        match self {
            Card::Colored(color, face) => TopCard::Colored(color, face),
            Card::Wild => TopCard::Wild(chosen_color),
            Card::WildDrawFour => TopCard::WildDrawFour(chosen_color),
        }
    }
}

impl TopCard {
    /// The color this card matches against. `None` for a wild that was
    /// seeded rather than played, which no colored card can match.
    pub fn color(&self) -> Option<Color> {
        match self {
            TopCard::Colored(color, _) => Some(*color),
            TopCard::Wild(color) | TopCard::WildDrawFour(color) => *color,
        }
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Number(number) => write!(f, "{}", number),
            Face::Skip => write!(f, "Skip"),
            Face::Reverse => write!(f, "Reverse"),
            Face::DrawTwo => write!(f, "Draw Two"),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Colored(color, face) => write!(f, "{} {}", color, face),
            Card::Wild => write!(f, "Wild"),
            Card::WildDrawFour => write!(f, "Wild Draw Four"),
        }
    }
}

impl Display for TopCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopCard::Colored(color, face) => write!(f, "{} {}", color, face),
            TopCard::Wild(Some(color)) => write!(f, "Wild ({})", color),
            TopCard::Wild(None) => write!(f, "Wild"),
            TopCard::WildDrawFour(Some(color)) => write!(f, "Wild Draw Four ({})", color),
            TopCard::WildDrawFour(None) => write!(f, "Wild Draw Four"),
        }
    }
}
