use serde::{Deserialize, Serialize};

/// Represents a card with a suit and a rank. A card with neither is a wildcard.
///
/// Suits are opaque: any `S` works, as long as it can be compared when cards
/// are compared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card<S> {
    pub suit: Option<S>,
    pub rank: Option<usize>,
}

impl<S> Card<S> {
    /// Creates a ranked card of the given suit. Ranks start at 1.
    pub const fn new(suit: S, rank: usize) -> Self {
        Card {
            suit: Some(suit),
            rank: Some(rank),
        }
    }

    /// Returns a card with no suit or rank.
    pub const fn wildcard() -> Self {
        Card {
            suit: None,
            rank: None,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.suit.is_none() && self.rank.is_none()
    }
}

impl<S: std::fmt::Display> std::fmt::Display for Card<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.suit, self.rank) {
            (Some(suit), Some(rank)) => write!(f, "{} of {}", rank, suit),
            (Some(suit), None) => write!(f, "{}", suit),
            (None, Some(rank)) => write!(f, "{}", rank),
            (None, None) => f.write_str("Wildcard"),
        }
    }
}
