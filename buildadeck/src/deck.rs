use std::fmt;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::sequence::resolve_index;
use crate::{Card, CardSequence, DeckError, StandardSuit};

/// A deck whose ranked cards are spread evenly over its suits, plus some
/// wildcards.
///
/// Building a deck never fails. The cards are materialized on first access,
/// which is also when the configuration is validated, and then kept for the
/// lifetime of the deck.
#[derive(Clone, Serialize, Deserialize)]
pub struct Deck<S> {
    suits: Vec<S>,
    ranked_cards: usize,
    wildcards: usize,
    #[serde(skip, default = "OnceCell::new")]
    cards: OnceCell<Vec<Card<S>>>,
}

impl<S> Deck<S> {
    pub fn new(suits: Vec<S>, ranked_cards: usize, wildcards: usize) -> Self {
        Deck {
            suits,
            ranked_cards,
            wildcards,
            cards: OnceCell::new(),
        }
    }

    pub fn suits(&self) -> &[S] {
        &self.suits
    }

    /// Total number of non-wildcard cards across all suits.
    pub fn ranked_cards(&self) -> usize {
        self.ranked_cards
    }

    pub fn wildcards(&self) -> usize {
        self.wildcards
    }

    /// Number of ranks dealt to each suit. Fails when the ranked cards cannot
    /// be split evenly, including when there are ranked cards but no suits.
    pub fn ranks_per_suit(&self) -> Result<usize, DeckError> {
        let invalid = || DeckError::Validation {
            ranked_cards: self.ranked_cards,
            suits: self.suits.len(),
        };
        match self.suits.len() {
            0 if self.ranked_cards == 0 => Ok(0),
            0 => Err(invalid()),
            suits if self.ranked_cards % suits == 0 => Ok(self.ranked_cards / suits),
            _ => Err(invalid()),
        }
    }
}

impl Deck<StandardSuit> {
    /// A 52-card French deck with the given number of wildcards added.
    pub fn standard(wildcards: usize) -> Self {
        Deck::new(StandardSuit::iter().collect(), 52, wildcards)
    }
}

impl<S: Clone> Deck<S> {
    /// Returns the wildcards first, then every suit's cards ranked from 1 up.
    ///
    /// A failed validation is not remembered: every call re-checks until the
    /// deck is dropped.
    pub fn cards(&self) -> Result<&[Card<S>], DeckError> {
        self.cards
            .get_or_try_init(|| self.build())
            .map(Vec::as_slice)
            .map_err(|err| {
                tracing::debug!(%err, "deck validation failed");
                err
            })
    }

    pub fn len(&self) -> Result<usize, DeckError> {
        Ok(self.cards()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, DeckError> {
        Ok(self.cards()?.is_empty())
    }

    /// Returns the card at `index`, counting from the back for negative
    /// indices. Valid indices are `-len..len`.
    pub fn get(&self, index: isize) -> Result<&Card<S>, DeckError> {
        let cards = self.cards()?;
        let position = resolve_index(index, cards.len())?;
        Ok(&cards[position])
    }

    fn build(&self) -> Result<Vec<Card<S>>, DeckError> {
        let ranks_per_suit = self.ranks_per_suit()?;
        let mut cards = Vec::with_capacity(self.wildcards.saturating_add(self.ranked_cards));
        cards.extend((0..self.wildcards).map(|_| Card::wildcard()));
        for suit in &self.suits {
            for rank in 1..=ranks_per_suit {
                cards.push(Card::new(suit.clone(), rank));
            }
        }
        tracing::debug!(
            cards = cards.len(),
            suits = self.suits.len(),
            ranks_per_suit,
            wildcards = self.wildcards,
            "materialized deck"
        );
        Ok(cards)
    }
}

impl<S: Clone> CardSequence for Deck<S> {
    type Suit = S;

    fn len(&self) -> Result<usize, DeckError> {
        Deck::len(self)
    }

    fn get(&self, index: isize) -> Result<&Card<S>, DeckError> {
        Deck::get(self, index)
    }
}

/// Decks are equal when configured the same; whether either has materialized
/// its cards does not matter.
impl<S: PartialEq> PartialEq for Deck<S> {
    fn eq(&self, other: &Self) -> bool {
        self.suits == other.suits
            && self.ranked_cards == other.ranked_cards
            && self.wildcards == other.wildcards
    }
}

impl<S: Eq> Eq for Deck<S> {}

impl<S: fmt::Debug> fmt::Debug for Deck<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck")
            .field("suits", &self.suits)
            .field("ranked_cards", &self.ranked_cards)
            .field("wildcards", &self.wildcards)
            .finish()
    }
}
