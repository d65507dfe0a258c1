use std::sync::Arc;

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use crate::sequence::resolve_index;
use crate::shuffle::{Shuffled, ShuffledIndices};
use crate::{Card, CardSequence, Deck, DeckError};

/// Represents a shoe in the real world: one deck repeated `deck_count` times.
///
/// The shoe never copies the deck's cards. Index `i` of the shoe is card
/// `i mod deck_len` of the deck, so every copy of the deck lines up with the
/// deck itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shoe<S> {
    deck: Arc<Deck<S>>,
    deck_count: usize,
}

impl<S> Shoe<S> {
    pub fn new(deck: impl Into<Arc<Deck<S>>>, deck_count: usize) -> Self {
        Shoe {
            deck: deck.into(),
            deck_count,
        }
    }

    pub fn deck(&self) -> &Arc<Deck<S>> {
        &self.deck
    }

    /// The number of packs in this shoe.
    pub fn deck_count(&self) -> usize {
        self.deck_count
    }
}

impl<S: Clone> Shoe<S> {
    /// The number of cards in the shoe. Materializes the deck on first call.
    pub fn len(&self) -> Result<usize, DeckError> {
        let deck_len = self.deck.len()?;
        deck_len
            .checked_mul(self.deck_count)
            .filter(|&len| isize::try_from(len).is_ok())
            .ok_or(DeckError::TooLarge {
                deck_len,
                deck_count: self.deck_count,
            })
    }

    pub fn is_empty(&self) -> Result<bool, DeckError> {
        Ok(self.len()? == 0)
    }

    /// Returns the card at `index`. Valid indices are `-len..len`; anything
    /// beyond one deck wraps around into the next copy.
    pub fn get(&self, index: isize) -> Result<&Card<S>, DeckError> {
        let position = resolve_index(index, self.len()?)?;
        let cards = self.deck.cards()?;
        Ok(&cards[position % cards.len()])
    }

    /// Deals every card of the shoe once, in an order drawn from the operating
    /// system's random source.
    pub fn shuffled(&self) -> Result<Shuffled<'_, S, OsRng>, DeckError> {
        self.shuffled_with(OsRng)
    }

    /// Like [`Shoe::shuffled`], but drawing from `rng`.
    pub fn shuffled_with<R: Rng + CryptoRng>(
        &self,
        rng: R,
    ) -> Result<Shuffled<'_, S, R>, DeckError> {
        let len = self.len()?;
        let deck_cards = self.deck.cards()?;
        tracing::debug!(cards = len, deck_count = self.deck_count, "shuffling shoe");
        Ok(Shuffled::new(deck_cards, ShuffledIndices::new(len, rng)))
    }
}

impl<S: Clone> CardSequence for Shoe<S> {
    type Suit = S;

    fn len(&self) -> Result<usize, DeckError> {
        Shoe::len(self)
    }

    fn get(&self, index: isize) -> Result<&Card<S>, DeckError> {
        Shoe::get(self, index)
    }
}
