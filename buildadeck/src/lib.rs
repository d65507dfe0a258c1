//! Decks of cards, shoes made of repeated decks, and unbiased shuffles of
//! those shoes.
//!
//! ```
//! use buildadeck::{Deck, Shoe};
//!
//! let deck = Deck::new(vec!["Clubs", "Diamonds", "Hearts", "Spades"], 52, 4);
//! let shoe = Shoe::new(deck, 6);
//! assert_eq!(shoe.len(), Ok(336));
//! assert_eq!(shoe.shuffled().unwrap().count(), 336);
//! ```

mod card;
mod deck;
mod error;
mod sequence;
mod shoe;
mod shuffle;
mod suit;

pub use card::Card;
pub use deck::Deck;
pub use error::DeckError;
pub use sequence::{resolve_index, CardSequence, SequenceIter};
pub use shoe::Shoe;
pub use shuffle::{Shuffled, ShuffledIndices};
pub use suit::StandardSuit;
