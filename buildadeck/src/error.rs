use thiserror::Error;

/// Errors raised while materializing or indexing a deck or a shoe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The ranked cards cannot be split evenly between the suits. Also raised
    /// when there are ranked cards but no suit to put them in.
    #[error(
        "ranked_cards must be evenly divisible by the number of suits \
         (ranked_cards = {ranked_cards}, suits = {suits})"
    )]
    Validation { ranked_cards: usize, suits: usize },

    #[error("index {index} out of range for a sequence of {len} cards")]
    IndexOutOfRange { index: isize, len: usize },

    /// The number of cards does not fit in an index.
    #[error("{deck_len} cards repeated {deck_count} times cannot be indexed")]
    TooLarge { deck_len: usize, deck_count: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_the_rule() {
        let err = DeckError::Validation {
            ranked_cards: 10,
            suits: 4,
        };
        assert!(err
            .to_string()
            .starts_with("ranked_cards must be evenly divisible by the number of suits"));
    }

    #[test]
    fn index_message_shows_index_and_length() {
        let err = DeckError::IndexOutOfRange {
            index: -209,
            len: 208,
        };
        assert_eq!(
            err.to_string(),
            "index -209 out of range for a sequence of 208 cards"
        );
    }
}
