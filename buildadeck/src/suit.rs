use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};
use strum_macros::EnumIter;

/// The four suits of a French-suited deck.
///
/// Any type can serve as a suit in a [`Deck`](crate::Deck); this one is only a
/// convenience for the common case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    Serialize_enum_str,
    Deserialize_enum_str,
)]
pub enum StandardSuit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn iterates_in_declaration_order() {
        let suits: Vec<StandardSuit> = StandardSuit::iter().collect();
        assert_eq!(
            suits,
            vec![
                StandardSuit::Clubs,
                StandardSuit::Diamonds,
                StandardSuit::Hearts,
                StandardSuit::Spades
            ]
        );
    }

    #[test]
    fn converts_to_and_from_names() {
        assert_eq!(StandardSuit::Hearts.to_string(), "Hearts");
        let parsed: StandardSuit = "Spades".parse().unwrap();
        assert_eq!(parsed, StandardSuit::Spades);
        assert!("Swords".parse::<StandardSuit>().is_err());
    }
}
