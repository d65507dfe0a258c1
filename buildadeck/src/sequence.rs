use std::iter::FusedIterator;

use crate::{Card, DeckError};

/// A read-only, indexable run of cards.
///
/// Both the length and every lookup may fail, because the cards behind a
/// sequence are only materialized (and validated) on first use.
pub trait CardSequence {
    type Suit;

    fn len(&self) -> Result<usize, DeckError>;

    /// Returns the card at `index`. Valid indices are `-len..len`; negative
    /// indices count from the back.
    fn get(&self, index: isize) -> Result<&Card<Self::Suit>, DeckError>;

    fn is_empty(&self) -> Result<bool, DeckError> {
        Ok(self.len()? == 0)
    }

    /// Iterates the cards front to back. Fails up front if the cards cannot be
    /// materialized, so the iterator itself never has to.
    fn iter(&self) -> Result<SequenceIter<'_, Self>, DeckError>
    where
        Self: Sized,
    {
        let len = self.len()?;
        Ok(SequenceIter {
            sequence: self,
            position: 0,
            len,
        })
    }
}

/// Maps a symmetric index in `-len..len` to its position in `0..len`.
pub fn resolve_index(index: isize, len: usize) -> Result<usize, DeckError> {
    let distance = index.unsigned_abs();
    if index >= 0 && distance < len {
        Ok(distance)
    } else if index < 0 && distance <= len {
        Ok(len - distance)
    } else {
        Err(DeckError::IndexOutOfRange { index, len })
    }
}

/// Front-to-back iterator over a [`CardSequence`].
#[derive(Debug)]
pub struct SequenceIter<'a, T> {
    sequence: &'a T,
    position: usize,
    len: usize,
}

impl<'a, T> Iterator for SequenceIter<'a, T>
where
    T: CardSequence,
    T::Suit: 'a,
{
    type Item = &'a Card<T::Suit>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.len {
            return None;
        }
        let index = isize::try_from(self.position).ok()?;
        self.position += 1;
        self.sequence.get(index).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.position;
        (remaining, Some(remaining))
    }
}

impl<'a, T> ExactSizeIterator for SequenceIter<'a, T>
where
    T: CardSequence,
    T::Suit: 'a,
{
}

impl<'a, T> FusedIterator for SequenceIter<'a, T>
where
    T: CardSequence,
    T::Suit: 'a,
{
}
