use std::iter::FusedIterator;

use rand::{CryptoRng, Rng};

use crate::Card;

/// Draws every position in `0..len` exactly once, in uniformly random order.
///
/// Positions are drawn lazily, so stopping early only costs the draws made so
/// far. The generator must be cryptographically strong: anyone able to predict
/// it could predict the deal.
#[derive(Debug)]
pub struct ShuffledIndices<R> {
    pool: Vec<usize>,
    rng: R,
}

impl<R: Rng + CryptoRng> ShuffledIndices<R> {
    pub fn new(len: usize, rng: R) -> Self {
        ShuffledIndices {
            pool: (0..len).collect(),
            rng,
        }
    }
}

impl<R: Rng + CryptoRng> Iterator for ShuffledIndices<R> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.pool.is_empty() {
            return None;
        }
        // The pool is unordered, so swap_remove keeps each draw O(1).
        let choice = self.rng.gen_range(0..self.pool.len());
        Some(self.pool.swap_remove(choice))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.pool.len(), Some(self.pool.len()))
    }
}

impl<R: Rng + CryptoRng> ExactSizeIterator for ShuffledIndices<R> {}

impl<R: Rng + CryptoRng> FusedIterator for ShuffledIndices<R> {}

/// The cards of a shoe in shuffled order. Created by
/// [`Shoe::shuffled`](crate::Shoe::shuffled).
#[derive(Debug)]
pub struct Shuffled<'a, S, R> {
    deck_cards: &'a [Card<S>],
    indices: ShuffledIndices<R>,
}

impl<'a, S, R: Rng + CryptoRng> Shuffled<'a, S, R> {
    /// `indices` must only yield positions below a multiple of
    /// `deck_cards.len()`, which makes `deck_cards` non-empty whenever a
    /// position is drawn.
    pub(crate) fn new(deck_cards: &'a [Card<S>], indices: ShuffledIndices<R>) -> Self {
        Shuffled {
            deck_cards,
            indices,
        }
    }
}

impl<'a, S, R: Rng + CryptoRng> Iterator for Shuffled<'a, S, R> {
    type Item = &'a Card<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.indices.next()?;
        self.deck_cards.get(position % self.deck_cards.len())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<'a, S, R: Rng + CryptoRng> ExactSizeIterator for Shuffled<'a, S, R> {}

impl<'a, S, R: Rng + CryptoRng> FusedIterator for Shuffled<'a, S, R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn every_index_is_drawn_once() {
        let mut drawn: Vec<usize> =
            ShuffledIndices::new(208, StdRng::seed_from_u64(1)).collect();
        assert_eq!(drawn.len(), 208);
        drawn.sort_unstable();
        assert_eq!(drawn, (0..208).collect::<Vec<_>>());
    }

    #[test]
    fn nothing_to_draw_from_an_empty_pool() {
        let mut indices = ShuffledIndices::new(0, StdRng::seed_from_u64(1));
        assert_eq!(indices.len(), 0);
        assert_eq!(indices.next(), None);
        assert_eq!(indices.next(), None);
    }

    #[test]
    fn length_shrinks_with_each_draw() {
        let mut indices = ShuffledIndices::new(5, StdRng::seed_from_u64(3));
        assert_eq!(indices.len(), 5);
        let _ = indices.next();
        let _ = indices.next();
        assert_eq!(indices.len(), 3);
        assert_eq!(indices.by_ref().count(), 3);
        assert_eq!(indices.next(), None);
    }

    #[test]
    fn same_seed_gives_same_order() {
        let a: Vec<usize> = ShuffledIndices::new(52, StdRng::seed_from_u64(42)).collect();
        let b: Vec<usize> = ShuffledIndices::new(52, StdRng::seed_from_u64(42)).collect();
        let c: Vec<usize> = ShuffledIndices::new(52, StdRng::seed_from_u64(43)).collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn no_position_is_favored() {
        const LEN: usize = 6;
        const TRIALS: usize = 12_000;
        let mut rng = StdRng::seed_from_u64(2024);
        let mut first = [0usize; LEN];
        let mut last = [0usize; LEN];
        for _ in 0..TRIALS {
            let order: Vec<usize> = ShuffledIndices::new(LEN, &mut rng).collect();
            first[order[0]] += 1;
            last[order[LEN - 1]] += 1;
        }
        // Expected 2000 per position with a standard deviation of about 41.
        for counts in [first, last] {
            for count in counts {
                assert!((1700..=2300).contains(&count), "skewed counts {:?}", counts);
            }
        }
    }

    #[test]
    fn shuffled_cards_wrap_into_the_deck() {
        let deck_cards = [Card::new('a', 1), Card::new('b', 1)];
        let shuffled = Shuffled::new(
            &deck_cards,
            ShuffledIndices::new(6, StdRng::seed_from_u64(9)),
        );
        assert_eq!(shuffled.len(), 6);
        let cards: Vec<&Card<char>> = shuffled.collect();
        assert_eq!(cards.iter().filter(|card| card.suit == Some('a')).count(), 3);
        assert_eq!(cards.iter().filter(|card| card.suit == Some('b')).count(), 3);
    }
}
