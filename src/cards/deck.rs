use super::card::Card;
use super::hand::Hand;
use crate::error::Error;
use rand::Rng;

/// The live cards left to deal: the 52-card universe minus everything
/// already in play.
///
/// Rebuilt per evaluation from the complement of the dead mask and never
/// persisted. Draws are uniform without replacement and take the caller's
/// RNG, so seeded batches reproduce their deals exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Deck {
    /// A fresh 52-card deck.
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }

    /// Draws and removes one uniformly random card.
    fn draw(&mut self, rng: &mut impl Rng) -> Card {
        debug_assert!(self.size() > 0);
        let i = rng.random_range(0..self.size());
        let mut bits = u64::from(self.0);
        for _ in 0..i {
            bits &= bits - 1; // clear lowest set bit
        }
        let card = Card::from(bits.trailing_zeros() as u8);
        self.0.remove(card);
        card
    }

    /// Deals n distinct cards uniformly without replacement.
    pub fn deal(&mut self, n: usize, rng: &mut impl Rng) -> Result<Hand, Error> {
        if n > self.size() {
            return Err(Error::InsufficientCards {
                need: n,
                have: self.size(),
            });
        }
        Ok((0..n)
            .map(|_| self.draw(rng))
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add))
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}
impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
