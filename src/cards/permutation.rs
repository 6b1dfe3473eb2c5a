use super::hand::Hand;
use super::suit::Suit;

/// An element of the suit permutation group, stored as the image of the
/// canonical order: C maps to P[0], D to P[1], H to P[2], S to P[3].
///
/// The equity sampler uses the fixed [`Permutation::mirror`] involution
/// (clubs↔diamonds, hearts↔spades) to derive an antithetic deal from each
/// primary deal: ranks are untouched, so the mirrored board is negatively
/// correlated with the original through any suit-dependent outcomes.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Permutation([Suit; 4]);

impl Permutation {
    pub const fn identity() -> Self {
        Self(Suit::all())
    }

    /// Two disjoint suit 2-cycles. Its own inverse.
    pub const fn mirror() -> Self {
        Self([Suit::Diamond, Suit::Club, Suit::Spade, Suit::Heart])
    }

    /// the image of a Suit under this Permutation
    pub fn map(&self, suit: &Suit) -> Suit {
        self.0[*suit as usize]
    }

    /// the image of a Hand is the union of its per-suit shifts
    pub fn image(&self, hand: &Hand) -> Hand {
        Suit::all()
            .iter()
            .map(|suit| self.shift(suit, hand))
            .fold(Hand::empty(), Hand::add)
    }

    /// filter the hand down to one suit, then slide those bits into the
    /// image suit's lane
    fn shift(&self, suit: &Suit, hand: &Hand) -> Hand {
        let old = u8::from(*suit) as i8;
        let new = u8::from(self.map(suit)) as i8;
        let bits = u64::from(hand.of(suit));
        match new - old {
            d if d >= 0 => Hand::from(bits << d as u64),
            d => Hand::from(bits >> (-d) as u64),
        }
    }
}

impl std::fmt::Display for Permutation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for suit in Suit::all() {
            write!(f, "{}{}", suit, self.map(&suit))?;
        }
        Ok(())
    }
}
