use super::card::Card;
use super::hand::Hand;

/// A player's two private cards.
///
/// Order of the two cards is irrelevant and not preserved. Immutable after
/// construction; the pair lives exactly as long as the evaluation request
/// that owns it.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        assert!(a != b);
        Self(Hand::add(Hand::from(a), Hand::from(b)))
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

/// str isomorphism: exactly two cards, e.g. "AsKh"
impl TryFrom<&str> for Hole {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hand = Hand::try_from(s)?;
        match hand.size() {
            2 => Ok(Self(hand)),
            _ => Err(format!("hole must be two distinct cards: {}", s)),
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_distinct_cards() {
        assert!(Hole::try_from("AsKh").is_ok());
        assert!(Hole::try_from("AsAs").is_err());
        assert!(Hole::try_from("AsKhQd").is_err());
    }
}
