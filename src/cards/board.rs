use super::card::Card;
use super::hand::Hand;

/// The shared community cards, zero through five of them.
///
/// Ordered as revealed; only grows during a single evaluation. A board
/// with fewer than three cards routes the engine to sampling, three or
/// more to exact enumeration.
#[derive(Debug, Clone, Default)]
pub struct Board(Vec<Card>);

impl Board {
    pub const CAPACITY: usize = 5;

    pub fn empty() -> Self {
        Self(Vec::with_capacity(Self::CAPACITY))
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// How many cards are still unseen.
    pub fn missing(&self) -> usize {
        Self::CAPACITY - self.len()
    }
    pub fn push(&mut self, card: Card) {
        assert!(self.len() < Self::CAPACITY);
        self.0.push(card);
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl From<&Board> for Hand {
    fn from(board: &Board) -> Self {
        Hand::from(board.0.clone())
    }
}

impl TryFrom<Vec<Card>> for Board {
    type Error = String;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        match cards.len() {
            0..=Self::CAPACITY => Ok(Self(cards)),
            n => Err(format!("board holds at most 5 cards, got {}", n)),
        }
    }
}

/// str isomorphism: zero to five cards, e.g. "2c7d8s"
impl TryFrom<&str> for Board {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.0.iter() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
