use crate::cards::board::Board;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::error::Error;

/// A validated equity question: who holds what, and what the board shows.
///
/// Construction is the single validation gate. Past it, the invariants
/// hold for the engine's whole run: 2-9 players, two cards each, at most
/// five board cards, and no card appearing twice anywhere.
#[derive(Debug, Clone)]
pub struct Request {
    holes: Vec<Hole>,
    board: Board,
    dead: Hand,
}

impl Request {
    pub const MIN_PLAYERS: usize = 2;
    pub const MAX_PLAYERS: usize = 9;

    pub fn new(holes: Vec<Hole>, board: Board) -> Result<Self, Error> {
        match holes.len() {
            Self::MIN_PLAYERS..=Self::MAX_PLAYERS => (),
            n => {
                return Err(Error::invalid(format!(
                    "player count must be between 2 and 9, got {}",
                    n
                )));
            }
        }
        let mut dead = Hand::empty();
        let cards = holes
            .iter()
            .flat_map(|hole| Hand::from(*hole))
            .chain(board.cards().iter().copied());
        for card in cards {
            if dead.contains(&card) {
                return Err(Error::invalid(format!("duplicate card: {}", card)));
            }
            dead = Hand::add(dead, Hand::from(card));
        }
        Ok(Self { holes, board, dead })
    }

    pub fn players(&self) -> usize {
        self.holes.len()
    }
    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    /// Union of every card already in play.
    pub fn dead(&self) -> Hand {
        self.dead
    }
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for hole in self.holes.iter() {
            write!(f, "{} ", hole)?;
        }
        write!(f, "~ {}", self.board)
    }
}
