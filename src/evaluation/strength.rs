use super::evaluator::Evaluator;
use super::kickers::Kickers;
use super::ranking::Ranking;
use crate::cards::hand::Hand;

/// A hand's total strength: category first, kickers break the rest.
///
/// Constructed from any 5-7 card Hand. Two Strengths built against the
/// same board length compare consistently, which is all the showdown
/// needs.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    ranking: Ranking,
    kickers: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let ranking = evaluator.ranking();
        let kickers = evaluator.kickers(ranking);
        Self { ranking, kickers }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}", self.ranking)
    }
}
