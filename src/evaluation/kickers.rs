use crate::cards::rank::Rank;

/// The tie-breaking side cards, stored as a 13-bit rank mask.
///
/// Suits never matter for kickers, and comparing the raw masks as
/// integers is exactly the right order: a higher rank bit dominates any
/// combination of lower ones.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

impl Kickers {
    pub const fn none() -> Self {
        Self(0)
    }
}

/// u16 isomorphism
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n)
    }
}
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}

/// Vec<Rank> isomorphism
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.into_iter().map(u16::from).fold(0, |a, b| a | b))
    }
}
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        (0..13)
            .filter(|i| k.0 & (1 << i) != 0)
            .map(|i| Rank::from(i as u8))
            .collect()
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self) {
            write!(f, "{} ", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_rank_dominates() {
        let ace = Kickers::from(vec![Rank::Ace]);
        let rest = Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack]);
        assert!(ace > rest);
    }

    #[test]
    fn bijective_ranks() {
        let ranks = vec![Rank::Two, Rank::Seven, Rank::Ace];
        let kickers = Kickers::from(ranks.clone());
        assert!(Vec::<Rank>::from(kickers) == ranks);
    }
}
