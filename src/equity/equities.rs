use super::counter::Counters;
use crate::Probability;
use crate::Seat;

/// The answer: one win percentage per seat, rounded to two decimals.
///
/// Indexed by seat position; player labels are a concern of the external
/// boundary, not of this type.
#[derive(Debug, Clone, PartialEq)]
pub struct Equities(Vec<Probability>);

impl Equities {
    pub fn get(&self, seat: Seat) -> Probability {
        self.0[seat]
    }
    pub fn players(&self) -> usize {
        self.0.len()
    }
    pub fn iter(&self) -> impl Iterator<Item = Probability> + '_ {
        self.0.iter().copied()
    }

    fn round(percent: Probability) -> Probability {
        (percent * 100.0).round() / 100.0
    }
}

impl From<&Counters> for Equities {
    fn from(counters: &Counters) -> Self {
        Self(
            counters
                .percentages()
                .into_iter()
                .map(Self::round)
                .collect(),
        )
    }
}

impl std::fmt::Display for Equities {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (seat, percent) in self.0.iter().enumerate() {
            writeln!(f, "{:<12}{:>8.2}%", format!("Player {}", seat + 1), percent)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        let mut counters = Counters::new(3);
        counters.record(&[0, 1, 2]);
        let equities = Equities::from(&counters);
        assert!(equities.get(0) == 33.33);
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let mut counters = Counters::new(2);
        for _ in 0..7 {
            counters.record(&[0]);
        }
        for _ in 0..3 {
            counters.record(&[1]);
        }
        let equities = Equities::from(&counters);
        let sum: Probability = equities.iter().sum();
        assert!((sum - 100.0).abs() < 0.01);
        assert!(equities.get(0) == 70.0);
    }
}
