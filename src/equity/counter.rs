use crate::Probability;
use crate::Seat;

/// Per-seat win and tie accumulators for one evaluation.
///
/// Both counters are floating point from the start: a k-way tie credits
/// 1/k to each tied seat, so integer counts would only get coerced later.
/// Invariant: total credit equals completed trials, up to float rounding
/// of the fractional splits.
#[derive(Debug, Clone, PartialEq)]
pub struct Counters {
    wins: Vec<Probability>,
    ties: Vec<Probability>,
    trials: Probability,
}

impl Counters {
    pub fn new(players: usize) -> Self {
        Self {
            wins: vec![0.0; players],
            ties: vec![0.0; players],
            trials: 0.0,
        }
    }

    /// Credit one completed trial: the full unit to a sole winner, or an
    /// even fraction to each tied seat.
    pub fn record(&mut self, winners: &[Seat]) {
        match winners {
            [seat] => self.wins[*seat] += 1.0,
            split => {
                let share = 1.0 / split.len() as Probability;
                for seat in split {
                    self.ties[*seat] += share;
                }
            }
        }
        self.trials += 1.0;
    }

    /// Element-wise merge of another run's counters.
    pub fn absorb(&mut self, other: Self) {
        debug_assert!(self.wins.len() == other.wins.len());
        for (mine, theirs) in self.wins.iter_mut().zip(other.wins) {
            *mine += theirs;
        }
        for (mine, theirs) in self.ties.iter_mut().zip(other.ties) {
            *mine += theirs;
        }
        self.trials += other.trials;
    }

    pub fn players(&self) -> usize {
        self.wins.len()
    }
    pub fn trials(&self) -> Probability {
        self.trials
    }
    /// Win plus tie credit for one seat.
    pub fn credit(&self, seat: Seat) -> Probability {
        self.wins[seat] + self.ties[seat]
    }

    /// Raw (unrounded) per-seat percentages.
    pub fn percentages(&self) -> Vec<Probability> {
        (0..self.players())
            .map(|seat| match self.trials {
                t if t > 0.0 => self.credit(seat) / t * 100.0,
                _ => 0.0,
            })
            .collect()
    }
}
