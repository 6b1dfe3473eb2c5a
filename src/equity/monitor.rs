use crate::Probability;

/// Watches the win-rate trajectory across checkpoints and calls the stop.
///
/// One snapshot of per-seat percentages is appended per checkpoint. The
/// run has converged once at least three snapshots exist and the mean of
/// the max-per-seat drift over the most recent (up to three) consecutive
/// snapshot pairs falls under the tolerance. History is append-only and
/// dies with the evaluation.
#[derive(Debug)]
pub struct Monitor {
    history: Vec<Vec<Probability>>,
    tolerance: Probability,
}

impl Monitor {
    /// Snapshots required before convergence can be declared.
    const SNAPSHOTS: usize = 3;
    /// Consecutive snapshot pairs averaged into the drift signal.
    const WINDOW: usize = 3;

    pub fn new(tolerance: Probability) -> Self {
        Self {
            history: Vec::new(),
            tolerance,
        }
    }

    pub fn observe(&mut self, snapshot: Vec<Probability>) {
        self.history.push(snapshot);
    }

    pub fn converged(&self) -> bool {
        if self.history.len() < Self::SNAPSHOTS {
            return false;
        }
        let drifts = self
            .history
            .windows(2)
            .rev()
            .take(Self::WINDOW)
            .map(|pair| Self::drift(&pair[0], &pair[1]))
            .collect::<Vec<_>>();
        let mean = drifts.iter().sum::<Probability>() / drifts.len() as Probability;
        mean < self.tolerance
    }

    /// largest per-seat movement between two snapshots
    fn drift(prev: &[Probability], next: &[Probability]) -> Probability {
        prev.iter()
            .zip(next)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, Probability::max)
    }
}
