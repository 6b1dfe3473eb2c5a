use super::backend::Backend;
use crate::Probability;

// ============================================================================
// SAMPLING BUDGETS
// Trial floors by table size. Lower bounds only: a larger caller-specified
// iteration count is honored as-is.
// ============================================================================
/// Minimum trials for 2-3 players.
pub const FLOOR_SHORT: usize = 120_000;
/// Minimum trials for 4-6 players.
pub const FLOOR_MIDDLE: usize = 100_000;
/// Minimum trials for 7-9 players.
pub const FLOOR_CROWDED: usize = 80_000;

// ============================================================================
// VARIANCE REDUCTION
// ============================================================================
/// Budget multiplier when antithetic mirroring is on: a mirrored pair
/// carries the variance of roughly two independent trials. Empirical, not
/// structural; override through Settings when tuning.
pub const ANTITHETIC_SCALE: Probability = 0.6;

// ============================================================================
// CONVERGENCE
// ============================================================================
/// Mean max-per-seat drift (percentage points) across recent checkpoints
/// below which sampling stops early.
pub const TOLERANCE: Probability = 0.1;
/// Checkpoints per sampling run; each one is a split/merge cycle.
pub const CHECKPOINTS: usize = 20;
/// Smallest chunk worth dispatching between checkpoints.
pub const CHUNK_FLOOR: usize = 1_000;
/// Fraction of the budget consumed before convergence checks begin, so a
/// noisy start cannot trigger a false early stop.
pub const WARMUP: Probability = 1.0 / 3.0;

/// Per-evaluation knobs. Everything has a sensible default; construct with
/// `Settings::default()` and override fields as needed. Read-only once the
/// engine starts.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Batches per chunk; defaults to available parallelism.
    pub workers: usize,
    /// Requested trial count. Raised to the per-player-count floor.
    pub iterations: Option<usize>,
    /// Floor override for callers that need bounded latency. `None` uses
    /// the per-player-count floors.
    pub floor: Option<usize>,
    /// Base seed for deterministic batch seeding. `None` draws one fresh.
    pub seed: Option<u64>,
    /// Pair every deal with its suit-mirrored twin.
    pub antithetic: bool,
    /// Budget multiplier applied when antithetic mirroring is on.
    pub scale: Probability,
    /// Early-stop drift threshold in percentage points.
    pub tolerance: Probability,
    /// Checkpoints per sampling run.
    pub checkpoints: usize,
    /// Probed acceleration capability. Informational: execution always
    /// lands on the CPU pool.
    pub backend: Backend,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            iterations: None,
            floor: None,
            seed: None,
            antithetic: true,
            scale: ANTITHETIC_SCALE,
            tolerance: TOLERANCE,
            checkpoints: CHECKPOINTS,
            backend: Backend::probe(),
        }
    }
}

impl Settings {
    /// The trial floor for a table of `players` seats.
    pub fn floor(&self, players: usize) -> usize {
        self.floor.unwrap_or(match players {
            2..=3 => FLOOR_SHORT,
            4..=6 => FLOOR_MIDDLE,
            _ => FLOOR_CROWDED,
        })
    }

    /// The effective trial budget: the caller's request raised to the
    /// floor, then scaled down when mirroring stretches each deal into
    /// two trials.
    pub fn budget(&self, players: usize) -> usize {
        let target = self.iterations.unwrap_or(0).max(self.floor(players));
        match self.antithetic {
            true => (target as Probability * self.scale).ceil() as usize,
            false => target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_by_table_size() {
        let settings = Settings::default();
        assert!(settings.floor(2) == FLOOR_SHORT);
        assert!(settings.floor(5) == FLOOR_MIDDLE);
        assert!(settings.floor(9) == FLOOR_CROWDED);
    }

    #[test]
    fn caller_iterations_above_floor_are_honored() {
        let settings = Settings {
            iterations: Some(1_000_000),
            antithetic: false,
            ..Settings::default()
        };
        assert!(settings.budget(2) == 1_000_000);
    }

    #[test]
    fn caller_iterations_below_floor_are_raised() {
        let settings = Settings {
            iterations: Some(10),
            antithetic: false,
            ..Settings::default()
        };
        assert!(settings.budget(2) == FLOOR_SHORT);
    }

    #[test]
    fn antithetic_scales_the_budget() {
        let settings = Settings {
            iterations: Some(100_000),
            ..Settings::default()
        };
        assert!(settings.budget(9) == 60_000);
    }
}
