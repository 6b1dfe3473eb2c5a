use super::backend::Backend;
use super::counter::Counters;
use super::dispatch;
use super::equities::Equities;
use super::exact;
use super::monitor::Monitor;
use super::request::Request;
use super::settings::CHUNK_FLOOR;
use super::settings::Settings;
use super::settings::WARMUP;
use crate::error::Error;

/// The orchestrator: picks a regime, drives it to completion, and
/// normalizes the counters into percentages.
///
/// Boards with three or more known cards are cheap enough to enumerate
/// exhaustively; anything shorter goes to the chunked, parallel,
/// convergence-checked sampler. All state lives for one call.
pub struct Engine {
    settings: Settings,
}

impl Default for Engine {
    fn default() -> Self {
        Self::from(Settings::default())
    }
}

impl From<Settings> for Engine {
    fn from(settings: Settings) -> Self {
        Self { settings }
    }
}

impl Engine {
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Estimate every seat's chance of winning the showdown.
    pub fn estimate(&self, request: &Request) -> Result<Equities, Error> {
        log::debug!("{:<32}{:<32}", "estimating equity", request);
        let counters = match request.board().len() {
            3.. => Ok(exact::enumerate(request)),
            _ => self.sample(request),
        }?;
        Ok(Equities::from(&counters))
    }

    /// Chunked sampling: split, execute, merge, snapshot, maybe stop.
    fn sample(&self, request: &Request) -> Result<Counters, Error> {
        if self.settings.backend == Backend::Gpu {
            log::info!("gpu capability reported; falling back to cpu batching");
        }
        let budget = self.settings.budget(request.players());
        let chunk = (budget / self.settings.checkpoints).max(CHUNK_FLOOR);
        let seed = self.settings.seed.unwrap_or_else(rand::random);
        let mut monitor = Monitor::new(self.settings.tolerance);
        let mut totals = Counters::new(request.players());
        for index in 0.. {
            let done = totals.trials() as usize;
            if done >= budget {
                break;
            }
            let batches = dispatch::split(
                chunk.min(budget - done),
                self.settings.workers,
                seed,
                index,
            );
            totals.absorb(dispatch::execute(
                request,
                batches,
                self.settings.antithetic,
            )?);
            monitor.observe(totals.percentages());
            if totals.trials() >= budget as f64 * WARMUP && monitor.converged() {
                log::debug!(
                    "{:<32}{:<32}",
                    "converged early",
                    format!("{} of {} trials", totals.trials(), budget)
                );
                break;
            }
        }
        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Probability;
    use crate::cards::board::Board;
    use crate::cards::hole::Hole;

    fn request(holes: &[&str], board: &str) -> Request {
        Request::new(
            holes.iter().map(|s| Hole::try_from(*s).unwrap()).collect(),
            Board::try_from(board).unwrap(),
        )
        .unwrap()
    }

    fn quick() -> Engine {
        Engine::from(Settings {
            floor: Some(20_000),
            seed: Some(2024),
            ..Settings::default()
        })
    }

    #[test]
    fn exact_percentages_sum_tightly() {
        let engine = Engine::default();
        let result = engine
            .estimate(&request(&["AsAh", "KsKh", "QdJd"], "2c7d8s"))
            .unwrap();
        let sum: Probability = result.iter().sum();
        assert!((sum - 100.0).abs() <= 0.01);
    }

    #[test]
    fn sampled_percentages_sum_loosely() {
        let engine = quick();
        let result = engine.estimate(&request(&["AsAh", "KsKh"], "")).unwrap();
        let sum: Probability = result.iter().sum();
        assert!((sum - 100.0).abs() <= 0.5);
    }

    #[test]
    fn exact_mode_is_deterministic() {
        let engine = Engine::default();
        let request = request(&["AsAh", "KsKh"], "2c7d8sTd");
        let a = engine.estimate(&request).unwrap();
        let b = engine.estimate(&request).unwrap();
        assert!(a == b);
    }

    #[test]
    fn seeded_sampling_reproduces() {
        let engine = quick();
        let request = request(&["AsAh", "KsKh"], "");
        let a = engine.estimate(&request).unwrap();
        let b = engine.estimate(&request).unwrap();
        assert!(a == b);
    }

    #[test]
    fn aces_dominate_kings_preflop() {
        let result = quick()
            .estimate(&request(&["AsAh", "KsKh"], ""))
            .unwrap();
        assert!(result.get(0) > 78.0);
        assert!(result.get(0) < 88.0);
        assert!(result.get(0) > result.get(1));
    }

    #[test]
    fn full_board_is_all_or_nothing() {
        let engine = Engine::default();
        let result = engine
            .estimate(&request(&["AsAh", "KsKh"], "2c7d8sTd3c"))
            .unwrap();
        assert!(result.get(0) == 100.0);
        assert!(result.get(1) == 0.0);
    }

    #[test]
    fn full_board_tie_is_fifty_fifty() {
        let engine = Engine::default();
        let result = engine
            .estimate(&request(&["2s2h", "3s3h"], "TcJdQsKdAc"))
            .unwrap();
        assert!(result.get(0) == 50.0);
        assert!(result.get(1) == 50.0);
    }

    #[test]
    fn identical_hands_tie_three_ways() {
        let engine = Engine::default();
        let result = engine
            .estimate(&request(&["AsKs", "AhKh", "AdKd"], "2c7c8c9hJh"))
            .unwrap();
        let sum: Probability = result.iter().sum();
        assert!((sum - 100.0).abs() <= 0.5);
        for seat in 0..3 {
            assert!((result.get(seat) - 33.33).abs() <= 1.0);
        }
    }

    #[test]
    fn equity_travels_with_the_hand() {
        let engine = quick();
        let forward = engine.estimate(&request(&["AsAh", "KsKh"], "")).unwrap();
        let reverse = engine.estimate(&request(&["KsKh", "AsAh"], "")).unwrap();
        assert!(forward.get(0) == reverse.get(1));
        assert!(forward.get(1) == reverse.get(0));
    }

    #[test]
    fn rejects_board_overflow_before_estimating() {
        assert!(Board::try_from("2c7d8sTd3c4h").is_err());
    }
}
