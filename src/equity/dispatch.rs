use super::counter::Counters;
use super::request::Request;
use super::sampler;
use crate::error::Error;
use rayon::prelude::*;

/// Everything one worker needs, as plain data. Task descriptors cross the
/// thread boundary instead of closures, and the per-batch seed makes a
/// fixed base seed reproduce the whole run regardless of scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch {
    pub trials: usize,
    pub seed: u64,
}

/// Split `trials` across `workers` batches differing in size by at most
/// one: the first `trials mod workers` batches carry the extra trial.
/// Seeds are assigned deterministically from the base seed and the chunk
/// index so no two batches of a run ever share one.
pub fn split(trials: usize, workers: usize, seed: u64, chunk: usize) -> Vec<Batch> {
    let workers = workers.clamp(1, trials.max(1));
    let each = trials / workers;
    let extra = trials % workers;
    (0..workers)
        .map(|i| Batch {
            trials: each + usize::from(i < extra),
            seed: seed
                .wrapping_add(chunk as u64 * workers as u64)
                .wrapping_add(i as u64),
        })
        .filter(|batch| batch.trials > 0)
        .collect()
}

/// Run one chunk's batches concurrently and merge their counters.
///
/// Batches own their counters for their whole lifetime; the element-wise
/// merge after the join is the only synchronization point. Any batch
/// failure fails the chunk, since partial counts would look plausible
/// and be wrong.
pub fn execute(request: &Request, batches: Vec<Batch>, antithetic: bool) -> Result<Counters, Error> {
    batches
        .into_par_iter()
        .map(|batch| {
            sampler::simulate(request, batch, antithetic).map_err(|e| Error::BatchFailure {
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        // merge in batch order: float sums stay bit-identical run to run
        .map(|results| {
            results
                .into_iter()
                .fold(Counters::new(request.players()), |mut merged, counters| {
                    merged.absorb(counters);
                    merged
                })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::board::Board;
    use crate::cards::hole::Hole;

    #[test]
    fn batch_sizes_differ_by_at_most_one() {
        let batches = split(100_003, 8, 0, 0);
        let sizes = batches.iter().map(|b| b.trials).collect::<Vec<_>>();
        let hi = sizes.iter().max().unwrap();
        let lo = sizes.iter().min().unwrap();
        assert!(sizes.iter().sum::<usize>() == 100_003);
        assert!(hi - lo <= 1);
        assert!(sizes[0] == 12_501);
    }

    #[test]
    fn seeds_never_collide_across_chunks() {
        let mut seen = std::collections::HashSet::new();
        for chunk in 0..5 {
            for batch in split(1_000, 8, 99, chunk) {
                assert!(seen.insert(batch.seed));
            }
        }
    }

    #[test]
    fn more_workers_than_trials() {
        let batches = split(3, 8, 0, 0);
        assert!(batches.len() == 3);
        assert!(batches.iter().all(|b| b.trials == 1));
    }

    #[test]
    fn merged_totals_are_order_independent() {
        let request = Request::new(
            vec![
                Hole::try_from("AsAh").unwrap(),
                Hole::try_from("KsKh").unwrap(),
            ],
            Board::empty(),
        )
        .unwrap();
        let batches = split(2_000, 4, 11, 0);
        let a = execute(&request, batches.clone(), true).unwrap();
        let b = execute(&request, batches.into_iter().rev().collect(), true).unwrap();
        assert!(a.trials() == b.trials());
        assert!((a.credit(0) - b.credit(0)).abs() < 1e-9);
    }
}
