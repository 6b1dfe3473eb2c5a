use super::counter::Counters;
use super::dispatch::Batch;
use super::request::Request;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::permutation::Permutation;
use crate::error::Error;
use crate::evaluation::showdown;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Monte Carlo trials for boards with fewer than three known cards.
///
/// Each deal completes the board uniformly from the live deck. With
/// antithetic mirroring on, the deal's suit-mirrored twin (ranks
/// unchanged, clubs↔diamonds, hearts↔spades) is evaluated as a second,
/// negatively correlated trial. A mirror that collides with a card
/// already in play is skipped; the trial counter only ever reflects
/// boards actually evaluated, so accounting stays exact either way.
///
/// This is the fixed worker entry point for batch execution: everything a
/// batch needs arrives in the plain [`Batch`] record, and the counters it
/// returns are private until the dispatcher merges them.
pub fn simulate(request: &Request, batch: Batch, antithetic: bool) -> Result<Counters, Error> {
    let ref mut rng = SmallRng::seed_from_u64(batch.seed);
    let mirror = Permutation::mirror();
    let dead = request.dead();
    let known = Hand::from(request.board());
    let unseen = request.board().missing();
    let mut counters = Counters::new(request.players());
    while (counters.trials() as usize) < batch.trials {
        let ref mut deck = Deck::from(dead.complement());
        let drawn = deck.deal(unseen, rng)?;
        let community = Hand::add(known, drawn);
        counters.record(&showdown::winners(request.holes(), community));
        if antithetic && (counters.trials() as usize) < batch.trials {
            let mirrored = mirror.image(&drawn);
            if !mirrored.intersects(&dead) {
                let community = Hand::add(known, mirrored);
                counters.record(&showdown::winners(request.holes(), community));
            }
        }
    }
    Ok(counters)
}
