use super::counter::Counters;
use super::request::Request;
use crate::cards::hand::Hand;
use crate::cards::hands::HandIterator;
use crate::evaluation::showdown;

/// Exhaustive enumeration for boards with three or more known cards.
///
/// With u unseen cards (0, 1, or 2) every C(live, u) completion is
/// evaluated exactly once, so work is bounded by the combination count
/// (at most C(45, 2) = 990 showdowns), never by a trial budget. A full
/// board performs exactly one comparison. Single-pass and sequential:
/// there is nothing here worth waking the thread pool for.
pub fn enumerate(request: &Request) -> Counters {
    let known = Hand::from(request.board());
    let mut counters = Counters::new(request.players());
    match request.board().missing() {
        0 => counters.record(&showdown::winners(request.holes(), known)),
        unseen => {
            for completion in HandIterator::from((unseen, request.dead())) {
                let community = Hand::add(known, completion);
                counters.record(&showdown::winners(request.holes(), community));
            }
        }
    }
    counters
}
