use super::strength::Strength;
use crate::Seat;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;

/// Compares every player against one completed board and returns the
/// seat(s) achieving the maximum strength. More than one seat means a
/// tie; the caller splits the win credit evenly among them.
///
/// Pure in its inputs; the strength order is consistent for a fixed
/// board, so repeated calls agree.
pub fn winners(holes: &[Hole], community: Hand) -> Vec<Seat> {
    let strengths = holes
        .iter()
        .map(|hole| Hand::add(Hand::from(*hole), community))
        .map(Strength::from)
        .collect::<Vec<_>>();
    let best = strengths
        .iter()
        .max()
        .copied()
        .expect("at least one player at showdown");
    strengths
        .into_iter()
        .enumerate()
        .filter(|(_, strength)| *strength == best)
        .map(|(seat, _)| seat)
        .collect()
}
