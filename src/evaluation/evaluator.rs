use super::kickers::Kickers;
use super::ranking::Ranking;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;

/// A-2-3-4-5, the only straight where the ace plays low
const WHEEL: u16 = 0b_1000000001111;

/// Finds the best 5-card value inside a 5-7 card Hand.
///
/// Categories are probed from strongest to weakest with rank-mask and
/// popcount scans over the 52-bit hand; the first hit wins. No lookup
/// tables, no allocation.
pub struct Evaluator(Hand);

impl From<Hand> for Evaluator {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl Evaluator {
    pub fn ranking(&self) -> Ranking {
        None.or_else(|| self.straight_flush())
            .or_else(|| self.four_of_a_kind())
            .or_else(|| self.full_house())
            .or_else(|| self.flush())
            .or_else(|| self.straight())
            .or_else(|| self.three_of_a_kind())
            .or_else(|| self.pairs())
            .or_else(|| self.high_card())
            .expect("at least one card in hand")
    }

    pub fn kickers(&self, ranking: Ranking) -> Kickers {
        match (ranking, ranking.n_kickers()) {
            (_, 0) => Kickers::none(),
            // flush kickers must come from the flush suit itself
            (Ranking::Flush(hi), n) => {
                let suit = self.suited().expect("flush has a suit");
                let spare = u16::from(self.0.of(&suit)) & !u16::from(hi);
                Kickers::from(Self::top(spare, n))
            }
            (_, n) => {
                let spare = u16::from(self.0) & !ranking.spent();
                Kickers::from(Self::top(spare, n))
            }
        }
    }

    fn straight_flush(&self) -> Option<Ranking> {
        self.suited()
            .and_then(|suit| Self::run(u16::from(self.0.of(&suit))))
            .map(Ranking::StraightFlush)
    }
    fn four_of_a_kind(&self) -> Option<Ranking> {
        self.repeats(4, None).map(Ranking::FourOfAKind)
    }
    fn full_house(&self) -> Option<Ranking> {
        self.repeats(3, None).and_then(|triple| {
            self.repeats(2, Some(triple))
                .map(|paired| Ranking::FullHouse(triple, paired))
        })
    }
    fn flush(&self) -> Option<Ranking> {
        self.suited()
            .map(|suit| Rank::from(u16::from(self.0.of(&suit))))
            .map(Ranking::Flush)
    }
    fn straight(&self) -> Option<Ranking> {
        Self::run(u16::from(self.0)).map(Ranking::Straight)
    }
    fn three_of_a_kind(&self) -> Option<Ranking> {
        self.repeats(3, None).map(Ranking::ThreeOfAKind)
    }
    fn pairs(&self) -> Option<Ranking> {
        self.repeats(2, None).map(|hi| {
            self.repeats(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
                .unwrap_or(Ranking::OnePair(hi))
        })
    }
    fn high_card(&self) -> Option<Ranking> {
        self.repeats(1, None).map(Ranking::HighCard)
    }

    /// the suit holding five or more cards, if any
    fn suited(&self) -> Option<Suit> {
        Suit::all().into_iter().find(|s| self.0.of(s).size() >= 5)
    }

    /// highest rank that tops a 5-long run in the rank mask
    fn run(ranks: u16) -> Option<Rank> {
        let mut bits = ranks;
        for _ in 0..4 {
            bits &= bits << 1;
        }
        if bits > 0 {
            Some(Rank::from(bits))
        } else if ranks & WHEEL == WHEEL {
            Some(Rank::Five)
        } else {
            None
        }
    }

    /// keep only the n highest bits of a rank mask
    fn top(mut ranks: u16, n: usize) -> u16 {
        while ranks.count_ones() as usize > n {
            ranks &= ranks - 1; // drop the lowest
        }
        ranks
    }

    /// highest rank appearing at least n times, optionally skipping one
    fn repeats(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        (0..13u8)
            .rev()
            .map(Rank::from)
            .filter(|rank| Some(*rank) != skip)
            .find(|rank| (u64::from(self.0) & u64::from(*rank)).count_ones() as usize >= n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(s: &str) -> (Ranking, Kickers) {
        let eval = Evaluator::from(Hand::try_from(s).unwrap());
        let ranking = eval.ranking();
        let kickers = eval.kickers(ranking);
        (ranking, kickers)
    }

    #[test]
    fn high_card() {
        let (ranking, kickers) = eval("As Kh Qd Jc 9s");
        assert!(ranking == Ranking::HighCard(Rank::Ace));
        assert!(kickers == Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]));
    }

    #[test]
    fn one_pair() {
        let (ranking, kickers) = eval("As Ah Kd Qc Js");
        assert!(ranking == Ranking::OnePair(Rank::Ace));
        assert!(kickers == Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack]));
    }

    #[test]
    fn two_pair() {
        let (ranking, kickers) = eval("As Ah Kd Kc Qs");
        assert!(ranking == Ranking::TwoPair(Rank::Ace, Rank::King));
        assert!(kickers == Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn three_of_a_kind() {
        let (ranking, kickers) = eval("As Ah Ad Kc Qs");
        assert!(ranking == Ranking::ThreeOfAKind(Rank::Ace));
        assert!(kickers == Kickers::from(vec![Rank::King, Rank::Queen]));
    }

    #[test]
    fn straight() {
        let (ranking, kickers) = eval("Ts Jh Qd Kc As");
        assert!(ranking == Ranking::Straight(Rank::Ace));
        assert!(kickers == Kickers::none());
    }

    #[test]
    fn wheel_straight() {
        let (ranking, _) = eval("As 2h 3d 4c 5s");
        assert!(ranking == Ranking::Straight(Rank::Five));
    }

    #[test]
    fn six_high_straight_beats_wheel() {
        let (ranking, _) = eval("As 2s 3h 4d 5c 6s");
        assert!(ranking == Ranking::Straight(Rank::Six));
    }

    #[test]
    fn flush() {
        let (ranking, kickers) = eval("As Ks Qs Js 9s");
        assert!(ranking == Ranking::Flush(Rank::Ace));
        assert!(kickers == Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]));
    }

    #[test]
    fn flush_kickers_stay_in_suit() {
        // the offsuit king may not outkick the suited queen
        let (ranking, kickers) = eval("As Qs Js 9s 2s Kh");
        assert!(ranking == Ranking::Flush(Rank::Ace));
        assert!(kickers == Kickers::from(vec![Rank::Queen, Rank::Jack, Rank::Nine, Rank::Two]));
    }

    #[test]
    fn full_house() {
        let (ranking, kickers) = eval("2s 2h 2d 3c 3s");
        assert!(ranking == Ranking::FullHouse(Rank::Two, Rank::Three));
        assert!(kickers == Kickers::none());
    }

    #[test]
    fn four_of_a_kind() {
        let (ranking, kickers) = eval("As Ah Ad Ac Ks");
        assert!(ranking == Ranking::FourOfAKind(Rank::Ace));
        assert!(kickers == Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn straight_flush() {
        let (ranking, _) = eval("Ts Js Qs Ks As");
        assert!(ranking == Ranking::StraightFlush(Rank::Ace));
    }

    #[test]
    fn wheel_straight_flush() {
        let (ranking, _) = eval("As 2s 3s 4s 5s");
        assert!(ranking == Ranking::StraightFlush(Rank::Five));
    }

    #[test]
    fn seven_card_hand() {
        let (ranking, kickers) = eval("As Ah Kd Kc Qs Jh 9d");
        assert!(ranking == Ranking::TwoPair(Rank::Ace, Rank::King));
        assert!(kickers == Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn flush_over_straight() {
        let (ranking, _) = eval("4h 6h 7h 8h 9h Ts");
        assert!(ranking == Ranking::Flush(Rank::Nine));
    }

    #[test]
    fn full_house_over_flush() {
        let (ranking, _) = eval("Kh Ah Ad As Ks Qs Js 9s");
        assert!(ranking == Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn four_of_a_kind_over_full_house() {
        let (ranking, kickers) = eval("As Ah Ad Ac Ks Kh Qd");
        assert!(ranking == Ranking::FourOfAKind(Rank::Ace));
        assert!(kickers == Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn three_pair_keeps_best_two() {
        let (ranking, kickers) = eval("As Ah Kd Kc Qs Qh Jd");
        assert!(ranking == Ranking::TwoPair(Rank::Ace, Rank::King));
        assert!(kickers == Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn two_triples_make_a_full_house() {
        let (ranking, _) = eval("As Ah Ad Kc Ks Kh Qd");
        assert!(ranking == Ranking::FullHouse(Rank::Ace, Rank::King));
    }
}
