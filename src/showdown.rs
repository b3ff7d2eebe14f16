use crate::evaluator::{evaluate, Category};
use crate::hand::Hand;
use core::cmp::Ordering;
use std::fmt;

/// Which side of a two-hand showdown came out ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    Hand1,
    Hand2,
    Tie,
}

impl Winner {
    /// Label after swapping the two hands.
    pub const fn flipped(self) -> Self {
        match self {
            Winner::Hand1 => Winner::Hand2,
            Winner::Hand2 => Winner::Hand1,
            Winner::Tie => Winner::Tie,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Hand1 => f.write_str("Hand 1"),
            Winner::Hand2 => f.write_str("Hand 2"),
            Winner::Tie => f.write_str("Tie"),
        }
    }
}

/// A hand together with its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Showdown {
    pub hand: Hand,
    pub category: Category,
}

impl Showdown {
    pub fn new(hand: Hand) -> Self {
        Self { hand, category: evaluate(&hand) }
    }
}

impl fmt::Display for Showdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - {}", self.hand, self.category, self.category.rank())
    }
}

/// Outcome of [`play`]; keeps both hands for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub winner: Winner,
    pub first: Showdown,
    pub second: Showdown,
}

impl MatchResult {
    /// Cards of the winning hand. A tie reports the first hand; do not rely on that.
    pub fn winning_hand(&self) -> &Hand {
        match self.winner {
            Winner::Hand2 => &self.second.hand,
            Winner::Hand1 | Winner::Tie => &self.first.hand,
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hand 1: {}", self.first)?;
        writeln!(f, "Hand 2: {}", self.second)?;
        match self.winner {
            Winner::Tie => write!(f, "Result: Tie ({})", self.first.category),
            w => write!(f, "Winner: {} with {}", w, self.winning_hand()),
        }
    }
}

/// Order two hands by category alone.
pub fn compare(hand1: &Hand, hand2: &Hand) -> Ordering {
    evaluate(hand1).cmp(&evaluate(hand2))
}

/// Classify both hands and report the one with the stronger category.
///
/// Equal categories tie; there is no kicker resolution.
///
/// ```
/// use poker_sim::hand::Hand;
/// use poker_sim::showdown::{play, Winner};
///
/// let flush: Hand = "10H JH QH KH 2H".parse().unwrap();
/// let pair: Hand = "10S 10D JC QS KS".parse().unwrap();
/// let result = play(&flush, &pair);
/// assert_eq!(result.winner, Winner::Hand1);
/// assert_eq!(result.winning_hand(), &flush);
/// ```
pub fn play(hand1: &Hand, hand2: &Hand) -> MatchResult {
    let first = Showdown::new(*hand1);
    let second = Showdown::new(*hand2);
    log::info!("Hand 1: {first}");
    log::info!("Hand 2: {second}");

    let winner = match first.category.cmp(&second.category) {
        Ordering::Greater => Winner::Hand1,
        Ordering::Less => Winner::Hand2,
        Ordering::Equal => Winner::Tie,
    };
    MatchResult { winner, first, second }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        s.parse().expect("valid hand")
    }

    #[test]
    fn stronger_second_hand_wins() {
        let r = play(&hand("10H 10D JC QH KH"), &hand("10S 10C 10D KS AS"));
        assert_eq!(r.winner, Winner::Hand2);
        assert_eq!(r.first.category, Category::OnePair);
        assert_eq!(r.second.category, Category::ThreeOfAKind);
        assert_eq!(r.winning_hand(), &r.second.hand);
    }

    #[test]
    fn same_category_ties_without_kickers() {
        // Pair of aces vs pair of twos: equal by category.
        let r = play(&hand("AH AD 7C 8H 9S"), &hand("2H 2D 7D 8D 10S"));
        assert_eq!(r.winner, Winner::Tie);
        assert_eq!(compare(&r.first.hand, &r.second.hand), Ordering::Equal);
    }

    #[test]
    fn summary_lists_both_hands_and_winner() {
        let r = play(&hand("10H JH QH KH AH"), &hand("9H 10D JC QH KH"));
        let text = r.to_string();
        assert!(text.contains("Hand 1: [10H JH QH KH AH] - Royal Flush - 10"));
        assert!(text.contains("Hand 2: [9H 10D JC QH KH] - Straight - 5"));
        assert!(text.ends_with("Winner: Hand 1 with [10H JH QH KH AH]"));
    }

    #[test]
    fn winner_flip_is_an_involution() {
        for w in [Winner::Hand1, Winner::Hand2, Winner::Tie] {
            assert_eq!(w.flipped().flipped(), w);
        }
    }
}
