//! Five-card hand classification.
//!
//! Hands are classified into one of ten [`Category`] values by rank counts,
//! suit uniformity and runs. No finer ranking is computed inside a category:
//! two hands with the same category are equal in strength.

mod category;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

pub use category::Category;

use crate::cards::Card;
use crate::hand::{Hand, HandError};

/// Classify a validated five-card hand.
///
/// ```
/// use poker_sim::evaluator::{evaluate, Category};
/// use poker_sim::hand::Hand;
///
/// let hand: Hand = "10H JH QH KH AH".parse().unwrap();
/// assert_eq!(evaluate(&hand), Category::RoyalFlush);
///
/// let wheel: Hand = "AH 2D 3C 4S 5H".parse().unwrap();
/// assert_eq!(evaluate(&wheel), Category::Straight);
/// ```
pub fn evaluate(hand: &Hand) -> Category {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(hand.cards());

    // Check categories in priority order (highest to lowest)
    for detector in DETECTORS.iter() {
        if detector.detect(&analysis) {
            return detector.category();
        }
    }

    // Five distinct cards always fall into one of the groupings above.
    unreachable!("no category matched a validated hand")
}

/// Validate raw cards as a [`Hand`] and classify it.
///
/// Fails with [`HandError`] unless given exactly five distinct cards.
///
/// ```
/// use poker_sim::cards::parse_cards;
/// use poker_sim::evaluator::{evaluate_cards, Category};
///
/// let cards = parse_cards("10H 10D JC JH KH").unwrap();
/// assert_eq!(evaluate_cards(&cards).unwrap(), Category::TwoPair);
/// assert!(evaluate_cards(&cards[..4]).is_err());
/// ```
pub fn evaluate_cards(cards: &[Card]) -> Result<Category, HandError> {
    let hand = Hand::from_slice(cards)?;
    Ok(evaluate(&hand))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_of(s: &str) -> Category {
        evaluate(&s.parse::<Hand>().expect("valid hand"))
    }

    #[test]
    fn every_category_example_classifies_as_itself() {
        for cat in Category::ALL {
            let hand = Hand::try_new(cat.example()).expect("example hands are distinct");
            assert_eq!(evaluate(&hand), cat, "example for {cat}");
        }
    }

    #[test]
    fn wheel_variants() {
        assert_eq!(category_of("AH 2D 3C 4S 5H"), Category::Straight);
        assert_eq!(category_of("AS 2S 3S 4S 5S"), Category::StraightFlush);
        assert_eq!(category_of("QH KD AC 2S 3H"), Category::HighCard);
    }

    #[test]
    fn invalid_input_is_not_classified() {
        let cards = crate::cards::parse_cards("10H 10H JC QH KH").unwrap();
        assert!(matches!(evaluate_cards(&cards), Err(HandError::DuplicateCard(_))));
        let six = crate::cards::parse_cards("2H 3H 4H 5H 6H 7H").unwrap();
        assert!(matches!(evaluate_cards(&six), Err(HandError::WrongCount(6))));
    }
}
