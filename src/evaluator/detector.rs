use super::category::Category;
use super::hand_analysis::HandAnalysis;

/// Strategy pattern: each detector recognises exactly one category.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &HandAnalysis) -> bool;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Royal Flush: Ten to Ace, all one suit
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn category(&self) -> Category {
        Category::RoyalFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_straight_flush() && analysis.straight_info.is_broadway()
    }
}

/// Straight Flush: any other run in one suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_straight_flush()
    }
}

pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.quad().is_some()
    }
}

/// Full House: 3 + 2
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.shape() == [3, 2]
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush()
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight()
    }
}

/// Three of a Kind: 3 + 1 + 1
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.trips().is_some() && analysis.rank_groups.pairs().is_empty()
    }
}

/// Two Pair: 2 + 2 + 1
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 2
    }
}

/// One Pair: 2 + 1 + 1 + 1
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::OnePair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 1 && analysis.rank_groups.distinct() == 4
    }
}

/// High Card: five distinct ranks, no run, mixed suits
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.distinct() == 5
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};

    fn analyse(cards: [(Rank, Suit); 5]) -> HandAnalysis {
        HandAnalysis::new(&cards.map(|(r, s)| Card::new(r, s)))
    }

    #[test]
    fn detectors_are_listed_strongest_first() {
        let cats: Vec<Category> = DETECTORS.iter().map(|d| d.category()).collect();
        assert_eq!(cats, Category::ALL.to_vec());
    }

    #[test]
    fn royal_needs_broadway() {
        use Rank::*;
        let royal = analyse([
            (Ten, Suit::Spades),
            (Jack, Suit::Spades),
            (Queen, Suit::Spades),
            (King, Suit::Spades),
            (Ace, Suit::Spades),
        ]);
        assert!(RoyalFlushDetector.detect(&royal));

        let steel_wheel = analyse([
            (Ace, Suit::Spades),
            (Two, Suit::Spades),
            (Three, Suit::Spades),
            (Four, Suit::Spades),
            (Five, Suit::Spades),
        ]);
        assert!(!RoyalFlushDetector.detect(&steel_wheel));
        assert!(StraightFlushDetector.detect(&steel_wheel));
    }

    #[test]
    fn lower_detectors_also_match_stronger_hands() {
        use Rank::*;
        let sf = analyse([
            (Nine, Suit::Hearts),
            (Ten, Suit::Hearts),
            (Jack, Suit::Hearts),
            (Queen, Suit::Hearts),
            (King, Suit::Hearts),
        ]);
        // Priority order, not exclusivity, picks the category.
        assert!(StraightFlushDetector.detect(&sf));
        assert!(FlushDetector.detect(&sf));
        assert!(StraightDetector.detect(&sf));
        assert!(HighCardDetector.detect(&sf));
    }

    #[test]
    fn full_house_is_not_trips_or_pair() {
        use Rank::*;
        let fh = analyse([
            (Ten, Suit::Hearts),
            (Ten, Suit::Diamonds),
            (Ten, Suit::Clubs),
            (Ace, Suit::Hearts),
            (Ace, Suit::Diamonds),
        ]);
        assert!(FullHouseDetector.detect(&fh));
        assert!(!ThreeOfAKindDetector.detect(&fh));
        assert!(!OnePairDetector.detect(&fh));
    }
}
