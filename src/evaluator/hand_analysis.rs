use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let ranks: [Rank; 5] = cards.map(Card::rank);
        Self {
            rank_groups: RankGroups::from_ranks(&ranks),
            suit_info: SuitInfo::detect(cards),
            straight_info: StraightInfo::detect(&ranks),
        }
    }

    pub fn is_straight_flush(&self) -> bool {
        self.suit_info.is_flush() && self.straight_info.is_straight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    #[test]
    fn royal_flush_analysis() {
        let cards = [
            Card::new(Rank::Ten, Suit::Hearts),
            Card::new(Rank::Jack, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Hearts),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(analysis.is_straight_flush());
        assert!(analysis.straight_info.is_broadway());
        assert_eq!(analysis.rank_groups.distinct(), 5);
    }

    #[test]
    fn full_house_analysis() {
        let cards = [
            Card::new(Rank::Ten, Suit::Hearts),
            Card::new(Rank::Ten, Suit::Diamonds),
            Card::new(Rank::Ten, Suit::Clubs),
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Diamonds),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert_eq!(analysis.rank_groups.shape(), vec![3, 2]);
        assert!(!analysis.suit_info.is_flush());
        assert!(!analysis.straight_info.is_straight());
    }
}
