use crate::cards::{Card, Suit};

/// Whether all cards share one suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card; 5]) -> Self {
        let first = cards[0].suit();
        let flush_suit = cards.iter().all(|c| c.suit() == first).then_some(first);
        SuitInfo { flush_suit }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn flush() {
        let cards = [
            Card::new(Rank::Ten, Suit::Hearts),
            Card::new(Rank::Jack, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Two, Suit::Hearts),
        ];
        let info = SuitInfo::detect(&cards);
        assert!(info.is_flush());
        assert_eq!(info.flush_suit, Some(Suit::Hearts));
    }

    #[test]
    fn one_off_suit_breaks_flush() {
        let cards = [
            Card::new(Rank::Ten, Suit::Clubs),
            Card::new(Rank::Jack, Suit::Clubs),
            Card::new(Rank::Queen, Suit::Clubs),
            Card::new(Rank::King, Suit::Clubs),
            Card::new(Rank::Two, Suit::Spades),
        ];
        let info = SuitInfo::detect(&cards);
        assert!(!info.is_flush());
        assert_eq!(info.flush_suit, None);
    }
}
