use crate::cards::Rank;

/// Whether five ranks form a run, and the run's bounds.
///
/// The wheel (A-2-3-4-5) counts as a straight with Five high and Ace low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub high: Option<Rank>,
    pub low: Option<Rank>,
}

impl StraightInfo {
    const NONE: StraightInfo = StraightInfo { high: None, low: None };

    /// Ranks may be in any order.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut sorted = *ranks;
        sorted.sort_unstable();

        // Any repeated rank rules out a run.
        if sorted.windows(2).any(|w| w[0] == w[1]) {
            return Self::NONE;
        }

        if sorted[4].value() - sorted[0].value() == 4 {
            return StraightInfo { high: Some(sorted[4]), low: Some(sorted[0]) };
        }

        if sorted == [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace] {
            return StraightInfo { high: Some(Rank::Five), low: Some(Rank::Ace) };
        }

        Self::NONE
    }

    pub fn is_straight(&self) -> bool {
        self.high.is_some()
    }

    /// Ten through Ace.
    pub fn is_broadway(&self) -> bool {
        self.low == Some(Rank::Ten) && self.high == Some(Rank::Ace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;

    #[test]
    fn regular_straight() {
        let info = StraightInfo::detect(&[King, Queen, Jack, Ten, Nine]);
        assert!(info.is_straight());
        assert_eq!(info.high, Some(King));
        assert_eq!(info.low, Some(Nine));
        assert!(!info.is_broadway());
    }

    #[test]
    fn ace_high_straight_is_broadway() {
        let info = StraightInfo::detect(&[Ace, King, Queen, Jack, Ten]);
        assert!(info.is_straight());
        assert!(info.is_broadway());
    }

    #[test]
    fn wheel_is_five_high() {
        let info = StraightInfo::detect(&[Ace, Two, Three, Four, Five]);
        assert!(info.is_straight());
        assert_eq!(info.high, Some(Five));
        assert!(!info.is_broadway());
    }

    #[test]
    fn no_wrap_around() {
        let info = StraightInfo::detect(&[Queen, King, Ace, Two, Three]);
        assert!(!info.is_straight());
    }

    #[test]
    fn gaps_and_pairs_are_not_straights() {
        assert!(!StraightInfo::detect(&[Ace, King, Queen, Jack, Nine]).is_straight());
        assert!(!StraightInfo::detect(&[Ten, Ten, Jack, Queen, King]).is_straight());
    }

    #[test]
    fn unsorted_input() {
        let info = StraightInfo::detect(&[Nine, King, Ten, Jack, Queen]);
        assert_eq!(info.high, Some(King));
    }
}
