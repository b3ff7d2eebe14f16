use crate::cards::{format_cards, parse_cards, Card, CardParseError};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

/// A hand that is not exactly five distinct, well-formed cards.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly 5 cards, got {0}")]
    WrongCount(usize),
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
    #[error("card parse error: {0}")]
    CardParse(#[from] CardParseError),
}

/// Five distinct cards, evaluated together.
///
/// ```
/// use poker_sim::hand::Hand;
///
/// let hand: Hand = "10H JH QH KH AH".parse().unwrap();
/// assert_eq!(hand.cards().len(), 5);
/// assert!("10H 10H QH KH AH".parse::<Hand>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn try_new(cards: [Card; HAND_SIZE]) -> Result<Self, HandError> {
        let mut seen = HashSet::with_capacity(HAND_SIZE);
        for card in cards {
            if !seen.insert(card) {
                return Err(HandError::DuplicateCard(card));
            }
        }
        Ok(Self(cards))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            slice.try_into().map_err(|_| HandError::WrongCount(slice.len()))?;
        Self::try_new(cards)
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0.contains(&card)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", format_cards(&self.0))
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        Self::from_slice(&cards)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;

    fn try_from(slice: &[Card]) -> Result<Self, Self::Error> {
        Self::from_slice(slice)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::from_slice(&cards)
    }
}
