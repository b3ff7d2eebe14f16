use crate::cards::{Card, Rank, Suit};
use std::fmt;

/// Poker hand category from weakest to strongest.
///
/// The derived ordering is the strength ranking; [`Category::rank`] gives the
/// same order as a number from 1 (High Card) to 10 (Royal Flush).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

const fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

use Rank::{Ace, Eight, Jack, King, Nine, Queen, Ten, Two};
use Suit::{Clubs, Diamonds, Hearts, Spades};

impl Category {
    /// Every category, strongest first.
    pub const ALL: [Category; 10] = [
        Category::RoyalFlush,
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::OnePair,
        Category::HighCard,
    ];

    /// Numeric strength, 1..=10.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }

    /// Chance, in percent, that a random five-card deal lands in this category.
    pub const fn probability(self) -> f64 {
        match self {
            Category::HighCard => 50.1,
            Category::OnePair => 42.3,
            Category::TwoPair => 4.75,
            Category::ThreeOfAKind => 2.11,
            Category::Straight => 0.39,
            Category::Flush => 0.196,
            Category::FullHouse => 0.14,
            Category::FourOfAKind => 0.0240,
            Category::StraightFlush => 0.00139,
            Category::RoyalFlush => 0.000154,
        }
    }

    /// The "1 in N" odds matching [`Category::probability`].
    pub fn odds(self) -> f64 {
        100.0 / self.probability()
    }

    /// A representative hand of this category.
    pub const fn example(self) -> [Card; 5] {
        match self {
            Category::RoyalFlush => [
                c(Ten, Hearts),
                c(Jack, Hearts),
                c(Queen, Hearts),
                c(King, Hearts),
                c(Ace, Hearts),
            ],
            Category::StraightFlush => [
                c(Nine, Hearts),
                c(Ten, Hearts),
                c(Jack, Hearts),
                c(Queen, Hearts),
                c(King, Hearts),
            ],
            Category::FourOfAKind => [
                c(Ten, Hearts),
                c(Ten, Diamonds),
                c(Ten, Spades),
                c(Ten, Clubs),
                c(Ace, Hearts),
            ],
            Category::FullHouse => [
                c(Ten, Hearts),
                c(Ten, Diamonds),
                c(Ten, Clubs),
                c(Ace, Hearts),
                c(Ace, Diamonds),
            ],
            Category::Flush => [
                c(Ten, Hearts),
                c(Jack, Hearts),
                c(Queen, Hearts),
                c(King, Hearts),
                c(Two, Hearts),
            ],
            Category::Straight => [
                c(Nine, Hearts),
                c(Ten, Diamonds),
                c(Jack, Clubs),
                c(Queen, Hearts),
                c(King, Hearts),
            ],
            Category::ThreeOfAKind => [
                c(Ten, Hearts),
                c(Ten, Clubs),
                c(Ten, Diamonds),
                c(King, Hearts),
                c(Ace, Hearts),
            ],
            Category::TwoPair => [
                c(Ten, Hearts),
                c(Ten, Diamonds),
                c(Jack, Clubs),
                c(Jack, Hearts),
                c(King, Hearts),
            ],
            Category::OnePair => [
                c(Ten, Hearts),
                c(Ten, Diamonds),
                c(Jack, Clubs),
                c(Queen, Hearts),
                c(King, Hearts),
            ],
            Category::HighCard => [
                c(Ten, Hearts),
                c(Jack, Diamonds),
                c(Eight, Clubs),
                c(Queen, Hearts),
                c(King, Hearts),
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
