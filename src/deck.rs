use crate::cards::{Card, Rank, Suit};
use crate::hand::{Hand, HAND_SIZE};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// An invalid request to the dealer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DealError {
    #[error("cannot deal from an empty deck")]
    EmptyDeck,
    #[error("hand size must be positive")]
    ZeroCards,
    #[error("requested {requested} cards but the deck holds {available}")]
    NotEnoughCards { requested: usize, available: usize },
    #[error("duplicate card in deck: {0}")]
    DuplicateCard(Card),
}

/// A collection of unique cards; [`Deck::standard`] gives the full 52.
///
/// Dealing borrows the deck and never removes cards from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use poker_sim::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    /// Build a deck from arbitrary unique cards.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DealError> {
        let mut seen = HashSet::with_capacity(cards.len());
        if let Some(dup) = cards.iter().copied().find(|c| !seen.insert(*c)) {
            return Err(DealError::DuplicateCard(dup));
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Sample `n` distinct cards uniformly at random.
    pub fn deal<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<Card>, DealError> {
        if self.cards.is_empty() {
            return Err(DealError::EmptyDeck);
        }
        if n == 0 {
            return Err(DealError::ZeroCards);
        }
        if n > self.cards.len() {
            return Err(DealError::NotEnoughCards { requested: n, available: self.cards.len() });
        }
        let cards: Vec<Card> = self.cards.choose_multiple(rng, n).copied().collect();
        log::debug!("dealt {} of {} cards", cards.len(), self.cards.len());
        Ok(cards)
    }

    /// Deal a five-card [`Hand`].
    pub fn deal_hand<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Hand, DealError> {
        let cards = self.deal(HAND_SIZE, rng)?;
        // Deck cards are unique, so this only fails on a corrupted deck.
        Hand::from_slice(&cards).map_err(|_| DealError::DuplicateCard(cards[0]))
    }

    /// Deal `count` hands, each sampled independently from the full deck.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Hand>, DealError> {
        let hands = (0..count).map(|_| self.deal_hand(rng)).collect::<Result<Vec<_>, _>>()?;
        log::debug!("simulated {} independent hands", hands.len());
        Ok(hands)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

/// Build a fresh standard 52-card deck.
pub fn build_deck() -> Deck {
    Deck::standard()
}

/// Sample `n` distinct cards from `deck`; see [`Deck::deal`].
///
/// ```
/// use poker_sim::deck::{build_deck, deal, seeded_rng};
///
/// let deck = build_deck();
/// let mut rng = seeded_rng(7);
/// let cards = deal(&deck, 5, &mut rng).unwrap();
/// assert_eq!(cards.len(), 5);
/// assert_eq!(deck.len(), 52);
/// assert!(deal(&deck, 53, &mut rng).is_err());
/// ```
pub fn deal<R: Rng + ?Sized>(deck: &Deck, n: usize, rng: &mut R) -> Result<Vec<Card>, DealError> {
    deck.deal(n, rng)
}

/// Deal a single five-card hand; see [`Deck::deal_hand`].
pub fn deal_hand<R: Rng + ?Sized>(deck: &Deck, rng: &mut R) -> Result<Hand, DealError> {
    deck.deal_hand(rng)
}

/// Deal `count` independent hands; see [`Deck::simulate`].
pub fn simulate<R: Rng + ?Sized>(
    deck: &Deck,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Hand>, DealError> {
    deck.simulate(count, rng)
}

/// Reproducible random source for deals.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
