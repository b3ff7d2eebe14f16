//! poker-sim: five-card poker hand simulator
//!
//! Goals:
//! - Build a standard deck and deal random hands from an injected RNG
//! - Classify five-card hands into the ten standard categories
//! - Compare two hands by category
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start
//! ```
//! use poker_sim::deck::{build_deck, seeded_rng};
//! use poker_sim::evaluator::{evaluate, Category};
//! use poker_sim::hand::Hand;
//! use poker_sim::showdown::{play, Winner};
//!
//! let deck = build_deck();
//! let mut rng = seeded_rng(42);
//! let dealt = deck.deal_hand(&mut rng).unwrap();
//! let _category = evaluate(&dealt);
//!
//! let royal: Hand = "10H JH QH KH AH".parse().unwrap();
//! let quads: Hand = "10H 10D 10S 10C AH".parse().unwrap();
//! assert_eq!(evaluate(&quads), Category::FourOfAKind);
//! assert_eq!(play(&royal, &quads).winner, Winner::Hand1);
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin poker-sim -- info --probability
//! cargo run --bin poker-sim -- deal --hands 3
//! ```

pub mod cards;
pub mod deck;
pub mod error;
pub mod evaluator;
pub mod hand;
pub mod showdown;
pub mod table;

pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
