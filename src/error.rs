use crate::deck::DealError;
use crate::hand::HandError;

/// Any contract violation reported by the library.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] DealError),
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
