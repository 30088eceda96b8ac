//! Error types for pack, parsing, and game operations.

use thiserror::Error;

/// Errors that can occur when parsing a card from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The rank token is not one of the six canonical rank names.
    #[error("unknown rank `{0}`")]
    UnknownRank(String),
    /// The suit token is not one of the four canonical suit names.
    #[error("unknown suit `{0}`")]
    UnknownSuit(String),
    /// The input is not of the form `<Rank> of <Suit>`.
    #[error("malformed card `{0}`, expected `<Rank> of <Suit>`")]
    Malformed(String),
}

/// Errors that can occur while dealing from the pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// All 24 cards have been dealt.
    #[error("no cards left in the pack")]
    EmptyPack,
}

/// Errors that can occur while reading a pack from a stream.
#[derive(Debug, Error)]
pub enum PackError {
    /// The underlying reader failed.
    #[error("failed to read pack input")]
    Io(#[from] std::io::Error),
    /// A card entry could not be parsed.
    #[error("pack card {index}: {source}")]
    Card {
        /// Zero-based position of the bad entry in the stream.
        index: usize,
        /// The underlying parse failure.
        source: ParseCardError,
    },
    /// The stream ended before 24 cards were read.
    #[error("pack input ended after {0} of 24 cards")]
    Truncated(usize),
}

/// Error returned when a player type token is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown player type `{0}`, expected `Simple` or `Human`")]
pub struct ParsePlayerTypeError(pub String);

/// Errors surfaced while playing a game.
#[derive(Debug, Error)]
pub enum GameError {
    /// The pack ran out of cards mid-deal.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// Writing an announcement failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
