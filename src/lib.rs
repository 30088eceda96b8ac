//! A euchre game engine with deterministic replay support.
//!
//! The crate provides the trump-aware card model ([`Card`] and the
//! [`ranking`] comparisons), a 24-card [`Pack`] with a deterministic
//! in-shuffle, pluggable player strategies, and a [`Game`] orchestrator
//! that plays full games and announces every event to a writer.
//!
//! # Example
//!
//! ```
//! use euchre::{Game, GameOptions, Pack, PlayerType, new_player};
//!
//! let players = ["North", "East", "South", "West"]
//!     .map(|name| new_player(name, PlayerType::Simple));
//! let options = GameOptions::default()
//!     .with_shuffle(false)
//!     .with_points_to_win(1);
//! let mut game = Game::new(Pack::new(), options, Vec::from(players));
//!
//! let mut transcript = Vec::new();
//! let winner = game.play(&mut transcript).expect("writes to a Vec succeed");
//! println!("{:?} won with {} points", winner.team, winner.points);
//! ```

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pack;
pub mod player;
pub mod ranking;
pub mod result;

// Re-export main types
pub use card::{Card, Rank, Suit};
pub use error::{DealError, GameError, PackError, ParseCardError, ParsePlayerTypeError};
pub use game::{Game, PLAYER_COUNT};
pub use hand::Hand;
pub use options::GameOptions;
pub use pack::{PACK_SIZE, Pack};
pub use player::{
    HumanPlayer, MAX_HAND_SIZE, Player, PlayerType, SimplePlayer, TrumpRound, new_player,
};
pub use ranking::{trick_less, trump_less};
pub use result::{GameWinner, Team};
