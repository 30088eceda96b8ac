//! Player strategies: the automated simple policy and the human stub.

use core::cmp::Ordering;
use core::str::FromStr;

use crate::card::{Card, Suit};
use crate::error::ParsePlayerTypeError;
use crate::hand::Hand;
use crate::ranking::trump_less;

/// Maximum number of cards a player holds during play.
pub const MAX_HAND_SIZE: usize = 5;

/// The trump-making round being offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrumpRound {
    /// First round: ordering up the upcard's printed suit.
    Upcard,
    /// Second round: calling the upcard suit's same-color partner.
    NextSuit,
}

impl TrumpRound {
    /// The suit under consideration in this round for the given upcard.
    #[must_use]
    pub fn considered_suit(self, upcard: Card) -> Suit {
        match self {
            Self::Upcard => upcard.suit,
            Self::NextSuit => upcard.suit.next(),
        }
    }
}

/// A euchre player: hand management plus the decisions the game loop
/// needs.
///
/// Every card-returning operation removes exactly the returned card from
/// the hand. Variants without an automated policy (see [`HumanPlayer`])
/// abort loudly when asked for a decision; that is a programming error
/// in the caller, not a runtime condition to handle.
pub trait Player {
    /// The player's table name.
    fn name(&self) -> &str;

    /// Adds a dealt card to the hand.
    fn add_card(&mut self, card: Card);

    /// Decides whether to order up trump this round.
    ///
    /// Returns the suit ordered up, or `None` to pass. The dealer must
    /// not pass in the [`TrumpRound::NextSuit`] round.
    fn make_trump(&self, upcard: Card, is_dealer: bool, round: TrumpRound) -> Option<Suit>;

    /// Picks up the upcard and discards one card, restoring the hand to
    /// five cards.
    fn add_and_discard(&mut self, upcard: Card);

    /// Removes and returns the card to lead the next trick with.
    fn lead_card(&mut self, trump: Suit) -> Card;

    /// Removes and returns the card to play on `led_card`.
    ///
    /// Implementations must follow the led card's effective suit when
    /// the hand holds any card of it.
    fn play_card(&mut self, led_card: Card, trump: Suit) -> Card;
}

/// The strategy variant used for a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerType {
    /// Automated heuristic player.
    Simple,
    /// Placeholder for an interactively driven player.
    Human,
}

impl FromStr for PlayerType {
    type Err = ParsePlayerTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Simple" => Ok(Self::Simple),
            "Human" => Ok(Self::Human),
            _ => Err(ParsePlayerTypeError(s.to_owned())),
        }
    }
}

/// Creates a player of the given strategy type.
#[must_use]
pub fn new_player(name: &str, kind: PlayerType) -> Box<dyn Player> {
    match kind {
        PlayerType::Simple => Box::new(SimplePlayer::new(name)),
        PlayerType::Human => Box::new(HumanPlayer::new(name)),
    }
}

/// Index of the lowest card by the context-free order.
fn position_of_min(cards: &[Card]) -> usize {
    cards
        .iter()
        .enumerate()
        .min_by_key(|(_, card)| **card)
        .map(|(index, _)| index)
        .expect("hand is empty")
}

/// [`trump_less`] lifted to an `Ordering` for max-element searches.
fn trump_cmp(a: Card, b: Card, trump: Suit) -> Ordering {
    if trump_less(a, b, trump) {
        Ordering::Less
    } else if trump_less(b, a, trump) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// An automated player.
///
/// Policy choices at the free choice-points: the upcard pickup discards
/// the lowest card by context-free order, leads play the highest
/// non-trump card (an all-trump hand leads its strongest trump), and
/// follows play the highest card of the led suit or discard the
/// context-free minimum.
#[derive(Debug, Clone)]
pub struct SimplePlayer {
    name: String,
    hand: Hand,
}

impl SimplePlayer {
    /// Creates a simple player with the given name and an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }
}

impl Player for SimplePlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn add_card(&mut self, card: Card) {
        self.hand.add(card);
    }

    fn make_trump(&self, upcard: Card, is_dealer: bool, round: TrumpRound) -> Option<Suit> {
        let suit = round.considered_suit(upcard);
        // Screw the dealer: stuck with the next suit in round two.
        if round == TrumpRound::NextSuit && is_dealer {
            return Some(suit);
        }
        let strong = self
            .hand
            .cards()
            .iter()
            .filter(|card| card.is_trump(suit) && card.is_face_or_ace())
            .count();
        let needed = match round {
            TrumpRound::Upcard => 2,
            TrumpRound::NextSuit => 1,
        };
        (strong >= needed).then_some(suit)
    }

    fn add_and_discard(&mut self, upcard: Card) {
        self.hand.add(upcard);
        let lowest = position_of_min(self.hand.cards());
        self.hand.take(lowest);
    }

    fn lead_card(&mut self, trump: Suit) -> Card {
        let cards = self.hand.cards();
        let index = cards
            .iter()
            .enumerate()
            .filter(|(_, card)| !card.is_trump(trump))
            .max_by_key(|(_, card)| **card)
            .map_or_else(
                || {
                    // All trump: lead the strongest, bowers first.
                    cards
                        .iter()
                        .enumerate()
                        .max_by(|(_, a), (_, b)| trump_cmp(**a, **b, trump))
                        .map(|(index, _)| index)
                        .expect("cannot lead from an empty hand")
                },
                |(index, _)| index,
            );
        self.hand.take(index)
    }

    fn play_card(&mut self, led_card: Card, trump: Suit) -> Card {
        let led_suit = led_card.effective_suit(trump);
        let cards = self.hand.cards();
        let index = cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.effective_suit(trump) == led_suit)
            .max_by_key(|(_, card)| **card)
            .map_or_else(|| position_of_min(cards), |(index, _)| index);
        self.hand.take(index)
    }
}

/// A seat reserved for interactive input.
///
/// Receives cards like any player, but every decision aborts: wiring a
/// human up to real input is outside this engine, and silently inventing
/// a play would corrupt the game.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
    hand: Hand,
}

impl HumanPlayer {
    /// Creates a human placeholder with the given name and an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn add_card(&mut self, card: Card) {
        self.hand.add(card);
    }

    fn make_trump(&self, _upcard: Card, _is_dealer: bool, _round: TrumpRound) -> Option<Suit> {
        unimplemented!("human players require interactive input")
    }

    fn add_and_discard(&mut self, _upcard: Card) {
        unimplemented!("human players require interactive input")
    }

    fn lead_card(&mut self, _trump: Suit) -> Card {
        unimplemented!("human players require interactive input")
    }

    fn play_card(&mut self, _led_card: Card, _trump: Suit) -> Card {
        unimplemented!("human players require interactive input")
    }
}
