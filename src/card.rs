//! Card types and the trump-aware card model.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card rank. Euchre plays with Nine through Ace only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Rank {
    /// Nine, the lowest rank.
    #[default]
    Nine,
    /// Ten.
    Ten,
    /// Jack. Becomes a bower when its suit matches or partners trump.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace, the highest rank.
    Ace,
}

impl Rank {
    /// All ranks in ascending face order.
    pub const ALL: [Self; 6] = [
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// The canonical name used in the text encoding.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Nine" => Ok(Self::Nine),
            "Ten" => Ok(Self::Ten),
            "Jack" => Ok(Self::Jack),
            "Queen" => Ok(Self::Queen),
            "King" => Ok(Self::King),
            "Ace" => Ok(Self::Ace),
            _ => Err(ParseCardError::UnknownRank(s.to_owned())),
        }
    }
}

/// Card suit. The declaration order is the pack's enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Suit {
    /// Spades (black, partners Clubs).
    #[default]
    Spades,
    /// Hearts (red, partners Diamonds).
    Hearts,
    /// Clubs (black, partners Spades).
    Clubs,
    /// Diamonds (red, partners Hearts).
    Diamonds,
}

impl Suit {
    /// All suits in pack enumeration order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Clubs, Self::Diamonds];

    /// Returns the same-color partner suit.
    ///
    /// The mapping is an involution with no fixed point:
    /// Spades↔Clubs and Hearts↔Diamonds.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Spades => Self::Clubs,
            Self::Hearts => Self::Diamonds,
            Self::Clubs => Self::Spades,
            Self::Diamonds => Self::Hearts,
        }
    }

    /// The canonical name used in the text encoding.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
        }
    }

    /// Tie-break priority for the context-free card order.
    const fn order_key(self) -> u8 {
        match self {
            Self::Spades => 0,
            Self::Hearts => 1,
            Self::Diamonds => 2,
            Self::Clubs => 3,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Spades" => Ok(Self::Spades),
            "Hearts" => Ok(Self::Hearts),
            "Clubs" => Ok(Self::Clubs),
            "Diamonds" => Ok(Self::Diamonds),
            _ => Err(ParseCardError::UnknownSuit(s.to_owned())),
        }
    }
}

/// A playing card.
///
/// Plain value type: equality is structural, copies are free. The default
/// card (Nine of Spades) is a placeholder for not-yet-assigned slots and
/// carries no special meaning in game logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The printed suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// The suit this card counts as once `trump` is fixed.
    ///
    /// Equal to the printed suit for every card except the left bower,
    /// which counts as the trump suit.
    #[must_use]
    pub fn effective_suit(self, trump: Suit) -> Suit {
        if self.is_left_bower(trump) { trump } else { self.suit }
    }

    /// Whether this card is trump: printed trump suit or the left bower.
    #[must_use]
    pub fn is_trump(self, trump: Suit) -> bool {
        self.effective_suit(trump) == trump
    }

    /// Whether this card is the Jack of the trump suit.
    #[must_use]
    pub fn is_right_bower(self, trump: Suit) -> bool {
        self.rank == Rank::Jack && self.suit == trump
    }

    /// Whether this card is the Jack of the trump suit's same-color partner.
    #[must_use]
    pub fn is_left_bower(self, trump: Suit) -> bool {
        self.rank == Rank::Jack && self.suit == trump.next()
    }

    /// Whether this card is a Jack, Queen, King, or Ace.
    #[must_use]
    pub fn is_face_or_ace(self) -> bool {
        self.rank >= Rank::Jack
    }
}

/// Context-free order: rank first, then the fixed suit priority
/// Spades < Hearts < Diamonds < Clubs. Knows nothing about trump and is
/// never used for trick resolution.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.suit.order_key().cmp(&other.suit.order_key()))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let (Some(rank), Some(of), Some(suit), None) =
            (tokens.next(), tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(ParseCardError::Malformed(s.to_owned()));
        };
        if of != "of" {
            return Err(ParseCardError::Malformed(s.to_owned()));
        }
        Ok(Self::new(rank.parse()?, suit.parse()?))
    }
}
