//! The euchre pack: 24 cards, dealing, and the deterministic in-shuffle.

use std::io::BufRead;

use crate::card::{Card, Rank, Suit};
use crate::error::{DealError, PackError};

/// Number of cards in a euchre pack.
pub const PACK_SIZE: usize = 24;

/// How many in-shuffles one [`Pack::shuffle`] call applies.
const SHUFFLE_PASSES: usize = 7;

/// An ordered pack of 24 cards with a deal cursor.
///
/// The pack owns one of each rank/suit combination. Shuffling permutes
/// the order without ever adding or dropping a card, and is fully
/// deterministic so a game can be replayed from the same pack file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pack {
    cards: [Card; PACK_SIZE],
    next: usize,
}

impl Pack {
    /// Creates a pack in standard order: suits Spades, Hearts, Clubs,
    /// Diamonds, each running Nine up to Ace.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = [Card::default(); PACK_SIZE];
        let mut index = 0;
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards[index] = Card::new(rank, suit);
                index += 1;
            }
        }
        Self { cards, next: 0 }
    }

    /// Reads a pack from a stream of 24 whitespace-separated
    /// `<Rank> of <Suit>` entries, in the order that becomes the deal
    /// order. Input past the 24th card is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader fails, an entry does not parse,
    /// or the stream ends early.
    pub fn from_reader(mut reader: impl BufRead) -> Result<Self, PackError> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;

        let mut tokens = input.split_whitespace();
        let mut cards = [Card::default(); PACK_SIZE];
        for (index, slot) in cards.iter_mut().enumerate() {
            let entry: Vec<&str> = tokens.by_ref().take(3).collect();
            if entry.len() < 3 {
                return Err(PackError::Truncated(index));
            }
            *slot = entry
                .join(" ")
                .parse()
                .map_err(|source| PackError::Card { index, source })?;
        }
        Ok(Self { cards, next: 0 })
    }

    /// Deals the next card and advances the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyPack`] on every call once all 24 cards
    /// have been dealt.
    pub fn deal_one(&mut self) -> Result<Card, DealError> {
        if self.is_empty() {
            return Err(DealError::EmptyPack);
        }
        let card = self.cards[self.next];
        self.next += 1;
        Ok(card)
    }

    /// Moves the cursor back to the first card without changing the order.
    pub const fn reset(&mut self) {
        self.next = 0;
    }

    /// Whether all 24 cards have been dealt.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.next >= PACK_SIZE
    }

    /// Number of cards still available to deal.
    #[must_use]
    pub const fn cards_remaining(&self) -> usize {
        PACK_SIZE - self.next
    }

    /// Shuffles the pack with seven in-shuffles, then resets the cursor.
    ///
    /// One in-shuffle splits the pack into halves and interleaves them
    /// bottom-half first: `bottom[0], top[0], bottom[1], top[1], …`.
    /// No randomness is involved; the same input order always produces
    /// the same output order.
    pub fn shuffle(&mut self) {
        const MID: usize = PACK_SIZE / 2;
        for _ in 0..SHUFFLE_PASSES {
            let mut shuffled = [Card::default(); PACK_SIZE];
            for k in 0..MID {
                shuffled[2 * k] = self.cards[MID + k];
                shuffled[2 * k + 1] = self.cards[k];
            }
            self.cards = shuffled;
        }
        self.reset();
        tracing::debug!(passes = SHUFFLE_PASSES, "pack shuffled");
    }
}

impl Default for Pack {
    fn default() -> Self {
        Self::new()
    }
}
