//! Trump-relative and trick-relative card comparisons.
//!
//! Both orderings are pure functions taking their context (trump suit,
//! led card) explicitly. They are strict weak orderings, not total
//! orders: two distinct off-trump cards of equal rank compare as a tie
//! (false in both directions), which never decides a trick because the
//! current best card always follows its own suit or is trump.

use crate::card::{Card, Rank, Suit};

// Strength bands. Within a band the face rank decides; the gaps keep
// bands disjoint for any rank value.
const RIGHT_BOWER: u16 = 1000;
const LEFT_BOWER: u16 = 500;
const TRUMP: u16 = 200;
const FOLLOWING: u16 = 100;

const fn face_points(rank: Rank) -> u16 {
    match rank {
        Rank::Nine => 9,
        Rank::Ten => 10,
        Rank::Jack => 11,
        Rank::Queen => 12,
        Rank::King => 13,
        Rank::Ace => 14,
    }
}

/// Strength of a card when only trump matters: right bower, then left
/// bower, then the remaining trump suit by rank, then everything else by
/// rank alone (suit is irrelevant off trump).
fn trump_strength(card: Card, trump: Suit) -> u16 {
    if card.is_right_bower(trump) {
        RIGHT_BOWER
    } else if card.is_left_bower(trump) {
        LEFT_BOWER
    } else if card.is_trump(trump) {
        TRUMP + face_points(card.rank)
    } else {
        face_points(card.rank)
    }
}

/// Strength of a card inside a trick: as [`trump_strength`], except that
/// a non-trump card following the led suit outranks any off-suit discard.
fn trick_strength(card: Card, led_suit: Suit, trump: Suit) -> u16 {
    if card.is_trump(trump) {
        trump_strength(card, trump)
    } else if card.effective_suit(trump) == led_suit {
        FOLLOWING + face_points(card.rank)
    } else {
        face_points(card.rank)
    }
}

/// Returns whether `a` ranks below `b` when `trump` is the trump suit.
///
/// Any trump card beats any non-trump card; among trump the order is
/// right bower, left bower, then Ace down to Nine of the trump suit;
/// off-trump cards compare by rank only.
#[must_use]
pub fn trump_less(a: Card, b: Card, trump: Suit) -> bool {
    trump_strength(a, trump) < trump_strength(b, trump)
}

/// Returns whether `a` loses to `b` in a trick where `led_card` was led.
///
/// Trump beats everything, a card following the led card's effective
/// suit beats an off-suit discard, and rank decides within each group.
/// Trick resolution scans the played cards with this relation: the first
/// card is the provisional best, and each later card replaces it iff the
/// current best is `trick_less` than it.
#[must_use]
pub fn trick_less(a: Card, b: Card, led_card: Card, trump: Suit) -> bool {
    let led_suit = led_card.effective_suit(trump);
    trick_strength(a, led_suit, trump) < trick_strength(b, led_suit, trump)
}
