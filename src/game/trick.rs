//! Trick play and resolution.

use std::io::Write;

use crate::card::Suit;
use crate::error::GameError;
use crate::ranking::trick_less;
use crate::result::Team;

use super::{Game, PLAYER_COUNT};

/// Tricks in one hand.
const TRICKS_PER_HAND: usize = 5;

impl Game {
    /// Plays the five tricks of a hand and returns the tricks taken per
    /// team. The seat left of the dealer leads the first trick; each
    /// winner leads the next.
    pub(super) fn play_tricks(
        &mut self,
        trump: Suit,
        out: &mut impl Write,
    ) -> Result<[u32; 2], GameError> {
        let mut tricks = [0_u32; 2];
        let mut leader = (self.dealer + 1) % PLAYER_COUNT;
        for _ in 0..TRICKS_PER_HAND {
            leader = self.play_trick(leader, trump, out)?;
            tricks[Team::of_seat(leader).index()] += 1;
        }

        let winners = if tricks[0] > tricks[1] {
            Team::EvenSeats
        } else {
            Team::OddSeats
        };
        let [first, second] = winners.seats();
        writeln!(
            out,
            "{} and {} win the hand",
            self.players[first].name(),
            self.players[second].name()
        )?;
        Ok(tricks)
    }

    /// Plays one trick and returns the winning seat.
    ///
    /// The led card is the provisional best; each card played after it
    /// replaces the best iff the best ranks below it under the
    /// trick-relative ordering.
    fn play_trick(
        &mut self,
        leader: usize,
        trump: Suit,
        out: &mut impl Write,
    ) -> Result<usize, GameError> {
        let led_card = self.players[leader].lead_card(trump);
        writeln!(out, "{led_card} led by {}", self.players[leader].name())?;

        let mut winning_seat = leader;
        let mut winning_card = led_card;
        for offset in 1..PLAYER_COUNT {
            let seat = (leader + offset) % PLAYER_COUNT;
            let played = self.players[seat].play_card(led_card, trump);
            writeln!(out, "{played} played by {}", self.players[seat].name())?;
            if trick_less(winning_card, played, led_card, trump) {
                winning_card = played;
                winning_seat = seat;
            }
        }

        writeln!(out, "{} takes the trick", self.players[winning_seat].name())?;
        writeln!(out)?;
        tracing::debug!(seat = winning_seat, card = %winning_card, "trick resolved");
        Ok(winning_seat)
    }
}
