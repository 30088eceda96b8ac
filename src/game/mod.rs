//! Game orchestration: dealing, trump negotiation, trick play, and
//! scoring.

use std::io::Write;

use crate::card::{Card, Suit};
use crate::error::GameError;
use crate::options::GameOptions;
use crate::pack::Pack;
use crate::player::{Player, TrumpRound};
use crate::result::{GameWinner, Team};

mod trick;

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 4;

/// Cards dealt to each seat across the two passes, starting left of the
/// dealer.
const DEAL_PASSES: [[usize; PLAYER_COUNT]; 2] = [[3, 2, 3, 2], [2, 3, 2, 3]];

/// A euchre game between four players over one pack.
///
/// The game owns the pack and the players. It announces every event
/// (deals, passes, plays, trick and hand winners, scores) to the writer
/// passed to [`Game::play`]; given the same pack order and options two
/// runs produce byte-identical announcements.
pub struct Game {
    pack: Pack,
    options: GameOptions,
    players: Vec<Box<dyn Player>>,
    dealer: usize,
    hand_number: u32,
    points: [u32; 2],
}

impl Game {
    /// Creates a game over a pack and exactly four players.
    ///
    /// Seats 0 and 2 partner against seats 1 and 3; seat 0 deals the
    /// first hand.
    ///
    /// # Panics
    ///
    /// Panics unless exactly four players are supplied.
    #[must_use]
    pub fn new(pack: Pack, options: GameOptions, players: Vec<Box<dyn Player>>) -> Self {
        assert_eq!(
            players.len(),
            PLAYER_COUNT,
            "a euchre game needs exactly four players"
        );
        Self {
            pack,
            options,
            players,
            dealer: 0,
            hand_number: 0,
            points: [0, 0],
        }
    }

    /// Plays hands until one team reaches the configured score and
    /// returns the winner. Every announcement is written to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing an announcement fails or the pack is
    /// exhausted mid-deal (impossible with a well-formed 24-card pack).
    pub fn play(&mut self, out: &mut impl Write) -> Result<GameWinner, GameError> {
        let goal = self.options.points_to_win;
        while self.points[0] < goal && self.points[1] < goal {
            self.play_hand(out)?;
        }

        let team = if self.points[0] >= goal {
            Team::EvenSeats
        } else {
            Team::OddSeats
        };
        let [first, second] = team.seats();
        writeln!(
            out,
            "{} and {} win!",
            self.players[first].name(),
            self.players[second].name()
        )?;
        Ok(GameWinner {
            team,
            points: self.points[team.index()],
        })
    }

    fn play_hand(&mut self, out: &mut impl Write) -> Result<(), GameError> {
        writeln!(out, "Hand {}", self.hand_number)?;
        writeln!(out, "{} deals", self.players[self.dealer].name())?;

        if self.options.shuffle {
            self.pack.shuffle();
        } else {
            self.pack.reset();
        }
        self.deal()?;

        let upcard = self.pack.deal_one()?;
        writeln!(out, "{upcard} turned up")?;

        let (maker, trump) = self.negotiate_trump(upcard, out)?;
        writeln!(out)?;

        let tricks = self.play_tricks(trump, out)?;
        self.score_hand(maker, tricks, out)?;
        self.write_scores(out)?;

        self.dealer = (self.dealer + 1) % PLAYER_COUNT;
        self.hand_number += 1;
        Ok(())
    }

    /// Deals five cards to every seat, 3-2-3-2 then 2-3-2-3, starting
    /// left of the dealer.
    fn deal(&mut self) -> Result<(), GameError> {
        for pass in DEAL_PASSES {
            for (offset, count) in (1..=PLAYER_COUNT).zip(pass) {
                let seat = (self.dealer + offset) % PLAYER_COUNT;
                for _ in 0..count {
                    let card = self.pack.deal_one()?;
                    self.players[seat].add_card(card);
                }
            }
        }
        Ok(())
    }

    /// Offers trump around the table, upcard suit first and its partner
    /// suit second. On a first-round order-up the dealer picks up the
    /// upcard and discards.
    fn negotiate_trump(
        &mut self,
        upcard: Card,
        out: &mut impl Write,
    ) -> Result<(usize, Suit), GameError> {
        for round in [TrumpRound::Upcard, TrumpRound::NextSuit] {
            for offset in 1..=PLAYER_COUNT {
                let seat = (self.dealer + offset) % PLAYER_COUNT;
                let is_dealer = seat == self.dealer;
                if let Some(trump) = self.players[seat].make_trump(upcard, is_dealer, round) {
                    writeln!(out, "{} orders up {trump}", self.players[seat].name())?;
                    if round == TrumpRound::Upcard {
                        self.players[self.dealer].add_and_discard(upcard);
                    }
                    tracing::debug!(seat, trump = %trump, ?round, "trump made");
                    return Ok((seat, trump));
                }
                writeln!(out, "{} passes", self.players[seat].name())?;
            }
        }
        unreachable!("the dealer must order up in the second round")
    }

    fn score_hand(
        &mut self,
        maker: usize,
        tricks: [u32; 2],
        out: &mut impl Write,
    ) -> Result<(), GameError> {
        let makers = Team::of_seat(maker);
        let taken = tricks[makers.index()];
        if taken >= 3 {
            if taken == 5 {
                writeln!(out, "march!")?;
                self.points[makers.index()] += 2;
            } else {
                self.points[makers.index()] += 1;
            }
        } else {
            writeln!(out, "euchred!")?;
            self.points[makers.opponent().index()] += 2;
        }
        Ok(())
    }

    fn write_scores(&self, out: &mut impl Write) -> Result<(), GameError> {
        for team in [Team::EvenSeats, Team::OddSeats] {
            let [first, second] = team.seats();
            writeln!(
                out,
                "{} and {} have {} points",
                self.players[first].name(),
                self.players[second].name(),
                self.points[team.index()]
            )?;
        }
        writeln!(out)?;
        Ok(())
    }
}
