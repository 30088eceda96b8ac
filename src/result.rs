//! Game outcome types.

/// One of the two partnerships at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    /// Seats 0 and 2.
    EvenSeats,
    /// Seats 1 and 3.
    OddSeats,
}

impl Team {
    /// The team the given seat belongs to.
    #[must_use]
    pub const fn of_seat(seat: usize) -> Self {
        if seat % 2 == 0 {
            Self::EvenSeats
        } else {
            Self::OddSeats
        }
    }

    /// The opposing team.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::EvenSeats => Self::OddSeats,
            Self::OddSeats => Self::EvenSeats,
        }
    }

    /// Index of this team in per-team arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::EvenSeats => 0,
            Self::OddSeats => 1,
        }
    }

    /// The two seats on this team.
    #[must_use]
    pub const fn seats(self) -> [usize; 2] {
        match self {
            Self::EvenSeats => [0, 2],
            Self::OddSeats => [1, 3],
        }
    }
}

/// The winning team and its final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameWinner {
    /// The team that reached the target score.
    pub team: Team,
    /// That team's final point total.
    pub points: u32,
}
