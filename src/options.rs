//! Game configuration options.

/// Configuration options for a euchre game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use euchre::GameOptions;
///
/// let options = GameOptions::default()
///     .with_shuffle(false)
///     .with_points_to_win(5);
/// assert_eq!(options.points_to_win, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Whether the pack is shuffled before each hand. When false the
    /// pack is reset to its input order instead, for reproducible games.
    pub shuffle: bool,
    /// Points a team needs to win the game.
    pub points_to_win: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            shuffle: true,
            points_to_win: 10,
        }
    }
}

impl GameOptions {
    /// Sets whether the pack is shuffled before each hand.
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets the points needed to win.
    #[must_use]
    pub const fn with_points_to_win(mut self, points_to_win: u32) -> Self {
        self.points_to_win = points_to_win;
        self
    }
}
