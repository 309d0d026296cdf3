use crate::score::ring_buffer::BoundedRingBuffer;

/// Most sets a match can hold before the oldest completed set is dropped.
pub const SET_COUNT: usize = 5;

/// Game tally of one set, indexed by `Player::index`.
pub type SetGames = [u8; 2];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Left,
    Right,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::Left, Player::Right];

    pub fn index(self) -> usize {
        match self {
            Player::Left => 0,
            Player::Right => 1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Player::Left => Player::Right,
            Player::Right => Player::Left,
        }
    }
}

/// Snapshot of a match score. Copied by value into history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchState {
    pub(crate) current_points: [u8; 2],
    pub(crate) set_games: BoundedRingBuffer<SetGames, SET_COUNT>,
    pub(crate) total_completed_games: u8,
}

impl MatchState {
    pub fn new() -> Self {
        let mut set_games = BoundedRingBuffer::new();
        set_games.push([0, 0]);
        Self {
            current_points: [0, 0],
            set_games,
            total_completed_games: 0,
        }
    }

    pub fn points(&self, player: Player) -> u8 {
        self.current_points[player.index()]
    }

    pub fn current_points(&self) -> [u8; 2] {
        self.current_points
    }

    /// Tally of the set in progress.
    pub fn current_set(&self) -> SetGames {
        self.set_games.last().copied().unwrap_or_default()
    }

    pub fn sets(&self) -> &BoundedRingBuffer<SetGames, SET_COUNT> {
        &self.set_games
    }

    pub fn total_completed_games(&self) -> u8 {
        self.total_completed_games
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_has_one_empty_set() {
        let state = MatchState::new();

        assert_eq!(state.sets().len(), 1);
        assert_eq!(state.current_set(), [0, 0]);
        assert_eq!(state.current_points(), [0, 0]);
        assert_eq!(state.total_completed_games(), 0);
    }

    #[test]
    fn test_players_are_opponents() {
        assert_eq!(Player::Left.opponent(), Player::Right);
        assert_eq!(Player::Right.opponent(), Player::Left);
        assert_eq!(Player::Left.index(), 0);
        assert_eq!(Player::Right.index(), 1);
    }
}
