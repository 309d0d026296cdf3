use crate::score::models::{MatchState, Player};
use tracing::debug;

const GAME_POINTS: u8 = 4;
const TIEBREAK_POINTS: u8 = 7;
const WIN_MARGIN: u8 = 2;

/// Scoring rules applied to a `MatchState`.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Awards a point and settles any game or set it completes before returning.
    pub fn register_point(state: &mut MatchState, player: Player) {
        let i = player.index();
        state.current_points[i] = state.current_points[i].saturating_add(1);
        debug!(?player, points = ?state.current_points, "point registered");

        if let Some(winner) = Self::game_winner(state) {
            Self::award_game(state, winner);
            Self::close_set_if_complete(state);
        }
    }

    /// The current set stands at 6-6.
    pub fn is_tiebreak(state: &MatchState) -> bool {
        state.current_set() == [6, 6]
    }

    pub fn server(state: &MatchState) -> Player {
        let mut second = state.total_completed_games() % 2 == 1;
        if Self::is_tiebreak(state) {
            // Opens with whoever is due the next game, then swaps every two points.
            second = !second;
            let [left, right] = state.current_points();
            let played = u16::from(left) + u16::from(right);
            if ((played + 1) / 2) % 2 == 1 {
                second = !second;
            }
        }
        if second { Player::Right } else { Player::Left }
    }

    fn game_winner(state: &MatchState) -> Option<Player> {
        let threshold = if Self::is_tiebreak(state) {
            TIEBREAK_POINTS
        } else {
            GAME_POINTS
        };
        Player::BOTH.into_iter().find(|p| {
            let pts = state.current_points[p.index()];
            let opp = state.current_points[p.opponent().index()];
            pts >= threshold && pts.saturating_sub(opp) >= WIN_MARGIN
        })
    }

    fn award_game(state: &mut MatchState, winner: Player) {
        if let Some(games) = state.set_games.last_mut() {
            games[winner.index()] = games[winner.index()].saturating_add(1);
        }
        state.current_points = [0, 0];
        // Only the parity is ever read, and wrapping keeps it.
        state.total_completed_games = state.total_completed_games.wrapping_add(1);
        debug!(?winner, set = ?state.current_set(), "game won");
    }

    fn close_set_if_complete(state: &mut MatchState) {
        let games = state.current_set();
        let complete = Player::BOTH.into_iter().any(|p| {
            let own = games[p.index()];
            let opp = games[p.opponent().index()];
            own == 7 || (own == 6 && opp <= 4)
        });
        if complete {
            debug!(set = ?games, "set complete");
            state.set_games.push([0, 0]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(state: &mut MatchState, player: Player, times: usize) {
        for _ in 0..times {
            ScoringEngine::register_point(state, player);
        }
    }

    fn win_games(state: &mut MatchState, player: Player, games: usize) {
        for _ in 0..games {
            let target = if ScoringEngine::is_tiebreak(state) { 7 } else { 4 };
            score(state, player, target);
        }
    }

    /// Builds a state whose current set is 6-6 with no points played.
    fn tiebreak_state() -> MatchState {
        let mut state = MatchState::new();
        for _ in 0..6 {
            win_games(&mut state, Player::Left, 1);
            win_games(&mut state, Player::Right, 1);
        }
        state
    }

    #[test]
    fn test_four_straight_points_win_game() {
        let mut state = MatchState::new();
        score(&mut state, Player::Left, 3);
        assert_eq!(state.current_points(), [3, 0]);

        ScoringEngine::register_point(&mut state, Player::Left);

        assert_eq!(state.current_points(), [0, 0]);
        assert_eq!(state.current_set(), [1, 0]);
        assert_eq!(state.total_completed_games(), 1);
    }

    #[test]
    fn test_deuce_requires_two_point_margin() {
        let mut state = MatchState::new();
        score(&mut state, Player::Left, 3);
        score(&mut state, Player::Right, 3);

        ScoringEngine::register_point(&mut state, Player::Left);
        assert_eq!(state.current_points(), [4, 3]);
        assert_eq!(state.current_set(), [0, 0]);

        ScoringEngine::register_point(&mut state, Player::Right);
        ScoringEngine::register_point(&mut state, Player::Right);
        assert_eq!(state.current_points(), [4, 5]);

        ScoringEngine::register_point(&mut state, Player::Right);
        assert_eq!(state.current_points(), [0, 0]);
        assert_eq!(state.current_set(), [0, 1]);
    }

    #[test]
    fn test_long_deuce_has_no_point_cap() {
        let mut state = MatchState::new();
        score(&mut state, Player::Left, 3);
        score(&mut state, Player::Right, 3);
        for _ in 0..20 {
            ScoringEngine::register_point(&mut state, Player::Left);
            ScoringEngine::register_point(&mut state, Player::Right);
        }

        assert_eq!(state.current_points(), [23, 23]);
        assert_eq!(state.current_set(), [0, 0]);
    }

    #[test]
    fn test_six_four_completes_set() {
        let mut state = MatchState::new();
        win_games(&mut state, Player::Right, 4);
        win_games(&mut state, Player::Left, 6);

        assert_eq!(state.sets().len(), 2);
        assert_eq!(state.sets().at(0), Some(&[6, 4]));
        assert_eq!(state.current_set(), [0, 0]);
    }

    #[test]
    fn test_six_five_does_not_complete_set() {
        let mut state = MatchState::new();
        win_games(&mut state, Player::Left, 5);
        win_games(&mut state, Player::Right, 5);
        win_games(&mut state, Player::Left, 1);

        assert_eq!(state.sets().len(), 1);
        assert_eq!(state.current_set(), [6, 5]);

        win_games(&mut state, Player::Left, 1);
        assert_eq!(state.sets().len(), 2);
        assert_eq!(state.sets().at(0), Some(&[7, 5]));
    }

    #[test]
    fn test_tiebreak_detected_at_six_all() {
        let state = tiebreak_state();
        assert!(ScoringEngine::is_tiebreak(&state));
        assert_eq!(state.total_completed_games(), 12);
    }

    #[test]
    fn test_tiebreak_needs_seven_points() {
        let mut state = tiebreak_state();
        score(&mut state, Player::Left, 6);
        score(&mut state, Player::Right, 5);
        assert_eq!(state.current_points(), [6, 5]);

        ScoringEngine::register_point(&mut state, Player::Right);
        ScoringEngine::register_point(&mut state, Player::Left);
        assert_eq!(state.current_points(), [7, 6]);
        assert!(ScoringEngine::is_tiebreak(&state));

        ScoringEngine::register_point(&mut state, Player::Left);
        assert_eq!(state.sets().at(0), Some(&[7, 6]));
        assert_eq!(state.current_set(), [0, 0]);
        assert!(!ScoringEngine::is_tiebreak(&state));
    }

    #[test]
    fn test_server_alternates_by_game() {
        let mut state = MatchState::new();
        assert_eq!(ScoringEngine::server(&state), Player::Left);

        win_games(&mut state, Player::Left, 1);
        assert_eq!(ScoringEngine::server(&state), Player::Right);

        win_games(&mut state, Player::Left, 1);
        assert_eq!(ScoringEngine::server(&state), Player::Left);

        // Points within a regular game do not move the serve.
        score(&mut state, Player::Right, 3);
        assert_eq!(ScoringEngine::server(&state), Player::Left);
    }

    #[test]
    fn test_tiebreak_server_rotation() {
        let mut state = tiebreak_state();
        // 12 games played: parity says Left, the tie-break flips it.
        let first = ScoringEngine::server(&state);
        assert_eq!(first, Player::Right);

        // One serve, then pairs: R, L, L, R, R, L, L.
        let expected = [
            Player::Left,
            Player::Left,
            Player::Right,
            Player::Right,
            Player::Left,
            Player::Left,
        ];
        for (n, want) in expected.into_iter().enumerate() {
            let scorer = if n % 2 == 0 { Player::Left } else { Player::Right };
            ScoringEngine::register_point(&mut state, scorer);
            assert_eq!(ScoringEngine::server(&state), want, "after {} points", n + 1);
        }
    }

    #[test]
    fn test_extra_sets_drop_oldest() {
        let mut state = MatchState::new();
        win_games(&mut state, Player::Left, 6);
        win_games(&mut state, Player::Right, 6);
        win_games(&mut state, Player::Left, 6);
        win_games(&mut state, Player::Right, 6);
        assert_eq!(state.sets().len(), 5);
        assert_eq!(state.sets().at(0), Some(&[6, 0]));

        win_games(&mut state, Player::Left, 6);

        // Sixth entry pushed: the first 6-0 set is gone.
        assert_eq!(state.sets().len(), 5);
        assert_eq!(state.sets().at(0), Some(&[0, 6]));
        assert_eq!(state.current_set(), [0, 0]);
    }
}
