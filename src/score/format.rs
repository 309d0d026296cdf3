use crate::score::engine::ScoringEngine;
use crate::score::models::{MatchState, Player, SetGames};
use std::fmt::Write;

/// Wraps the current set in the sets summary so the UI can highlight it.
pub const HIGHLIGHT_MARKER: char = '#';

/// Everything the screen needs to show for one state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreBoard {
    pub left: String,
    pub right: String,
    pub sets_summary: String,
    pub server: Player,
}

impl ScoreBoard {
    pub fn from_state(state: &MatchState) -> Self {
        Self {
            left: score_label(state, Player::Left),
            right: score_label(state, Player::Right),
            sets_summary: sets_summary(state),
            server: ScoringEngine::server(state),
        }
    }

    pub fn label(&self, player: Player) -> &str {
        match player {
            Player::Left => &self.left,
            Player::Right => &self.right,
        }
    }
}

/// Two-character point label for `player`.
pub fn score_label(state: &MatchState, player: Player) -> String {
    let pts = state.points(player);
    if ScoringEngine::is_tiebreak(state) {
        return format!("{:02}", pts % 100);
    }

    let opp = state.points(player.opponent());
    let label = match pts {
        0 => "00",
        1 => "15",
        2 => "30",
        _ if opp < 3 || pts == opp => "40",
        _ if pts > opp => "AD",
        _ => "  ",
    };
    label.to_string()
}

/// Current set first (between markers), then earlier sets newest first.
pub fn sets_summary(state: &MatchState) -> String {
    let mut sets = state.sets().iter().rev();
    let mut out = String::new();

    let current = sets.next().copied().unwrap_or_default();
    let _ = write!(
        out,
        "{m}{}{m}",
        tally(current),
        m = HIGHLIGHT_MARKER
    );
    for set in sets {
        let _ = write!(out, " {}", tally(*set));
    }
    out
}

fn tally(games: SetGames) -> String {
    format!("{}-{}", games[0], games[1])
}
