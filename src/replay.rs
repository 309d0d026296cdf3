use crate::score::format::ScoreBoard;
use crate::score::history::MatchHistory;
use crate::score::models::Player;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchEvent {
    Point(Player),
    Undo,
    Redo,
}

impl MatchEvent {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '1' | 'l' => Some(MatchEvent::Point(Player::Left)),
            '2' | 'r' => Some(MatchEvent::Point(Player::Right)),
            'u' => Some(MatchEvent::Undo),
            'y' => Some(MatchEvent::Redo),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ReplayError {
    #[error("Unknown event '{ch}' at position {position}")]
    UnknownEvent { ch: char, position: usize },
}

/// Parses the whole sequence up front so a bad character changes nothing.
pub fn parse_events(input: &str) -> Result<Vec<MatchEvent>, ReplayError> {
    input
        .chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_whitespace())
        .map(|(position, ch)| {
            MatchEvent::from_char(ch).ok_or(ReplayError::UnknownEvent { ch, position })
        })
        .collect()
}

pub fn apply(history: &mut MatchHistory, event: MatchEvent) -> bool {
    match event {
        MatchEvent::Point(player) => {
            history.apply_forward(player);
            true
        }
        MatchEvent::Undo => history.undo(),
        MatchEvent::Redo => history.redo(),
    }
}

pub fn replay(input: &str) -> Result<ScoreBoard, ReplayError> {
    let events = parse_events(input)?;
    let mut history = MatchHistory::new();
    for event in events {
        apply(&mut history, event);
    }
    Ok(ScoreBoard::from_state(history.current()))
}

/// One-line rendering used by the `replay` command.
pub fn summary_line(board: &ScoreBoard) -> String {
    let server = match board.server {
        Player::Left => "left",
        Player::Right => "right",
    };
    format!(
        "{} {} | {} | serving: {}",
        board.left, board.right, board.sets_summary, server
    )
}
