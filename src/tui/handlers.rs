use crate::score::models::Player;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_normal_mode_key(key_event: KeyEvent) -> NormalModeAction {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        match key_event.code {
            KeyCode::Char('c') if ctrl => NormalModeAction::Quit,
            KeyCode::Char('r') if ctrl => NormalModeAction::Redo,
            KeyCode::Char('q') | KeyCode::Esc => NormalModeAction::Quit,
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('1') => {
                NormalModeAction::ScorePoint(Player::Left)
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('2') => {
                NormalModeAction::ScorePoint(Player::Right)
            }
            KeyCode::Char('u') | KeyCode::Backspace => NormalModeAction::Undo,
            KeyCode::Char('r') => NormalModeAction::Redo,
            KeyCode::Char('?') => NormalModeAction::ToggleHelpMode,
            _ => NormalModeAction::None,
        }
    }

    pub fn handle_help_mode_key(key_event: KeyEvent) -> HelpModeAction {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
                HelpModeAction::ExitHelpMode
            }
            _ => HelpModeAction::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum NormalModeAction {
    None,
    Quit,
    ScorePoint(Player),
    Undo,
    Redo,
    ToggleHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum HelpModeAction {
    None,
    ExitHelpMode,
}
