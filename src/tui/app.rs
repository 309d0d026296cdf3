use crate::config::Config;
use crate::score::format::ScoreBoard;
use crate::score::history::MatchHistory;
use crate::score::models::Player;
use crate::tui::handlers::{HelpModeAction, KeyHandler, NormalModeAction};
use anyhow::Result;
use crossterm::event::KeyEvent;
use tracing::debug;

#[derive(Debug)]
pub struct App {
    pub history: MatchHistory,
    pub board: ScoreBoard,
    pub left_name: String,
    pub right_name: String,
    pub status: Option<String>,
    pub should_quit: bool,
    pub help_mode: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let history = MatchHistory::new();
        let board = ScoreBoard::from_state(history.current());
        Self {
            history,
            board,
            left_name: config.left_name.clone(),
            right_name: config.right_name.clone(),
            status: None,
            should_quit: false,
            help_mode: false,
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if self.help_mode {
            self.handle_help_mode_key(key_event);
        } else {
            self.handle_normal_mode_key(key_event);
        }
        Ok(())
    }

    fn handle_normal_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_normal_mode_key(key_event) {
            NormalModeAction::Quit => self.should_quit = true,
            NormalModeAction::ScorePoint(player) => self.score_point(player),
            NormalModeAction::Undo => self.undo(),
            NormalModeAction::Redo => self.redo(),
            NormalModeAction::ToggleHelpMode => self.help_mode = true,
            NormalModeAction::None => {}
        }
    }

    fn handle_help_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_help_mode_key(key_event) {
            HelpModeAction::ExitHelpMode => self.help_mode = false,
            HelpModeAction::None => {}
        }
    }

    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::Left => &self.left_name,
            Player::Right => &self.right_name,
        }
    }

    fn score_point(&mut self, player: Player) {
        self.history.apply_forward(player);
        self.status = None;
        self.refresh();
    }

    fn undo(&mut self) {
        if self.history.undo() {
            self.status = None;
            self.refresh();
        } else {
            debug!("undo ignored, history empty");
            self.status = Some("Nothing to undo".to_string());
        }
    }

    fn redo(&mut self) {
        if self.history.redo() {
            self.status = None;
            self.refresh();
        } else {
            debug!("redo ignored, nothing undone");
            self.status = Some("Nothing to redo".to_string());
        }
    }

    fn refresh(&mut self) {
        self.board = ScoreBoard::from_state(self.history.current());
    }
}
