use crate::score::format::HIGHLIGHT_MARKER;
use crate::score::models::Player;
use crate::tui::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Names
            Constraint::Min(5),    // Point score
            Constraint::Length(3), // Sets
            Constraint::Length(3), // Footer
        ])
        .split(frame.size());

    draw_header(frame, chunks[0], app);
    draw_points(frame, chunks[1], app);
    draw_sets(frame, chunks[2], app);
    draw_footer(frame, chunks[3], app);

    if app.help_mode {
        draw_help_window(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(format!(
        "{}  vs  {}",
        app.player_name(Player::Left),
        app.player_name(Player::Right)
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Tennis"))
    .style(Style::default().fg(Color::Cyan));

    frame.render_widget(header, area);
}

fn draw_points(frame: &mut Frame, area: Rect, app: &App) {
    let label = |player: Player| {
        // The server's label is drawn inverted.
        let style = if app.board.server == player {
            Style::default()
                .bg(Color::White)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        Span::styled(format!(" {} ", app.board.label(player)), style)
    };

    let line = Line::from(vec![
        label(Player::Left),
        Span::raw("  :  "),
        label(Player::Right),
    ]);
    let inner_height = area.height.saturating_sub(2);
    let mut lines = vec![Line::default(); usize::from(inner_height / 2)];
    lines.push(line);

    let points = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Points"));

    frame.render_widget(points, area);
}

fn draw_sets(frame: &mut Frame, area: Rect, app: &App) {
    let sets = Paragraph::new(Line::from(summary_spans(&app.board.sets_summary)))
        .block(Block::default().borders(Borders::ALL).title("Sets"));

    frame.render_widget(sets, area);
}

/// Splits the sets summary on the highlight marker; odd segments are the current set.
fn summary_spans(summary: &str) -> Vec<Span<'_>> {
    summary
        .split(HIGHLIGHT_MARKER)
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(i, part)| {
            if i % 2 == 1 {
                Span::styled(
                    part,
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw(part)
            }
        })
        .collect()
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let footer_text = match &app.status {
        Some(status) => status.clone(),
        None => format!(
            "Undo: {} | Redo: {} | ←/→: point | u: undo | r: redo | ?: help | q: quit",
            app.history.undo_depth(),
            app.history.redo_depth()
        ),
    };

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Yellow));

    frame.render_widget(footer, area);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = [
        "Tennis Score - Keyboard Commands",
        "",
        "SCORING:",
        "  ← / h / 1         Point for the left player",
        "  → / l / 2         Point for the right player",
        "",
        "HISTORY:",
        "  u / Backspace     Undo last point",
        "  r / Ctrl+R        Redo undone point",
        "",
        "OTHER:",
        "  ?                 Show this help (press ? or Esc to close)",
        "  q / Esc / Ctrl+C  Quit application",
        "",
        "The highlighted score belongs to the server.",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help - Keyboard Commands ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(ratatui::widgets::Wrap { trim: true });

    let area = centered_rect(80, 70, frame.size());

    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::{KeyCode, KeyEvent};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_summary_spans_highlight_current_set() {
        let spans = summary_spans("#2-1# 6-4");

        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "2-1");
        assert_eq!(spans[0].style.fg, Some(Color::Yellow));
        assert_eq!(spans[1].content, " 6-4");
        assert_eq!(spans[1].style.fg, None);
    }

    #[test]
    fn test_draw_shows_score_and_names() {
        let mut app = App::new(&Config::default());
        for _ in 0..3 {
            app.handle_key_event(KeyEvent::from(KeyCode::Left)).unwrap();
        }

        let text = screen_text(&app);
        assert!(text.contains("Player 1  vs  Player 2"));
        assert!(text.contains(" 40 "));
        assert!(text.contains("0-0"));
    }

    #[test]
    fn test_draw_help_overlay() {
        let mut app = App::new(&Config::default());
        app.help_mode = true;

        let text = screen_text(&app);
        assert!(text.contains("Help - Keyboard Commands"));
    }
}
