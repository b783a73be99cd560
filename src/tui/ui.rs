//! Stateless UI rendering for the game.

use noughts::{AudioToggles, GameAdapter};
use noughts_engine::{GamePhase, GameSnapshot, Player, Position, Square, WinLine};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HELP: &str =
    "1-9/arrows+Enter: move  r: new round  R: reset scores  s: sound  m: music  q: quit";

/// Renders the whole screen from the adapter's current state.
pub fn draw(frame: &mut Frame, adapter: &GameAdapter) {
    let snapshot = adapter.snapshot();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Scores
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], &snapshot, adapter.cursor());
    draw_scores(frame, chunks[2], &snapshot, adapter.toggles());

    let status_style = match snapshot.phase {
        GamePhase::InProgress => Style::default().fg(Color::Yellow),
        GamePhase::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GamePhase::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    };
    let status = Paragraph::new(adapter.status())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_board(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot, cursor: Position) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    // Hide the cursor once the round is over; the board is read-only then.
    let cursor = (!snapshot.phase.is_terminal()).then_some(cursor);

    for row in 0..3 {
        let positions = [
            Position::ALL[row * 3],
            Position::ALL[row * 3 + 1],
            Position::ALL[row * 3 + 2],
        ];
        draw_row(frame, rows[row * 2], snapshot, cursor, positions);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    snapshot: &GameSnapshot,
    cursor: Option<Position>,
    positions: [Position; 3],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (i, pos) in positions.into_iter().enumerate() {
        draw_cell(frame, cols[i * 2], snapshot, cursor, pos);
        if i < 2 {
            draw_separator_vertical(frame, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    snapshot: &GameSnapshot,
    cursor: Option<Position>,
    pos: Position,
) {
    let key = (pos.to_index() + 1).to_string();
    let (symbol, base_style) = match snapshot.board.get(pos) {
        Square::Empty => (key, Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let on_line = snapshot
        .winning_line
        .as_ref()
        .is_some_and(|line: &WinLine| line.contains(pos));

    let style = if on_line {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if cursor == Some(pos) {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {} ", symbol), style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_scores(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot, toggles: AudioToggles) {
    let scores = &snapshot.scores;
    let line = Line::from(vec![
        Span::styled(
            format!("X: {}", scores.wins(Player::X)),
            Style::default().fg(Color::Blue),
        ),
        Span::raw("   "),
        Span::styled(
            format!("O: {}", scores.wins(Player::O)),
            Style::default().fg(Color::Red),
        ),
        Span::raw("   "),
        Span::raw(format!("Draws: {}", scores.draws())),
        Span::raw("   |   "),
        Span::raw(format!("Sound: {}", on_off(toggles.sound))),
        Span::raw("   "),
        Span::raw(format!("Music: {}", on_off(toggles.music))),
    ]);

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().title("Score").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("──────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts::{Command, RecordingSink, Settings};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(adapter: &GameAdapter) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 26)).unwrap();
        terminal.draw(|frame| draw(frame, adapter)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[tokio::test]
    async fn test_renders_turn_scores_and_toggles() {
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
        let settings = Settings::default().with_music(false);
        let mut adapter = GameAdapter::new(&settings, Box::new(RecordingSink::new()), tx);
        adapter.handle(Command::SelectCell(4));

        let screen = render(&adapter);
        assert!(screen.contains("Noughts - Tic Tac Toe"));
        assert!(screen.contains("Player O's turn"));
        assert!(screen.contains("X: 0"));
        assert!(screen.contains("Draws: 0"));
        assert!(screen.contains("Sound: on"));
        assert!(screen.contains("Music: off"));
    }

    #[tokio::test]
    async fn test_renders_win_message() {
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
        let mut adapter =
            GameAdapter::new(&Settings::default(), Box::new(RecordingSink::new()), tx);
        for index in [0, 3, 1, 4, 2] {
            adapter.handle(Command::SelectCell(index));
        }

        let screen = render(&adapter);
        assert!(screen.contains("Player X wins!"));
        assert!(screen.contains("X: 1"));
    }
}
