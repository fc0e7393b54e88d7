//! Stateless UI rendering for the board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use gridtac_core::{GameStatus, Line as GridLine, Player, Square};

use super::app::App;

/// Renders the title, board, status and key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let game = app.game();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(1),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new(format!("Tic Tac Toe - {0}×{0}", game.dimension()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let lines = board_lines(
        &game.snapshot(),
        game.dimension(),
        game.cursor(),
        game.winning_line(),
    );
    let width = (game.dimension() * 4).saturating_sub(1) as u16;
    let height = lines.len() as u16;
    frame.render_widget(Paragraph::new(lines), center_rect(chunks[1], width, height));

    let status_style = match game.status() {
        GameStatus::InProgress => Style::default().fg(Color::Yellow),
        GameStatus::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Magenta),
    };
    let status = Paragraph::new(app.status_message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(format!(
        "arrows: move  enter: place  {}: new game  {}: quit",
        app.keys().new_game(),
        app.keys().quit()
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Lays out an N×N snapshot as styled text.
///
/// Each cell is three columns wide, cells are split by `│` and rows by a
/// `───┼───` rule, so the grid is `4N − 1` columns by `2N − 1` rows.
pub fn board_lines(
    squares: &[Square],
    dimension: usize,
    cursor: usize,
    winning: Option<GridLine>,
) -> Vec<Line<'static>> {
    if dimension == 0 || squares.is_empty() {
        return Vec::new();
    }
    let separator = Style::default().fg(Color::DarkGray);
    let rule = vec!["───"; dimension].join("┼");
    let mut lines = Vec::with_capacity(dimension * 2);

    for (row, cells) in squares.chunks(dimension).enumerate() {
        if row > 0 {
            lines.push(Line::from(Span::styled(rule.clone(), separator)));
        }
        let mut spans = Vec::with_capacity(dimension * 2);
        for (col, square) in cells.iter().enumerate() {
            if col > 0 {
                spans.push(Span::styled("│", separator));
            }
            let index = row * dimension + col;
            let on_line = winning.is_some_and(|line| line.contains(dimension, index));
            spans.push(cell_span(*square, index == cursor, on_line));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn cell_span(square: Square, selected: bool, on_winning_line: bool) -> Span<'static> {
    let base = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    let base = if on_winning_line {
        base.fg(Color::Green)
    } else {
        base
    };
    let style = if selected {
        base.bg(Color::White).fg(Color::Black)
    } else {
        base
    };
    Span::styled(format!(" {square} "), style)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_three_by_three_layout() {
        let mut squares = vec![Square::Empty; 9];
        squares[0] = Square::Occupied(Player::X);
        squares[4] = Square::Occupied(Player::O);
        let lines = board_lines(&squares, 3, 0, None);
        let rendered: Vec<String> = lines.iter().map(text).collect();
        assert_eq!(
            rendered,
            vec![
                " X │   │   ",
                "───┼───┼───",
                "   │ O │   ",
                "───┼───┼───",
                "   │   │   ",
            ]
        );
    }

    #[test]
    fn test_cursor_highlighted() {
        let squares = vec![Square::Empty; 4];
        let lines = board_lines(&squares, 2, 3, None);
        let cursor_span = &lines[2].spans[2];
        assert_eq!(cursor_span.style.bg, Some(Color::White));
        assert_eq!(lines[0].spans[0].style.bg, None);
    }

    #[test]
    fn test_winning_line_highlighted() {
        let squares = vec![Square::Occupied(Player::X); 1];
        let lines = board_lines(&squares, 1, 0, Some(GridLine::Row(0)));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::Black));

        let squares = vec![
            Square::Occupied(Player::O),
            Square::Empty,
            Square::Empty,
            Square::Occupied(Player::O),
        ];
        let lines = board_lines(&squares, 2, 1, Some(GridLine::MainDiagonal));
        assert_eq!(lines[2].spans[2].style.fg, Some(Color::Green));
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::Green));
    }

    #[test]
    fn test_zero_dimension_renders_nothing() {
        assert!(board_lines(&[], 0, 0, None).is_empty());
        assert!(board_lines(&[Square::Empty], 0, 0, None).is_empty());
    }
}
