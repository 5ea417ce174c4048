//! Stateless UI rendering for each phase.

use noughts_core::{Difficulty, Phase, Player, Seat, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;

use super::app::App;

/// Renders the whole screen for the current phase.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(9),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let phase = app.controller().phase();
    let title = Paragraph::new(phase.title())
        .style(
            Style::default()
                .fg(app.hue().color())
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.hue().inverse())),
        );
    frame.render_widget(title, chunks[0]);

    match phase {
        Phase::Menu => draw_menu(frame, chunks[1]),
        Phase::PlayerSelect => draw_player_select(frame, chunks[1], app),
        Phase::DifficultySelect(player) => draw_difficulty_select(frame, chunks[1], app, player),
        Phase::Playing | Phase::Won(_) | Phase::Tie => draw_board(frame, chunks[1], app),
    }

    let help = Paragraph::new(help_text(app))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(app.status()));
    frame.render_widget(help, chunks[2]);
}

fn help_text(app: &App) -> String {
    let controller = app.controller();
    let confirm = controller.confirm_label().unwrap_or("Play");
    match controller.phase() {
        Phase::Menu => "Enter: Play | q: Quit".to_string(),
        Phase::PlayerSelect => {
            format!("↑↓: Select | ←→ / Space: Toggle | Enter: {confirm} | Esc: Menu")
        }
        Phase::DifficultySelect(_) => format!("↑↓: Difficulty | Enter: {confirm} | Esc: Menu"),
        Phase::Playing => "Arrows / 1-9: Choose | Enter: Place | Esc: Menu".to_string(),
        Phase::Won(_) | Phase::Tie => "Enter: Play Again | m / Esc: Menu | q: Quit".to_string(),
    }
}

fn draw_menu(frame: &mut Frame, area: Rect) {
    let menu_area = center_rect(area, 30, 5);
    let text = vec![
        Line::from(Span::styled(
            "X | O | X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "> Play",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), menu_area);
}

fn draw_player_select(frame: &mut Frame, area: Rect, app: &App) {
    let controller = app.controller();
    let items: Vec<ListItem> = Player::iter()
        .map(|player| {
            let seat = controller.seat(player);
            let mut label = format!("{player}:    [ {} ]", seat.label());
            if seat == Seat::Computer {
                label.push_str(&format!("  {}", controller.difficulty(player)));
            }
            ListItem::new(label)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Players"))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(match app.selected_mark() {
        Player::X => 0,
        Player::O => 1,
    }));
    frame.render_stateful_widget(list, center_rect(area, 40, 4), &mut list_state);
}

fn draw_difficulty_select(frame: &mut Frame, area: Rect, app: &App, player: Player) {
    let current = app.controller().difficulty(player);
    let items: Vec<ListItem> = Difficulty::iter()
        .map(|difficulty| ListItem::new(difficulty.to_string()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{player} Difficulty")),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Difficulty::iter().position(|d| d == current));
    frame.render_stateful_widget(list, center_rect(area, 30, 6), &mut list_state);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
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

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
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

    for col in 0..3 {
        draw_cell(frame, cols[col * 2], app, row * 3 + col);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, index: usize) {
    let controller = app.controller();
    let (symbol, base_style) = match controller.board().get(index) {
        Square::Empty => (
            format!(" {} ", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let show_cursor = controller.phase() == Phase::Playing
        && controller.seat(controller.to_move()) == Seat::Human
        && index == app.cursor();

    let style = if controller.highlighted()[index] {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if show_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(38)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
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
