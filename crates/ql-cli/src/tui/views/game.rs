use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use ql_core::{GameBoard, TileKind};

use super::centered_rect;
use crate::tui::app::App;

/// Tiles per board row.
const TILES_PER_ROW: usize = 7;

pub fn draw(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(mission) = app.session.selected_mission() else {
        return;
    };
    let title = format!("{}  {}", mission.icon.glyph(), mission.title);
    let day_line = format!("Day {}/{}", mission.current_day(), mission.days_total());
    let days_total = mission.days_total();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Mission header
            Constraint::Min(0),    // Board
            Constraint::Length(1), // Streaks
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(title, Style::default().fg(Color::White).bold())),
        Line::from(Span::styled(day_line, Style::default().fg(Color::DarkGray))),
    ]);
    frame.render_widget(header, chunks[0]);

    draw_board(frame, app, chunks[1], days_total);

    let streaks = app.session.streaks();
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Streak ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            streaks.current().to_string(),
            Style::default().fg(Color::Yellow).bold(),
        ),
        Span::styled(
            format!(
                "   best {}   {} days total",
                streaks.longest(),
                streaks.total_days_completed()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(footer, chunks[2]);

    if app.session.choice_open() {
        draw_choice_popup(frame);
    }
    if app.session.dice_open() {
        draw_dice_popup(frame, app);
    }
}

fn draw_board(frame: &mut Frame, app: &App, area: Rect, days_total: u32) {
    let board = GameBoard::for_days(days_total);
    let marker = app.display_position();

    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 20 {
        return;
    }

    let mut lines: Vec<Line<'static>> = Vec::new();
    for row in board.tiles().chunks(TILES_PER_ROW) {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for tile in row {
            let text = match tile.kind {
                TileKind::Normal => format!("{:>2}", tile.day),
                _ => tile.glyph(),
            };
            let style = if tile.day == marker {
                Style::default().fg(Color::Black).bg(Color::Yellow).bold()
            } else if tile.day < marker {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(format!("[{text:>2}]"), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if let Some(value) = app.session.last_roll() {
        lines.push(Line::from(vec![
            Span::styled("Last roll: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                value.to_string(),
                Style::default().fg(Color::Yellow).bold(),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_choice_popup(frame: &mut Frame) {
    let area = centered_rect(50, 30, frame.area());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Did you make it today?",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" [y] Made it ", Style::default().fg(Color::Green).bold()),
            Span::raw("   "),
            Span::styled(" [n] Not today ", Style::default().fg(Color::Red).bold()),
        ]),
    ];

    let popup = Paragraph::new(lines).block(
        Block::default()
            .title(" Daily Report ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn draw_dice_popup(frame: &mut Frame, app: &App) {
    let area = centered_rect(50, 30, frame.area());
    let mode = app.session.roll_mode();

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Rolling ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                mode.display_range(),
                Style::default().fg(Color::Yellow).bold(),
            ),
            Span::styled(format!(" ({mode})"), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
    ];

    match app.session.last_roll() {
        Some(value) => {
            lines.push(Line::from(Span::styled(
                format!("  {value}  "),
                Style::default().fg(Color::Black).bg(Color::Yellow).bold(),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Press Space to move",
                Style::default().fg(Color::Green),
            )));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Press Space to roll!",
                Style::default().fg(Color::Green),
            )));
        }
    }

    let popup = Paragraph::new(lines).block(
        Block::default()
            .title(" Dice ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
