pub mod game;
pub mod missions;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use ql_session::Screen;

use super::app::App;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_title_bar(frame, app, chunks[0]);

    match app.session.screen() {
        Screen::MissionsList => missions::draw(frame, app, chunks[1]),
        Screen::Game => game::draw(frame, app, chunks[1]),
    }

    draw_status_bar(frame, app, chunks[2]);

    if app.show_help {
        draw_help_popup(frame);
    }
}

fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let screen_name = match app.session.screen() {
        Screen::MissionsList => "Missions",
        Screen::Game => "Board",
    };
    let bar = Paragraph::new(Line::from(vec![
        Span::styled(" Questline ", Style::default().fg(Color::White).bold()),
        Span::styled(format!("| {screen_name}"), Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(bar, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let text = if let Some(status) = &app.status {
        status.clone()
    } else if app.form.is_some() {
        "type a title | \u{2190}/\u{2192}:icon | Enter:create | Esc:cancel".to_string()
    } else {
        match app.session.screen() {
            Screen::MissionsList => {
                "j/k:navigate  Enter:play  a:add  d:delete  ?:help  q:quit".to_string()
            }
            Screen::Game => {
                if app.session.choice_open() {
                    "Did you make it today?  y:made it  n:not today".to_string()
                } else if app.session.dice_open() {
                    if app.session.last_roll().is_none() {
                        "Space:roll the die".to_string()
                    } else {
                        "Space:move".to_string()
                    }
                } else {
                    "r:report progress  R:restart  b:back  ?:help  q:quit".to_string()
                }
            }
        }
    };

    let bar = Paragraph::new(text).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(bar, area);
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(50, 60, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Missions list").style(Style::default().fg(Color::DarkGray)),
        Line::from("  j / \u{2193}       Move down"),
        Line::from("  k / \u{2191}       Move up"),
        Line::from("  Enter       Play the selected mission"),
        Line::from("  a           Add a mission"),
        Line::from("  d           Delete the selected mission"),
        Line::from(""),
        Line::from("Board").style(Style::default().fg(Color::DarkGray)),
        Line::from("  r           Report today's progress"),
        Line::from("  y / n       Made it / not today"),
        Line::from("  Space       Roll the die, then move"),
        Line::from("  R           Restart the mission"),
        Line::from("  b / Esc     Back to the missions list"),
        Line::from(""),
        Line::from("  ?           Toggle this help"),
        Line::from("  q           Quit"),
        Line::from("  Ctrl+C      Force quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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
