use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use ql_core::MissionIcon;

use super::centered_rect;
use crate::tui::app::{App, MissionForm};

pub fn draw(frame: &mut Frame, app: &mut App, area: Rect) {
    let missions = app.session.missions();

    if missions.is_empty() {
        let empty = Paragraph::new("No missions yet. Press 'a' to create one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .title(" Missions ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            );
        frame.render_widget(empty, area);
    } else {
        let items: Vec<ListItem> = missions
            .iter()
            .map(|m| {
                let line = Line::from(vec![
                    Span::raw(format!("{}  ", m.icon.glyph())),
                    Span::styled(m.title.clone(), Style::default().fg(Color::White).bold()),
                    Span::raw("  "),
                    Span::styled(
                        format!("Day {}/{}", m.current_day(), m.days_total()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!(" Missions ({}) ", missions.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .fg(Color::White)
                    .bold(),
            )
            .highlight_symbol("\u{25b6} ");

        let mut state = ListState::default();
        state.select(Some(app.list_cursor));
        frame.render_stateful_widget(list, area, &mut state);
    }

    if let Some(form) = &app.form {
        draw_form(frame, form);
    }
}

fn draw_form(frame: &mut Frame, form: &MissionForm) {
    let area = centered_rect(60, 40, frame.area());

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Title: ", Style::default().fg(Color::DarkGray)),
            Span::styled(form.title.clone(), Style::default().fg(Color::White).bold()),
            Span::styled("_", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(Span::styled("Icon:", Style::default().fg(Color::DarkGray))),
    ];

    let icon_spans: Vec<Span<'static>> = MissionIcon::ALL
        .iter()
        .enumerate()
        .flat_map(|(i, icon)| {
            let style = if i == form.icon_index {
                Style::default().fg(Color::Black).bg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            vec![Span::styled(format!(" {} ", icon.glyph()), style), Span::raw(" ")]
        })
        .collect();
    lines.push(Line::from(icon_spans));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "30 days, starting at day zero.",
        Style::default().fg(Color::DarkGray),
    )));

    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" New Mission ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
