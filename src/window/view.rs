//! Window rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::labels::ButtonLabel;
use super::{InfoMessage, WindowModel};

/// Main draw function
pub fn draw(f: &mut Frame, model: &WindowModel) {
    let block = Block::default()
        .title(format!(" {} ", model.title))
        .title_style(Style::default().fg(Color::Cyan).bold())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(f.area());
    f.render_widget(block, f.area());

    // Footer pinned to the bottom row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Phase
            Constraint::Length(1), // Timer
            Constraint::Length(1),
            Constraint::Length(1), // Start button
            Constraint::Length(1), // Reset button
            Constraint::Length(1),
            Constraint::Length(1), // Session
            Constraint::Min(0),
            Constraint::Length(1), // Footer
        ])
        .split(inner);

    draw_centered(
        f,
        chunks[0],
        Span::styled(
            model.phase_label.as_str(),
            Style::default().fg(phase_color(&model.phase_label)).bold(),
        ),
    );
    draw_centered(
        f,
        chunks[1],
        Span::styled(
            model.timer_text.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    );
    draw_button(f, chunks[3], model.start_label, "s", true);
    draw_button(f, chunks[4], ButtonLabel::Reset, "r", false);
    draw_centered(f, chunks[6], Span::raw(model.session_text.as_str()));
    draw_footer(f, chunks[8]);

    if let Some(message) = &model.message {
        draw_message_overlay(f, message);
    }
}

fn phase_color(label: &str) -> Color {
    match label {
        "Focus" => Color::Red,
        "Short Break" => Color::Green,
        "Long Break" => Color::Blue,
        _ => Color::White,
    }
}

fn draw_centered(f: &mut Frame, area: Rect, span: Span) {
    f.render_widget(Paragraph::new(Line::from(span)).alignment(Alignment::Center), area);
}

fn draw_button(f: &mut Frame, area: Rect, label: ButtonLabel, key: &str, primary: bool) {
    let style = if primary {
        Style::default().fg(Color::Black).bg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Cyan)
    };

    let line = Line::from(vec![
        Span::styled(format!("[ {} ]", label), style),
        Span::styled(format!(" ({})", key), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let footer = Line::from(vec![
        Span::styled("s/space", Style::default().fg(Color::Cyan)),
        Span::raw(" start/pause  "),
        Span::styled("r", Style::default().fg(Color::Cyan)),
        Span::raw(" reset  "),
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::raw(" quit"),
    ]);
    f.render_widget(
        Paragraph::new(footer)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn draw_message_overlay(f: &mut Frame, message: &InfoMessage) {
    let area = f.area();

    let popup_width = 44.min(area.width);
    let popup_height = 7.min(area.height);
    let x = (area.width.saturating_sub(popup_width)) / 2;
    let y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(""),
        Line::from(message.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ] (Enter)",
            Style::default().fg(Color::Cyan).bold(),
        )),
    ];

    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", message.title))
                .title_style(Style::default().fg(Color::Yellow).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(popup, popup_area);
}
