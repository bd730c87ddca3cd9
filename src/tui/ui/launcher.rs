//! Launcher bar rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use crate::tui::app::App;
use crate::tui::types::Focus;

/// Renders the "Chat (N)" button, minimized bubbles and key hints
pub fn render_launcher(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),     // Help / status
            Constraint::Length(48),  // Bubbles
            Constraint::Length(14),  // Chat button
        ])
        .split(area);

    let help_text = app
        .status_message
        .clone()
        .unwrap_or_else(|| app.focus.help_text().to_string());
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[0]);

    // Bubbles only while the contact panel is closed
    let mut bubble_spans = Vec::new();
    if !app.manager.is_contact_panel_open() {
        for (i, window) in app.manager.minimized_bubbles().iter().enumerate() {
            let contact = app.manager.contact_for(window);
            let initial = contact.map(|c| c.initial()).unwrap_or_else(|| "?".to_string());
            let is_online = contact.is_some_and(|c| c.is_online);
            bubble_spans.push(Span::styled(
                format!("[{}:{}]", i + 1, initial),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
            if is_online {
                bubble_spans.push(Span::styled("●", Style::default().fg(Color::Green)));
            }
            bubble_spans.push(Span::raw(" "));
        }
    }
    let bubbles = Paragraph::new(Line::from(bubble_spans))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(bubbles, chunks[1]);

    let button_style = if app.focus == Focus::Launcher {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let button = Paragraph::new(format!("Chat ({})", app.manager.online_count()))
        .style(button_style)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, chunks[2]);
}
