//! Chat window strip rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use crate::chat::{ChatWindow, WindowState};
use crate::tui::app::App;
use crate::tui::types::Focus;
use super::helpers::online_marker;

const WINDOW_WIDTH: u16 = 34;
const MINIMIZED_WIDTH: u16 = 24;
const WINDOW_HEIGHT: u16 = 18;
const MINIMIZED_HEIGHT: u16 = 3;
const WINDOW_SPACING: u16 = 1;

/// Renders the open windows, most recent rightmost
pub fn render_chat_windows(f: &mut Frame, app: &App, area: Rect) {
    let mut right = area.x + area.width;

    for (index, window) in app.manager.open_windows().iter().enumerate() {
        let (width, height) = match window.state() {
            WindowState::Expanded => (WINDOW_WIDTH, WINDOW_HEIGHT.min(area.height)),
            WindowState::Minimized => (MINIMIZED_WIDTH, MINIMIZED_HEIGHT.min(area.height)),
        };

        if right < area.x + width {
            // Terminal too narrow for the remaining windows
            break;
        }
        right -= width;

        let rect = Rect {
            x: right,
            y: area.y + area.height - height,
            width,
            height,
        };
        let focused = app.focus == Focus::Window && app.focused_window == index;
        render_window(f, app, window, rect, focused);

        right = right.saturating_sub(WINDOW_SPACING);
    }
}

fn render_window(f: &mut Frame, app: &App, window: &ChatWindow, area: Rect, focused: bool) {
    // Fall back to the bare id if the contact left the roster
    let (name, is_online) = app
        .manager
        .contact_for(window)
        .map(|c| (c.name.as_str(), c.is_online))
        .unwrap_or((window.contact_id.as_str(), false));

    let border_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let marker_style = if is_online {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title = Line::from(vec![
        Span::styled(format!("{} ", online_marker(is_online)), marker_style),
        Span::styled(name.to_string(), Style::default().add_modifier(Modifier::BOLD)),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    f.render_widget(Clear, area);

    if window.minimized {
        let hint = Paragraph::new("minimized")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(hint, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),     // Messages
            Constraint::Length(3),  // Input box
        ])
        .split(inner);

    let message_lines: Vec<Line> = window
        .messages
        .iter()
        .map(|msg| {
            let sender_color = if msg.is_mine() { Color::Green } else { Color::Blue };
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", msg.timestamp),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{}: ", msg.sender.label()),
                    Style::default().fg(sender_color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(msg.text.as_str()),
            ])
        })
        .collect();

    // Keep the newest lines in view
    let visible = chunks[0].height as usize;
    let scroll = message_lines.len().saturating_sub(visible) as u16;
    let messages = Paragraph::new(message_lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(messages, chunks[0]);

    let draft = app.draft(&window.contact_id);
    let (text, style) = if draft.is_empty() {
        ("Type a message...", Style::default().fg(Color::DarkGray))
    } else {
        (draft, Style::default().fg(Color::Yellow))
    };
    let input = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(input, chunks[1]);
}
