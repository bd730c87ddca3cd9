//! Contact panel overlay rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};
use crate::chat::Contact;
use crate::tui::app::App;
use super::helpers::{bottom_right, online_marker, CONTACT_PANEL_WIDTH};

const CONTACT_PANEL_HEIGHT: u16 = 20;

/// Renders the contact list with its search box
pub fn render_contact_panel(f: &mut Frame, app: &App, area: Rect) {
    let panel = bottom_right(area, CONTACT_PANEL_WIDTH, CONTACT_PANEL_HEIGHT);
    f.render_widget(Clear, panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled("Chat", Style::default().add_modifier(Modifier::BOLD)));
    let inner = block.inner(panel);
    f.render_widget(block, panel);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Search box
            Constraint::Min(1),     // Contacts
        ])
        .split(inner);

    let filter = app.manager.filter_text();
    let search = if filter.is_empty() {
        Paragraph::new("Search Messenger").style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(filter).style(Style::default().fg(Color::Yellow))
    };
    f.render_widget(search.block(Block::default().borders(Borders::ALL)), chunks[0]);

    let contacts = app.manager.filtered_contacts();
    if contacts.is_empty() {
        let empty = Paragraph::new("No contacts found.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = contacts
        .iter()
        .enumerate()
        .map(|(i, contact)| contact_item(contact, i == app.contact_panel.selected_index))
        .collect();
    f.render_widget(List::new(items), chunks[1]);
}

fn contact_item(contact: &Contact, selected: bool) -> ListItem<'static> {
    let pointer = if selected { "→ " } else { "  " };
    let marker_style = if contact.is_online {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let name_style = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    // Unread badge wins over the time label
    let trailer = match contact.unread_count {
        Some(count) if count > 0 => Span::styled(
            format!(" ({})", count),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        _ => Span::styled(
            contact
                .last_message_time
                .as_ref()
                .map(|t| format!(" {}", t))
                .unwrap_or_default(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(pointer, Style::default().fg(Color::Cyan)),
        Span::styled(format!("{} ", online_marker(contact.is_online)), marker_style),
        Span::styled(contact.name.clone(), name_style),
        trailer,
    ])];

    if let Some(preview) = &contact.last_message {
        let preview_style = if contact.has_unread() {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(Span::styled(format!("    {}", preview), preview_style)));
    }

    ListItem::new(lines)
}
