use html_escape::decode_html_entities;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::config::ColorConfig;
use crate::tui::app::HeadlinesApp;

pub fn render(frame: &mut Frame, app: &mut HeadlinesApp, colors: &ColorConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Headline cards
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_cards(frame, app, colors, chunks[0]);
    render_status_bar(frame, app, colors, chunks[1]);
}

fn render_cards(frame: &mut Frame, app: &mut HeadlinesApp, colors: &ColorConfig, area: Rect) {
    let state = app.controller.state();
    let focused = state.focused_index;

    let items: Vec<ListItem> = state
        .headlines
        .iter()
        .enumerate()
        .map(|(i, headline)| {
            let is_focused = focused == Some(i);

            let title_style = if is_focused {
                Style::default()
                    .bg(colors.selection_bg)
                    .fg(colors.selection_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.headline)
            };

            let image_line = if state.has_image(i) {
                Span::styled(
                    format!("    {}", state.image_url(i)),
                    Style::default().fg(colors.image_url),
                )
            } else {
                // Stand-in for the default artwork shown on imageless cards
                Span::styled("    (no image)", Style::default().fg(colors.image_placeholder))
            };

            let lines = vec![
                Line::from(Span::styled(
                    decode_html_entities(headline).to_string(),
                    title_style,
                )),
                Line::from(image_line),
            ];

            ListItem::new(lines)
        })
        .collect();

    let title = format!(" Headlines ({}) ", state.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let list = List::new(items).block(block);
    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_status_bar(frame: &mut Frame, app: &HeadlinesApp, colors: &ColorConfig, area: Rect) {
    let state = app.controller.state();

    let (text, style) = if state.is_loading {
        (
            "Loading headlines...".to_string(),
            Style::default().fg(colors.loading).bg(colors.status_bg),
        )
    } else if let Some(ref msg) = app.status_message {
        (
            msg.clone(),
            Style::default().fg(colors.status_fg).bg(colors.status_bg),
        )
    } else {
        (
            "j/k:Navigate  n/p:Page  R:Refresh  o:Open  q:Quit".to_string(),
            Style::default().fg(colors.status_fg).bg(colors.status_bg),
        )
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}
