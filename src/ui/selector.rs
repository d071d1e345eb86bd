//! License category selector

use super::theme::Palette;
use crate::app::App;
use crate::state::list_categories;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const INTRO: &str = "Renew your driver's license, business permits, and professional credentials online. Choose the license type you want to renew to get started.";

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Intro
            Constraint::Min(0),    // Category list
        ])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled("License Renewal", palette.heading())),
        Line::from(Span::styled(INTRO, palette.muted())),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().style(palette.base()));
    frame.render_widget(intro, chunks[0]);

    let items: Vec<ListItem> = list_categories()
        .iter()
        .enumerate()
        .map(|(idx, category)| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{}. ", idx + 1), palette.muted()),
                    Span::styled(category.title, palette.heading()),
                ]),
                Line::from(Span::styled(
                    format!("   {}", category.description),
                    palette.muted(),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" License Types ")
                .borders(Borders::ALL)
                .border_style(palette.border(true))
                .style(palette.base()),
        )
        .highlight_style(palette.accent().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

    // Stateful render keeps the highlighted category in view on short terminals
    let mut list_state = ListState::default().with_selected(Some(app.state.selected_index));
    frame.render_stateful_widget(list, chunks[1], &mut list_state);
}
