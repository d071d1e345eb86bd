//! Layout components (header, status bar)

use super::theme::Palette;
use crate::app::App;
use crate::platform::{PRINT_SHORTCUT, SUBMIT_SHORTCUT, THEME_SHORTCUT};
use crate::state::{Stage, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header: app title plus workflow breadcrumb
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let stage = app.state.workflow.stage();
    let mut spans = vec![Span::styled(
        " License Renewal ",
        palette.heading().add_modifier(Modifier::REVERSED),
    )];

    for (idx, (step, label)) in [
        (Stage::Selecting, "Choose license"),
        (Stage::Filling, "Application"),
        (Stage::Reviewing, "Document"),
    ]
    .into_iter()
    .enumerate()
    {
        spans.push(Span::styled(
            if idx == 0 { "  " } else { " › " },
            palette.muted(),
        ));
        let style = if step == stage {
            palette.accent().add_modifier(Modifier::BOLD)
        } else {
            palette.muted()
        };
        spans.push(Span::styled(label, style));
    }

    if let Some(category) = app.state.workflow.category() {
        spans.push(Span::styled("  |  ", palette.muted()));
        spans.push(Span::styled(
            category.category().title,
            Style::default().fg(palette.text),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(palette.base()), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let view = app.state.current_view();
    let mut spans = vec![Span::raw(" ")];

    spans.push(Span::styled(
        get_view_hints(view),
        Style::default().fg(palette.text),
    ));

    // Unfinished drafts are flagged so leaving with Esc is a deliberate choice
    if view.is_form_view() {
        let complete = app
            .state
            .workflow
            .draft()
            .is_some_and(|draft| draft.is_complete());
        let (marker, color) = if complete {
            ("ready", palette.success)
        } else {
            ("incomplete", palette.error)
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(marker, Style::default().fg(color)));
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(palette.success)));
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("{THEME_SHORTCUT}:{} theme", app.state.theme),
        Style::default().fg(palette.text),
    ));

    let status = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(palette.status_bg).fg(palette.text));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> String {
    match view {
        View::Selector => "j/k:nav  Enter/1-4:select  q:quit".to_string(),
        View::Form => format!("Tab:next  Space:toggle  {SUBMIT_SHORTCUT}:submit  Esc:back"),
        View::Document => format!("{PRINT_SHORTCUT}/p:print  y:copy id  j/k:scroll  Esc:edit"),
        View::Recovery => "r:restart  q:quit".to_string(),
    }
}
