//! Field rendering utilities for forms

use crate::state::{DraftField, FieldValue};
use crate::ui::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// How a field should be drawn this frame
#[derive(Debug, Clone, Copy)]
pub struct FieldStatus {
    pub is_active: bool,
    /// Field failed the last submission attempt
    pub is_flagged: bool,
}

/// Draw a draft field, dispatching on its kind
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: DraftField,
    value: &FieldValue,
    status: FieldStatus,
    palette: &Palette,
) {
    if field.is_checkbox() {
        draw_checkbox(frame, area, field, value.as_checked(), status, palette);
    } else {
        draw_text_field(frame, area, field, value.as_text(), status, palette);
    }
}

fn field_block<'a>(title: &str, status: FieldStatus, palette: &Palette) -> Block<'a> {
    let border_style = if status.is_flagged {
        Style::default().fg(palette.error)
    } else {
        palette.border(status.is_active)
    };

    let title = if status.is_flagged {
        format!(" {title} (required) ")
    } else {
        format!(" {title} ")
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    field: DraftField,
    value: &str,
    status: FieldStatus,
    palette: &Palette,
) {
    let style = if status.is_active {
        Style::default().fg(palette.text)
    } else {
        palette.muted()
    };

    let display_value = if value.is_empty() && !status.is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if status.is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, style),
        Span::styled(cursor, palette.accent()),
    ]));

    let block = field_block(field.label(), status, palette);
    frame.render_widget(content.block(block), area);
}

fn draw_checkbox(
    frame: &mut Frame,
    area: Rect,
    field: DraftField,
    checked: bool,
    status: FieldStatus,
    palette: &Palette,
) {
    let box_style = if status.is_active {
        palette.accent().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(FieldValue::Checked(checked).display_value(), box_style),
        Span::raw(" "),
        Span::styled(field.label(), Style::default().fg(palette.text)),
    ]))
    .wrap(Wrap { trim: true });

    let block = field_block(field.section().title(), status, palette);
    frame.render_widget(content.block(block), area);
}

/// Draw a help line of `key: action` pairs
pub fn draw_help_text(frame: &mut Frame, area: Rect, pairs: &[(&str, &str)], palette: &Palette) {
    let mut spans = Vec::new();
    for (idx, (key, action)) in pairs.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, palette.accent()));
        spans.push(Span::raw(format!(": {action}")));
    }

    let help = Paragraph::new(Line::from(spans)).style(palette.muted());
    frame.render_widget(help, area);
}
