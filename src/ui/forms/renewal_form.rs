//! Renewal application form rendering

use super::field_renderer::{draw_field, draw_help_text, FieldStatus};
use crate::platform::{SUBMIT_SHORTCUT, THEME_SHORTCUT};
use crate::state::{DraftField, FieldSection, FormButton, RenewalForm};
use crate::ui::components::{button_width, render_button, BUTTON_HEIGHT};
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Field rows in display order; each row is split evenly across its fields
const FIELD_ROWS: [&[DraftField]; 4] = [
    &[DraftField::FullName, DraftField::Email],
    &[DraftField::Phone, DraftField::LicenseNumber],
    &[DraftField::ExpirationDate, DraftField::Address],
    &[DraftField::City, DraftField::State, DraftField::ZipCode],
];

const FIELD_HEIGHT: u16 = 3;
const CHECKBOX_HEIGHT: u16 = 4;

/// Draw the renewal form for the selected category
pub fn draw_renewal_form(
    frame: &mut Frame,
    area: Rect,
    category_title: &str,
    form: &RenewalForm,
    palette: &Palette,
) {
    let block = Block::default()
        .title(format!(" {category_title} Renewal "))
        .borders(Borders::ALL)
        .border_style(palette.border(true))
        .style(palette.base());
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),               // Personal heading
            Constraint::Length(FIELD_HEIGHT),    // Name / email
            Constraint::Length(FIELD_HEIGHT),    // Phone / license number
            Constraint::Length(1),               // License heading
            Constraint::Length(FIELD_HEIGHT),    // Expiration / address
            Constraint::Length(FIELD_HEIGHT),    // City / state / zip
            Constraint::Length(CHECKBOX_HEIGHT), // Terms
            Constraint::Length(BUTTON_HEIGHT),   // Submit / Back
            Constraint::Length(1),               // Help text
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    draw_section_heading(frame, chunks[0], FieldSection::Personal, palette);
    draw_field_row(frame, chunks[1], FIELD_ROWS[0], form, palette);
    draw_field_row(frame, chunks[2], FIELD_ROWS[1], form, palette);
    draw_section_heading(frame, chunks[3], FieldSection::License, palette);
    draw_field_row(frame, chunks[4], FIELD_ROWS[2], form, palette);
    draw_field_row(frame, chunks[5], FIELD_ROWS[3], form, palette);
    draw_field_row(frame, chunks[6], &[DraftField::AcceptTerms], form, palette);
    draw_action_row(frame, chunks[7], form, palette);

    draw_help_text(
        frame,
        chunks[8],
        &[
            ("Tab", "next"),
            ("Space", "toggle"),
            (SUBMIT_SHORTCUT, "submit"),
            (THEME_SHORTCUT, "theme"),
            ("Esc", "back"),
        ],
        palette,
    );
}

fn draw_section_heading(frame: &mut Frame, area: Rect, section: FieldSection, palette: &Palette) {
    let heading = Paragraph::new(Line::from(Span::styled(
        section.title(),
        palette.heading(),
    )));
    frame.render_widget(heading, area);
}

fn draw_field_row(
    frame: &mut Frame,
    area: Rect,
    fields: &[DraftField],
    form: &RenewalForm,
    palette: &Palette,
) {
    let constraints = vec![Constraint::Ratio(1, fields.len() as u32); fields.len()];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (field, cell) in fields.iter().zip(cells.iter()) {
        let status = FieldStatus {
            is_active: form.active_draft_field() == Some(*field),
            is_flagged: form.is_flagged(*field),
        };
        draw_field(frame, *cell, *field, &form.draft.get(*field), status, palette);
    }
}

fn draw_action_row(frame: &mut Frame, area: Rect, form: &RenewalForm, palette: &Palette) {
    let mut constraints: Vec<Constraint> = FormButton::ALL
        .iter()
        .map(|button| Constraint::Length(button_width(button.label())))
        .collect();
    constraints.push(Constraint::Min(0));

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .spacing(1)
        .split(area);

    for (button, cell) in FormButton::ALL.iter().zip(cells.iter()) {
        let is_selected = form.is_action_row_active() && form.selected_button == *button;
        render_button(frame, *cell, button.label(), is_selected, palette);
    }
}
