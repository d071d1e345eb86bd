//! Generated document review screen

use super::theme::Palette;
use crate::app::App;
use crate::platform::PRINT_SHORTCUT;
use crate::state::GeneratedDocument;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Width of the label column on the paper
const LABEL_WIDTH: usize = 26;

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(document) = app.state.workflow.document() else {
        let message = Paragraph::new("No application document has been generated")
            .style(Style::default().fg(palette.error))
            .block(
                Block::default()
                    .title(" Application Document ")
                    .borders(Borders::ALL)
                    .border_style(palette.border(false)),
            );
        frame.render_widget(message, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Instructions
            Constraint::Min(0),    // Paper
        ])
        .split(area);

    let key_style = palette.accent().add_modifier(Modifier::BOLD);
    let instructions = Paragraph::new(vec![
        Line::from(Span::styled("Application Document", palette.heading())),
        Line::from(vec![
            Span::styled("Review your application below. ", palette.muted()),
            Span::styled(PRINT_SHORTCUT, key_style),
            Span::styled(" or ", palette.muted()),
            Span::styled("p", key_style),
            Span::styled(
                format!(" prints to {}", app.printer.destination()),
                palette.muted(),
            ),
        ]),
    ])
    .style(palette.base());
    frame.render_widget(instructions, chunks[0]);

    let paper = Paragraph::new(paper_lines(document, palette))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.paper_text))
                .style(paper_style(palette)),
        )
        .style(paper_style(palette))
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset as u16, 0));
    frame.render_widget(paper, chunks[1]);
}

fn paper_style(palette: &Palette) -> Style {
    Style::default().fg(palette.paper_text).bg(palette.paper)
}

/// Number of lines the document occupies on the paper, before wrapping
pub fn line_count(document: &GeneratedDocument, palette: &Palette) -> usize {
    paper_lines(document, palette).len()
}

/// Styled lines of the document as shown on screen
fn paper_lines<'a>(document: &'a GeneratedDocument, palette: &Palette) -> Vec<Line<'a>> {
    let text = paper_style(palette);
    let bold = text.add_modifier(Modifier::BOLD);
    let rule = "─".repeat(60);

    let title = Span::styled("LICENSE RENEWAL APPLICATION", bold);
    let mut lines = vec![
        Line::from(""),
        Line::from(title).alignment(Alignment::Center),
    ];
    for header in document.header_lines() {
        lines.push(Line::from(Span::styled(header, text)).alignment(Alignment::Center));
    }
    lines.push(Line::from(Span::styled(rule.clone(), text)).alignment(Alignment::Center));

    for section in document.sections() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", section.title),
            bold.add_modifier(Modifier::UNDERLINED),
        )));
        if let Some(statement) = section.statement {
            lines.push(Line::from(Span::styled(format!("  {statement}"), text)));
        }
        for (label, value) in section.entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<width$}", format!("{label}:"), width = LABEL_WIDTH),
                    bold,
                ),
                Span::styled(value, text),
            ]));
        }
    }

    let (signer, date) = document.signature();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(rule, text)).alignment(Alignment::Center));
    lines.push(Line::from(Span::styled(
        format!("  {:<36}{}", "Applicant Signature:", "Date:"),
        bold,
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {:<36}{}", "_".repeat(28), "_".repeat(20)),
        text,
    )));
    lines.push(Line::from(Span::styled(format!("  {signer:<36}{date}"), text)));
    lines.push(Line::from(""));

    for footer in document.footer_lines() {
        let footer = Span::styled(footer, text.add_modifier(Modifier::ITALIC));
        lines.push(Line::from(footer).alignment(Alignment::Center));
    }

    lines
}
