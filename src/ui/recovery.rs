//! Fallback screen shown after a contained failure

use super::components::{centered_rect, wrap_text};
use super::theme::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const RECOVERY_WIDTH: u16 = 64;

pub fn draw(frame: &mut Frame, area: Rect, reason: &str, palette: &Palette) {
    let key_style = palette.accent().add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(
            "Something went wrong",
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "The application hit an unexpected problem. Your session can be restarted from the beginning.",
            palette.muted(),
        )),
        Line::from(""),
    ];
    for line in wrap_text(reason, RECOVERY_WIDTH.saturating_sub(6) as usize) {
        lines.push(Line::from(Span::styled(line, Style::default().fg(palette.text))));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled("r", key_style),
        Span::raw(" to start over or "),
        Span::styled("q", key_style),
        Span::raw(" to quit"),
    ]));

    // Borders plus room for the explanation line to wrap
    let height = lines.len() as u16 + 4;
    let panel_area = centered_rect(area, RECOVERY_WIDTH, height);

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(palette.base()), area);

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.error))
                .style(palette.base()),
        );
    frame.render_widget(panel, panel_area);
}
