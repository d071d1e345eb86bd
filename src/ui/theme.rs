//! Color palettes for the light and dark themes

use crate::state::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Resolved colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub error: Color,
    pub success: Color,
    pub status_bg: Color,
    /// Background of the printable document "paper"
    pub paper: Color,
    pub paper_text: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                border: Color::Gray,
                error: Color::Red,
                success: Color::Green,
                status_bg: Color::Gray,
                paper: Color::White,
                paper_text: Color::Black,
            },
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                border: Color::DarkGray,
                error: Color::LightRed,
                success: Color::Green,
                status_bg: Color::DarkGray,
                // The document stays black-on-white, like the printed copy
                paper: Color::White,
                paper_text: Color::Black,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.border)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_differ() {
        assert_ne!(
            Palette::for_theme(Theme::Light),
            Palette::for_theme(Theme::Dark)
        );
    }

    #[test]
    fn test_paper_is_white_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let palette = Palette::for_theme(theme);
            assert_eq!(palette.paper, Color::White);
            assert_eq!(palette.paper_text, Color::Black);
        }
    }

    #[test]
    fn test_border_focus() {
        let palette = Palette::for_theme(Theme::Dark);
        assert_eq!(palette.border(true).fg, Some(Color::Cyan));
        assert_eq!(palette.border(false).fg, Some(Color::DarkGray));
    }
}
