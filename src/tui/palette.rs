//! Colour palettes for the two appearances.
//!
//! Every component takes its colours from a `Palette` rather than hard-coding
//! them, so switching theme is a matter of rebuilding the palette.

use ratatui::style::{Color, Modifier, Style};

use crate::core::theme::Appearance;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub appearance: Appearance,
    pub bg: Color,
    pub fg: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focused: Color,
    pub selection_fg: Color,
    pub selection_bg: Color,
    pub code_fg: Color,
    pub code_bg: Color,
    pub link: Color,
    pub disabled: Color,
}

impl Palette {
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self::dark(),
            Appearance::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            appearance: Appearance::Dark,
            bg: Color::Rgb(0x1e, 0x1e, 0x1e),
            fg: Color::Rgb(0xd4, 0xd4, 0xd4),
            dim: Color::DarkGray,
            accent: Color::Cyan,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            selection_fg: Color::Black,
            selection_bg: Color::Cyan,
            code_fg: Color::White,
            code_bg: Color::DarkGray,
            link: Color::Cyan,
            disabled: Color::Rgb(0x80, 0x80, 0x80),
        }
    }

    pub fn light() -> Self {
        Self {
            appearance: Appearance::Light,
            bg: Color::Rgb(0xff, 0xff, 0xff),
            fg: Color::Rgb(0x33, 0x33, 0x33),
            dim: Color::Gray,
            accent: Color::Blue,
            border: Color::Gray,
            border_focused: Color::Blue,
            selection_fg: Color::White,
            selection_bg: Color::Blue,
            code_fg: Color::Black,
            code_bg: Color::Rgb(0xf0, 0xf0, 0xf0),
            link: Color::Blue,
            disabled: Color::Rgb(0x99, 0x99, 0x99),
        }
    }

    /// syntect theme used for fenced code blocks.
    pub fn syntax_theme(&self) -> &'static str {
        if self.appearance.is_dark() {
            "base16-ocean.dark"
        } else {
            "InspiredGitHub"
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        let fg = if focused { self.border_focused } else { self.border };
        Style::default().fg(fg)
    }
}
