//! # TitleBar Component
//!
//! Top bar: breadcrumb of the current position on the left, theme and key
//! hints on the right.
//!
//! ```text
//! DevDocs › CSS › background                      theme: auto (dark)  , prefs  q quit
//! ```
//!
//! Stateless: all data arrives as props, so it is trivial to test.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::theme::{Appearance, ThemePreference};
use crate::tui::component::Component;
use crate::tui::palette::Palette;

const HINTS: &str = "  , prefs  q quit ";

pub struct TitleBar<'a> {
    /// Active document name, if any.
    pub document: Option<&'a str>,
    /// Active item's display name, if any.
    pub item: Option<&'a str>,
    /// Transient notice such as a theme change. Empty hides it.
    pub status: &'a str,
    pub preference: ThemePreference,
    pub appearance: Appearance,
    pub palette: &'a Palette,
}

impl TitleBar<'_> {
    pub fn breadcrumb(&self) -> String {
        let mut parts = vec!["DevDocs"];
        parts.extend(self.document);
        if self.document.is_some() {
            parts.extend(self.item);
        }
        parts.join(" › ")
    }

    pub fn theme_label(&self) -> String {
        let effective = match self.appearance {
            Appearance::Dark => "dark",
            Appearance::Light => "light",
        };
        match self.preference {
            ThemePreference::Auto => format!("theme: auto ({effective})"),
            explicit => format!("theme: {explicit}"),
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let right_text = format!("{}{}", self.theme_label(), HINTS);
        let right_width = (right_text.chars().count() as u16).min(area.width / 2);
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).areas(area);

        let style = Style::default()
            .fg(self.palette.fg)
            .bg(self.palette.bg)
            .add_modifier(Modifier::BOLD);
        let mut spans = vec![Span::styled(format!(" {}", self.breadcrumb()), style)];
        if !self.status.is_empty() {
            spans.push(Span::styled(
                format!("  │ {}", self.status),
                Style::default().fg(self.palette.accent),
            ));
        }
        let crumb = Paragraph::new(Line::from(spans)).style(self.palette.base());
        frame.render_widget(crumb, left);

        let hints = Paragraph::new(Line::from(Span::styled(
            right_text,
            Style::default().fg(self.palette.dim),
        )))
        .style(self.palette.base())
        .right_aligned();
        frame.render_widget(hints, right);
    }
}
