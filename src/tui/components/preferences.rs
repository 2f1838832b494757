//! # Preferences Overlay
//!
//! Centered overlay opened with `,`. Three panels:
//!
//! - Documentation: every catalog document with a read-only checkbox
//! - Theme: radio buttons for auto / light / dark (the only editable part)
//! - Keyboard shortcuts
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PreferencesState` lives in `TuiState` while the overlay is open
//! - `PreferencesOverlay` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};

use crate::core::catalog::Catalog;
use crate::core::theme::ThemePreference;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

pub const SHORTCUTS: [(&str, &str); 7] = [
    ("/ or s", "Focus the search box"),
    ("Escape", "Clear search / close overlay"),
    (",", "Open preferences"),
    ("Tab", "Switch sidebar / content"),
    ("Enter", "Open or expand the selected row"),
    ("x", "Dismiss the welcome message"),
    ("q", "Quit"),
];

/// Events emitted by the preferences overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum PreferencesEvent {
    SetTheme(ThemePreference),
    Dismiss,
}

/// Persistent state: which theme option the cursor is on.
#[derive(Debug)]
pub struct PreferencesState {
    cursor: usize,
}

impl PreferencesState {
    /// Start with the cursor on the current preference.
    pub fn new(current: ThemePreference) -> Self {
        let cursor = ThemePreference::ALL
            .iter()
            .position(|p| *p == current)
            .unwrap_or(0);
        Self { cursor }
    }

    pub fn highlighted(&self) -> ThemePreference {
        ThemePreference::ALL[self.cursor]
    }
}

impl EventHandler for PreferencesState {
    type Event = PreferencesEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Escape | TuiEvent::InputChar(',') | TuiEvent::InputChar('q') => {
                Some(PreferencesEvent::Dismiss)
            }
            TuiEvent::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.cursor = (self.cursor + 1).min(ThemePreference::ALL.len() - 1);
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                Some(PreferencesEvent::SetTheme(self.highlighted()))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper.
pub struct PreferencesOverlay<'a> {
    pub state: &'a PreferencesState,
    pub catalog: &'a Catalog,
    pub current: ThemePreference,
    pub palette: &'a Palette,
}

impl PreferencesOverlay<'_> {
    fn heading(&self, title: &'static str) -> Line<'static> {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(self.palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn docs_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![self.heading("Documentation"), Line::default()];
        for doc in self.catalog.documents() {
            let (mark, style) = if doc.enabled {
                ("[x] ", Style::default().fg(self.palette.fg))
            } else {
                ("[ ] ", Style::default().fg(self.palette.disabled))
            };
            let mut spans = vec![Span::styled(mark, style), Span::styled(doc.name.clone(), style)];
            if let Some(version) = &doc.version {
                spans.push(Span::styled(
                    format!(" {version}"),
                    Style::default().fg(self.palette.dim),
                ));
            }
            lines.push(Line::from(spans));
        }
        lines
    }

    fn theme_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![self.heading("Theme"), Line::default()];
        for (i, pref) in ThemePreference::ALL.iter().enumerate() {
            let radio = if *pref == self.current { "(•) " } else { "( ) " };
            let style = if i == self.state.cursor {
                self.palette.selected()
            } else {
                Style::default().fg(self.palette.fg)
            };
            lines.push(Line::from(Span::styled(
                format!("{radio}{}", pref.label()),
                style,
            )));
        }
        lines
    }

    fn shortcut_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![self.heading("Keyboard shortcuts"), Line::default()];
        let key_style = Style::default()
            .fg(self.palette.code_fg)
            .bg(self.palette.code_bg);
        for (key, what) in SHORTCUTS {
            lines.push(Line::from(vec![
                Span::styled(format!(" {key} "), key_style),
                Span::styled(format!("  {what}"), Style::default().fg(self.palette.fg)),
            ]));
        }
        lines
    }
}

impl Component for PreferencesOverlay<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(80, 80, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.palette.border_focused))
            .title(" Preferences ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" ↑↓ Choose theme  Enter Apply  Esc Close ").centered())
            .padding(Padding::horizontal(1))
            .style(self.palette.base());
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(inner);
        let [theme_area, shortcuts_area] = Layout::vertical([
            Constraint::Length(ThemePreference::ALL.len() as u16 + 3),
            Constraint::Min(0),
        ])
        .areas(right);

        let base = self.palette.base();
        frame.render_widget(Paragraph::new(self.docs_lines()).style(base), left);
        frame.render_widget(Paragraph::new(self.theme_lines()).style(base), theme_area);
        frame.render_widget(
            Paragraph::new(self.shortcut_lines()).style(base),
            shortcuts_area,
        );
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_catalog;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_cursor_starts_on_current_preference() {
        let state = PreferencesState::new(ThemePreference::Dark);
        assert_eq!(state.highlighted(), ThemePreference::Dark);
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut state = PreferencesState::new(ThemePreference::Auto);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.highlighted(), ThemePreference::Auto);
        for _ in 0..5 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.highlighted(), ThemePreference::Dark);
    }

    #[test]
    fn test_enter_applies_highlighted_theme() {
        let mut state = PreferencesState::new(ThemePreference::Auto);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(PreferencesEvent::SetTheme(ThemePreference::Light))
        );
    }

    #[test]
    fn test_escape_and_comma_dismiss() {
        let mut state = PreferencesState::new(ThemePreference::Auto);
        assert_eq!(
            state.handle_event(&TuiEvent::Escape),
            Some(PreferencesEvent::Dismiss)
        );
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar(',')),
            Some(PreferencesEvent::Dismiss)
        );
    }

    #[test]
    fn test_render_lists_docs_theme_and_shortcuts() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let catalog = sample_catalog();
        let state = PreferencesState::new(ThemePreference::Light);
        let palette = Palette::light();
        terminal
            .draw(|f| {
                PreferencesOverlay {
                    state: &state,
                    catalog: &catalog,
                    current: ThemePreference::Light,
                    palette: &palette,
                }
                .render(f, f.area())
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("[x] CSS"));
        assert!(text.contains("[ ] Angular"));
        assert!(text.contains("(•) Light"));
        assert!(text.contains("( ) Auto (System)"));
        assert!(text.contains("Keyboard shortcuts"));
        assert!(text.contains("/ or s"));
    }
}
