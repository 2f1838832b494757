//! # SearchBox Component
//!
//! Single-line text field at the top of the sidebar. Every edit emits the full
//! new query so the parent can dispatch `Action::SetSearchQuery`.
//!
//! The buffer is internal state mirrored into `Selection::search_query`; the
//! focus flag is a prop. Cursor position is a byte offset into the buffer,
//! always on a char boundary.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

const PLACEHOLDER: &str = "Search...";

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// Query text changed; carries the new full query.
    Changed(String),
    /// Escape on a non-empty query.
    Cleared,
    /// Focus should go back to the sidebar (Escape on empty, Enter, Tab).
    Leave,
}

#[derive(Debug, Default)]
pub struct SearchBox {
    buffer: String,
    /// Byte offset in `buffer` (0..=buffer.len()).
    cursor: usize,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::Changed(self.buffer.clone()))
    }

    /// Text to display plus the cursor column within it, scrolled so the
    /// cursor stays visible in `width` columns.
    fn visible(&self, width: usize) -> (String, u16) {
        let before = &self.buffer[..self.cursor];
        let cursor_col = before.width();
        if width == 0 {
            return (String::new(), 0);
        }

        // Drop leading chars until the cursor fits inside the field
        let mut skip_cols = 0;
        let mut start = 0;
        for (idx, ch) in self.buffer.char_indices() {
            if cursor_col - skip_cols < width {
                break;
            }
            skip_cols += ch.width().unwrap_or(0);
            start = idx + ch.len_utf8();
        }

        let mut shown = String::new();
        let mut used = 0;
        for ch in self.buffer[start..].chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            shown.push(ch);
            used += w;
        }
        (shown, (cursor_col - skip_cols) as u16)
    }
}

/// Props wrapper used for rendering: the box itself plus focus and colours.
pub struct SearchBoxView<'a> {
    pub search: &'a SearchBox,
    pub focused: bool,
    pub palette: &'a Palette,
}

impl Component for SearchBoxView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.palette.border_style(self.focused))
            .title(" / Search ");
        let inner = block.inner(area);

        let (shown, cursor_col) = self.search.visible(inner.width as usize);
        let line = if self.search.buffer.is_empty() {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(self.palette.dim)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(Span::styled(shown, Style::default().fg(self.palette.fg)))
        };

        frame.render_widget(
            Paragraph::new(line).block(block).style(self.palette.base()),
            area,
        );

        if self.focused && inner.width > 0 && inner.height > 0 {
            let x = inner.x + cursor_col.min(inner.width.saturating_sub(1));
            frame.set_cursor_position((x, inner.y));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single-line field: newlines become spaces
                let flat = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor, &flat);
                self.cursor += flat.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                let prev = self.buffer[..self.cursor].char_indices().next_back()?.0;
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                let ch = self.buffer[self.cursor..].chars().next()?;
                self.buffer.drain(self.cursor..self.cursor + ch.len_utf8());
                self.changed()
            }
            TuiEvent::CursorLeft => {
                if let Some((prev, _)) = self.buffer[..self.cursor].char_indices().next_back() {
                    self.cursor = prev;
                }
                None
            }
            TuiEvent::CursorRight => {
                if let Some(ch) = self.buffer[self.cursor..].chars().next() {
                    self.cursor += ch.len_utf8();
                }
                None
            }
            TuiEvent::Home => {
                self.cursor = 0;
                None
            }
            TuiEvent::End => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Escape if !self.buffer.is_empty() => {
                self.clear();
                Some(SearchEvent::Cleared)
            }
            TuiEvent::Escape | TuiEvent::Submit | TuiEvent::Tab | TuiEvent::CursorDown => {
                Some(SearchEvent::Leave)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_str(search: &mut SearchBox, s: &str) -> Option<SearchEvent> {
        let mut last = None;
        for c in s.chars() {
            last = search.handle_event(&TuiEvent::InputChar(c));
        }
        last
    }

    #[test]
    fn test_typing_emits_full_query() {
        let mut search = SearchBox::new();
        assert_eq!(
            type_str(&mut search, "css"),
            Some(SearchEvent::Changed("css".to_string()))
        );
        assert_eq!(search.cursor(), 3);
    }

    #[test]
    fn test_backspace_and_delete_respect_char_boundaries() {
        let mut search = SearchBox::new();
        type_str(&mut search, "café");
        assert_eq!(
            search.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::Changed("caf".to_string()))
        );
        search.handle_event(&TuiEvent::Home);
        assert_eq!(
            search.handle_event(&TuiEvent::Delete),
            Some(SearchEvent::Changed("af".to_string()))
        );
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut search = SearchBox::new();
        assert_eq!(search.handle_event(&TuiEvent::Backspace), None);
        type_str(&mut search, "ab");
        search.handle_event(&TuiEvent::End);
        assert_eq!(search.handle_event(&TuiEvent::Delete), None);
    }

    #[test]
    fn test_cursor_movement_inserts_mid_string() {
        let mut search = SearchBox::new();
        type_str(&mut search, "ac");
        search.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(
            search.handle_event(&TuiEvent::InputChar('b')),
            Some(SearchEvent::Changed("abc".to_string()))
        );
        search.handle_event(&TuiEvent::CursorRight);
        search.handle_event(&TuiEvent::CursorRight);
        assert_eq!(search.cursor(), 3);
    }

    #[test]
    fn test_escape_clears_then_leaves() {
        let mut search = SearchBox::new();
        type_str(&mut search, "forms");
        assert_eq!(search.handle_event(&TuiEvent::Escape), Some(SearchEvent::Cleared));
        assert_eq!(search.text(), "");
        assert_eq!(search.handle_event(&TuiEvent::Escape), Some(SearchEvent::Leave));
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut search = SearchBox::new();
        assert_eq!(
            search.handle_event(&TuiEvent::Paste("text\ncontent".to_string())),
            Some(SearchEvent::Changed("text content".to_string()))
        );
    }

    #[test]
    fn test_visible_scrolls_to_keep_cursor_in_view() {
        let mut search = SearchBox::new();
        type_str(&mut search, "abcdefghij");
        let (shown, col) = search.visible(5);
        // One column stays free for the cursor after the last char
        assert_eq!(shown, "ghij");
        assert_eq!(col, 4);
    }

    #[test]
    fn test_renders_placeholder_when_empty() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let search = SearchBox::new();
        let palette = Palette::dark();
        terminal
            .draw(|f| {
                SearchBoxView {
                    search: &search,
                    focused: false,
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
        assert!(text.contains("Search..."));
    }
}
