//! # Sidebar Component
//!
//! Collapsible tree of documents under the search box.
//!
//! ```text
//! ▾ CSS                 3
//!   ▾ Properties
//!       background
//!       display        12
//!   ▸ Selectors
//! ▸ HTML
//! ▸ JavaScript
//! ▸ DISABLED (1)
//! ```
//!
//! Sections are listed only under the active document, items only under an
//! expanded section. The disabled list is hidden while the welcome panel is up
//! and is not affected by the search query.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SidebarState` lives in `TuiState` and owns the cursor and the row cache
//! - `Sidebar` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::action::Action;
use crate::core::search;
use crate::core::state::{App, SectionKey};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarRow {
    Document {
        key: String,
        name: String,
        version: Option<String>,
        active: bool,
    },
    Section {
        document: String,
        name: String,
        expanded: bool,
    },
    Item {
        id: String,
        name: String,
        count: Option<u32>,
        active: bool,
    },
    DisabledHeader {
        count: usize,
        expanded: bool,
    },
    DisabledDocument {
        name: String,
        version: Option<String>,
    },
}

impl SidebarRow {
    /// What activating this row (Enter, Space, click) does.
    pub fn action(&self) -> Option<Action> {
        match self {
            SidebarRow::Document { key, .. } => Some(Action::SelectDocument(key.clone())),
            SidebarRow::Section { document, name, .. } => {
                Some(Action::ToggleSection(SectionKey::new(document, name)))
            }
            SidebarRow::Item { id, .. } => Some(Action::SelectItem(id.clone())),
            SidebarRow::DisabledHeader { .. } => Some(Action::ToggleDisabledList),
            SidebarRow::DisabledDocument { .. } => None,
        }
    }

    /// Whether two rows point at the same thing, ignoring their flags.
    fn same_target(&self, other: &SidebarRow) -> bool {
        use SidebarRow::*;
        match (self, other) {
            (Document { key: a, .. }, Document { key: b, .. }) => a == b,
            (
                Section {
                    document: da,
                    name: na,
                    ..
                },
                Section {
                    document: db,
                    name: nb,
                    ..
                },
            ) => da == db && na == nb,
            (Item { id: a, .. }, Item { id: b, .. }) => a == b,
            (DisabledHeader { .. }, DisabledHeader { .. }) => true,
            (DisabledDocument { name: a, .. }, DisabledDocument { name: b, .. }) => a == b,
            _ => false,
        }
    }
}

/// Flatten the visible tree for the current app state.
pub fn build_rows(app: &App) -> Vec<SidebarRow> {
    let selection = &app.selection;
    let mut rows = Vec::new();

    for doc in search::filter(&app.catalog, selection.search_query()) {
        let active = selection.active_document() == Some(doc.key.as_str());
        rows.push(SidebarRow::Document {
            key: doc.key.clone(),
            name: doc.name.clone(),
            version: doc.version.clone(),
            active,
        });
        if !active {
            continue;
        }
        for section in &doc.sections {
            let expanded = selection.is_expanded(&doc.key, &section.name);
            rows.push(SidebarRow::Section {
                document: doc.key.clone(),
                name: section.name.clone(),
                expanded,
            });
            if !expanded {
                continue;
            }
            for item in &section.items {
                rows.push(SidebarRow::Item {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    count: item.count,
                    active: selection.active_item() == Some(item.id.as_str()),
                });
            }
        }
    }

    if !selection.show_welcome() {
        let disabled: Vec<_> = app.catalog.disabled().collect();
        rows.push(SidebarRow::DisabledHeader {
            count: disabled.len(),
            expanded: app.show_disabled,
        });
        if app.show_disabled {
            rows.extend(disabled.into_iter().map(|doc| SidebarRow::DisabledDocument {
                name: doc.name.clone(),
                version: doc.version.clone(),
            }));
        }
    }

    rows
}

/// Persistent sidebar state.
#[derive(Debug, Default)]
pub struct SidebarState {
    rows: Vec<SidebarRow>,
    pub list_state: ListState,
    /// Inner list area from the last render, for mouse hit testing.
    last_area: Rect,
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[SidebarRow] {
        &self.rows
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Rebuild rows from app state, keeping the cursor on the same target.
    pub fn sync(&mut self, app: &App) {
        let rows = build_rows(app);
        if rows == self.rows {
            return;
        }
        let current = self.selected().and_then(|i| self.rows.get(i)).cloned();
        let next = match current {
            Some(row) => rows
                .iter()
                .position(|r| r.same_target(&row))
                .or_else(|| self.selected().map(|i| i.min(rows.len().saturating_sub(1)))),
            None => Some(0),
        };
        self.rows = rows;
        self.list_state
            .select(if self.rows.is_empty() { None } else { next });
    }

    /// Put the cursor on the active document's row, if it is visible.
    pub fn focus_active_document(&mut self) {
        let pos = self
            .rows
            .iter()
            .position(|r| matches!(r, SidebarRow::Document { active: true, .. }));
        if let Some(pos) = pos {
            self.list_state.select(Some(pos));
        }
    }

    fn move_by(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        let current = self.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(last);
        self.list_state.select(Some(next));
    }

    /// Row index under a screen position, from the last rendered layout.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.last_area;
        if column < area.x
            || column >= area.x + area.width
            || row < area.y
            || row >= area.y + area.height
        {
            return None;
        }
        let idx = self.list_state.offset() + (row - area.y) as usize;
        (idx < self.rows.len()).then_some(idx)
    }

    /// Move the cursor to `idx` and return the row's action.
    pub fn activate(&mut self, idx: usize) -> Option<Action> {
        let action = self.rows.get(idx)?.action();
        self.list_state.select(Some(idx));
        action
    }
}

impl EventHandler for SidebarState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => {
                self.move_by(-1);
                None
            }
            TuiEvent::CursorDown => {
                self.move_by(1);
                None
            }
            TuiEvent::ScrollPageUp => {
                self.move_by(-(self.last_area.height.max(1) as isize));
                None
            }
            TuiEvent::ScrollPageDown => {
                self.move_by(self.last_area.height.max(1) as isize);
                None
            }
            TuiEvent::Home => {
                if !self.rows.is_empty() {
                    self.list_state.select(Some(0));
                }
                None
            }
            TuiEvent::End => {
                if !self.rows.is_empty() {
                    self.list_state.select(Some(self.rows.len() - 1));
                }
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                let idx = self.selected()?;
                self.activate(idx)
            }
            _ => None,
        }
    }
}

/// Transient render wrapper.
pub struct Sidebar<'a> {
    pub state: &'a mut SidebarState,
    pub focused: bool,
    pub show_counts: bool,
    pub palette: &'a Palette,
}

impl Sidebar<'_> {
    fn row_line(&self, row: &SidebarRow, width: usize) -> Line<'static> {
        let p = self.palette;
        let (label, trailing, style) = match row {
            SidebarRow::Document {
                name,
                version,
                active,
                ..
            } => {
                let marker = if *active { "▾ " } else { "▸ " };
                let style = if *active {
                    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(p.fg)
                };
                (format!("{marker}{name}"), version.clone(), style)
            }
            SidebarRow::Section { name, expanded, .. } => {
                let marker = if *expanded { "▾ " } else { "▸ " };
                (format!("  {marker}{name}"), None, Style::default().fg(p.dim))
            }
            SidebarRow::Item {
                name,
                count,
                active,
                ..
            } => {
                let style = if *active {
                    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(p.fg)
                };
                let trailing = count.filter(|_| self.show_counts).map(|c| c.to_string());
                (format!("      {name}"), trailing, style)
            }
            SidebarRow::DisabledHeader { count, expanded } => {
                let marker = if *expanded { "▾ " } else { "▸ " };
                (
                    format!("{marker}DISABLED ({count})"),
                    None,
                    Style::default().fg(p.dim).add_modifier(Modifier::BOLD),
                )
            }
            SidebarRow::DisabledDocument { name, version } => (
                format!("    {name}"),
                version.clone(),
                Style::default().fg(p.disabled),
            ),
        };

        let trailing = trailing.unwrap_or_default();
        let trailing_width = trailing.width();
        let room = width.saturating_sub(trailing_width + usize::from(trailing_width > 0));
        let label = truncate(&label, room);
        let pad = width.saturating_sub(label.width() + trailing_width);

        Line::from(vec![
            Span::styled(label, style),
            Span::raw(" ".repeat(pad)),
            Span::styled(trailing, Style::default().fg(p.dim)),
        ])
    }
}

impl Component for Sidebar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.palette.border_style(self.focused))
            .title(" Documentation ");
        let inner = block.inner(area);
        self.state.last_area = inner;

        let width = inner.width as usize;
        let items: Vec<ListItem> = self
            .state
            .rows
            .iter()
            .map(|row| ListItem::new(self.row_line(row, width)))
            .collect();

        let highlight = if self.focused {
            self.palette.selected()
        } else {
            Style::default().add_modifier(Modifier::UNDERLINED)
        };
        let list = List::new(items)
            .block(block)
            .style(self.palette.base())
            .highlight_style(highlight);

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate to `max` display columns, ending in "…" when cut.
fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
