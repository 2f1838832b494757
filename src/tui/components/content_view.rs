//! # Content View
//!
//! Right-hand pane. Asks the resolver what to show and renders it:
//!
//! - `Welcome` → `WelcomePanel`
//! - `EmptyPlaceholder` → centered hint
//! - `DocumentOverview` / `ItemDetail` → markdown, rendered through
//!   `tui::markdown` inside a `ScrollView`
//!
//! The scroll offset resets whenever the displayed document or item changes.

use std::fmt::Write as _;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Position, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalog::{Document, ItemDetail};
use crate::core::resolver::{DetailBlock, DisplayMode, detail_blocks, resolve};
use crate::core::state::App;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::welcome::WelcomePanel;
use crate::tui::event::TuiEvent;
use crate::tui::markdown;
use crate::tui::palette::Palette;

pub const PLACEHOLDER: &str = "Select a documentation to get started";

/// Lines moved per mouse wheel notch.
const WHEEL_STEP: u16 = 3;

// ============================================================================
// Markdown assembly
// ============================================================================

/// Fence long enough that no backtick run inside `code` closes it early.
fn fence_for(code: &str) -> String {
    let longest = code
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat(longest.max(2) + 1)
}

fn push_code(out: &mut String, lang: &str, code: &str) {
    let fence = fence_for(code);
    let _ = writeln!(out, "{fence}{lang}\n{}\n{fence}\n", code.trim_end());
}

pub fn overview_markdown(doc: &Document) -> String {
    let overview = &doc.overview;
    let title = if overview.title.is_empty() {
        &doc.name
    } else {
        &overview.title
    };

    let mut out = String::new();
    let _ = writeln!(out, "# {title}\n");
    if !overview.description.is_empty() {
        let _ = writeln!(out, "{}\n", overview.description);
    }
    if let Some(note) = &overview.note {
        let _ = writeln!(out, "> {note}\n");
    }
    for section in &overview.sections {
        let _ = writeln!(out, "## {}\n", section.title);
        if !section.content.is_empty() {
            let _ = writeln!(out, "{}\n", section.content);
        }
        for link in &section.links {
            let _ = writeln!(out, "- [{}]({})", link.name, link.url);
        }
        if !section.links.is_empty() {
            out.push('\n');
        }
    }
    out
}

pub fn detail_markdown(doc: &Document, detail: &ItemDetail) -> String {
    let lang = doc.language.as_deref().unwrap_or("");
    let mut out = String::new();
    let _ = writeln!(out, "# {}\n", detail.title);
    if !detail.description.is_empty() {
        let _ = writeln!(out, "{}\n", detail.description);
    }

    for block in detail_blocks(detail) {
        let _ = writeln!(out, "## {}\n", block.heading());
        match block {
            DetailBlock::Syntax(syntax) => push_code(&mut out, lang, syntax),
            DetailBlock::Examples(examples) => {
                for example in examples {
                    let _ = writeln!(out, "### {}\n", example.title);
                    push_code(&mut out, lang, &example.code);
                }
            }
            DetailBlock::Methods(methods) => {
                for method in methods {
                    let _ = writeln!(out, "### {}\n", method.name);
                    if !method.description.is_empty() {
                        let _ = writeln!(out, "{}\n", method.description);
                    }
                    if let Some(example) = &method.example {
                        push_code(&mut out, lang, example);
                    }
                    if let Some(returns) = &method.returns {
                        let _ = writeln!(out, "**Returns:** {returns}\n");
                    }
                }
            }
            DetailBlock::Properties(properties) => {
                for property in properties {
                    let _ = writeln!(out, "### {}\n", property.name);
                    if !property.description.is_empty() {
                        let _ = writeln!(out, "{}\n", property.description);
                    }
                    if let Some(example) = &property.example {
                        push_code(&mut out, lang, example);
                    }
                }
            }
        }
    }
    out
}

// ============================================================================
// State
// ============================================================================

/// What is on screen, used to reset scrolling on change.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Shown {
    Welcome,
    Placeholder,
    Overview(String),
    /// Keyed by item id; titles need not be unique.
    Detail(String),
}

impl Shown {
    fn of(mode: &DisplayMode<'_>, active_item: Option<&str>) -> Self {
        match mode {
            DisplayMode::Welcome => Shown::Welcome,
            DisplayMode::EmptyPlaceholder => Shown::Placeholder,
            DisplayMode::DocumentOverview(doc) => Shown::Overview(doc.key.clone()),
            DisplayMode::ItemDetail { .. } => {
                Shown::Detail(active_item.unwrap_or_default().to_string())
            }
        }
    }
}

#[derive(Default)]
pub struct ContentViewState {
    pub scroll_state: ScrollViewState,
    shown: Option<Shown>,
    /// Rendered content height from the last frame.
    content_height: u16,
    /// Visible height from the last frame.
    viewport_height: u16,
}

impl ContentViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u16 {
        self.scroll_state.offset().y
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    fn scroll_to(&mut self, y: u16) {
        let y = y.min(self.max_offset());
        self.scroll_state.set_offset(Position { x: 0, y });
    }

    fn scroll_by(&mut self, delta: i32) {
        let y = (i32::from(self.offset()) + delta).clamp(0, i32::from(u16::MAX)) as u16;
        self.scroll_to(y);
    }

    fn track(&mut self, shown: Shown) {
        if self.shown.as_ref() != Some(&shown) {
            self.scroll_state.set_offset(Position { x: 0, y: 0 });
            self.shown = Some(shown);
        }
    }
}

impl EventHandler for ContentViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let page = i32::from(self.viewport_height.saturating_sub(1).max(1));
        match event {
            TuiEvent::ScrollUp => self.scroll_by(-i32::from(WHEEL_STEP)),
            TuiEvent::ScrollDown => self.scroll_by(i32::from(WHEEL_STEP)),
            TuiEvent::CursorUp => self.scroll_by(-1),
            TuiEvent::CursorDown => self.scroll_by(1),
            TuiEvent::ScrollPageUp => self.scroll_by(-page),
            TuiEvent::ScrollPageDown | TuiEvent::InputChar(' ') => self.scroll_by(page),
            TuiEvent::Home => self.scroll_to(0),
            TuiEvent::End => self.scroll_to(u16::MAX),
            _ => return None,
        }
        Some(())
    }
}

// ============================================================================
// Rendering
// ============================================================================

pub struct ContentView<'a> {
    pub state: &'a mut ContentViewState,
    pub app: &'a App,
    pub focused: bool,
    pub palette: &'a Palette,
}

impl ContentView<'_> {
    fn render_placeholder(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Block::default().style(self.palette.base()), area);
        let [middle] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);
        let hint = Paragraph::new(Line::from(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(self.palette.dim)
                .add_modifier(Modifier::ITALIC),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hint, middle);
    }

    fn render_markdown(&mut self, frame: &mut Frame, area: Rect, source: &str) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.palette.border_style(self.focused))
            .style(self.palette.base());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // One column for the scrollbar, one for breathing room
        let content_width = inner.width.saturating_sub(2);
        let text = markdown::render(source, self.palette);
        let paragraph = Paragraph::new(text)
            .style(self.palette.base())
            .wrap(Wrap { trim: false });
        let height = wrapped_height(&paragraph, content_width);

        self.state.content_height = height;
        self.state.viewport_height = inner.height;
        // Terminal may have grown since the last scroll
        self.state.scroll_to(self.state.offset());

        let mut scroll_view = ScrollView::new(Size::new(inner.width.saturating_sub(1), height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(1, 0, content_width, height));
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

/// Wrapped line count, saturating at the largest height a `Rect` can hold.
fn wrapped_height(paragraph: &Paragraph<'_>, width: u16) -> u16 {
    u16::try_from(paragraph.line_count(width)).unwrap_or(u16::MAX)
}

impl Component for ContentView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let app = self.app;
        let mode = resolve(&app.selection, &app.catalog);
        self.state
            .track(Shown::of(&mode, app.selection.active_item()));

        match mode {
            DisplayMode::Welcome => {
                WelcomePanel {
                    palette: self.palette,
                }
                .render(frame, area);
            }
            DisplayMode::EmptyPlaceholder => self.render_placeholder(frame, area),
            DisplayMode::DocumentOverview(doc) => {
                let source = overview_markdown(doc);
                self.render_markdown(frame, area, &source);
            }
            DisplayMode::ItemDetail { document, detail } => {
                let source = detail_markdown(document, detail);
                self.render_markdown(frame, area, &source);
            }
        }
    }
}
