//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event (including terminal resize). All pending
//! events are drained before the next draw.
//!
//! ## Focus
//!
//! Exactly one of sidebar, search box or content pane has focus. Global keys
//! (`/`, `,`, `x`, `q`) only apply outside the search box so they can be typed
//! into a query. While the preferences overlay is open it receives every event.

mod component;
pub mod components;
pub mod event;
pub mod markdown;
pub mod palette;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
    EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::layout::Position;

use crate::core::action::{Action, Effect, update};
use crate::core::preferences::{PreferenceStore, save_theme};
use crate::core::state::App;
use crate::core::theme::{SystemAppearance, ThemePreference};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ContentViewState, PreferencesEvent, PreferencesState, SearchBox, SearchEvent, SidebarState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::AppLayout;

const IDLE_POLL: Duration = Duration::from_millis(500);

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Search,
    Content,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    pub search: SearchBox,
    pub sidebar: SidebarState,
    pub content: ContentViewState,
    /// Preferences overlay cursor (None = hidden)
    pub preferences: Option<PreferencesState>,
    pub sidebar_width: u16,
    pub show_item_counts: bool,
    /// Regions from the last draw.
    pub layout: AppLayout,
}

impl TuiState {
    pub fn new(sidebar_width: u16, show_item_counts: bool) -> Self {
        Self {
            focus: Focus::Sidebar,
            search: SearchBox::new(),
            sidebar: SidebarState::new(),
            content: ContentViewState::new(),
            preferences: None,
            sidebar_width,
            show_item_counts,
            layout: AppLayout::default(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            EnableFocusChange,
            SetCursorStyle::SteadyBlock,
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, focus change)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableFocusChange,
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape,
            Show
        );
    }
}

/// Apply one terminal event to the app and presentation state.
///
/// Returns the effect the caller must perform. At most one action runs per
/// event, so at most one effect comes back.
pub fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    system: &dyn SystemAppearance,
) -> Effect {
    let effect = route(app, tui, event, system);
    tui.sidebar.sync(app);
    effect
}

fn route(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    system: &dyn SystemAppearance,
) -> Effect {
    match event {
        TuiEvent::Resize => return Effect::None,
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        TuiEvent::FocusGained => {
            if app.theme.preference() == ThemePreference::Auto {
                return update(app, Action::SystemAppearanceChanged(system.prefers_dark()));
            }
            return Effect::None;
        }
        _ => {}
    }

    if let Some(prefs) = tui.preferences.as_mut() {
        return match prefs.handle_event(&event) {
            Some(PreferencesEvent::SetTheme(preference)) => {
                update(app, Action::SetTheme(preference))
            }
            Some(PreferencesEvent::Dismiss) => {
                tui.preferences = None;
                update(app, Action::ClosePreferences)
            }
            None => Effect::None,
        };
    }

    match event {
        TuiEvent::MouseClick(column, row) => return click(app, tui, column, row),
        TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
            tui.content.handle_event(&event);
            return Effect::None;
        }
        _ => {}
    }

    if tui.focus == Focus::Search {
        return match tui.search.handle_event(&event) {
            Some(SearchEvent::Changed(query)) => update(app, Action::SetSearchQuery(query)),
            Some(SearchEvent::Cleared) => clear_search(app, tui),
            Some(SearchEvent::Leave) => {
                tui.focus = Focus::Sidebar;
                Effect::None
            }
            None => Effect::None,
        };
    }

    match event {
        TuiEvent::InputChar('/') | TuiEvent::InputChar('s') => {
            tui.focus = Focus::Search;
            Effect::None
        }
        TuiEvent::InputChar(',') => {
            tui.preferences = Some(PreferencesState::new(app.theme.preference()));
            update(app, Action::OpenPreferences)
        }
        TuiEvent::InputChar('x') if app.selection.show_welcome() => {
            update(app, Action::DismissWelcome)
        }
        TuiEvent::InputChar('q') => update(app, Action::Quit),
        TuiEvent::Escape if !app.selection.search_query().is_empty() => {
            tui.search.clear();
            clear_search(app, tui)
        }
        TuiEvent::Tab | TuiEvent::BackTab => {
            tui.focus = match tui.focus {
                Focus::Sidebar => Focus::Content,
                _ => Focus::Sidebar,
            };
            Effect::None
        }
        _ => match tui.focus {
            Focus::Sidebar => match tui.sidebar.handle_event(&event) {
                Some(action) => update(app, action),
                None => Effect::None,
            },
            _ => {
                tui.content.handle_event(&event);
                Effect::None
            }
        },
    }
}

/// Clear the query and put the sidebar cursor back on the active document.
fn clear_search(app: &mut App, tui: &mut TuiState) -> Effect {
    let effect = update(app, Action::ClearSearch);
    tui.sidebar.sync(app);
    tui.sidebar.focus_active_document();
    effect
}

fn click(app: &mut App, tui: &mut TuiState, column: u16, row: u16) -> Effect {
    let pos = Position { x: column, y: row };
    if tui.layout.search.contains(pos) {
        tui.focus = Focus::Search;
    } else if tui.layout.sidebar.contains(pos) {
        tui.focus = Focus::Sidebar;
        if let Some(action) = tui
            .sidebar
            .row_at(column, row)
            .and_then(|idx| tui.sidebar.activate(idx))
        {
            return update(app, action);
        }
    } else if tui.layout.content.contains(pos) {
        tui.focus = Focus::Content;
    }
    Effect::None
}

fn perform(effect: Effect, app: &mut App, store: &mut dyn PreferenceStore) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::PersistTheme(preference) => {
            if let Err(e) = save_theme(store, preference) {
                warn!("Failed to save theme preference: {}", e);
                app.status_message = format!("Theme not saved: {e}");
            }
            false
        }
    }
}

pub fn run(
    mut app: App,
    mut tui: TuiState,
    store: &mut dyn PreferenceStore,
    system: &dyn SystemAppearance,
) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();
    tui.sidebar.sync(&app);

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let effect = dispatch(&mut app, &mut tui, event, system);
            if perform(effect, &mut app, store) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            debug!("Quit requested");
            break;
        }
    }

    ratatui::restore();
    Ok(())
}
