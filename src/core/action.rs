//! # Actions
//!
//! Everything that can happen in the browser becomes an `Action`.
//! User clicks a document? That's `Action::SelectDocument(key)`.
//! Terminal regains focus on a dark desktop? That's
//! `Action::SystemAppearanceChanged(true)`.
//!
//! The `update()` function takes the current state and an action and mutates
//! it in place. No side effects here: anything that needs I/O comes back as an
//! `Effect` for the caller to perform.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, warn};

use crate::core::state::{App, SectionKey};
use crate::core::theme::ThemePreference;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectDocument(String),
    SelectItem(String),
    ToggleSection(SectionKey),
    DismissWelcome,
    SetSearchQuery(String),
    ClearSearch,
    OpenPreferences,
    ClosePreferences,
    SetTheme(ThemePreference),
    /// `true` when the system now prefers a dark scheme.
    SystemAppearanceChanged(bool),
    ToggleDisabledList,
    Quit,
}

/// Work the caller must do after `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    PersistTheme(ThemePreference),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Action: {:?}", action);

    match action {
        Action::SelectDocument(key) => {
            if let Err(e) = app.selection.select_document(&app.catalog, &key) {
                warn!("Ignoring document selection: {}", e);
            }
            Effect::None
        }
        Action::SelectItem(id) => {
            if let Err(e) = app.selection.select_item(&id) {
                warn!("Ignoring item selection '{}': {}", id, e);
            }
            Effect::None
        }
        Action::ToggleSection(key) => {
            app.selection.toggle_section(key);
            Effect::None
        }
        Action::DismissWelcome => {
            app.selection.dismiss_welcome();
            Effect::None
        }
        Action::SetSearchQuery(text) => {
            app.selection.set_search_query(text);
            Effect::None
        }
        Action::ClearSearch => {
            app.selection.set_search_query(String::new());
            Effect::None
        }
        Action::OpenPreferences => {
            app.show_preferences = true;
            Effect::None
        }
        Action::ClosePreferences => {
            app.show_preferences = false;
            Effect::None
        }
        Action::SetTheme(preference) => {
            if app.theme.preference() == preference {
                return Effect::None;
            }
            app.theme.set_preference(preference);
            app.status_message = format!("Theme: {}", preference.label());
            Effect::PersistTheme(preference)
        }
        Action::SystemAppearanceChanged(prefers_dark) => {
            if app.theme.system_changed(prefers_dark) {
                debug!(
                    "System appearance now {:?}, showing {:?}",
                    app.theme.system(),
                    app.theme.appearance()
                );
            }
            Effect::None
        }
        Action::ToggleDisabledList => {
            app.show_disabled = !app.show_disabled;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
