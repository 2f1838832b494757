//! # Application State
//!
//! Core navigation state for the browser. Domain logic only, no TUI types.
//! Presentation state (cursor rows, scroll offsets, focus) lives in `tui`.
//!
//! ```text
//! App
//! ├── catalog: Arc<Catalog>         // shared, read-only
//! ├── selection: Selection          // active doc/item, expansion, search, welcome
//! ├── theme: ThemeState             // preference + system signal
//! ├── show_preferences: bool        // preferences overlay open
//! ├── show_disabled: bool           // "DISABLED (n)" list expanded
//! └── status_message: String        // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::core::catalog::Catalog;
use crate::core::theme::ThemeState;

/// Identifies one collapsible section of one document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionKey {
    pub document: String,
    pub section: String,
}

impl SectionKey {
    pub fn new(document: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            section: section.into(),
        }
    }
}

/// Rejected navigation requests. Never surfaced to the user.
#[derive(Debug, PartialEq, Eq)]
pub enum NavigationError {
    /// Document key is absent from the catalog or disabled.
    InvalidSelection(String),
    /// An item was selected while no document is active.
    NoActiveDocument,
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::InvalidSelection(key) => {
                write!(f, "document '{key}' is not selectable")
            }
            NavigationError::NoActiveDocument => write!(f, "no active document"),
        }
    }
}

impl std::error::Error for NavigationError {}

/// The session's navigation position.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    active_document: Option<String>,
    active_item: Option<String>,
    expanded_sections: HashSet<SectionKey>,
    search_query: String,
    show_welcome: bool,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

impl Selection {
    pub fn new() -> Self {
        Self {
            active_document: None,
            active_item: None,
            expanded_sections: HashSet::new(),
            search_query: String::new(),
            show_welcome: true,
        }
    }

    pub fn active_document(&self) -> Option<&str> {
        self.active_document.as_deref()
    }

    pub fn active_item(&self) -> Option<&str> {
        self.active_item.as_deref()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn show_welcome(&self) -> bool {
        self.show_welcome
    }

    pub fn is_expanded(&self, document: &str, section: &str) -> bool {
        self.expanded_sections
            .contains(&SectionKey::new(document, section))
    }

    pub fn expanded_sections(&self) -> &HashSet<SectionKey> {
        &self.expanded_sections
    }

    /// Activate a document. Always clears the item and hides the welcome panel.
    pub fn select_document(&mut self, catalog: &Catalog, key: &str) -> Result<(), NavigationError> {
        if !catalog.is_selectable(key) {
            return Err(NavigationError::InvalidSelection(key.to_string()));
        }
        self.active_document = Some(key.to_string());
        self.active_item = None;
        self.show_welcome = false;
        Ok(())
    }

    /// Activate an item of the active document.
    ///
    /// Item ids are unique across the catalog and the only caller is the
    /// item's own sidebar row, so membership is not re-checked here.
    pub fn select_item(&mut self, id: &str) -> Result<(), NavigationError> {
        if self.active_document.is_none() {
            return Err(NavigationError::NoActiveDocument);
        }
        self.active_item = Some(id.to_string());
        Ok(())
    }

    /// Flip a section's expansion. Unknown pairs just become inert entries.
    pub fn toggle_section(&mut self, key: SectionKey) {
        if !self.expanded_sections.remove(&key) {
            self.expanded_sections.insert(key);
        }
    }

    pub fn dismiss_welcome(&mut self) {
        self.show_welcome = false;
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }
}

pub struct App {
    pub catalog: Arc<Catalog>,
    pub selection: Selection,
    pub theme: ThemeState,
    pub show_preferences: bool,
    pub show_disabled: bool,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Arc<Catalog>, theme: ThemeState) -> Self {
        Self {
            catalog,
            selection: Selection::new(),
            theme,
            show_preferences: false,
            show_disabled: false,
            status_message: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_catalog, test_app};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.selection.show_welcome());
        assert!(app.selection.active_document().is_none());
        assert!(app.selection.active_item().is_none());
        assert!(app.selection.search_query().is_empty());
        assert!(!app.show_preferences);
        assert!(!app.show_disabled);
    }

    #[test]
    fn test_select_document_resets_item_and_welcome() {
        let catalog = sample_catalog();
        let mut sel = Selection::new();
        sel.select_document(&catalog, "css").unwrap();
        sel.select_item("css-background").unwrap();
        sel.select_document(&catalog, "html").unwrap();
        assert_eq!(sel.active_document(), Some("html"));
        assert_eq!(sel.active_item(), None);
        assert!(!sel.show_welcome());
    }

    #[test]
    fn test_reselecting_same_document_clears_item() {
        let catalog = sample_catalog();
        let mut sel = Selection::new();
        sel.select_document(&catalog, "css").unwrap();
        sel.select_item("css-background").unwrap();
        sel.select_document(&catalog, "css").unwrap();
        assert_eq!(sel.active_item(), None);
    }

    #[test]
    fn test_select_disabled_or_missing_document_is_rejected() {
        let catalog = sample_catalog();
        let mut sel = Selection::new();
        sel.select_document(&catalog, "css").unwrap();
        sel.select_item("css-display").unwrap();
        let before = sel.clone();

        assert_eq!(
            sel.select_document(&catalog, "angular"),
            Err(NavigationError::InvalidSelection("angular".to_string()))
        );
        assert_eq!(
            sel.select_document(&catalog, "cobol"),
            Err(NavigationError::InvalidSelection("cobol".to_string()))
        );
        assert_eq!(sel, before);
    }

    #[test]
    fn test_rejected_selection_keeps_welcome() {
        let catalog = sample_catalog();
        let mut sel = Selection::new();
        assert!(sel.select_document(&catalog, "angular").is_err());
        assert!(sel.show_welcome());
    }

    #[test]
    fn test_select_item_requires_active_document() {
        let mut sel = Selection::new();
        assert_eq!(
            sel.select_item("css-background"),
            Err(NavigationError::NoActiveDocument)
        );
        assert_eq!(sel.active_item(), None);
    }

    #[test]
    fn test_toggle_section_flips_membership() {
        let mut sel = Selection::new();
        sel.toggle_section(SectionKey::new("css", "Properties"));
        assert!(sel.is_expanded("css", "Properties"));
        sel.toggle_section(SectionKey::new("css", "Properties"));
        assert!(!sel.is_expanded("css", "Properties"));
    }

    #[test]
    fn test_section_keys_do_not_collide_on_separator() {
        // "a-b" + "c" and "a" + "b-c" would collide as joined strings
        let mut sel = Selection::new();
        sel.toggle_section(SectionKey::new("a-b", "c"));
        assert!(sel.is_expanded("a-b", "c"));
        assert!(!sel.is_expanded("a", "b-c"));
    }

    #[test]
    fn test_expansion_survives_document_change() {
        let catalog = sample_catalog();
        let mut sel = Selection::new();
        sel.select_document(&catalog, "css").unwrap();
        sel.toggle_section(SectionKey::new("css", "Properties"));
        sel.select_document(&catalog, "html").unwrap();
        sel.select_document(&catalog, "css").unwrap();
        assert!(sel.is_expanded("css", "Properties"));
    }

    #[test]
    fn test_dismiss_welcome_is_idempotent() {
        let mut sel = Selection::new();
        sel.dismiss_welcome();
        let once = sel.clone();
        sel.dismiss_welcome();
        assert!(!sel.show_welcome());
        assert_eq!(sel, once);
    }

    #[test]
    fn test_search_query_does_not_touch_selection() {
        let catalog = sample_catalog();
        let mut sel = Selection::new();
        sel.select_document(&catalog, "css").unwrap();
        sel.select_item("css-background").unwrap();
        sel.set_search_query("forms");
        assert_eq!(sel.search_query(), "forms");
        assert_eq!(sel.active_document(), Some("css"));
        assert_eq!(sel.active_item(), Some("css-background"));
    }
}
