//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: breadcrumb and theme indicator
//! - `WelcomePanel`: first-run message
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that own presentation state and emit events. The persistent
//! state lives in `TuiState`; a transient wrapper borrows it each frame.
//! - `SearchBox` / `SearchBoxView`: query field, emits `SearchEvent`
//! - `SidebarState` / `Sidebar`: document tree, emits core `Action`s
//! - `ContentViewState` / `ContentView`: scrollable overview or item detail
//! - `PreferencesState` / `PreferencesOverlay`: theme picker, emits `PreferencesEvent`
//!
//! Each file holds its state types, event types, rendering, event handling
//! and tests.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs
//! ├── search_box.rs
//! ├── sidebar.rs
//! ├── content_view.rs
//! ├── welcome.rs
//! └── preferences.rs
//! ```

pub mod content_view;
pub mod preferences;
pub mod search_box;
pub mod sidebar;
mod title_bar;
pub mod welcome;

pub use content_view::{ContentView, ContentViewState};
pub use preferences::{PreferencesEvent, PreferencesOverlay, PreferencesState};
pub use search_box::{SearchBox, SearchBoxView, SearchEvent};
pub use sidebar::{Sidebar, SidebarState};
pub use title_bar::TitleBar;
