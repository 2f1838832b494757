//! # Core Application Logic
//!
//! This module contains the browser's navigation and content model.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (static data)│
//!                    │  • State (selection)    │
//!                    │  • Action + update()    │
//!                    │  • resolve() / filter() │
//!                    │                         │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Documents, sections, items and their content
//! - [`search`]: Substring filter over the catalog
//! - [`state`]: The `App` struct and navigation `Selection`
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`resolver`]: Selection → what the content pane shows
//! - [`theme`] / [`preferences`]: Theme preference and its persisted slot
//! - [`config`]: Config file, env vars and CLI overrides

pub mod action;
pub mod catalog;
pub mod config;
pub mod preferences;
pub mod resolver;
pub mod search;
pub mod state;
pub mod theme;
