//! End-to-end browsing through the public API: the built-in catalog, the
//! reducer, the resolver and the terminal adapter driven by synthetic events.

use std::sync::Arc;

use devdocs::core::action::{Action, Effect, update};
use devdocs::core::catalog::Catalog;
use devdocs::core::preferences::{FilePreferenceStore, load_theme, save_theme};
use devdocs::core::resolver::{DetailBlock, DisplayMode, detail_blocks, resolve};
use devdocs::core::search::filter;
use devdocs::core::state::App;
use devdocs::core::theme::{Appearance, FixedAppearance, ThemePreference, ThemeState};
use devdocs::tui::event::TuiEvent;
use devdocs::tui::{Focus, TuiState, dispatch, ui};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn builtin_app() -> App {
    let catalog = Catalog::builtin().unwrap();
    App::new(
        Arc::new(catalog),
        ThemeState::new(ThemePreference::Auto, Appearance::Dark),
    )
}

fn keys(docs: &[&devdocs::core::catalog::Document]) -> Vec<String> {
    docs.iter().map(|d| d.key.clone()).collect()
}

fn draw(app: &App, tui: &mut TuiState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| ui::draw_ui(f, app, tui)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}

#[test]
fn test_builtin_catalog_enabled_and_disabled() {
    let catalog = Catalog::builtin().unwrap();
    let enabled: Vec<&str> = catalog.enabled().map(|d| d.key.as_str()).collect();
    assert_eq!(
        enabled,
        [
            "css",
            "html",
            "javascript",
            "react",
            "node.js",
            "python",
            "http",
            "web-apis",
            "git",
            "typescript",
            "vue.js",
            "docker",
            "mongodb",
            "express",
            "bootstrap",
            "sass",
            "webpack",
        ]
    );
    assert_eq!(catalog.disabled().count(), 75);
    assert!(catalog.disabled().any(|d| d.key == "angular"));
    assert!(!catalog.is_selectable("angular"));
}

#[test]
fn test_http_method_detail_lists_characteristics_and_example() {
    let mut app = builtin_app();
    update(&mut app, Action::SelectDocument("http".to_string()));
    update(&mut app, Action::SelectItem("http-get".to_string()));

    match resolve(&app.selection, &app.catalog) {
        DisplayMode::ItemDetail { document, detail } => {
            assert_eq!(document.key, "http");
            assert!(detail.description.contains("- Can be cached"));
            let blocks = detail_blocks(detail);
            assert!(matches!(blocks.last(), Some(DetailBlock::Examples(_))));
        }
        other => panic!("expected item detail, got {other:?}"),
    }
}

#[test]
fn test_empty_query_lists_enabled_documents() {
    let catalog = Catalog::builtin().unwrap();
    let all: Vec<_> = catalog.enabled().collect();
    assert_eq!(keys(&filter(&catalog, "")), keys(&all));
}

#[test]
fn test_query_matches_item_names_case_insensitively() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(keys(&filter(&catalog, "BACKGROUND-clip")), ["css"]);
    assert!(filter(&catalog, "bgcp").is_empty());
}

#[test]
fn test_css_background_resolves_to_detail_with_syntax() {
    let mut app = builtin_app();
    update(&mut app, Action::SelectDocument("css".to_string()));
    update(&mut app, Action::SelectItem("css-background".to_string()));

    match resolve(&app.selection, &app.catalog) {
        DisplayMode::ItemDetail { document, detail } => {
            assert_eq!(document.key, "css");
            let blocks = detail_blocks(detail);
            assert!(matches!(blocks[0], DetailBlock::Syntax(_)));
            assert!(!blocks.iter().any(|b| matches!(b, DetailBlock::Methods(_))));
        }
        other => panic!("expected item detail, got {other:?}"),
    }
}

#[test]
fn test_item_without_details_falls_back_to_overview() {
    let mut app = builtin_app();
    update(&mut app, Action::SelectDocument("css".to_string()));
    update(&mut app, Action::SelectItem("css-display".to_string()));
    assert!(matches!(
        resolve(&app.selection, &app.catalog),
        DisplayMode::DocumentOverview(doc) if doc.key == "css"
    ));
}

#[test]
fn test_keyboard_walk_to_item_detail() {
    let mut app = builtin_app();
    let mut tui = TuiState::new(32, true);
    let system = FixedAppearance(true);
    tui.sidebar.sync(&app);

    // CSS row, then its Properties section, then the first property
    for event in [
        TuiEvent::Submit,
        TuiEvent::CursorDown,
        TuiEvent::Submit,
        TuiEvent::CursorDown,
        TuiEvent::Submit,
    ] {
        assert_eq!(dispatch(&mut app, &mut tui, event, &system), Effect::None);
    }
    assert_eq!(app.selection.active_document(), Some("css"));
    assert_eq!(app.selection.active_item(), Some("css-background"));

    let screen = draw(&app, &mut tui);
    assert!(screen.contains("DevDocs › CSS › background"));
    assert!(screen.contains("CSS Background Properties"));
    assert!(screen.contains("Syntax"));
}

#[test]
fn test_search_then_escape_restores_full_list() {
    let mut app = builtin_app();
    let mut tui = TuiState::new(32, true);
    let system = FixedAppearance(true);
    tui.sidebar.sync(&app);

    dispatch(&mut app, &mut tui, TuiEvent::InputChar('/'), &system);
    for c in "usestate".chars() {
        dispatch(&mut app, &mut tui, TuiEvent::InputChar(c), &system);
    }
    assert_eq!(tui.focus, Focus::Search);
    assert_eq!(tui.sidebar.rows().len(), 1);

    dispatch(&mut app, &mut tui, TuiEvent::Escape, &system);
    assert_eq!(app.selection.search_query(), "");
    assert_eq!(tui.sidebar.rows().len(), 17);
}

#[test]
fn test_theme_choice_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let mut app = builtin_app();
    let mut tui = TuiState::new(32, true);
    let system = FixedAppearance(true);
    dispatch(&mut app, &mut tui, TuiEvent::InputChar(','), &system);
    dispatch(&mut app, &mut tui, TuiEvent::CursorDown, &system);
    let effect = dispatch(&mut app, &mut tui, TuiEvent::Submit, &system);
    assert_eq!(effect, Effect::PersistTheme(ThemePreference::Light));

    let mut store = FilePreferenceStore::new(&path);
    save_theme(&mut store, ThemePreference::Light).unwrap();

    let reopened = FilePreferenceStore::new(&path);
    assert_eq!(load_theme(&reopened), ThemePreference::Light);
}
