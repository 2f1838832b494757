use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Block;

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    ContentView, PreferencesOverlay, SearchBoxView, Sidebar, TitleBar,
};
use crate::tui::palette::Palette;
use crate::tui::{Focus, TuiState};

/// Screen regions from the last frame, kept for mouse hit testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppLayout {
    pub title: Rect,
    pub search: Rect,
    pub sidebar: Rect,
    pub content: Rect,
}

/// Split the frame into title bar, sidebar column (search over list) and content.
///
/// The sidebar never takes more than half the width.
pub fn compute_layout(area: Rect, sidebar_width: u16) -> AppLayout {
    use Constraint::{Length, Min};

    let [title, body] = Layout::vertical([Length(1), Min(0)]).areas(area);
    let width = sidebar_width.min(body.width / 2);
    let [left, content] = Layout::horizontal([Length(width), Min(0)]).areas(body);
    let [search, sidebar] = Layout::vertical([Length(3), Min(0)]).areas(left);

    AppLayout {
        title,
        search,
        sidebar,
        content,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let palette = Palette::for_appearance(app.theme.appearance());
    let layout = compute_layout(frame.area(), tui.sidebar_width);
    tui.layout = layout;

    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let document = app
        .selection
        .active_document()
        .and_then(|key| app.catalog.get(key));
    let item = document
        .zip(app.selection.active_item())
        .and_then(|(doc, id)| doc.item(id))
        .map(|item| item.name.as_str());
    TitleBar {
        document: document.map(|doc| doc.name.as_str()),
        item,
        status: &app.status_message,
        preference: app.theme.preference(),
        appearance: app.theme.appearance(),
        palette: &palette,
    }
    .render(frame, layout.title);

    SearchBoxView {
        search: &tui.search,
        focused: tui.focus == Focus::Search && tui.preferences.is_none(),
        palette: &palette,
    }
    .render(frame, layout.search);

    Sidebar {
        state: &mut tui.sidebar,
        focused: tui.focus == Focus::Sidebar,
        show_counts: tui.show_item_counts,
        palette: &palette,
    }
    .render(frame, layout.sidebar);

    ContentView {
        state: &mut tui.content,
        app,
        focused: tui.focus == Focus::Content,
        palette: &palette,
    }
    .render(frame, layout.content);

    // Overlay last so it covers everything else
    if app.show_preferences
        && let Some(state) = &tui.preferences
    {
        PreferencesOverlay {
            state,
            catalog: &app.catalog,
            current: app.theme.preference(),
            palette: &palette,
        }
        .render(frame, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use crate::tui::components::PreferencesState;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        tui.sidebar.sync(app);
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_layout_regions() {
        let layout = compute_layout(Rect::new(0, 0, 100, 30), 32);
        assert_eq!(layout.title, Rect::new(0, 0, 100, 1));
        assert_eq!(layout.search, Rect::new(0, 1, 32, 3));
        assert_eq!(layout.sidebar, Rect::new(0, 4, 32, 26));
        assert_eq!(layout.content, Rect::new(32, 1, 68, 29));
    }

    #[test]
    fn test_sidebar_capped_at_half_width() {
        let layout = compute_layout(Rect::new(0, 0, 40, 20), 32);
        assert_eq!(layout.sidebar.width, 20);
        assert_eq!(layout.content.width, 20);
    }

    #[test]
    fn test_first_run_shows_welcome() {
        let app = test_app();
        let mut tui = TuiState::new(32, true);
        let text = draw(&app, &mut tui, 100, 30);
        assert!(text.contains("DevDocs"));
        assert!(text.contains("Welcome!"));
        assert!(text.contains("Search..."));
        assert!(text.contains("CSS"));
        assert_eq!(tui.layout, compute_layout(Rect::new(0, 0, 100, 30), 32));
    }

    #[test]
    fn test_item_detail_shows_breadcrumb() {
        let mut app = test_app();
        update(&mut app, Action::SelectDocument("css".to_string()));
        update(&mut app, Action::SelectItem("css-background".to_string()));
        let mut tui = TuiState::new(32, true);
        let text = draw(&app, &mut tui, 120, 40);
        assert!(text.contains("DevDocs › CSS › background"));
        assert!(!text.contains("Welcome!"));
    }

    #[test]
    fn test_preferences_overlay_drawn_when_open() {
        let mut app = test_app();
        update(&mut app, Action::OpenPreferences);
        let mut tui = TuiState::new(32, true);
        tui.preferences = Some(PreferencesState::new(app.theme.preference()));
        let text = draw(&app, &mut tui, 120, 40);
        assert!(text.contains("Preferences"));
        assert!(text.contains("Keyboard shortcuts"));
    }
}
