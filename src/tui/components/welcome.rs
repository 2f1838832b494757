//! # Welcome Panel
//!
//! First-run message in the content pane. Shown until dismissed with `x`;
//! there is no way to bring it back within a session.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::tui::component::Component;
use crate::tui::palette::Palette;

const INTRO: &str = "DevDocs combines multiple API documentations in a fast, organized, \
    and searchable interface. Here's what you should know before you start:";

const TIPS: [&str; 4] = [
    "Open the Preferences (press ,) to see which docs are available and to pick a theme.",
    "You don't have to use your mouse: the Preferences also list the keyboard shortcuts.",
    "Search matches any part of a document or entry name, ignoring case \
     (e.g. \"clip\" brings up \"background-clip\").",
    "Press / or s to jump to the search box, and Esc to clear it.",
];

pub struct WelcomePanel<'a> {
    pub palette: &'a Palette,
}

impl WelcomePanel<'_> {
    /// Body lines wrapped to `width` columns, numbered tips with hanging indent.
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let width = usize::from(width.max(10));
        let text = Style::default().fg(self.palette.fg);
        let mut lines = vec![Line::from(Span::styled(
            "Welcome!",
            Style::default()
                .fg(self.palette.accent)
                .add_modifier(Modifier::BOLD),
        ))];
        lines.push(Line::default());

        for chunk in textwrap::wrap(INTRO, width) {
            lines.push(Line::from(Span::styled(chunk.into_owned(), text)));
        }
        lines.push(Line::default());

        for (i, tip) in TIPS.iter().enumerate() {
            let first = format!("{}. ", i + 1);
            let indent = " ".repeat(first.len());
            let opts = textwrap::Options::new(width)
                .initial_indent(&first)
                .subsequent_indent(&indent);
            for chunk in textwrap::wrap(tip, opts) {
                lines.push(Line::from(Span::styled(chunk.into_owned(), text)));
            }
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Happy coding!",
            text.add_modifier(Modifier::BOLD),
        )));
        lines
    }
}

impl Component for WelcomePanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.palette.accent))
            .title_bottom(
                Line::from(Span::styled(
                    " x Stop showing this message ",
                    Style::default().fg(self.palette.link),
                ))
                .alignment(Alignment::Right),
            )
            .padding(Padding::new(2, 2, 1, 1));
        let inner_width = block.inner(area).width;

        let paragraph = Paragraph::new(self.lines(inner_width))
            .block(block)
            .style(self.palette.base());
        frame.render_widget(paragraph, area);
    }
}
