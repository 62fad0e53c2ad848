//! Bottom line: key hints for the current view, or the last save failure

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use acceptme_app::View;

use crate::theme::{palette, styles};

const MAIN_HINTS: &[(&str, &str)] = &[
    ("space", "start/stop"),
    ("←→", "delay"),
    ("0-9", "set delay"),
    ("c", "check"),
    ("r", "refresh"),
    ("p", "preferences"),
    ("q", "quit"),
];

const PREFERENCES_HINTS: &[(&str, &str)] = &[
    ("1-5", "role"),
    ("←→", "section"),
    ("↑↓", "move"),
    ("a", "add"),
    ("d", "remove"),
    ("H/L/B", "toggles"),
    ("esc", "back"),
];

pub struct Footer<'a> {
    view: View,
    error: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(view: View, error: Option<&'a str>) -> Self {
        Self { view, error }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::DEEPEST_BG));

        let line = if let Some(error) = self.error {
            Line::from(vec![
                Span::styled(" ✗ ", styles::error()),
                Span::styled(error.to_string(), styles::error()),
            ])
        } else {
            let hints = match self.view {
                View::Main => MAIN_HINTS,
                View::Preferences => PREFERENCES_HINTS,
            };
            let mut spans = vec![Span::raw(" ")];
            for (key, action) in hints {
                spans.push(Span::styled(format!("[{}]", key), styles::key_hint()));
                spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
            }
            Line::from(spans)
        };

        Paragraph::new(line).render(area, buf);
    }
}
