//! Header bar: app title, connection dot, view tabs and backend name

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use acceptme_app::View;

use crate::theme::styles;

pub const APP_TITLE: &str = "AcceptMe - League Auto Accept";

pub struct MainHeader<'a> {
    view: View,
    connected: bool,
    backend_name: &'a str,
}

impl<'a> MainHeader<'a> {
    pub fn new(view: View, connected: bool, backend_name: &'a str) -> Self {
        Self {
            view,
            connected,
            backend_name,
        }
    }

    fn tab(&self, label: &'static str, key: &'static str, view: View) -> Vec<Span<'static>> {
        let style = if self.view == view {
            styles::accent().add_modifier(Modifier::UNDERLINED)
        } else {
            styles::text_secondary()
        };
        vec![
            Span::styled(format!("[{}]", key), styles::key_hint()),
            Span::styled(format!(" {}", label), style),
        ]
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let dot_style = styles::connection(self.connected);
        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled("●", dot_style),
            Span::raw(" "),
            Span::styled(APP_TITLE, styles::accent()),
        ]);

        let mut right_spans = Vec::new();
        right_spans.extend(self.tab("Status", "esc", View::Main));
        right_spans.push(Span::raw("  "));
        right_spans.extend(self.tab("Preferences", "p", View::Preferences));
        right_spans.push(Span::styled("  │ ", styles::text_muted()));
        right_spans.push(Span::styled(self.backend_name.to_string(), styles::text_secondary()));
        right_spans.push(Span::raw(" "));
        let right = Line::from(right_spans);

        let left_width = left.width() as u16;
        let right_width = right.width() as u16;

        Paragraph::new(left).render(inner, buf);

        // Drop the right side when it would overlap the title
        if left_width + right_width < inner.width {
            let right_area = Rect {
                x: inner.x + inner.width - right_width,
                width: right_width,
                ..inner
            };
            Paragraph::new(right).render(right_area, buf);
        }
    }
}
