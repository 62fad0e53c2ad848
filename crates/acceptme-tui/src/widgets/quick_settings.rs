//! Hover / Lock / Ban switches shown above the pick and ban lists

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use acceptme_core::{Toggle, ToggleSettings};

use crate::theme::styles;

pub struct QuickSettings<'a> {
    toggles: &'a ToggleSettings,
}

impl<'a> QuickSettings<'a> {
    pub fn new(toggles: &'a ToggleSettings) -> Self {
        Self { toggles }
    }
}

fn toggle_key(toggle: Toggle) -> &'static str {
    match toggle {
        Toggle::Hover => "H",
        Toggle::Lock => "L",
        Toggle::Ban => "B",
    }
}

impl Widget for QuickSettings<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card(false).title(" Quick Settings ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for toggle in Toggle::ALL {
            let enabled = self.toggles.get(toggle);
            let (marker, style) = if enabled {
                ("[on] ", styles::success())
            } else {
                ("[off]", styles::text_muted())
            };
            spans.push(Span::styled(
                format!("[{}] ", toggle_key(toggle)),
                styles::key_hint(),
            ));
            spans.push(Span::styled(format!("{} ", toggle.label()), styles::text_primary()));
            spans.push(Span::styled(marker, style));
            spans.push(Span::raw("   "));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
