//! Champion picker modal: search box, filtered results, icon source

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use acceptme_app::state::{PickerModal, PreferencesViewState};
use acceptme_core::{IconSource, PickMode};

use super::modal_overlay;
use crate::theme::{palette, styles};

const MODAL_WIDTH: u16 = 56;
const MODAL_HEIGHT: u16 = 20;
const SEARCH_PLACEHOLDER: &str = "Search champions...";

pub fn picker_title(mode: PickMode) -> &'static str {
    match mode {
        PickMode::Pick => "Select Champion",
        PickMode::Ban => "Select Ban",
    }
}

/// Keep the last `max_width` columns of `text`, marking the cut with `…`
fn truncate_start(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut kept = Vec::new();
    let mut width = 1;
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        kept.push(c);
    }
    std::iter::once('…').chain(kept.into_iter().rev()).collect()
}

/// Drawn over the whole screen; does nothing unless the picker is open
pub struct ChampionPicker<'a> {
    prefs: &'a PreferencesViewState,
}

impl<'a> ChampionPicker<'a> {
    pub fn new(prefs: &'a PreferencesViewState) -> Self {
        Self { prefs }
    }

    fn search_line(modal: &PickerModal) -> Line<'static> {
        let mut spans = vec![Span::styled(" / ", styles::accent())];
        if modal.query.is_empty() {
            spans.push(Span::styled("▏", styles::accent()));
            spans.push(Span::styled(SEARCH_PLACEHOLDER, styles::text_muted()));
        } else {
            spans.push(Span::styled(modal.query.clone(), styles::emphasis()));
            spans.push(Span::styled("▏", styles::accent()));
        }
        Line::from(spans)
    }

    fn render_results(&self, modal: &PickerModal, area: Rect, buf: &mut Buffer) {
        if self.prefs.loading && self.prefs.catalog.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                " Loading champions...",
                styles::text_muted(),
            )))
            .render(area, buf);
            return;
        }

        let results = self.prefs.picker_results();
        if results.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                " No champions found",
                styles::text_muted(),
            )))
            .render(area, buf);
            return;
        }

        let height = area.height as usize;
        let offset = (modal.selected + 1).saturating_sub(height);
        let name_width = (area.width as usize).saturating_sub(4);
        let lines: Vec<Line> = results
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(index, champion)| {
                let name = truncate_start(&champion.name, name_width);
                if index == modal.selected {
                    Line::from(Span::styled(
                        format!(" ▸ {:<width$}", name, width = name_width),
                        styles::selected_row(true),
                    ))
                } else {
                    Line::from(Span::styled(format!("   {}", name), styles::text_primary()))
                }
            })
            .collect();
        Paragraph::new(lines).render(area, buf);
    }

    fn detail_line(modal: &PickerModal, width: u16) -> Line<'static> {
        let Some(icon) = &modal.icon else {
            return Line::default();
        };
        let label = match icon.source {
            IconSource::Local(_) => " icon (local) ",
            IconSource::Remote(_) => " icon (cdn) ",
        };
        let available = (width as usize).saturating_sub(label.width());
        Line::from(vec![
            Span::styled(label, styles::text_secondary()),
            Span::styled(
                truncate_start(&icon.source.describe(), available),
                styles::text_muted(),
            ),
        ])
    }
}

impl Widget for ChampionPicker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(modal) = self.prefs.picker.modal() else {
            return;
        };

        let modal_area = modal_overlay::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        modal_overlay::prepare(buf, area, modal_area);

        let title = format!(" {} ", picker_title(modal.mode));
        let block = styles::modal(&title);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        if inner.height < 5 || inner.width == 0 {
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Length(1), // lane
            Constraint::Length(1), // search
            Constraint::Length(1), // spacer
            Constraint::Min(1),    // results
            Constraint::Length(1), // icon source
            Constraint::Length(1), // hints
        ])
        .split(inner);

        Paragraph::new(Line::from(Span::styled(
            format!(" {} Lane", modal.role.label()),
            Style::default().fg(palette::role_color(modal.role)),
        )))
        .render(chunks[0], buf);
        Paragraph::new(Self::search_line(modal)).render(chunks[1], buf);
        self.render_results(modal, chunks[3], buf);
        Paragraph::new(Self::detail_line(modal, inner.width)).render(chunks[4], buf);
        Paragraph::new(Line::from(vec![
            Span::styled(" [enter]", styles::key_hint()),
            Span::styled(" add  ", styles::text_muted()),
            Span::styled("[↑↓]", styles::key_hint()),
            Span::styled(" move  ", styles::text_muted()),
            Span::styled("[esc]", styles::key_hint()),
            Span::styled(" close", styles::text_muted()),
        ]))
        .render(chunks[5], buf);
    }
}
