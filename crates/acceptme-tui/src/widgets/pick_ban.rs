//! Ordered pick / ban list for the active role

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use acceptme_core::{Champion, PickMode, Role};

use crate::theme::{palette, styles};

pub fn section_title(mode: PickMode) -> &'static str {
    match mode {
        PickMode::Pick => "Pick Order",
        PickMode::Ban => "Ban Priority",
    }
}

pub fn section_subtitle(mode: PickMode) -> &'static str {
    match mode {
        PickMode::Pick => "Champions to auto-select",
        PickMode::Ban => "Champions to auto-ban",
    }
}

pub fn empty_placeholder(mode: PickMode) -> &'static str {
    match mode {
        PickMode::Pick => "Add champions to pick",
        PickMode::Ban => "Add champions to ban",
    }
}

/// One section of the preferences view.
///
/// `entries` are the champions already resolved against the catalog, in
/// priority order. The highlighted row is only drawn with the accent when
/// the section has focus.
pub struct PickBanSection<'a> {
    mode: PickMode,
    role: Role,
    entries: &'a [&'a Champion],
    selected: usize,
    focused: bool,
}

impl<'a> PickBanSection<'a> {
    pub fn new(mode: PickMode, role: Role, entries: &'a [&'a Champion]) -> Self {
        Self {
            mode,
            role,
            entries,
            selected: 0,
            focused: false,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn header_lines(&self) -> Vec<Line<'static>> {
        let hint = match self.mode {
            PickMode::Pick => "[p] add",
            PickMode::Ban => "[b] add",
        };
        vec![
            Line::from(vec![
                Span::styled(
                    section_subtitle(self.mode),
                    styles::text_secondary(),
                ),
                Span::styled(format!("  {}", hint), styles::key_hint()),
            ]),
            Line::default(),
        ]
    }

    fn entry_line(&self, index: usize, champion: &Champion) -> Line<'static> {
        let style = if index != self.selected {
            styles::text_primary()
        } else if self.focused {
            styles::selected_row(true)
        } else {
            styles::selected_row(false)
        };
        let number_style = if index == self.selected && self.focused {
            style
        } else {
            Style::default().fg(palette::role_color(self.role))
        };
        Line::from(vec![
            Span::styled(format!(" {}. ", index + 1), number_style),
            Span::styled(format!("{} ", champion.name), style),
        ])
    }
}

impl Widget for PickBanSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", section_title(self.mode));
        let block = styles::card(self.focused).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = self.header_lines();
        let list_height = (inner.height as usize).saturating_sub(lines.len());

        if self.entries.is_empty() {
            lines.push(Line::from(Span::styled(
                empty_placeholder(self.mode),
                styles::text_muted(),
            )));
        } else {
            // Scroll so the highlighted row stays visible
            let offset = (self.selected + 1).saturating_sub(list_height);
            lines.extend(
                self.entries
                    .iter()
                    .enumerate()
                    .skip(offset)
                    .take(list_height)
                    .map(|(index, champion)| self.entry_line(index, champion)),
            );
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
