//! Main render/view function (View in TEA pattern)


use acceptme_app::state::{AppState, PreferencesViewState};
use acceptme_app::View;
use acceptme_core::PickMode;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI.
///
/// Pure: reads the state and draws it, nothing else.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new(state.view, state.status.connected, &state.backend_name),
        areas.header,
    );

    match state.view {
        View::Main => {
            frame.render_widget(
                widgets::StatusPanel::new(&state.status),
                layout::status_card(areas.body),
            );
        }
        View::Preferences => render_preferences(frame, &state.preferences, areas.body),
    }

    frame.render_widget(
        widgets::Footer::new(state.view, state.preferences.last_error.as_deref()),
        areas.footer,
    );

    if state.view == View::Preferences && state.preferences.picker.is_open() {
        frame.render_widget(
            widgets::ChampionPicker::new(&state.preferences),
            area,
        );
    }

    if state.quit_dialog {
        frame.render_widget(widgets::ConfirmDialog, area);
    }
}

fn render_preferences(frame: &mut Frame, prefs: &PreferencesViewState, body: Rect) {
    let areas = layout::preferences(body);
    let role = prefs.active_role;

    frame.render_widget(widgets::RoleTabs::new(role), areas.role_tabs);
    frame.render_widget(widgets::QuickSettings::new(&prefs.toggles), areas.quick_settings);

    for (mode, section_area) in [(PickMode::Pick, areas.pick), (PickMode::Ban, areas.ban)] {
        let entries = prefs.visible_entries(role, mode);
        let section = widgets::PickBanSection::new(mode, role, &entries)
            .selected(prefs.selected_index(mode))
            .focused(prefs.focus == mode && !prefs.picker.is_open());
        frame.render_widget(section, section_area);
    }
}
