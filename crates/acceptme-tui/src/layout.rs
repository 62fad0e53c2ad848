//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;
/// Key hints / last error
pub const FOOTER_HEIGHT: u16 = 1;

/// Screen areas shared by both views
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Split the screen into header, body and footer
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// Preferences body: role tabs, quick toggles, then pick and ban side by side
#[derive(Debug, Clone, Copy)]
pub struct PreferencesAreas {
    pub role_tabs: Rect,
    pub quick_settings: Rect,
    pub pick: Rect,
    pub ban: Rect,
}

pub fn preferences(body: Rect) -> PreferencesAreas {
    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(4),
    ])
    .split(body);

    let columns =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(rows[2]);

    PreferencesAreas {
        role_tabs: rows[0],
        quick_settings: rows[1],
        pick: columns[0],
        ban: columns[1],
    }
}

/// The status card, centered with a width cap
pub fn status_card(body: Rect) -> Rect {
    const MAX_WIDTH: u16 = 64;
    const HEIGHT: u16 = 14;

    let width = body.width.min(MAX_WIDTH);
    let height = body.height.min(HEIGHT);
    Rect::new(
        body.x + (body.width - width) / 2,
        body.y + (body.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.footer.height, FOOTER_HEIGHT);
        assert_eq!(layout.body.y, HEADER_HEIGHT);
        assert_eq!(
            layout.header.height + layout.body.height + layout.footer.height,
            area.height
        );
        assert_eq!(layout.footer.y, 23);
    }

    #[test]
    fn test_preferences_columns_split_evenly() {
        let body = Rect::new(0, 3, 80, 20);
        let areas = preferences(body);

        assert_eq!(areas.role_tabs.height, 3);
        assert_eq!(areas.quick_settings.y, 6);
        assert_eq!(areas.pick.width, 40);
        assert_eq!(areas.ban.x, 40);
        assert_eq!(areas.pick.height, 14);
    }

    #[test]
    fn test_status_card_centered_and_capped() {
        let body = Rect::new(0, 3, 120, 30);
        let card = status_card(body);
        assert_eq!(card.width, 64);
        assert_eq!(card.x, 28);

        let small = Rect::new(0, 0, 30, 8);
        let card = status_card(small);
        assert_eq!(card, small);
    }
}
