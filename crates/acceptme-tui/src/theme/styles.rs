//! Semantic styles used by the widgets

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

pub fn text_primary() -> Style {
    Style::new().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::new().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::new().fg(palette::TEXT_MUTED)
}

/// Typed search text
pub fn emphasis() -> Style {
    Style::new().fg(palette::TEXT_BRIGHT).add_modifier(Modifier::BOLD)
}

pub fn accent() -> Style {
    Style::new().fg(palette::ACCENT).add_modifier(Modifier::BOLD)
}

pub fn success() -> Style {
    Style::new().fg(palette::STATUS_GREEN)
}

pub fn error() -> Style {
    Style::new().fg(palette::STATUS_RED)
}

/// Green when the game client is reachable, red otherwise
pub fn connection(connected: bool) -> Style {
    if connected {
        success()
    } else {
        error()
    }
}

/// Match-found banner and warnings
pub fn alert() -> Style {
    Style::new().fg(palette::STATUS_YELLOW).add_modifier(Modifier::BOLD)
}

/// `[key]` hints
pub fn key_hint() -> Style {
    Style::new().fg(palette::STATUS_YELLOW)
}

/// Highlighted list row; only the focused list gets the accent fill
pub fn selected_row(focused: bool) -> Style {
    if focused {
        Style::new()
            .fg(palette::CONTRAST_FG)
            .bg(palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(palette::TEXT_BRIGHT).bg(palette::BORDER_DIM)
    }
}

/// Start/stop control: red to stop, green to start, greyed out while the
/// click would do nothing
pub fn toggle_button(running: bool, enabled: bool) -> Style {
    match (enabled, running) {
        (false, _) => Style::new().fg(palette::TEXT_MUTED).bg(palette::BORDER_DIM),
        (true, true) => Style::new()
            .fg(palette::TEXT_BRIGHT)
            .bg(palette::STATUS_RED)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::new()
            .fg(palette::CONTRAST_FG)
            .bg(palette::STATUS_GREEN)
            .add_modifier(Modifier::BOLD),
    }
}

fn rounded<'a>() -> Block<'a> {
    Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

/// Panel on the main background
pub fn card(focused: bool) -> Block<'static> {
    let border = if focused {
        palette::BORDER_ACTIVE
    } else {
        palette::BORDER_DIM
    };
    rounded()
        .border_style(Style::new().fg(border))
        .style(Style::new().bg(palette::CARD_BG))
}

/// Popup frame with a title
pub fn modal(title: &str) -> Block<'_> {
    rounded()
        .title(title)
        .border_style(Style::new().fg(palette::BORDER_ACTIVE))
        .style(Style::new().bg(palette::POPUP_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_card_uses_active_border() {
        assert_ne!(format!("{:?}", card(true)), format!("{:?}", card(false)));
    }

    #[test]
    fn test_selected_row_accent_only_when_focused() {
        assert_eq!(selected_row(true).bg, Some(palette::ACCENT));
        assert_eq!(selected_row(false).bg, Some(palette::BORDER_DIM));
    }

    #[test]
    fn test_toggle_button_disabled_is_muted() {
        assert_eq!(toggle_button(true, false).bg, Some(palette::BORDER_DIM));
        assert_eq!(toggle_button(true, true).bg, Some(palette::STATUS_RED));
        assert_eq!(toggle_button(false, true).bg, Some(palette::STATUS_GREEN));
    }
}
