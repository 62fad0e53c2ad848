//! Lane selector tabs

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use acceptme_core::Role;

use crate::theme::{palette, styles};

/// One tab per role, numbered 1-5, the active one filled with its accent.
/// The active role's icon asset is named in the top-right border.
pub struct RoleTabs {
    active: Role,
}

impl RoleTabs {
    pub fn new(active: Role) -> Self {
        Self { active }
    }
}

impl Widget for RoleTabs {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card(false).title(" Role ").title_top(
            Line::from(Span::styled(
                format!(" {} ", self.active.icon_path()),
                styles::text_muted(),
            ))
            .right_aligned(),
        );
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for role in Role::ALL {
            let color = palette::role_color(role);
            let style = if role == self.active {
                Style::default()
                    .fg(palette::CONTRAST_FG)
                    .bg(color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color)
            };
            spans.push(Span::styled(
                format!("{}", role.index() + 1),
                styles::key_hint(),
            ));
            spans.push(Span::styled(format!(" {} ", role.label()), style));
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled("[tab] next", styles::text_muted()));

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_all_roles_listed() {
        let mut term = TestTerminal::with_size(80, 3);
        term.render_widget(RoleTabs::new(Role::Top), term.area());

        for label in ["TOP", "JGL", "MID", "ADC", "SUP"] {
            assert!(term.buffer_contains(label), "missing {}", label);
        }
    }

    #[test]
    fn test_active_role_is_filled() {
        let mut term = TestTerminal::with_size(80, 3);
        term.render_widget(RoleTabs::new(Role::Mid), term.area());

        let (x, y) = term.find("MID").expect("MID rendered");
        assert_eq!(term.buffer()[(x, y)].bg, palette::ROLE_MID);
        let (x, y) = term.find("TOP").expect("TOP rendered");
        assert_ne!(term.buffer()[(x, y)].bg, palette::ROLE_TOP);
    }

    #[test]
    fn test_border_names_active_role_icon() {
        let mut term = TestTerminal::with_size(80, 3);
        term.render_widget(RoleTabs::new(Role::Adc), term.area());

        assert!(term.line_contains(0, "/icons/roles/Bottom_icon.png"));
        assert!(!term.buffer_contains("Middle_icon"));
    }
}
