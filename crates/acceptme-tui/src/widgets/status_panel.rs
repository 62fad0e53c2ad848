//! Main view card: connection, run status, start/stop control, accept delay

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use acceptme_app::state::StatusViewState;
use acceptme_core::AcceptDelay;

use crate::theme::{palette, styles};

pub const CONNECTED_LABEL: &str = "✓ Connected";
pub const DISCONNECTED_LABEL: &str = "✗ Disconnected";
pub const MATCH_FOUND_BANNER: &str = "Match Found! Auto-accepting...";
pub const START_LABEL: &str = "Start Auto Accept";
pub const STOP_LABEL: &str = "Stop Auto Accept";

pub struct StatusPanel<'a> {
    status: &'a StatusViewState,
}

impl<'a> StatusPanel<'a> {
    pub fn new(status: &'a StatusViewState) -> Self {
        Self { status }
    }

    fn connection_line(&self) -> Line<'static> {
        let label = if self.status.connected {
            CONNECTED_LABEL
        } else {
            DISCONNECTED_LABEL
        };
        let style = styles::connection(self.status.connected);
        Line::from(vec![
            Span::styled("League Client  ", styles::text_secondary()),
            Span::styled(label, style.add_modifier(Modifier::BOLD)),
        ])
    }

    fn button_line(&self) -> Line<'static> {
        let status = self.status;
        let label = if status.running {
            STOP_LABEL
        } else {
            START_LABEL
        };

        let enabled = status.can_toggle() && !status.toggle_pending;
        let style = styles::toggle_button(status.running, enabled);

        let mut spans = vec![Span::styled(format!("  {}  ", label), style)];
        if status.toggle_pending {
            spans.push(Span::styled(" …", styles::text_muted()));
        } else if status.can_toggle() {
            spans.push(Span::styled(" [space]", styles::key_hint()));
        }
        Line::from(spans)
    }

    fn delay_lines(&self) -> Vec<Line<'static>> {
        let delay = self.status.accept_delay;
        vec![
            Line::from(vec![
                Span::styled("Accept Delay  ", styles::text_secondary()),
                Span::styled(delay.label(), styles::accent()),
            ]),
            Line::from(vec![
                Span::styled("Instant ", styles::text_muted()),
                Span::styled("◀ ", styles::key_hint()),
                slider(delay),
                Span::styled(" ▶", styles::key_hint()),
                Span::styled(format!(" {}s", AcceptDelay::MAX), styles::text_muted()),
            ]),
        ]
    }
}

/// Track with one cell per second and a knob at the current value
pub fn slider(delay: AcceptDelay) -> Span<'static> {
    let track: String = (0..=AcceptDelay::MAX)
        .map(|s| match s.cmp(&delay.seconds()) {
            std::cmp::Ordering::Less => '━',
            std::cmp::Ordering::Equal => '●',
            std::cmp::Ordering::Greater => '─',
        })
        .collect();
    Span::styled(track, Style::default().fg(palette::ACCENT))
}

impl Widget for StatusPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card(true).title(" Auto Accept ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = vec![
            self.connection_line(),
            Line::from(Span::styled(self.status.status.clone(), styles::text_primary())),
        ];

        if self.status.match_found {
            lines.push(Line::from(Span::styled(
                MATCH_FOUND_BANNER,
                styles::alert(),
            )));
        } else {
            lines.push(Line::default());
        }

        lines.push(Line::default());
        lines.push(self.button_line());
        lines.push(Line::default());
        lines.extend(self.delay_lines());

        if let Some(updated) = self.status.last_updated {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("Updated {}", updated.format("%H:%M:%S")),
                styles::text_muted(),
            )));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render(status: &StatusViewState) -> TestTerminal {
        let mut term = TestTerminal::with_size(64, 14);
        term.render_widget(StatusPanel::new(status), term.area());
        term
    }

    #[test]
    fn test_initial_state() {
        let term = render(&StatusViewState::default());

        assert!(term.buffer_contains(DISCONNECTED_LABEL));
        assert!(term.buffer_contains("Initializing..."));
        assert!(term.buffer_contains(START_LABEL));
        assert!(term.buffer_contains("Instant"));
        assert!(!term.buffer_contains("[space]"));
    }

    #[test]
    fn test_running_with_match() {
        let mut status = StatusViewState::default();
        status.connected = true;
        status.running = true;
        status.match_found = true;
        status.status = "Match found".to_string();
        let term = render(&status);

        assert!(term.buffer_contains(CONNECTED_LABEL));
        assert!(term.buffer_contains(STOP_LABEL));
        assert!(term.buffer_contains(MATCH_FOUND_BANNER));
        assert!(term.buffer_contains("[space]"));
    }

    #[test]
    fn test_delay_label() {
        let mut status = StatusViewState::default();
        status.accept_delay = AcceptDelay::clamped(4);
        let term = render(&status);
        assert!(term.buffer_contains("4s"));
    }

    #[test]
    fn test_slider_knob_position() {
        assert_eq!(slider(AcceptDelay::clamped(0)).content, "●──────────");
        assert_eq!(slider(AcceptDelay::clamped(3)).content, "━━━●───────");
        assert_eq!(slider(AcceptDelay::clamped(10)).content, "━━━━━━━━━━●");
    }

    #[test]
    fn test_pending_toggle_hides_hint() {
        let mut status = StatusViewState::default();
        status.connected = true;
        status.toggle_pending = true;
        let term = render(&status);
        assert!(term.buffer_contains("…"));
        assert!(!term.buffer_contains("[space]"));
    }
}
