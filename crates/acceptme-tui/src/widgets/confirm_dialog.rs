//! Quit confirmation shown while auto-accept is running

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay;
use crate::theme::styles;

pub struct ConfirmDialog;

impl Widget for ConfirmDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = modal_overlay::centered_rect(48, 8, area);
        modal_overlay::prepare(buf, area, modal_area);

        let block = styles::modal(" Quit AcceptMe? ").title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Message line 1
            Constraint::Length(1), // Message line 2
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new("Auto accept is still running.")
            .alignment(Alignment::Center)
            .style(styles::alert())
            .render(chunks[1], buf);
        Paragraph::new("Queue pops will no longer be accepted.")
            .alignment(Alignment::Center)
            .style(styles::text_primary())
            .render(chunks[2], buf);

        let buttons = Line::from(vec![
            Span::styled("[y]", styles::key_hint()),
            Span::styled(" Yes", styles::error()),
            Span::raw("    "),
            Span::styled("[n]", styles::key_hint()),
            Span::styled(" No", styles::success()),
        ]);
        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(chunks[4], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_dialog_content() {
        let mut term = TestTerminal::new();
        term.render_widget(ConfirmDialog, term.area());

        assert!(term.buffer_contains("Quit AcceptMe?"));
        assert!(term.buffer_contains("still running"));
        assert!(term.buffer_contains("[y] Yes"));
        assert!(term.buffer_contains("[n] No"));
    }

    #[test]
    fn test_dialog_tiny_terminal_does_not_panic() {
        let mut term = TestTerminal::with_size(10, 3);
        term.render_widget(ConfirmDialog, term.area());
    }
}
