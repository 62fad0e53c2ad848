//! Rendering helpers for widget and full-screen tests
//!
//! Wraps ratatui's `TestBackend` so tests can draw a widget or a whole
//! frame and then assert on the resulting cells.
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! term.render_widget(RoleTabs::new(Role::Mid), term.area());
//! assert!(term.buffer_contains("MID"));
//! ```

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

use acceptme_app::AppState;
use acceptme_core::{normalize_catalog, RawChampion};

pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Standard 80x24 terminal
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        line_content(self.buffer(), line).contains(text)
    }

    pub fn cell_at(&self, x: u16, y: u16) -> Option<&str> {
        let buffer = self.buffer();
        if x < buffer.area.width && y < buffer.area.height {
            Some(buffer[(x, y)].symbol())
        } else {
            None
        }
    }

    /// Cell position of the first occurrence of `text`
    pub fn find(&self, text: &str) -> Option<(u16, u16)> {
        let buffer = self.buffer();
        for y in 0..buffer.area.height {
            let mut row = String::new();
            let mut columns = Vec::new();
            for x in 0..buffer.area.width {
                columns.push((row.len(), x));
                row.push_str(buffer[(x, y)].symbol());
            }
            if let Some(offset) = row.find(text) {
                let x = columns
                    .iter()
                    .rev()
                    .find(|(start, _)| *start <= offset)
                    .map(|(_, x)| *x)
                    .unwrap_or(0);
                return Some((x, y));
            }
        }
        None
    }

    /// Whole buffer, one line per row
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// Connected state with a small catalog already loaded
pub fn create_test_state() -> AppState {
    let mut state = AppState::new();
    state.status.connected = true;
    state.status.status = "Waiting for match...".to_string();
    state.preferences.catalog = normalize_catalog(vec![
        RawChampion::new(103, "Ahri"),
        RawChampion::new(1, "Annie"),
        RawChampion::new(145, "Kai'Sa"),
        RawChampion::new(62, "Wukong").with_alias("MonkeyKing"),
    ]);
    state.preferences.mounted = true;
    state.preferences.prefs_loaded = true;
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_buffer_contains() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
    }

    #[test]
    fn test_line_contains() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello\nWorld"), term.area());

        assert!(term.line_contains(0, "Hello"));
        assert!(term.line_contains(1, "World"));
        assert!(!term.line_contains(0, "World"));
    }

    #[test]
    fn test_cell_at_out_of_bounds() {
        let term = TestTerminal::with_size(10, 5);
        assert_eq!(term.cell_at(100, 100), None);
    }

    #[test]
    fn test_find_counts_cells_not_bytes() {
        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(Paragraph::new("x\n│ ● MID"), term.area());

        assert_eq!(term.find("MID"), Some((4, 1)));
        assert_eq!(term.find("absent"), None);
    }

    #[test]
    fn test_create_test_state_is_sorted() {
        let state = create_test_state();
        let names: Vec<_> = state
            .preferences
            .catalog
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Ahri", "Annie", "Kai'Sa", "Wukong"]);
    }
}
