//! TUI testing utilities using Ratatui's TestBackend

use dugout::App;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// Create a test terminal with custom dimensions
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Draw one frame of the app and return the screen as text
pub fn render_app(app: &App, width: u16, height: u16) -> String {
    let mut terminal = create_test_terminal_sized(width, height);
    terminal
        .draw(|f| app.draw(f))
        .expect("Failed to draw app");
    buffer_to_string(terminal.backend().buffer())
}

/// Convert a buffer to a string, one line per row
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut output = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        output.push('\n');
    }

    output
}

/// Assert the screen contains `expected`, printing the screen otherwise
pub fn assert_screen_contains(screen: &str, expected: &str) {
    assert!(
        screen.contains(expected),
        "Screen does not contain expected text.\nExpected: {}\nActual:\n{}",
        expected,
        screen
    );
}

pub fn assert_screen_lacks(screen: &str, unexpected: &str) {
    assert!(
        !screen.contains(unexpected),
        "Screen unexpectedly contains: {}\nActual:\n{}",
        unexpected,
        screen
    );
}
