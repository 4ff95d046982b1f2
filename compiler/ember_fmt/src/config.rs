//! Printer configuration.

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Configuration for the tree printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Spaces added per nesting level.
    /// Defaults to 4.
    pub indent_width: usize,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            indent_width: INDENT_WIDTH,
        }
    }
}

impl PrinterConfig {
    /// Create a config with the specified indent width.
    pub fn with_indent_width(indent_width: usize) -> Self {
        Self { indent_width }
    }
}
