//! Terminal geometry query.

/// Terminal size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub cols: u16,
    pub rows: u16,
}

impl Default for TerminalSize {
    fn default() -> Self {
        Self { cols: 100, rows: 30 }
    }
}

impl TerminalSize {
    /// Query the attached terminal, falling back to the default size.
    ///
    /// A failed query, or one reporting zero columns, is logged and
    /// otherwise ignored.
    pub fn query() -> Self {
        match crossterm::terminal::size() {
            Ok((cols, rows)) if cols > 0 => Self { cols, rows },
            Ok(_) => {
                log::warn!("Terminal reported zero columns, using default size");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not query terminal size ({}), using default size", e);
                Self::default()
            }
        }
    }
}
