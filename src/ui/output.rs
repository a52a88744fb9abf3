//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show data lines, warnings, and status.
    #[default]
    Normal,
    /// Show data lines and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows warnings and status messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
