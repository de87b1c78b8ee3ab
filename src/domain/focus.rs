//! Focus context value object

use std::fmt;

/// Identifier of the application that held input focus immediately before
/// the picker surface was shown (e.g. a macOS bundle identifier).
///
/// Captured once per picker-open, overwritten on the next capture, never
/// persisted. Threaded explicitly into the paste step rather than held as
/// process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusContext(String);

impl FocusContext {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FocusContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
