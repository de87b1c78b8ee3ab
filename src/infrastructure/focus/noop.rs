//! No-op focus probe

use async_trait::async_trait;

use crate::application::ports::{FocusError, FocusProbe};
use crate::domain::focus::FocusContext;

/// Focus probe for platforms without refocus automation.
///
/// Never yields a target, so paste delivery always takes the direct
/// branch (fixed delay, then a global paste chord).
pub struct NoOpFocusProbe;

impl NoOpFocusProbe {
    /// Create a new no-op focus probe
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpFocusProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FocusProbe for NoOpFocusProbe {
    async fn capture(&self) -> Result<Option<FocusContext>, FocusError> {
        Ok(None)
    }

    async fn activate(&self, _target: &FocusContext) -> Result<(), FocusError> {
        Ok(())
    }

    fn supports_refocus(&self) -> bool {
        false
    }
}
