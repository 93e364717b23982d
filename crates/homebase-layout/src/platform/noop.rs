//! No-op HostBridge implementation.
//!
//! Used when no overlay window is attached, e.g. when the shell runs
//! headless to replay recorded input.

use tracing::trace;

use super::{HostBridge, Result};

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHostBridge;

impl HostBridge for NoopHostBridge {
    fn set_pointer_passthrough(&mut self, ignore: bool) -> Result<()> {
        trace!(ignore, "passthrough ignored: no host window");
        Ok(())
    }
}
