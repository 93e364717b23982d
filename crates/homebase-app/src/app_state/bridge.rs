//! Host bridge that asks the UI process to toggle mouse passthrough.

use std::io::Write;

use homebase_common::errors::PlatformError;
use homebase_layout::HostBridge;
use tracing::debug;

use crate::ipc::HostMessage;

/// Writes `set-ignore-mouse-events` lines to the IPC stream.
pub struct LineBridge<W: Write> {
    out: W,
}

impl<W: Write> LineBridge<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> HostBridge for LineBridge<W> {
    fn set_pointer_passthrough(&mut self, ignore: bool) -> Result<(), PlatformError> {
        let line = HostMessage::SetIgnoreMouseEvents(ignore)
            .to_line()
            .map_err(|e| PlatformError::HostBridge(e.to_string()))?;
        writeln!(self.out, "{line}")
            .and_then(|()| self.out.flush())
            .map_err(|e| PlatformError::HostBridge(format!("write failed: {e}")))?;
        debug!(ignore, "passthrough requested");
        Ok(())
    }
}
