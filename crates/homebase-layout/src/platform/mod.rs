//! Contract with the host process that owns the overlay window.

use homebase_common::errors::PlatformError;

pub mod noop;

pub type Result<T> = std::result::Result<T, PlatformError>;

/// Host-side controls the layout shell needs from the overlay window.
pub trait HostBridge {
    /// When `ignore` is true, pointer input passes through the transparent
    /// overlay to whatever is underneath.
    fn set_pointer_passthrough(&mut self, ignore: bool) -> Result<()>;
}
