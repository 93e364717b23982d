pub mod errors;
pub mod notifications;
pub mod types;

pub use errors::{ConfigError, HomebaseError, PlatformError};
pub use notifications::{Notification, NotificationLevel, NotificationQueue};
pub use types::{Dimensions, Point, Rect, SizeTier, WidgetId, WidgetKind};

pub type Result<T> = std::result::Result<T, HomebaseError>;
