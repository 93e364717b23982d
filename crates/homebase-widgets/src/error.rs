use homebase_common::types::WidgetKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WidgetError {
    #[error("Invalid {service} link")]
    InvalidLink { service: &'static str },

    #[error("Please sign in first")]
    NotSignedIn,

    #[error("malformed calendar event: {0}")]
    MalformedEvent(String),

    #[error("{action} is not supported by the {kind:?} widget")]
    Unsupported {
        kind: WidgetKind,
        action: &'static str,
    },
}
