//! Transient Request Status
//!
//! Inline indicator next to a create/save/delete control.

use crate::config::AppConfig;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Success(String),
    Failed(String),
}

impl RequestStatus {
    /// Milliseconds until the status clears, if it clears on its own
    pub fn dismiss_after(&self, config: &AppConfig) -> Option<u32> {
        match self {
            RequestStatus::Success(_) => Some(config.success_dismiss_ms),
            RequestStatus::Failed(_) => Some(config.error_dismiss_ms),
            RequestStatus::Idle | RequestStatus::Pending => None,
        }
    }

    /// Submit controls stay disabled while their request is in flight and
    /// through the success notice, until the dialog closes
    pub fn blocks_submit(&self) -> bool {
        matches!(self, RequestStatus::Pending | RequestStatus::Success(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            RequestStatus::Success(msg) | RequestStatus::Failed(msg) => Some(msg),
            RequestStatus::Pending => Some("Saving..."),
            RequestStatus::Idle => None,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RequestStatus::Idle => "status-badge hidden",
            RequestStatus::Pending => "status-badge pending",
            RequestStatus::Success(_) => "status-badge success",
            RequestStatus::Failed(_) => "status-badge error",
        }
    }
}
