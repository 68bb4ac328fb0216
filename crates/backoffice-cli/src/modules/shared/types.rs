use std::fmt;

use crate::modules::auth::Redirect;

/// A transient, user-visible failure message. Nothing is retried after one is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Debug)]
pub enum ViewOutcome {
    Rendered(String),
    Notice(Notification),
    Redirect(Redirect),
}

#[derive(Debug)]
pub enum DeleteOutcome {
    Cancelled,
    Reloaded(ViewOutcome),
    Failed(Notification),
    Redirect(Redirect),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteState {
    Idle,
    ConfirmationPending,
    Confirmed,
    Cancelled,
    RequestInFlight,
    Success,
    Failure,
    ReloadTriggered,
    NotificationShown,
}

impl DeleteState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::ConfirmationPending => "confirmation_pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::RequestInFlight => "request_in_flight",
            Self::Success => "success",
            Self::Failure => "failure",
            Self::ReloadTriggered => "reload_triggered",
            Self::NotificationShown => "notification_shown",
        }
    }
}
