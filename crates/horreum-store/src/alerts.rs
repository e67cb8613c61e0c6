use std::error::Error;

use serde::{Deserialize, Serialize};

/// User-visible failure report: a category code plus a human title and the
/// underlying message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub code: String,
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(code: impl Into<String>, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            message: message.into(),
        }
    }

    /// Wraps `err` as an alert. Does not log.
    pub fn from_error(code: &str, title: &str, err: &dyn Error) -> Self {
        Self::new(code, title, err.to_string())
    }
}

#[derive(Debug, Clone)]
pub enum AlertsEvent {
    Add(Alert),
    /// Dismiss every alert with the given code.
    Clear(String),
    Unknown(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertsState {
    pub alerts: Vec<Alert>,
}

pub fn reduce(state: &AlertsState, event: AlertsEvent) -> AlertsState {
    let mut next = state.clone();
    match event {
        AlertsEvent::Add(alert) => next.alerts.push(alert),
        AlertsEvent::Clear(code) => next.alerts.retain(|a| a.code != code),
        AlertsEvent::Unknown(_) => {}
    }
    next
}
