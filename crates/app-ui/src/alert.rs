//! Platform alert contract
//!
//! Alerts are system dialogs (confirmations, errors) presented by the host
//! platform. They never go through [`Modal`](crate::components::Modal).

use serde::{Deserialize, Serialize};

/// How an alert button is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStyle {
    /// Regular action
    #[default]
    Default,
    /// Dismisses without acting
    Cancel,
    /// Irreversible action
    Destructive,
}

/// A button on an alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertAction {
    /// Button text
    pub label: String,
    /// Rendering style
    #[serde(default)]
    pub style: AlertStyle,
    /// Identifier reported back when chosen
    pub action_id: String,
}

impl AlertAction {
    /// Create an action
    pub fn new(label: impl Into<String>, style: AlertStyle, action_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style,
            action_id: action_id.into(),
        }
    }
}

/// A platform alert. Actions keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Title line
    pub title: String,
    /// Body text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Buttons, in display order
    pub actions: Vec<AlertAction>,
}

impl Alert {
    /// Create an alert with no actions
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
            actions: Vec::new(),
        }
    }

    /// Set the body text
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Append an action
    pub fn with_action(mut self, action: AlertAction) -> Self {
        self.actions.push(action);
        self
    }

    /// The cancel action, if any
    pub fn cancel_action(&self) -> Option<&AlertAction> {
        self.actions.iter().find(|a| a.style == AlertStyle::Cancel)
    }

    /// Look up an action by id
    pub fn action(&self, action_id: &str) -> Option<&AlertAction> {
        self.actions.iter().find(|a| a.action_id == action_id)
    }
}

/// Presents alerts through the host platform
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait AlertPresenter {
    /// Show an alert
    fn present(&mut self, alert: Alert);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discard_alert() -> Alert {
        Alert::new("Leave quiz?")
            .with_message("Your answers will be lost.")
            .with_action(AlertAction::new("Stay", AlertStyle::Cancel, "stay"))
            .with_action(AlertAction::new("Leave", AlertStyle::Destructive, "leave"))
    }

    #[test]
    fn test_actions_keep_order() {
        let alert = discard_alert();
        let labels: Vec<_> = alert.actions.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["Stay", "Leave"]);
        assert_eq!(alert.cancel_action().map(|a| a.action_id.as_str()), Some("stay"));
        assert_eq!(alert.action("leave").map(|a| a.style), Some(AlertStyle::Destructive));
        assert!(alert.action("missing").is_none());
    }

    #[test]
    fn test_presenter_receives_alert() {
        let mut presenter = MockAlertPresenter::new();
        presenter
            .expect_present()
            .withf(|alert| alert.title == "Leave quiz?" && alert.actions.len() == 2)
            .times(1)
            .return_const(());

        presenter.present(discard_alert());
    }

    #[test]
    fn test_alert_serialization() {
        let json = serde_json::to_string(&discard_alert()).unwrap();
        assert!(json.contains("\"actionId\":\"leave\""));
        assert!(json.contains("\"style\":\"destructive\""));
    }
}
