//! Accessibility tree exposed by components
//!
//! Each component describes itself to assistive technology as a small tree of
//! [`AccessibilityNode`]s. Hosts map these onto the platform's accessibility
//! API; tests query them directly.

use serde::{Deserialize, Serialize};

/// Label used by every overlay dismissal control
pub const CLOSE_MODAL_LABEL: &str = "Close modal";

/// Semantic role of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccessibilityRole {
    /// Pressable control
    Button,
    /// Modal dialog surface
    Dialog,
    /// Section heading
    Header,
    /// Static text
    Text,
    /// Editable text
    TextField,
    /// Decorative or informational image
    Image,
    /// Indeterminate progress
    ProgressBar,
    /// Grouping container
    Group,
}

/// Dynamic state flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityState {
    /// Node cannot be interacted with
    #[serde(default)]
    pub disabled: bool,
    /// Node holds an invalid value
    #[serde(default)]
    pub invalid: bool,
    /// Node is busy (loading)
    #[serde(default)]
    pub busy: bool,
    /// Node has focus
    #[serde(default)]
    pub focused: bool,
}

/// One node of a component's accessibility tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityNode {
    /// Semantic role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<AccessibilityRole>,
    /// Spoken label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Spoken hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// State flags
    #[serde(default)]
    pub state: AccessibilityState,
    /// Whether this node traps assistive focus as a modal region
    #[serde(default)]
    pub is_modal: bool,
    /// Test identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    /// Child nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AccessibilityNode>,
}

impl AccessibilityNode {
    /// Create a node with a role
    pub fn new(role: AccessibilityRole) -> Self {
        Self {
            role: Some(role),
            label: None,
            hint: None,
            state: AccessibilityState::default(),
            is_modal: false,
            test_id: None,
            children: Vec::new(),
        }
    }

    /// Create a role-less grouping node
    pub fn container() -> Self {
        Self {
            role: None,
            ..Self::new(AccessibilityRole::Group)
        }
    }

    /// Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the label from an optional value
    pub fn with_optional_label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }

    /// Set the hint from an optional value
    pub fn with_hint(mut self, hint: Option<String>) -> Self {
        self.hint = hint;
        self
    }

    /// Set the state flags
    pub fn with_state(mut self, state: AccessibilityState) -> Self {
        self.state = state;
        self
    }

    /// Mark as a modal region
    pub fn modal(mut self) -> Self {
        self.is_modal = true;
        self
    }

    /// Set test ID
    pub fn with_test_id(mut self, test_id: Option<String>) -> Self {
        self.test_id = test_id;
        self
    }

    /// Append a child
    pub fn with_child(mut self, child: AccessibilityNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children
    pub fn with_children(mut self, children: impl IntoIterator<Item = AccessibilityNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Depth-first iterator over this node and its descendants
    pub fn iter(&self) -> impl Iterator<Item = &AccessibilityNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// All nodes (self included) with the given role
    pub fn find_by_role(&self, role: AccessibilityRole) -> Vec<&AccessibilityNode> {
        self.iter().filter(|n| n.role == Some(role)).collect()
    }

    /// All nodes (self included) with the given label
    pub fn find_by_label(&self, label: &str) -> Vec<&AccessibilityNode> {
        self.iter()
            .filter(|n| n.label.as_deref() == Some(label))
            .collect()
    }

    /// Number of nodes flagged as modal regions
    pub fn modal_count(&self) -> usize {
        self.iter().filter(|n| n.is_modal).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> AccessibilityNode {
        AccessibilityNode::new(AccessibilityRole::Dialog)
            .modal()
            .with_label("Settings")
            .with_child(AccessibilityNode::new(AccessibilityRole::Button).with_label(CLOSE_MODAL_LABEL))
            .with_child(
                AccessibilityNode::container()
                    .with_child(AccessibilityNode::new(AccessibilityRole::Header).with_label("Settings"))
                    .with_child(AccessibilityNode::new(AccessibilityRole::Button).with_label(CLOSE_MODAL_LABEL)),
            )
    }

    #[test]
    fn test_iter_visits_all_nodes_depth_first() {
        let tree = sample_tree();
        let roles: Vec<_> = tree.iter().map(|n| n.role).collect();
        assert_eq!(
            roles,
            vec![
                Some(AccessibilityRole::Dialog),
                Some(AccessibilityRole::Button),
                None,
                Some(AccessibilityRole::Header),
                Some(AccessibilityRole::Button),
            ]
        );
    }

    #[test]
    fn test_find_helpers() {
        let tree = sample_tree();
        assert_eq!(tree.find_by_role(AccessibilityRole::Button).len(), 2);
        assert_eq!(tree.find_by_label(CLOSE_MODAL_LABEL).len(), 2);
        assert_eq!(tree.modal_count(), 1);
    }

    #[test]
    fn test_serialization_skips_empty() {
        let node = AccessibilityNode::new(AccessibilityRole::Text).with_label("Hello");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["role"], "text");
        assert!(json.get("hint").is_none());
        assert!(json.get("children").is_none());
        assert_eq!(json["isModal"], false);
    }
}
