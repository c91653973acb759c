//! Controlled text field
//!
//! The parent form owns the text and any validation error. [`InputField`]
//! keeps only focus state. Edits are reported as the full next string through
//! [`InputDelegate::on_change_text`]; the displayed value changes only when
//! the parent hands a new one back with [`InputField::set_value`].

use serde::{Deserialize, Serialize};

use super::Spacing;
use crate::accessibility::{AccessibilityNode, AccessibilityRole, AccessibilityState};
use crate::theme::{Color, Theme};
use crate::tokens::{border, font_size, opacity, radius, sizing, spacing};

// =============================================================================
// Props
// =============================================================================

/// Input visual variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputVariant {
    /// Bordered field on the surface color
    #[default]
    Default,
    /// Bordered field on a transparent background
    Outlined,
    /// Borderless field on a muted background
    Filled,
    /// Bottom border only
    Underline,
}

/// Input size variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSize {
    /// Small input
    Small,
    /// Medium input (default)
    #[default]
    Medium,
    /// Large input
    Large,
}

impl InputSize {
    /// Minimum field height
    pub fn min_height(&self) -> f32 {
        match self {
            InputSize::Small => sizing::input::SM_HEIGHT,
            InputSize::Medium => sizing::input::MD_HEIGHT,
            InputSize::Large => sizing::input::LG_HEIGHT,
        }
    }

    /// Text size
    pub fn font_size(&self) -> f32 {
        match self {
            InputSize::Small => font_size::SM,
            InputSize::Medium => font_size::MD,
            InputSize::Large => font_size::LG,
        }
    }
}

/// Leading or trailing adornment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputIcon {
    /// Icon name
    pub name: String,
    /// Whether pressing the icon is an action (trailing icons only)
    #[serde(default)]
    pub pressable: bool,
    /// Accessible label for a pressable icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_label: Option<String>,
}

impl InputIcon {
    /// A purely decorative icon
    pub fn decorative(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pressable: false,
            accessibility_label: None,
        }
    }

    /// A pressable icon with an accessible label
    pub fn action(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pressable: true,
            accessibility_label: Some(label.into()),
        }
    }
}

/// Input component properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputProps {
    /// Current value, owned by the parent
    #[serde(default)]
    pub value: String,
    /// Visual variant
    #[serde(default)]
    pub variant: InputVariant,
    /// Size
    #[serde(default)]
    pub size: InputSize,
    /// Label text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Placeholder text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Validation error supplied by the parent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Helper text, hidden while an error shows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
    /// Appends a marker to the label; enforces nothing
    #[serde(default)]
    pub required: bool,
    /// Blocks edits and dims the field
    #[serde(default)]
    pub disabled: bool,
    /// Leading adornment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_icon: Option<InputIcon>,
    /// Trailing adornment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_icon: Option<InputIcon>,
    /// Mask the text (passwords)
    #[serde(default)]
    pub secure_text_entry: bool,
    /// Allow multiple lines
    #[serde(default)]
    pub multiline: bool,
    /// Test ID for testing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
}

impl InputProps {
    /// Create props with a value
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Set variant
    pub fn with_variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set size
    pub fn with_size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    /// Set label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set error message
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Set helper text
    pub fn with_helper(mut self, helper: impl Into<String>) -> Self {
        self.helper_text = Some(helper.into());
        self
    }

    /// Mark as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set leading icon
    pub fn with_left_icon(mut self, icon: InputIcon) -> Self {
        self.left_icon = Some(icon);
        self
    }

    /// Set trailing icon
    pub fn with_right_icon(mut self, icon: InputIcon) -> Self {
        self.right_icon = Some(icon);
        self
    }

    /// Mask input
    pub fn secure(mut self) -> Self {
        self.secure_text_entry = true;
        self
    }

    /// Allow multiple lines
    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    /// Set test ID
    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }
}

// =============================================================================
// Events
// =============================================================================

/// The parent form's side of the field contract
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait InputDelegate {
    /// The user produced a new full value
    fn on_change_text(&mut self, text: &str);

    /// The field gained focus
    fn on_focus(&mut self) {}

    /// The field lost focus
    fn on_blur(&mut self) {}

    /// The trailing icon was pressed
    fn on_right_icon_press(&mut self) {}
}

/// A text edit delivered by the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "text")]
pub enum InputEdit {
    /// Append text at the caret (end of value)
    Insert(String),
    /// Remove the last character
    DeleteBackward,
    /// Replace the whole value (paste, autocorrect)
    Replace(String),
    /// Clear the value
    Clear,
}

/// Text shown under the field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "text")]
pub enum InputFeedback {
    /// Validation error
    Error(String),
    /// Helper text
    Helper(String),
}

impl InputFeedback {
    /// The text to render
    pub fn text(&self) -> &str {
        match self {
            InputFeedback::Error(text) | InputFeedback::Helper(text) => text,
        }
    }
}

// =============================================================================
// Styles
// =============================================================================

/// Which edges carry a border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderSides {
    /// No border
    None,
    /// Bottom edge only
    Bottom,
    /// Every edge
    All,
}

/// Computed input styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputStyles {
    /// Field background
    pub background: Color,
    /// Border color
    pub border_color: Color,
    /// Border width
    pub border_width: f32,
    /// Bordered edges
    pub border_sides: BorderSides,
    /// Corner radius
    pub border_radius: f32,
    /// Minimum height (tap target)
    pub min_height: f32,
    /// Text size
    pub font_size: f32,
    /// Field padding
    pub padding: Spacing,
    /// Offset of the leading icon from the left edge
    pub left_icon_inset: Option<f32>,
    /// Offset of the trailing icon from the right edge
    pub right_icon_inset: Option<f32>,
    /// Adornment icon size
    pub icon_size: f32,
    /// Text color
    pub text_color: Color,
    /// Placeholder color
    pub placeholder_color: Color,
    /// Label color
    pub label_color: Color,
    /// Feedback text color
    pub feedback_color: Color,
    /// Overall opacity
    pub opacity: f32,
}

// =============================================================================
// Field
// =============================================================================

/// A labelled, controlled text field
#[derive(Debug, Clone, PartialEq)]
pub struct InputField {
    props: InputProps,
    focused: bool,
}

impl InputField {
    /// Create an unfocused field
    pub fn new(props: InputProps) -> Self {
        Self {
            props,
            focused: false,
        }
    }

    /// Current props
    pub fn props(&self) -> &InputProps {
        &self.props
    }

    /// Replace props on parent re-render; focus is kept
    pub fn set_props(&mut self, props: InputProps) {
        self.props = props;
    }

    /// Parent pushes a new value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.props.value = value.into();
    }

    /// Parent sets or clears the validation error
    pub fn set_error(&mut self, error: Option<String>) {
        self.props.error = error;
    }

    /// Exactly the value the parent supplied
    pub fn displayed_value(&self) -> &str {
        &self.props.value
    }

    /// Whether the field has focus
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether an error is present
    pub fn is_invalid(&self) -> bool {
        self.error_text().is_some()
    }

    fn error_text(&self) -> Option<&str> {
        self.props.error.as_deref().filter(|e| !e.is_empty())
    }

    /// Apply a platform edit.
    ///
    /// Reports the full next string to the parent and returns true. Disabled
    /// fields and edits that leave the text unchanged report nothing.
    pub fn edit(&mut self, edit: InputEdit, delegate: &mut dyn InputDelegate) -> bool {
        if self.props.disabled {
            tracing::trace!(?edit, "edit on disabled input ignored");
            return false;
        }
        let current = &self.props.value;
        let next = match edit {
            InputEdit::Insert(text) => format!("{}{}", current, text),
            InputEdit::DeleteBackward => {
                let mut next = current.clone();
                next.pop();
                next
            }
            InputEdit::Replace(text) => text,
            InputEdit::Clear => String::new(),
        };
        if &next == current {
            return false;
        }
        delegate.on_change_text(&next);
        true
    }

    /// Give the field focus; disabled fields refuse it
    pub fn focus(&mut self, delegate: &mut dyn InputDelegate) -> bool {
        if self.props.disabled || self.focused {
            return false;
        }
        self.focused = true;
        delegate.on_focus();
        true
    }

    /// Remove focus
    pub fn blur(&mut self, delegate: &mut dyn InputDelegate) -> bool {
        if !self.focused {
            return false;
        }
        self.focused = false;
        delegate.on_blur();
        true
    }

    /// Press the trailing icon; only pressable icons on enabled fields respond
    pub fn press_right_icon(&mut self, delegate: &mut dyn InputDelegate) -> bool {
        let pressable = self.props.right_icon.as_ref().is_some_and(|icon| icon.pressable);
        if !pressable || self.props.disabled {
            return false;
        }
        delegate.on_right_icon_press();
        true
    }

    /// Label with the required marker appended
    pub fn label_text(&self) -> Option<String> {
        self.props.label.as_ref().map(|label| {
            if self.props.required {
                format!("{} *", label)
            } else {
                label.clone()
            }
        })
    }

    /// The single feedback line: error first, then helper
    pub fn feedback(&self) -> Option<InputFeedback> {
        if let Some(error) = self.error_text() {
            return Some(InputFeedback::Error(error.to_string()));
        }
        self.props
            .helper_text
            .as_ref()
            .filter(|h| !h.is_empty())
            .map(|h| InputFeedback::Helper(h.clone()))
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &Theme) -> InputStyles {
        let colors = &theme.colors;
        let invalid = self.is_invalid();

        let state_color = if invalid {
            Some(colors.danger.clone())
        } else if self.focused {
            Some(colors.primary.clone())
        } else {
            None
        };
        let emphasized = state_color.is_some();

        let (background, border_sides, border_radius) = match self.props.variant {
            InputVariant::Default => (colors.surface.clone(), BorderSides::All, radius::MD),
            InputVariant::Outlined => ("transparent".to_string(), BorderSides::All, radius::MD),
            InputVariant::Filled => (
                colors.surface_muted.clone(),
                if emphasized { BorderSides::Bottom } else { BorderSides::None },
                radius::MD,
            ),
            InputVariant::Underline => ("transparent".to_string(), BorderSides::Bottom, radius::NONE),
        };

        let border_width = match border_sides {
            BorderSides::None => border::NONE,
            _ if emphasized => border::MEDIUM,
            _ => border::THIN,
        };

        let padding_vertical = match self.props.size {
            InputSize::Small => spacing::SPACE_SM,
            InputSize::Medium => spacing::SPACE_MD,
            InputSize::Large => spacing::SPACE_LG,
        };
        let padding_horizontal = match self.props.variant {
            InputVariant::Underline => 0.0,
            _ => spacing::SPACE_MD,
        };
        let left = if self.props.left_icon.is_some() {
            padding_horizontal + sizing::input::ICON_SLOT
        } else {
            padding_horizontal
        };
        let right = if self.props.right_icon.is_some() {
            padding_horizontal + sizing::input::ICON_SLOT
        } else {
            padding_horizontal
        };

        let feedback_color = if invalid {
            colors.danger.clone()
        } else {
            colors.text_muted.clone()
        };

        InputStyles {
            background,
            border_color: state_color.clone().unwrap_or_else(|| colors.border.clone()),
            border_width,
            border_sides,
            border_radius,
            min_height: self.props.size.min_height(),
            font_size: self.props.size.font_size(),
            padding: Spacing::Individual {
                top: padding_vertical,
                right,
                bottom: padding_vertical,
                left,
            },
            left_icon_inset: self.props.left_icon.as_ref().map(|_| sizing::input::ICON_INSET),
            right_icon_inset: self.props.right_icon.as_ref().map(|_| sizing::input::ICON_INSET),
            icon_size: sizing::icon::MD,
            text_color: colors.text.clone(),
            placeholder_color: colors.placeholder.clone(),
            label_color: state_color.unwrap_or_else(|| colors.text.clone()),
            feedback_color,
            opacity: if self.props.disabled {
                opacity::DISABLED
            } else {
                opacity::OPAQUE
            },
        }
    }

    /// Accessibility tree: label, text-entry node, optional icon button, feedback
    pub fn accessibility_tree(&self) -> AccessibilityNode {
        let props = &self.props;
        let mut root = AccessibilityNode::container().with_test_id(props.test_id.clone());

        if let Some(label) = self.label_text() {
            root = root.with_child(AccessibilityNode::new(AccessibilityRole::Text).with_label(label));
        }

        let field_label = props.label.clone().or_else(|| props.placeholder.clone());
        root = root.with_child(
            AccessibilityNode::new(AccessibilityRole::TextField)
                .with_optional_label(field_label)
                .with_hint(props.helper_text.clone())
                .with_state(AccessibilityState {
                    disabled: props.disabled,
                    invalid: self.is_invalid(),
                    focused: self.focused,
                    busy: false,
                }),
        );

        if let Some(icon) = props.right_icon.as_ref().filter(|i| i.pressable) {
            let label = icon.accessibility_label.clone().unwrap_or_else(|| icon.name.clone());
            root = root.with_child(
                AccessibilityNode::new(AccessibilityRole::Button)
                    .with_label(label)
                    .with_state(AccessibilityState {
                        disabled: props.disabled,
                        ..AccessibilityState::default()
                    }),
            );
        }

        if let Some(feedback) = self.feedback() {
            root = root.with_child(AccessibilityNode::new(AccessibilityRole::Text).with_label(feedback.text()));
        }

        root
    }
}
