//! Pressable button

use serde::{Deserialize, Serialize};

use super::{IconPosition, PressDelegate};
use crate::accessibility::{AccessibilityNode, AccessibilityRole, AccessibilityState};
use crate::theme::{Color, Theme};
use crate::tokens::{border, font_size, opacity, radius, sizing, spacing};

/// Button style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Solid primary background
    #[default]
    Primary,
    /// Solid secondary background
    Secondary,
    /// Primary-colored border, no fill
    Outline,
    /// No border, no fill
    Ghost,
    /// Destructive action
    Danger,
}

/// Button sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    /// Small button
    Small,
    /// Medium button
    #[default]
    Medium,
    /// Large button
    Large,
}

/// Button component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    /// Button text
    pub title: String,
    /// Style variant
    #[serde(default)]
    pub variant: ButtonVariant,
    /// Size
    #[serde(default)]
    pub size: ButtonSize,
    /// Whether the button is disabled
    #[serde(default)]
    pub disabled: bool,
    /// Whether an action is in progress (shows a spinner, blocks presses)
    #[serde(default)]
    pub loading: bool,
    /// Stretch to the parent's width
    #[serde(default)]
    pub full_width: bool,
    /// Icon name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Icon position
    #[serde(default)]
    pub icon_position: IconPosition,
    /// Accessible label override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_label: Option<String>,
    /// Test ID for testing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
}

impl Button {
    /// Create a new button with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            loading: false,
            full_width: false,
            icon: None,
            icon_position: IconPosition::default(),
            accessibility_label: None,
            test_id: None,
        }
    }

    /// Set the button variant
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set loading state
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Stretch to full width
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Set icon
    pub fn with_icon(mut self, icon: impl Into<String>, position: IconPosition) -> Self {
        self.icon = Some(icon.into());
        self.icon_position = position;
        self
    }

    /// Set test ID
    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    /// Whether presses are accepted
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// Deliver a press; returns whether `on_press` ran
    pub fn press(&self, delegate: &mut dyn PressDelegate) -> bool {
        if !self.is_interactive() {
            return false;
        }
        delegate.on_press();
        true
    }

    /// Get the computed styles for this button based on theme
    pub fn computed_styles(&self, theme: &Theme) -> ButtonStyles {
        let colors = &theme.colors;
        let (background, text_color, border_color) = match self.variant {
            ButtonVariant::Primary => (colors.primary.clone(), colors.on_primary.clone(), None),
            ButtonVariant::Secondary => (colors.secondary.clone(), colors.on_primary.clone(), None),
            ButtonVariant::Danger => (colors.danger.clone(), colors.on_primary.clone(), None),
            ButtonVariant::Outline => (
                "transparent".to_string(),
                colors.primary.clone(),
                Some(colors.primary.clone()),
            ),
            ButtonVariant::Ghost => ("transparent".to_string(), colors.primary.clone(), None),
        };

        let (height, padding_horizontal, font) = match self.size {
            ButtonSize::Small => (sizing::button::SM_HEIGHT, spacing::SPACE_MD, font_size::SM),
            ButtonSize::Medium => (sizing::button::MD_HEIGHT, spacing::SPACE_LG, font_size::MD),
            ButtonSize::Large => (sizing::button::LG_HEIGHT, spacing::SPACE_2XL, font_size::LG),
        };

        ButtonStyles {
            background,
            text_color,
            border_width: if border_color.is_some() {
                border::MEDIUM
            } else {
                border::NONE
            },
            border_color,
            height,
            padding_horizontal,
            font_size: font,
            border_radius: radius::MD,
            gap: spacing::SPACE_SM,
            full_width: self.full_width,
            show_spinner: self.loading,
            opacity: if self.disabled {
                opacity::DISABLED
            } else {
                opacity::OPAQUE
            },
        }
    }

    /// Accessibility node
    pub fn accessibility_node(&self) -> AccessibilityNode {
        AccessibilityNode::new(AccessibilityRole::Button)
            .with_label(
                self.accessibility_label
                    .clone()
                    .unwrap_or_else(|| self.title.clone()),
            )
            .with_state(AccessibilityState {
                disabled: self.disabled,
                busy: self.loading,
                ..AccessibilityState::default()
            })
            .with_test_id(self.test_id.clone())
    }
}

/// Computed button styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStyles {
    /// Background color
    pub background: Color,
    /// Text color
    pub text_color: Color,
    /// Border color
    pub border_color: Option<Color>,
    /// Border width
    pub border_width: f32,
    /// Height
    pub height: f32,
    /// Horizontal padding
    pub padding_horizontal: f32,
    /// Text size
    pub font_size: f32,
    /// Border radius
    pub border_radius: f32,
    /// Gap between icon and text
    pub gap: f32,
    /// Stretch to the parent's width
    pub full_width: bool,
    /// Spinner replaces the label
    pub show_spinner: bool,
    /// Opacity
    pub opacity: f32,
}
