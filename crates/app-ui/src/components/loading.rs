//! Loading indicator

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::accessibility::{AccessibilityNode, AccessibilityRole, AccessibilityState};
use crate::theme::{Color, Theme};
use crate::tokens::{duration, font_size, sizing, spacing, z_index};

/// Number of dots in the dots variant
pub const DOT_COUNT: usize = 3;

/// Indicator style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingVariant {
    /// Rotating spinner
    #[default]
    Spinner,
    /// Three pulsing dots
    Dots,
}

/// Indicator size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingSize {
    /// Small indicator
    Small,
    /// Medium indicator
    #[default]
    Medium,
    /// Large indicator
    Large,
}

impl LoadingSize {
    /// Indicator size in points
    pub fn points(&self) -> f32 {
        match self {
            LoadingSize::Small => sizing::loading::SM,
            LoadingSize::Medium => sizing::loading::MD,
            LoadingSize::Large => sizing::loading::LG,
        }
    }
}

/// Loading indicator properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loading {
    /// Indicator style
    #[serde(default)]
    pub variant: LoadingVariant,
    /// Indicator size
    #[serde(default)]
    pub size: LoadingSize,
    /// Text under the indicator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Cover the screen with a backdrop
    #[serde(default)]
    pub overlay: bool,
    /// Color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// Animation state of the indicator at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum LoadingFrame {
    /// Spinner rotation in degrees [0, 360)
    Spinner {
        /// Rotation in degrees
        rotation: f32,
    },
    /// Index of the highlighted dot
    Dots {
        /// Active dot
        active: usize,
    },
}

impl Loading {
    /// Create a default spinner
    pub fn new() -> Self {
        Self::default()
    }

    /// Set variant
    pub fn with_variant(mut self, variant: LoadingVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set size
    pub fn with_size(mut self, size: LoadingSize) -> Self {
        self.size = size;
        self
    }

    /// Set message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Show as a full-screen overlay
    pub fn overlay(mut self) -> Self {
        self.overlay = true;
        self
    }

    /// Frame at `elapsed` since the indicator mounted
    pub fn frame_at(&self, elapsed: Duration) -> LoadingFrame {
        let elapsed_ms = elapsed.as_millis();
        match self.variant {
            LoadingVariant::Spinner => {
                let period = duration::SPINNER_REVOLUTION as u128;
                let phase = (elapsed_ms % period) as f32 / period as f32;
                LoadingFrame::Spinner {
                    rotation: phase * 360.0,
                }
            }
            LoadingVariant::Dots => LoadingFrame::Dots {
                active: ((elapsed_ms / duration::DOT_STEP as u128) % DOT_COUNT as u128) as usize,
            },
        }
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &Theme) -> LoadingStyles {
        LoadingStyles {
            size: self.size.points(),
            color: self
                .color
                .clone()
                .unwrap_or_else(|| theme.colors.primary.clone()),
            message_color: theme.colors.text_muted.clone(),
            message_font_size: font_size::SM,
            gap: spacing::SPACE_MD,
            backdrop: self.overlay.then(|| theme.colors.backdrop.clone()),
            z_index: if self.overlay {
                z_index::LOADING_OVERLAY
            } else {
                z_index::DEFAULT
            },
        }
    }

    /// Accessibility node
    pub fn accessibility_node(&self) -> AccessibilityNode {
        AccessibilityNode::new(AccessibilityRole::ProgressBar)
            .with_label(self.message.clone().unwrap_or_else(|| "Loading".to_string()))
            .with_state(AccessibilityState {
                busy: true,
                ..AccessibilityState::default()
            })
    }
}

/// Computed loading styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingStyles {
    /// Indicator size
    pub size: f32,
    /// Indicator color
    pub color: Color,
    /// Message color
    pub message_color: Color,
    /// Message font size
    pub message_font_size: f32,
    /// Gap between indicator and message
    pub gap: f32,
    /// Backdrop color in overlay mode
    pub backdrop: Option<Color>,
    /// Stacking order
    pub z_index: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::light_theme;

    #[test]
    fn test_spinner_rotation() {
        let loading = Loading::new();
        assert_eq!(loading.frame_at(Duration::ZERO), LoadingFrame::Spinner { rotation: 0.0 });
        assert_eq!(
            loading.frame_at(Duration::from_millis(250)),
            LoadingFrame::Spinner { rotation: 90.0 }
        );
        assert_eq!(
            loading.frame_at(Duration::from_millis(1250)),
            LoadingFrame::Spinner { rotation: 90.0 }
        );
    }

    #[test]
    fn test_dots_cycle() {
        let loading = Loading::new().with_variant(LoadingVariant::Dots);
        let active: Vec<_> = [0, 300, 600, 900]
            .iter()
            .map(|ms| match loading.frame_at(Duration::from_millis(*ms)) {
                LoadingFrame::Dots { active } => active,
                other => panic!("unexpected frame {:?}", other),
            })
            .collect();
        assert_eq!(active, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_overlay_styles() {
        let theme = light_theme();
        let inline = Loading::new().computed_styles(&theme);
        assert!(inline.backdrop.is_none());
        assert_eq!(inline.color, theme.colors.primary);

        let overlay = Loading::new().overlay().computed_styles(&theme);
        assert_eq!(overlay.backdrop, Some(theme.colors.backdrop.clone()));
        assert_eq!(overlay.z_index, z_index::LOADING_OVERLAY);
    }

    #[test]
    fn test_sizes() {
        assert!(LoadingSize::Small.points() < LoadingSize::Medium.points());
        assert!(LoadingSize::Medium.points() < LoadingSize::Large.points());
    }

    #[test]
    fn test_accessibility_label() {
        assert_eq!(Loading::new().accessibility_node().label.as_deref(), Some("Loading"));
        let node = Loading::new().with_message("Recognizing book...").accessibility_node();
        assert_eq!(node.label.as_deref(), Some("Recognizing book..."));
        assert!(node.state.busy);
    }
}
