//! Foundation component library for AR Book Explorer
//!
//! Components are plain Rust structs with builder-style props. Each one
//! computes a style record from `(variant, size, state)` and the active
//! [`Theme`](crate::theme::Theme), and describes itself through an
//! [`AccessibilityNode`](crate::accessibility::AccessibilityNode) tree. A
//! host renderer draws from those records. User interaction flows back
//! through small delegate traits owned by the parent screen.
//!
//! # Available Components
//!
//! - [`Button`] - Pressable action with variants and loading state
//! - [`Card`] - Surface container, optionally pressable
//! - [`InputField`] - Controlled text field with validation feedback
//! - [`Loading`] - Spinner/dots indicator with optional overlay
//! - [`Modal`] - Animated overlay with dismissal policy

use serde::{Deserialize, Serialize};

pub mod button;
pub mod card;
pub mod input;
pub mod loading;
pub mod modal;

pub use button::{Button, ButtonSize, ButtonStyles, ButtonVariant};
pub use card::{Card, CardPadding, CardStyles, CardVariant};
pub use input::{
    InputDelegate, InputEdit, InputFeedback, InputField, InputIcon, InputProps, InputSize,
    InputStyles, InputVariant,
};
pub use loading::{Loading, LoadingFrame, LoadingSize, LoadingStyles, LoadingVariant};
pub use modal::{
    DismissGesture, Modal, ModalAnchor, ModalDelegate, ModalFrame, ModalHeader, ModalLayout,
    ModalPhase, ModalProps, ModalSize, ModalStyles, ModalTiming, ModalVariant,
};

#[cfg(any(test, feature = "mock"))]
pub use input::MockInputDelegate;
#[cfg(any(test, feature = "mock"))]
pub use modal::MockModalDelegate;

// =============================================================================
// Common Types
// =============================================================================

/// Receives presses from pressable components (buttons, pressable cards)
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait PressDelegate {
    /// The component was pressed
    fn on_press(&mut self);
}

/// Screen dimensions the host lays overlays out against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in points
    pub width: f32,
    /// Height in points
    pub height: f32,
}

impl Viewport {
    /// Create a viewport
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a rectangle
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Spacing values (margin, padding)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Spacing {
    /// Uniform spacing on all sides
    Uniform(f32),
    /// Vertical and horizontal spacing
    Symmetric {
        /// Vertical spacing
        vertical: f32,
        /// Horizontal spacing
        horizontal: f32,
    },
    /// Individual spacing per side
    Individual {
        /// Top spacing
        top: f32,
        /// Right spacing
        right: f32,
        /// Bottom spacing
        bottom: f32,
        /// Left spacing
        left: f32,
    },
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Uniform(0.0)
    }
}

impl Spacing {
    /// Left side value
    pub fn left(&self) -> f32 {
        match *self {
            Spacing::Uniform(v) => v,
            Spacing::Symmetric { horizontal, .. } => horizontal,
            Spacing::Individual { left, .. } => left,
        }
    }

    /// Right side value
    pub fn right(&self) -> f32 {
        match *self {
            Spacing::Uniform(v) => v,
            Spacing::Symmetric { horizontal, .. } => horizontal,
            Spacing::Individual { right, .. } => right,
        }
    }

    /// Top side value
    pub fn top(&self) -> f32 {
        match *self {
            Spacing::Uniform(v) => v,
            Spacing::Symmetric { vertical, .. } => vertical,
            Spacing::Individual { top, .. } => top,
        }
    }

    /// Bottom side value
    pub fn bottom(&self) -> f32 {
        match *self {
            Spacing::Uniform(v) => v,
            Spacing::Symmetric { vertical, .. } => vertical,
            Spacing::Individual { bottom, .. } => bottom,
        }
    }
}

/// Where an icon sits relative to a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    /// Icon before the label
    #[default]
    Left,
    /// Icon after the label
    Right,
}
