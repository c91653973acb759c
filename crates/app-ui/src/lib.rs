//! User interface primitives for AR Book Explorer
//!
//! This crate provides the UI layer: design tokens, theming, the animation
//! driver, accessibility trees, the foundation components and the
//! navigation model. Everything here is a plain value driven by a host
//! renderer; nothing draws pixels.
//!
//! # Design System
//!
//! Two themes are supported:
//! - [`theme::ThemeName::Light`] - White surfaces with indigo accents
//! - [`theme::ThemeName::Dark`] - Near-black surfaces for camera screens
//!
//! # Modules
//!
//! - [`tokens`] - Design tokens (spacing, sizing, durations, etc.)
//! - [`theme`] - Color palettes and theme lookup
//! - [`animation`] - Frame-driven tweens for overlays
//! - [`accessibility`] - Accessibility node trees
//! - [`components`] - Button, Card, InputField, Loading and Modal
//! - [`alert`] - Platform alert contract
//! - [`navigation`] - Routes, tab stacks and the path router
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use app_ui::components::{Modal, ModalPhase, ModalProps, ModalVariant};
//! use app_ui::theme::{get_theme, ThemeName};
//!
//! let theme = get_theme(ThemeName::Dark);
//! let mut modal = Modal::new(ModalProps::new().with_variant(ModalVariant::BottomSheet));
//!
//! modal.set_visible(true);
//! modal.tick(Duration::from_millis(300));
//! assert_eq!(modal.phase(), ModalPhase::Open);
//!
//! let styles = modal.computed_styles(&theme);
//! assert_eq!(styles.background, theme.colors.surface);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod accessibility;
pub mod alert;
pub mod animation;
pub mod components;
pub mod navigation;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use theme::{all_themes, dark_theme, get_theme, light_theme, Theme, ThemeColors, ThemeName};

pub use tokens::{
    border, duration, font_size, radius, shadows, sizing, spacing, z_index, Shadow,
};

pub use accessibility::{AccessibilityNode, AccessibilityRole, AccessibilityState};

pub use animation::{AnimatedProperty, AnimatedValue, AnimationController, Easing};

pub use alert::{Alert, AlertAction, AlertPresenter, AlertStyle};

pub use navigation::{
    NavigationError, NavigationStack, NavigationState, NavigationTab, Route, RouteParams, Router,
    StackEntry,
};
