//! Design tokens for AR Book Explorer
//!
//! Spacing, sizing, radius, shadow, motion and layering primitives shared by
//! every foundation component. All tokens are constants or pure functions;
//! nothing here holds mutable state.

use serde::{Deserialize, Serialize};

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in points, on a 4pt base unit
pub mod spacing {
    /// 4pt - Extra small
    pub const SPACE_XS: f32 = 4.0;
    /// 8pt - Small
    pub const SPACE_SM: f32 = 8.0;
    /// 12pt - Medium
    pub const SPACE_MD: f32 = 12.0;
    /// 16pt - Large
    pub const SPACE_LG: f32 = 16.0;
    /// 20pt - Extra large
    pub const SPACE_XL: f32 = 20.0;
    /// 24pt - 2x large
    pub const SPACE_2XL: f32 = 24.0;
    /// 32pt - 3x large
    pub const SPACE_3XL: f32 = 32.0;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "xs" => Some(SPACE_XS),
            "sm" => Some(SPACE_SM),
            "md" => Some(SPACE_MD),
            "lg" => Some(SPACE_LG),
            "xl" => Some(SPACE_XL),
            "2xl" => Some(SPACE_2XL),
            "3xl" => Some(SPACE_3XL),
            _ => None,
        }
    }
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Size tokens for component dimensions
pub mod sizing {
    /// Icon sizes
    pub mod icon {
        /// Small icon (16pt)
        pub const SM: f32 = 16.0;
        /// Medium icon (20pt)
        pub const MD: f32 = 20.0;
        /// Large icon (24pt)
        pub const LG: f32 = 24.0;
    }

    /// Button heights
    pub mod button {
        /// Small button height
        pub const SM_HEIGHT: f32 = 36.0;
        /// Medium button height
        pub const MD_HEIGHT: f32 = 44.0;
        /// Large button height
        pub const LG_HEIGHT: f32 = 52.0;
    }

    /// Input field dimensions
    pub mod input {
        /// Small input minimum height
        pub const SM_HEIGHT: f32 = 36.0;
        /// Medium input minimum height
        pub const MD_HEIGHT: f32 = 44.0;
        /// Large input minimum height
        pub const LG_HEIGHT: f32 = 52.0;
        /// Distance from the field edge to an adornment icon
        pub const ICON_INSET: f32 = 12.0;
        /// Horizontal room reserved for an adornment icon (inset + icon + gap)
        pub const ICON_SLOT: f32 = 40.0;
    }

    /// Loading indicator sizes
    pub mod loading {
        /// Small indicator
        pub const SM: f32 = 20.0;
        /// Medium indicator
        pub const MD: f32 = 32.0;
        /// Large indicator
        pub const LG: f32 = 48.0;
    }

    /// Modal close affordance
    pub mod modal {
        /// Close (×) button diameter
        pub const CLOSE_BUTTON: f32 = 32.0;
        /// Drag handle width on bottom sheets
        pub const HANDLE_WIDTH: f32 = 40.0;
        /// Drag handle height on bottom sheets
        pub const HANDLE_HEIGHT: f32 = 4.0;
    }
}

// =============================================================================
// Font Size Tokens
// =============================================================================

/// Font sizes in points
pub mod font_size {
    /// Caption / helper text
    pub const XS: f32 = 12.0;
    /// Small body text
    pub const SM: f32 = 14.0;
    /// Body text
    pub const MD: f32 = 16.0;
    /// Large body text
    pub const LG: f32 = 18.0;
    /// Modal title
    pub const XL: f32 = 20.0;
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius values
pub mod radius {
    /// No radius
    pub const NONE: f32 = 0.0;
    /// Small radius (4pt)
    pub const SM: f32 = 4.0;
    /// Medium radius (8pt)
    pub const MD: f32 = 8.0;
    /// Large radius (12pt)
    pub const LG: f32 = 12.0;
    /// Extra large radius (16pt)
    pub const XL: f32 = 16.0;
    /// 2x large radius (24pt)
    pub const XXL: f32 = 24.0;
    /// Fully rounded (pill shape)
    pub const FULL: f32 = 9999.0;
}

// =============================================================================
// Border Width Tokens
// =============================================================================

/// Border width values
pub mod border {
    /// No border
    pub const NONE: f32 = 0.0;
    /// Thin border (1pt)
    pub const THIN: f32 = 1.0;
    /// Medium border (2pt)
    pub const MEDIUM: f32 = 2.0;
}

// =============================================================================
// Shadow Tokens
// =============================================================================

/// Shadow definitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
    /// Shadow color (with alpha)
    pub color: String,
    /// Android elevation equivalent
    pub elevation: f32,
}

impl Shadow {
    /// Create a new shadow
    pub fn new(offset_x: f32, offset_y: f32, blur: f32, color: &str, elevation: f32) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            color: color.to_string(),
            elevation,
        }
    }
}

/// Shadow presets
pub mod shadows {
    use super::Shadow;

    /// No shadow
    pub fn none() -> Shadow {
        Shadow::new(0.0, 0.0, 0.0, "transparent", 0.0)
    }

    /// Small shadow
    pub fn sm() -> Shadow {
        Shadow::new(0.0, 1.0, 3.0, "rgba(0, 0, 0, 0.1)", 2.0)
    }

    /// Medium shadow
    pub fn md() -> Shadow {
        Shadow::new(0.0, 4.0, 8.0, "rgba(0, 0, 0, 0.12)", 4.0)
    }

    /// Large shadow
    pub fn lg() -> Shadow {
        Shadow::new(0.0, 10.0, 20.0, "rgba(0, 0, 0, 0.25)", 10.0)
    }
}

// =============================================================================
// Motion Tokens
// =============================================================================

/// Animation durations in milliseconds
pub mod duration {
    /// Instant (0ms)
    pub const INSTANT: u32 = 0;
    /// Fast (100ms)
    pub const FAST: u32 = 100;
    /// Moderate (200ms) - overlay exit
    pub const MODERATE: u32 = 200;
    /// Slow (300ms) - overlay entry
    pub const SLOW: u32 = 300;
    /// One full spinner revolution
    pub const SPINNER_REVOLUTION: u32 = 1000;
    /// Time each loading dot stays highlighted
    pub const DOT_STEP: u32 = 300;

    /// Overlay entry animation
    pub const MODAL_ENTER: u32 = SLOW;
    /// Overlay exit animation
    pub const MODAL_EXIT: u32 = MODERATE;
}

/// Rest values for the overlay's hidden state
pub mod motion {
    /// Scale a centered overlay grows from
    pub const MODAL_HIDDEN_SCALE: f32 = 0.8;
    /// Offset a bottom sheet slides up from
    pub const SHEET_HIDDEN_OFFSET: f32 = 300.0;
}

// =============================================================================
// Overlay Size Fractions
// =============================================================================

/// Viewport fractions (width, height) for the overlay size categories
pub mod modal_size {
    /// Small overlay
    pub const SMALL: (f32, f32) = (0.80, 0.40);
    /// Medium overlay
    pub const MEDIUM: (f32, f32) = (0.90, 0.60);
    /// Large overlay
    pub const LARGE: (f32, f32) = (0.95, 0.80);
    /// Full overlay
    pub const FULL: (f32, f32) = (1.0, 1.0);
    /// Tallest a bottom sheet may grow
    pub const SHEET_MAX_HEIGHT: f32 = 0.80;
}

// =============================================================================
// Opacity Tokens
// =============================================================================

/// Opacity values
pub mod opacity {
    /// Disabled control
    pub const DISABLED: f32 = 0.6;
    /// Pressed control
    pub const PRESSED: f32 = 0.8;
    /// Fully opaque
    pub const OPAQUE: f32 = 1.0;
}

// =============================================================================
// Z-Index Tokens
// =============================================================================

/// Z-index layering values
pub mod z_index {
    /// Default layer
    pub const DEFAULT: i32 = 0;
    /// Loading overlay
    pub const LOADING_OVERLAY: i32 = 30;
    /// Modal backdrop
    pub const MODAL_BACKDROP: i32 = 40;
    /// Modal content
    pub const MODAL: i32 = 50;
}

// =============================================================================
// Hit Target
// =============================================================================

/// Minimum touch target sizes
pub mod hit_target {
    /// Minimum touch target (44pt - iOS guideline)
    pub const MIN: f32 = 44.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_get() {
        assert_eq!(spacing::get("xs"), Some(4.0));
        assert_eq!(spacing::get("md"), Some(12.0));
        assert_eq!(spacing::get("invalid"), None);
    }

    #[test]
    fn test_input_sizes_ordered() {
        assert!(sizing::input::SM_HEIGHT < sizing::input::MD_HEIGHT);
        assert!(sizing::input::MD_HEIGHT < sizing::input::LG_HEIGHT);
        assert!(sizing::input::MD_HEIGHT >= hit_target::MIN);
        assert!(sizing::input::ICON_SLOT > sizing::input::ICON_INSET + sizing::icon::MD);
    }

    #[test]
    fn test_radius_scale() {
        assert_eq!(radius::NONE, 0.0);
        assert!(radius::SM < radius::MD);
        assert!(radius::MD < radius::LG);
        assert!(radius::LG < radius::XL);
        assert!(radius::FULL > 1000.0);
    }

    #[test]
    fn test_shadow_presets() {
        assert_eq!(shadows::none().blur, 0.0);
        assert!(shadows::sm().blur < shadows::md().blur);
        assert!(shadows::md().blur < shadows::lg().blur);
    }

    #[test]
    fn test_modal_durations_ratio() {
        // exit runs at roughly two thirds of entry
        let ratio = duration::MODAL_EXIT as f32 / duration::MODAL_ENTER as f32;
        assert!((ratio - 0.67).abs() < 0.01);
    }

    #[test]
    fn test_modal_size_fractions() {
        for (w, h) in [modal_size::SMALL, modal_size::MEDIUM, modal_size::LARGE] {
            assert!(w > 0.0 && w < 1.0);
            assert!(h > 0.0 && h <= modal_size::SHEET_MAX_HEIGHT);
        }
        assert_eq!(modal_size::FULL, (1.0, 1.0));
    }

    #[test]
    fn test_z_index_ordering() {
        assert!(z_index::DEFAULT < z_index::LOADING_OVERLAY);
        assert!(z_index::LOADING_OVERLAY < z_index::MODAL_BACKDROP);
        assert!(z_index::MODAL_BACKDROP < z_index::MODAL);
    }

    #[test]
    fn test_shadow_serialization() {
        let shadow = shadows::md();
        let json = serde_json::to_string(&shadow).unwrap();
        let deserialized: Shadow = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, shadow);
    }
}
