//! Animated overlay with an owner-driven visibility contract
//!
//! The owning screen holds the `visible` flag and a close handler. A
//! [`Modal`] tracks only transient state: the [`ModalPhase`] and the animated
//! opacity/scale/offset of the surface. Dismissal gestures ask the owner to
//! close through [`ModalDelegate::on_close`]. The modal never hides itself;
//! it only reacts to the owner calling [`Modal::set_visible`].
//!
//! ```text
//! Closed --(visible)--> Opening --(done)--> Open --(hidden)--> Closing --(done)--> Closed
//! ```
//!
//! Opening and Closing can flip into each other mid-animation; the new tween
//! starts from the current interpolated values.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{Rect, Viewport};
use crate::accessibility::{AccessibilityNode, AccessibilityRole, CLOSE_MODAL_LABEL};
use crate::animation::{AnimatedProperty, AnimationController, Easing};
use crate::theme::{Color, Theme};
use crate::tokens::{duration, font_size, modal_size, motion, radius, shadows, spacing, z_index, Shadow};

// =============================================================================
// Props
// =============================================================================

/// Shape and anchoring of the overlay surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModalVariant {
    /// Plain centered surface
    #[default]
    Default,
    /// Covers the whole viewport
    #[serde(rename = "fullscreen")]
    FullScreen,
    /// Full-width sheet anchored to the bottom edge
    BottomSheet,
    /// Centered card with larger corner radius
    Centered,
}

impl ModalVariant {
    /// Whether the surface scales in from the center
    pub fn scales(&self) -> bool {
        matches!(self, ModalVariant::Default | ModalVariant::Centered)
    }

    /// Whether the surface slides up from below
    pub fn slides(&self) -> bool {
        matches!(self, ModalVariant::BottomSheet)
    }

    /// Whether any backdrop is left uncovered to tap
    pub fn has_backdrop(&self) -> bool {
        !matches!(self, ModalVariant::FullScreen)
    }
}

/// Size category mapping to fixed viewport fractions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalSize {
    /// 80% × 40%
    Small,
    /// 90% × 60%
    #[default]
    Medium,
    /// 95% × 80%
    Large,
    /// 100% × 100%
    Full,
}

impl ModalSize {
    /// (width, height) as fractions of the viewport
    pub fn fractions(&self) -> (f32, f32) {
        match self {
            ModalSize::Small => modal_size::SMALL,
            ModalSize::Medium => modal_size::MEDIUM,
            ModalSize::Large => modal_size::LARGE,
            ModalSize::Full => modal_size::FULL,
        }
    }

    /// All size categories
    pub fn all() -> [ModalSize; 4] {
        [ModalSize::Small, ModalSize::Medium, ModalSize::Large, ModalSize::Full]
    }
}

/// Entry/exit animation timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalTiming {
    /// Entry animation duration
    pub enter: Duration,
    /// Exit animation duration
    pub exit: Duration,
    /// Curve used while entering
    pub enter_easing: Easing,
    /// Curve used while exiting
    pub exit_easing: Easing,
}

impl Default for ModalTiming {
    fn default() -> Self {
        Self {
            enter: Duration::from_millis(duration::MODAL_ENTER as u64),
            exit: Duration::from_millis(duration::MODAL_EXIT as u64),
            enter_easing: Easing::EaseOut,
            exit_easing: Easing::EaseIn,
        }
    }
}

impl ModalTiming {
    /// Timing with custom durations in milliseconds
    pub fn from_millis(enter_ms: u64, exit_ms: u64) -> Self {
        Self {
            enter: Duration::from_millis(enter_ms),
            exit: Duration::from_millis(exit_ms),
            ..Self::default()
        }
    }

    /// Timing that completes every transition immediately
    pub fn instant() -> Self {
        Self::from_millis(0, 0)
    }
}

/// Modal component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalProps {
    /// Surface shape and anchoring
    #[serde(default)]
    pub variant: ModalVariant,
    /// Size category
    #[serde(default)]
    pub size: ModalSize,
    /// Header title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Header subtitle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Show the × close affordance
    #[serde(default = "default_true")]
    pub show_close_button: bool,
    /// Backdrop taps request closing
    #[serde(default = "default_true")]
    pub close_on_backdrop_press: bool,
    /// Platform back action requests closing
    #[serde(default = "default_true")]
    pub close_on_back_button: bool,
    /// Accessible label override (defaults to the title)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_label: Option<String>,
    /// Test ID for testing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for ModalProps {
    fn default() -> Self {
        Self {
            variant: ModalVariant::Default,
            size: ModalSize::Medium,
            title: None,
            subtitle: None,
            show_close_button: true,
            close_on_backdrop_press: true,
            close_on_back_button: true,
            accessibility_label: None,
            test_id: None,
        }
    }
}

impl ModalProps {
    /// Create default props
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: ModalVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the size
    pub fn with_size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the subtitle
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Show or hide the close button
    pub fn with_close_button(mut self, show: bool) -> Self {
        self.show_close_button = show;
        self
    }

    /// Enable or disable backdrop dismissal
    pub fn with_backdrop_dismiss(mut self, enabled: bool) -> Self {
        self.close_on_backdrop_press = enabled;
        self
    }

    /// Enable or disable back-action dismissal
    pub fn with_back_button_dismiss(mut self, enabled: bool) -> Self {
        self.close_on_back_button = enabled;
        self
    }

    /// Override the accessible label
    pub fn with_accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }

    /// Set test ID
    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }
}

// =============================================================================
// State
// =============================================================================

/// Visibility phase of the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalPhase {
    /// Not rendered
    #[default]
    Closed,
    /// Entry animation running
    Opening,
    /// Fully shown
    Open,
    /// Exit animation running
    Closing,
}

/// User actions that ask the owner to close the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DismissGesture {
    /// Tap outside the surface
    Backdrop,
    /// Platform back action
    BackButton,
    /// The × control in the header
    CloseButton,
}

/// The owner's side of the overlay contract
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ModalDelegate {
    /// The user asked to dismiss the overlay
    fn on_close(&mut self);
}

/// Animated transform of the surface for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalFrame {
    /// Surface and backdrop opacity
    pub opacity: f32,
    /// Uniform surface scale
    pub scale: f32,
    /// Vertical offset in points
    pub translate_y: f32,
}

/// Header region content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalHeader {
    /// Title text
    pub title: Option<String>,
    /// Subtitle text
    pub subtitle: Option<String>,
    /// Whether the × control renders
    pub show_close_button: bool,
}

/// Where the surface is pinned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalAnchor {
    /// Centered in the viewport
    Center,
    /// Pinned to the bottom edge
    Bottom,
    /// Covers the viewport
    Fill,
}

/// Resolved geometry of the surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalLayout {
    /// Surface bounds at rest (before the animated transform)
    pub container: Rect,
    /// Anchoring
    pub anchor: ModalAnchor,
    /// Corner radius
    pub border_radius: f32,
    /// Whether a header region is laid out
    pub has_header: bool,
    /// Whether a drag handle is drawn (bottom sheets)
    pub show_handle: bool,
}

/// Computed modal styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalStyles {
    /// Backdrop color
    pub backdrop: Color,
    /// Surface color
    pub background: Color,
    /// Corner radius
    pub border_radius: f32,
    /// Content padding
    pub padding: f32,
    /// Surface shadow
    pub shadow: Shadow,
    /// Title color
    pub title_color: Color,
    /// Subtitle color
    pub subtitle_color: Color,
    /// Title font size
    pub title_font_size: f32,
    /// Divider under the header, when a header renders
    pub header_border: Option<Color>,
    /// Stacking order of the surface
    pub z_index: i32,
}

// =============================================================================
// Controller
// =============================================================================

/// Overlay controller: visibility phase, animation and dismissal policy
#[derive(Debug)]
pub struct Modal {
    id: String,
    props: ModalProps,
    timing: ModalTiming,
    visible: bool,
    phase: ModalPhase,
    animation: AnimationController,
}

impl Modal {
    /// Create a closed modal
    pub fn new(props: ModalProps) -> Self {
        let mut animation = AnimationController::new();
        for (property, value) in hidden_targets(props.variant) {
            animation.register(property, value);
        }
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            props,
            timing: ModalTiming::default(),
            visible: false,
            phase: ModalPhase::Closed,
            animation,
        }
    }

    /// Replace the animation timing
    pub fn with_timing(mut self, timing: ModalTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Unique instance identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current props
    pub fn props(&self) -> &ModalProps {
        &self.props
    }

    /// Current phase
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Last visibility the owner requested
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the overlay is in the render tree
    pub fn is_rendered(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    /// Whether dismissal gestures are accepted
    pub fn is_interactive(&self) -> bool {
        matches!(self.phase, ModalPhase::Opening | ModalPhase::Open)
    }

    /// Apply the owner's visibility flag.
    ///
    /// A change starts the entry or exit animation from the current values,
    /// cancelling any tween in flight. Repeating the current value does
    /// nothing.
    pub fn set_visible(&mut self, visible: bool) {
        if visible == self.visible {
            return;
        }
        self.visible = visible;

        let (targets, duration, easing, phase) = if visible {
            (
                shown_targets(self.props.variant),
                self.timing.enter,
                self.timing.enter_easing,
                ModalPhase::Opening,
            )
        } else {
            (
                hidden_targets(self.props.variant),
                self.timing.exit,
                self.timing.exit_easing,
                ModalPhase::Closing,
            )
        };

        tracing::debug!(modal = %self.id, from = ?self.phase, to = ?phase, "modal transition");
        self.phase = phase;
        self.animation.start(&targets, duration, easing);
        self.settle();
    }

    /// Advance the animation by one frame.
    ///
    /// Returns the new phase when an entry or exit animation completes.
    pub fn tick(&mut self, delta: Duration) -> Option<ModalPhase> {
        if !matches!(self.phase, ModalPhase::Opening | ModalPhase::Closing) {
            return None;
        }
        self.animation.tick(delta);
        self.settle()
    }

    fn settle(&mut self) -> Option<ModalPhase> {
        if !self.animation.is_idle() {
            return None;
        }
        let next = match self.phase {
            ModalPhase::Opening => ModalPhase::Open,
            ModalPhase::Closing => ModalPhase::Closed,
            _ => return None,
        };
        tracing::debug!(modal = %self.id, phase = ?next, "modal animation settled");
        self.phase = next;
        Some(next)
    }

    /// Handle a dismissal gesture.
    ///
    /// Invokes `on_close` once when the gesture's policy allows it and the
    /// overlay is interactive. The phase is left alone; the owner decides
    /// whether to hide. Returns whether `on_close` was invoked.
    pub fn dismiss(&mut self, gesture: DismissGesture, delegate: &mut dyn ModalDelegate) -> bool {
        if !self.is_interactive() {
            tracing::trace!(modal = %self.id, ?gesture, phase = ?self.phase, "gesture ignored");
            return false;
        }
        let allowed = match gesture {
            DismissGesture::Backdrop => self.backdrop_dismisses(),
            DismissGesture::BackButton => self.props.close_on_back_button,
            DismissGesture::CloseButton => self.props.show_close_button,
        };
        if allowed {
            tracing::debug!(modal = %self.id, ?gesture, "close requested");
            delegate.on_close();
        }
        allowed
    }

    fn backdrop_dismisses(&self) -> bool {
        self.props.close_on_backdrop_press && self.props.variant.has_backdrop()
    }

    /// Animated transform for the current frame
    pub fn frame(&self) -> ModalFrame {
        ModalFrame {
            opacity: self.animation.get(AnimatedProperty::Opacity).unwrap_or(1.0),
            scale: self.animation.get(AnimatedProperty::Scale).unwrap_or(1.0),
            translate_y: self.animation.get(AnimatedProperty::TranslateY).unwrap_or(0.0),
        }
    }

    /// Header content, or `None` when the header region collapses
    pub fn header(&self) -> Option<ModalHeader> {
        let props = &self.props;
        if props.title.is_none() && props.subtitle.is_none() && !props.show_close_button {
            return None;
        }
        Some(ModalHeader {
            title: props.title.clone(),
            subtitle: props.subtitle.clone(),
            show_close_button: props.show_close_button,
        })
    }

    /// Resolve surface geometry against a viewport
    pub fn layout(&self, viewport: Viewport) -> ModalLayout {
        let (width_fraction, height_fraction) = self.props.size.fractions();
        let has_header = self.header().is_some();

        let (container, anchor, border_radius, show_handle) = match self.props.variant {
            ModalVariant::FullScreen => (
                Rect::new(0.0, 0.0, viewport.width, viewport.height),
                ModalAnchor::Fill,
                radius::NONE,
                false,
            ),
            ModalVariant::BottomSheet => {
                let height = viewport.height * height_fraction.min(modal_size::SHEET_MAX_HEIGHT);
                (
                    Rect::new(0.0, viewport.height - height, viewport.width, height),
                    ModalAnchor::Bottom,
                    radius::XL,
                    true,
                )
            }
            ModalVariant::Default | ModalVariant::Centered => {
                let width = viewport.width * width_fraction;
                let height = viewport.height * height_fraction;
                let corner = match (self.props.size, self.props.variant) {
                    (ModalSize::Full, _) => radius::NONE,
                    (_, ModalVariant::Centered) => radius::XL,
                    _ => radius::LG,
                };
                (
                    Rect::new(
                        (viewport.width - width) / 2.0,
                        (viewport.height - height) / 2.0,
                        width,
                        height,
                    ),
                    ModalAnchor::Center,
                    corner,
                    false,
                )
            }
        };

        ModalLayout {
            container,
            anchor,
            border_radius,
            has_header,
            show_handle,
        }
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &Theme) -> ModalStyles {
        let (border_radius, shadow, padding) = match self.props.variant {
            ModalVariant::FullScreen => (radius::NONE, shadows::none(), spacing::SPACE_LG),
            ModalVariant::BottomSheet => (radius::XL, shadows::md(), spacing::SPACE_LG),
            ModalVariant::Centered => (radius::XL, shadows::lg(), spacing::SPACE_2XL),
            ModalVariant::Default => (radius::LG, shadows::lg(), spacing::SPACE_LG),
        };
        let border_radius = if self.props.size == ModalSize::Full && self.props.variant != ModalVariant::BottomSheet {
            radius::NONE
        } else {
            border_radius
        };

        ModalStyles {
            backdrop: theme.colors.backdrop.clone(),
            background: theme.colors.surface.clone(),
            border_radius,
            padding,
            shadow,
            title_color: theme.colors.text.clone(),
            subtitle_color: theme.colors.text_muted.clone(),
            title_font_size: font_size::XL,
            header_border: self.header().map(|_| theme.colors.border.clone()),
            z_index: z_index::MODAL,
        }
    }

    /// Accessibility tree with the caller's content nodes inside.
    ///
    /// The root is the single modal region. Every enabled dismissal control
    /// is its own labelled button.
    pub fn accessibility_tree(&self, content: Vec<AccessibilityNode>) -> AccessibilityNode {
        let props = &self.props;
        let label = props
            .accessibility_label
            .clone()
            .or_else(|| props.title.clone());

        let mut root = AccessibilityNode::new(AccessibilityRole::Dialog)
            .modal()
            .with_optional_label(label)
            .with_test_id(props.test_id.clone());

        if self.backdrop_dismisses() {
            root = root.with_child(
                AccessibilityNode::new(AccessibilityRole::Button)
                    .with_label(CLOSE_MODAL_LABEL)
                    .with_hint(Some("Dismisses the overlay".to_string())),
            );
        }

        if let Some(header) = self.header() {
            let mut group = AccessibilityNode::container();
            if let Some(title) = header.title {
                group = group.with_child(AccessibilityNode::new(AccessibilityRole::Header).with_label(title));
            }
            if let Some(subtitle) = header.subtitle {
                group = group.with_child(AccessibilityNode::new(AccessibilityRole::Text).with_label(subtitle));
            }
            if header.show_close_button {
                group = group.with_child(
                    AccessibilityNode::new(AccessibilityRole::Button).with_label(CLOSE_MODAL_LABEL),
                );
            }
            root = root.with_child(group);
        }

        root.with_child(AccessibilityNode::container().with_children(content))
    }

    /// Tear down animation handles. Safe to call at any time, repeatedly.
    pub fn unmount(&mut self) {
        self.animation.cancel_all();
        for (property, value) in hidden_targets(self.props.variant) {
            self.animation.register(property, value);
        }
        if self.phase != ModalPhase::Closed {
            tracing::debug!(modal = %self.id, phase = ?self.phase, "modal unmounted");
        }
        self.phase = ModalPhase::Closed;
        self.visible = false;
    }
}

impl Drop for Modal {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn shown_targets(variant: ModalVariant) -> Vec<(AnimatedProperty, f32)> {
    let mut targets = vec![(AnimatedProperty::Opacity, 1.0)];
    if variant.scales() {
        targets.push((AnimatedProperty::Scale, 1.0));
    }
    if variant.slides() {
        targets.push((AnimatedProperty::TranslateY, 0.0));
    }
    targets
}

fn hidden_targets(variant: ModalVariant) -> Vec<(AnimatedProperty, f32)> {
    let mut targets = vec![(AnimatedProperty::Opacity, 0.0)];
    if variant.scales() {
        targets.push((AnimatedProperty::Scale, motion::MODAL_HIDDEN_SCALE));
    }
    if variant.slides() {
        targets.push((AnimatedProperty::TranslateY, motion::SHEET_HIDDEN_OFFSET));
    }
    targets
}
