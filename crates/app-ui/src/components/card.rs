//! Surface container

use serde::{Deserialize, Serialize};

use super::PressDelegate;
use crate::accessibility::{AccessibilityNode, AccessibilityRole};
use crate::theme::{Color, Theme};
use crate::tokens::{border, radius, shadows, spacing, Shadow};

/// Card visual variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    /// Surface with a light shadow
    #[default]
    Default,
    /// Surface with a pronounced shadow
    Elevated,
    /// Bordered, no shadow
    Outlined,
    /// Muted fill, no shadow
    Filled,
}

/// Inner padding presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardPadding {
    /// No padding
    None,
    /// Small padding
    Small,
    /// Medium padding
    #[default]
    Medium,
    /// Large padding
    Large,
}

impl CardPadding {
    /// Padding in points
    pub fn points(&self) -> f32 {
        match self {
            CardPadding::None => 0.0,
            CardPadding::Small => spacing::SPACE_SM,
            CardPadding::Medium => spacing::SPACE_LG,
            CardPadding::Large => spacing::SPACE_2XL,
        }
    }
}

/// Card component properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Visual variant
    #[serde(default)]
    pub variant: CardVariant,
    /// Inner padding
    #[serde(default)]
    pub padding: CardPadding,
    /// Whether the whole card is pressable
    #[serde(default)]
    pub pressable: bool,
    /// Accessible label (pressable cards)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_label: Option<String>,
    /// Test ID for testing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
}

impl Card {
    /// Create a default card
    pub fn new() -> Self {
        Self::default()
    }

    /// Set variant
    pub fn with_variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set padding
    pub fn with_padding(mut self, padding: CardPadding) -> Self {
        self.padding = padding;
        self
    }

    /// Make the card pressable with an accessible label
    pub fn pressable(mut self, label: impl Into<String>) -> Self {
        self.pressable = true;
        self.accessibility_label = Some(label.into());
        self
    }

    /// Deliver a press; only pressable cards respond
    pub fn press(&self, delegate: &mut dyn PressDelegate) -> bool {
        if !self.pressable {
            return false;
        }
        delegate.on_press();
        true
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &Theme) -> CardStyles {
        let colors = &theme.colors;
        let (background, border_color, border_width, shadow) = match self.variant {
            CardVariant::Default => (colors.surface.clone(), None, border::NONE, shadows::sm()),
            CardVariant::Elevated => (colors.surface.clone(), None, border::NONE, shadows::md()),
            CardVariant::Outlined => (
                colors.surface.clone(),
                Some(colors.border.clone()),
                border::THIN,
                shadows::none(),
            ),
            CardVariant::Filled => (colors.surface_muted.clone(), None, border::NONE, shadows::none()),
        };

        CardStyles {
            background,
            border_color,
            border_width,
            border_radius: radius::LG,
            padding: self.padding.points(),
            shadow,
        }
    }

    /// Accessibility node wrapping the card's content
    pub fn accessibility_node(&self, content: Vec<AccessibilityNode>) -> AccessibilityNode {
        let node = if self.pressable {
            AccessibilityNode::new(AccessibilityRole::Button).with_optional_label(self.accessibility_label.clone())
        } else {
            AccessibilityNode::container()
        };
        node.with_test_id(self.test_id.clone()).with_children(content)
    }
}

/// Computed card styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardStyles {
    /// Background color
    pub background: Color,
    /// Border color
    pub border_color: Option<Color>,
    /// Border width
    pub border_width: f32,
    /// Corner radius
    pub border_radius: f32,
    /// Inner padding
    pub padding: f32,
    /// Shadow
    pub shadow: Shadow,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::MockPressDelegate;
    use crate::theme::light_theme;

    #[test]
    fn test_card_variants() {
        let theme = light_theme();
        let elevated = Card::new().with_variant(CardVariant::Elevated).computed_styles(&theme);
        let default = Card::new().computed_styles(&theme);
        assert!(elevated.shadow.blur > default.shadow.blur);

        let outlined = Card::new().with_variant(CardVariant::Outlined).computed_styles(&theme);
        assert_eq!(outlined.border_color, Some(theme.colors.border.clone()));
        assert_eq!(outlined.shadow.blur, 0.0);

        let filled = Card::new().with_variant(CardVariant::Filled).computed_styles(&theme);
        assert_eq!(filled.background, theme.colors.surface_muted);
    }

    #[test]
    fn test_card_padding() {
        assert_eq!(CardPadding::None.points(), 0.0);
        assert!(CardPadding::Small.points() < CardPadding::Medium.points());
        assert!(CardPadding::Medium.points() < CardPadding::Large.points());
    }

    #[test]
    fn test_card_press() {
        let mut delegate = MockPressDelegate::new();
        delegate.expect_on_press().times(1).return_const(());

        assert!(!Card::new().press(&mut delegate));
        assert!(Card::new().pressable("Open book").press(&mut delegate));
    }

    #[test]
    fn test_card_accessibility() {
        let plain = Card::new().accessibility_node(vec![]);
        assert_eq!(plain.role, None);

        let pressable = Card::new()
            .pressable("The Hobbit")
            .accessibility_node(vec![AccessibilityNode::new(AccessibilityRole::Text).with_label("J.R.R. Tolkien")]);
        assert_eq!(pressable.role, Some(AccessibilityRole::Button));
        assert_eq!(pressable.label.as_deref(), Some("The Hobbit"));
        assert_eq!(pressable.children.len(), 1);
    }
}
