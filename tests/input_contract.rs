//! Input field contract tests
//!
//! The field is controlled: it displays whatever value the owner last
//! passed in and reports edits through the delegate.

use app_ui::accessibility::AccessibilityRole;
use app_ui::components::{
    InputEdit, InputFeedback, InputField, InputIcon, InputProps, InputSize, MockInputDelegate,
};
use app_ui::theme::light_theme;
use app_ui::tokens::{hit_target, sizing};
use mockall::predicate::eq;

#[test]
fn test_displays_exactly_the_value() {
    let field = InputField::new(InputProps::new("abc"));
    assert_eq!(field.displayed_value(), "abc");

    let secure = InputField::new(InputProps::new("abc").secure());
    assert_eq!(secure.displayed_value(), "abc");
}

#[test]
fn test_error_replaces_helper() {
    let field = InputField::new(
        InputProps::new("")
            .with_label("Email")
            .with_helper("We never share it")
            .with_error("Required"),
    );
    assert_eq!(
        field.feedback(),
        Some(InputFeedback::Error("Required".to_string()))
    );

    let tree = field.accessibility_tree();
    assert_eq!(tree.find_by_label("Required").len(), 1);
    assert!(tree.find_by_label("We never share it").is_empty());

    let text_field = tree.find_by_role(AccessibilityRole::TextField);
    assert_eq!(text_field.len(), 1);
    assert!(text_field[0].state.invalid);
    assert_eq!(text_field[0].hint.as_deref(), Some("We never share it"));
}

#[test]
fn test_disabled_field_is_silent() {
    let mut field = InputField::new(InputProps::new("abc").disabled(true));
    let mut delegate = MockInputDelegate::new();
    delegate.expect_on_change_text().never();
    delegate.expect_on_focus().never();

    assert!(!field.focus(&mut delegate));
    assert!(!field.edit(InputEdit::Insert("d".to_string()), &mut delegate));
    assert!(!field.edit(InputEdit::Clear, &mut delegate));
    assert_eq!(field.displayed_value(), "abc");
}

#[test]
fn test_controlled_editing_round_trip() {
    let mut field = InputField::new(InputProps::new("ab"));
    let mut delegate = MockInputDelegate::new();
    delegate
        .expect_on_change_text()
        .with(eq("abc"))
        .times(1)
        .return_const(());

    assert!(field.edit(InputEdit::Insert("c".to_string()), &mut delegate));
    // Not applied until the owner passes the new value back
    assert_eq!(field.displayed_value(), "ab");

    field.set_value("abc");
    assert_eq!(field.displayed_value(), "abc");
}

#[test]
fn test_left_icon_padding() {
    let theme = light_theme();
    let plain = InputField::new(InputProps::new("")).computed_styles(&theme);
    let with_icon = InputField::new(
        InputProps::new("").with_left_icon(InputIcon::decorative("search")),
    )
    .computed_styles(&theme);

    assert!(with_icon.padding.left() > plain.padding.left());
    assert_eq!(with_icon.left_icon_inset, Some(sizing::input::ICON_INSET));
    assert_eq!(plain.left_icon_inset, None);
}

#[test]
fn test_touch_target_sizes() {
    let theme = light_theme();
    for size in [InputSize::Medium, InputSize::Large] {
        let styles = InputField::new(InputProps::new("").with_size(size)).computed_styles(&theme);
        assert!(styles.min_height >= hit_target::MIN);
    }
}

#[test]
fn test_right_icon_action() {
    let mut field = InputField::new(
        InputProps::new("query").with_right_icon(InputIcon::action("x", "Clear search")),
    );
    let mut delegate = MockInputDelegate::new();
    delegate.expect_on_right_icon_press().times(1).return_const(());

    assert!(field.press_right_icon(&mut delegate));

    let tree = field.accessibility_tree();
    let buttons = tree.find_by_role(AccessibilityRole::Button);
    assert_eq!(buttons.len(), 1);
    assert_eq!(buttons[0].label.as_deref(), Some("Clear search"));
}
