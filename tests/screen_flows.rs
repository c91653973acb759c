//! Screen flow integration tests
//!
//! Wires the core crate's config and simulated tasks to the UI crate's
//! navigation, components and alert contract the way the demo screens do.

use std::time::Duration;

use app_core::sample;
use app_core::{AppConfig, SimulatedTask, StepConfig, TaskEvent};
use app_ui::alert::MockAlertPresenter;
use app_ui::components::{
    Button, Card, Loading, LoadingFrame, MockPressDelegate, Modal, ModalPhase, ModalProps,
};
use app_ui::{
    Alert, AlertAction, AlertPresenter, AlertStyle, NavigationError, NavigationState,
    NavigationTab, Route, Router,
};
use tempfile::TempDir;

/// Scan, recognise, then land on the book's AR view
#[tokio::test(start_paused = true)]
async fn test_scan_to_ar_camera() {
    let mut nav = NavigationState::new();
    nav.switch_tab(NavigationTab::Scan);

    let mut scan = SimulatedTask::spawn("scan", StepConfig::new(25, 200), ()).unwrap();
    let mut progress = Vec::new();
    while let Some(event) = scan.next_event().await {
        if let TaskEvent::Progress(pct) = event {
            progress.push(pct);
        }
    }
    assert_eq!(progress, vec![25, 50, 75, 100]);

    let recognition =
        SimulatedTask::spawn("recognition", StepConfig::new(50, 500), "hobbit".to_string())
            .unwrap();
    let book_id = recognition.wait().await.unwrap();

    nav.push(Route::ArCamera { book_id });
    assert!(!nav.tab_bar_visible());
    assert_eq!(nav.current_route().to_path(), "/scan/hobbit/ar");
}

/// Leaving the scan screen stops the simulated work
#[tokio::test(start_paused = true)]
async fn test_leaving_scan_cancels_task() {
    let mut scan = SimulatedTask::spawn("scan", StepConfig::new(10, 100), ()).unwrap();
    assert_eq!(scan.next_event().await, Some(TaskEvent::Progress(10)));

    scan.cancel();
    tokio::time::advance(Duration::from_secs(2)).await;
    assert_eq!(scan.next_event().await, None);
}

/// Config on disk drives modal timing
#[tokio::test]
async fn test_reduce_motion_config_makes_modals_instant() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    tokio::fs::write(&path, r#"{"motion":{"reduceMotion":true}}"#)
        .await
        .unwrap();

    let config = AppConfig::load(&path).await.unwrap();
    let mut modal = Modal::new(ModalProps::new()).with_timing(config.modal_timing());
    modal.set_visible(true);
    assert_eq!(modal.phase(), ModalPhase::Open);
}

/// Every book in the catalogue has a resolvable detail path
#[test]
fn test_book_routes_resolve() {
    let router = Router::new();
    for book in sample::books() {
        let route = Route::BookDetail {
            book_id: book.id.clone(),
        };
        assert_eq!(router.resolve(&route.to_path()), Ok(route));
    }
    assert!(matches!(
        router.resolve("/books/hobbit/chapters"),
        Err(NavigationError::UnregisteredRoute(_))
    ));
}

/// Quiz flow: start button, results route, leave confirmation
#[test]
fn test_quiz_flow() {
    let mut nav = NavigationState::new();
    nav.push(Route::BookDetail {
        book_id: "hobbit".to_string(),
    });

    let mut press = MockPressDelegate::new();
    press.expect_on_press().times(1).return_const(());
    let start = Button::new("Start quiz");
    assert!(start.press(&mut press));

    let questions = sample::quiz_questions("hobbit");
    nav.push(Route::Quiz {
        book_id: "hobbit".to_string(),
    });
    nav.replace(Route::QuizResults {
        book_id: "hobbit".to_string(),
        score: 2,
        total: questions.len() as u32,
    });
    assert_eq!(nav.current_stack().depth(), 3);

    let mut presenter = MockAlertPresenter::new();
    presenter
        .expect_present()
        .withf(|alert| {
            alert.actions.first().map(|a| a.style) == Some(AlertStyle::Cancel)
                && alert.action("leave").is_some()
        })
        .times(1)
        .return_const(());
    presenter.present(
        Alert::new("Leave quiz?")
            .with_action(AlertAction::new("Stay", AlertStyle::Cancel, "stay"))
            .with_action(AlertAction::new("Leave", AlertStyle::Destructive, "leave")),
    );

    assert!(nav.back());
    assert_eq!(
        nav.current_route(),
        &Route::BookDetail {
            book_id: "hobbit".to_string()
        }
    );
}

/// Achievement cards are pressable only where the screen makes them so
#[test]
fn test_achievement_cards() {
    let mut press = MockPressDelegate::new();
    press.expect_on_press().times(2).return_const(());

    for achievement in sample::achievements() {
        let card = if achievement.unlocked {
            Card::new().pressable(achievement.title.clone())
        } else {
            Card::new()
        };
        assert_eq!(card.press(&mut press), achievement.unlocked);
    }
}

/// The scan overlay animates while progress runs
#[test]
fn test_scan_overlay_frames() {
    let overlay = Loading::new().with_message("Scanning cover...").overlay();
    let first = overlay.frame_at(Duration::from_millis(100));
    let later = overlay.frame_at(Duration::from_millis(600));
    assert_ne!(first, later);
    assert!(matches!(first, LoadingFrame::Spinner { .. }));
    assert_eq!(
        overlay.accessibility_node().label.as_deref(),
        Some("Scanning cover...")
    );
}
