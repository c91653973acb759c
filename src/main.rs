//! AR Book Explorer demo
//!
//! Drives the UI primitives headlessly through one pass of the prototype's
//! main flow: scan a cover, open the AR view, look at the book in a bottom
//! sheet and search the catalogue. Every state change is logged.
//!
//! Usage: `ar-book-explorer [config.json]`

use std::time::Duration;

use anyhow::{Context, Result};
use app_core::sample;
use app_core::{AppConfig, SimulatedTask, TaskEvent};
use app_ui::components::{
    Button, DismissGesture, InputDelegate, InputEdit, InputField, InputIcon, InputProps, Loading,
    LoadingVariant, Modal, ModalDelegate, ModalPhase, ModalProps, ModalVariant, PressDelegate,
    Viewport,
};
use app_ui::{get_theme, Alert, AlertAction, AlertPresenter, AlertStyle, NavigationState, NavigationTab, Route, Router};

/// One display frame at 60 Hz
const FRAME: Duration = Duration::from_millis(16);

/// Phone-sized viewport for layout output
const VIEWPORT: Viewport = Viewport {
    width: 390.0,
    height: 844.0,
};

/// Screen-level delegate that records what the components report
#[derive(Default)]
struct ScreenDelegate {
    close_requested: bool,
    query: String,
    presses: u32,
}

impl ModalDelegate for ScreenDelegate {
    fn on_close(&mut self) {
        tracing::info!("modal asked to close");
        self.close_requested = true;
    }
}

impl InputDelegate for ScreenDelegate {
    fn on_change_text(&mut self, text: &str) {
        tracing::info!(text, "search changed");
        self.query = text.to_string();
    }

    fn on_focus(&mut self) {
        tracing::debug!("search focused");
    }

    fn on_blur(&mut self) {
        tracing::debug!("search blurred");
    }

    fn on_right_icon_press(&mut self) {
        tracing::info!("search cleared");
        self.query.clear();
    }
}

impl PressDelegate for ScreenDelegate {
    fn on_press(&mut self) {
        self.presses += 1;
    }
}

/// Logs alerts instead of showing platform dialogs
struct LogPresenter;

impl AlertPresenter for LogPresenter {
    fn present(&mut self, alert: Alert) {
        let actions: Vec<_> = alert.actions.iter().map(|a| a.label.as_str()).collect();
        tracing::info!(title = %alert.title, ?actions, "alert");
    }
}

/// Tick a modal at frame rate until it settles
fn run_until_settled(modal: &mut Modal) -> ModalPhase {
    while matches!(modal.phase(), ModalPhase::Opening | ModalPhase::Closing) {
        modal.tick(FRAME);
    }
    modal.phase()
}

async fn run_scan(config: &AppConfig, nav: &mut NavigationState) -> Result<String> {
    nav.switch_tab(NavigationTab::Scan);

    let indicator = Loading::new()
        .with_variant(LoadingVariant::Dots)
        .with_message("Scanning cover...")
        .overlay();
    let started = tokio::time::Instant::now();

    let mut scan = SimulatedTask::spawn("scan", config.simulation.scan, ())?;
    while let Some(event) = scan.next_event().await {
        if let TaskEvent::Progress(pct) = event {
            let frame = indicator.frame_at(started.elapsed());
            tracing::info!(pct, ?frame, "scan progress");
        }
    }

    let recognition = SimulatedTask::spawn(
        "recognition",
        config.simulation.recognition,
        "hobbit".to_string(),
    )?;
    let book_id = recognition.wait().await?;

    nav.push(Route::ArCamera {
        book_id: book_id.clone(),
    });
    Ok(book_id)
}

fn show_book_sheet(config: &AppConfig, book_id: &str, delegate: &mut ScreenDelegate) -> Result<()> {
    let theme = get_theme(config.theme);
    let book = sample::book_by_id(book_id).with_context(|| format!("unknown book: {book_id}"))?;

    let mut sheet = Modal::new(
        ModalProps::new()
            .with_variant(ModalVariant::BottomSheet)
            .with_title(book.title.clone())
            .with_subtitle(book.author.clone()),
    )
    .with_timing(config.modal_timing());

    sheet.set_visible(true);
    tracing::info!(phase = ?run_until_settled(&mut sheet), "sheet opened");

    let layout = sheet.layout(VIEWPORT);
    tracing::info!(layout = %serde_json::to_string(&layout)?, "sheet layout");
    tracing::debug!(styles = %serde_json::to_string(&sheet.computed_styles(&theme))?, "sheet styles");

    let start_quiz = Button::new("Start quiz");
    if start_quiz.press(delegate) {
        tracing::info!(questions = sample::quiz_questions(book_id).len(), "quiz available");
    }

    sheet.dismiss(DismissGesture::Backdrop, delegate);
    if delegate.close_requested {
        sheet.set_visible(false);
        tracing::info!(phase = ?run_until_settled(&mut sheet), "sheet closed");
    }
    Ok(())
}

fn search_catalogue(delegate: &mut ScreenDelegate) {
    let mut search = InputField::new(
        InputProps::new("")
            .with_label("Search books")
            .with_placeholder("Title or author")
            .with_left_icon(InputIcon::decorative("search"))
            .with_right_icon(InputIcon::action("x", "Clear search")),
    );

    search.focus(delegate);
    for ch in ["m", "a", "t"] {
        search.edit(InputEdit::Insert(ch.to_string()), delegate);
        search.set_value(delegate.query.clone());
    }

    let query = delegate.query.to_lowercase();
    let matches: Vec<_> = sample::books()
        .into_iter()
        .filter(|b| b.title.to_lowercase().contains(&query))
        .map(|b| b.title)
        .collect();
    tracing::info!(?matches, "search results");

    search.press_right_icon(delegate);
    search.set_value(delegate.query.clone());
    search.blur(delegate);
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(&path)
            .await
            .with_context(|| format!("failed to load config from {path}"))?,
        None => AppConfig::default(),
    };

    let router = Router::new();
    let mut nav = NavigationState::new();
    let mut delegate = ScreenDelegate::default();

    let book_id = run_scan(&config, &mut nav).await?;
    tracing::info!(path = %nav.current_route().to_path(), "ar camera ready");

    let detail = router.resolve(&format!("/books/{book_id}"))?;
    nav.replace(detail);
    show_book_sheet(&config, &book_id, &mut delegate)?;

    nav.reset_to_tab(NavigationTab::Home);
    search_catalogue(&mut delegate);

    LogPresenter.present(
        Alert::new("Leave AR Book Explorer?")
            .with_action(AlertAction::new("Stay", AlertStyle::Cancel, "stay"))
            .with_action(AlertAction::new("Leave", AlertStyle::Destructive, "leave")),
    );

    tracing::info!(presses = delegate.presses, "demo finished");
    Ok(())
}
