//! Navigation for AR Book Explorer
//!
//! This module provides a type-safe navigation framework with:
//! - Route definitions with path round-tripping
//! - A navigation stack per bottom tab
//! - A pattern router that resolves paths back to routes

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Errors
// =============================================================================

/// Navigation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// No registered pattern matches the path
    #[error("no route registered for path: {0}")]
    UnregisteredRoute(String),

    /// A pattern matched but a required parameter was absent or malformed
    #[error("route {route} is missing parameter: {param}")]
    MissingParameter {
        /// Pattern that matched
        route: String,
        /// Parameter name
        param: String,
    },
}

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, NavigationError>;

// =============================================================================
// Route Parameters
// =============================================================================

/// Parameters for a route
pub type RouteParams = HashMap<String, String>;

// =============================================================================
// Route Definitions
// =============================================================================

/// All screens in the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "route", content = "params", rename_all = "camelCase")]
pub enum Route {
    /// Home dashboard
    #[default]
    Home,
    /// Book cover scanner
    Scan,
    /// AR camera overlay for a recognized book
    ArCamera {
        /// Recognized book
        #[serde(rename = "bookId")]
        book_id: String,
    },
    /// Book details
    BookDetail {
        /// Book identifier
        #[serde(rename = "bookId")]
        book_id: String,
    },
    /// Quiz for a book
    Quiz {
        /// Book identifier
        #[serde(rename = "bookId")]
        book_id: String,
    },
    /// Quiz results
    QuizResults {
        /// Book identifier
        #[serde(rename = "bookId")]
        book_id: String,
        /// Correct answers
        score: u32,
        /// Number of questions
        total: u32,
    },
    /// Achievements gallery
    Achievements,
    /// Reading progress
    Progress,
    /// User profile
    Profile,
    /// App settings
    Settings,
}

impl Route {
    /// Get the URL path for this route
    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Scan => "/scan".to_string(),
            Route::ArCamera { book_id } => format!("/scan/{}/ar", urlencoding::encode(book_id)),
            Route::BookDetail { book_id } => format!("/books/{}", urlencoding::encode(book_id)),
            Route::Quiz { book_id } => format!("/books/{}/quiz", urlencoding::encode(book_id)),
            Route::QuizResults {
                book_id,
                score,
                total,
            } => format!(
                "/books/{}/quiz/results?score={}&total={}",
                urlencoding::encode(book_id),
                score,
                total
            ),
            Route::Achievements => "/achievements".to_string(),
            Route::Progress => "/progress".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Settings => "/settings".to_string(),
        }
    }

    /// Whether this route is presented full-screen over the tab bar
    pub fn hides_tab_bar(&self) -> bool {
        matches!(
            self,
            Route::ArCamera { .. } | Route::Quiz { .. } | Route::QuizResults { .. }
        )
    }

    /// Get a display title for this route
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Scan => "Scan a Book",
            Route::ArCamera { .. } => "AR View",
            Route::BookDetail { .. } => "Book",
            Route::Quiz { .. } => "Quiz",
            Route::QuizResults { .. } => "Results",
            Route::Achievements => "Achievements",
            Route::Progress => "Progress",
            Route::Profile => "Profile",
            Route::Settings => "Settings",
        }
    }
}

// =============================================================================
// Navigation Tabs
// =============================================================================

/// Bottom tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTab {
    /// Home tab
    #[default]
    Home,
    /// Scan tab
    Scan,
    /// Progress tab
    Progress,
    /// Profile tab
    Profile,
}

impl NavigationTab {
    /// Get the root route for this tab
    pub fn root_route(&self) -> Route {
        match self {
            NavigationTab::Home => Route::Home,
            NavigationTab::Scan => Route::Scan,
            NavigationTab::Progress => Route::Progress,
            NavigationTab::Profile => Route::Profile,
        }
    }

    /// Get icon name for this tab
    pub fn icon(&self) -> &'static str {
        match self {
            NavigationTab::Home => "home",
            NavigationTab::Scan => "camera",
            NavigationTab::Progress => "bar-chart",
            NavigationTab::Profile => "user",
        }
    }

    /// Get label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            NavigationTab::Home => "Home",
            NavigationTab::Scan => "Scan",
            NavigationTab::Progress => "Progress",
            NavigationTab::Profile => "Profile",
        }
    }

    /// Get all tabs in order
    pub fn all() -> [NavigationTab; 4] {
        [
            NavigationTab::Home,
            NavigationTab::Scan,
            NavigationTab::Progress,
            NavigationTab::Profile,
        ]
    }

    fn index(&self) -> usize {
        match self {
            NavigationTab::Home => 0,
            NavigationTab::Scan => 1,
            NavigationTab::Progress => 2,
            NavigationTab::Profile => 3,
        }
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Navigation stack for a tab. The root entry is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    root: StackEntry,
    /// Entries above the root (bottom to top)
    entries: Vec<StackEntry>,
}

impl NavigationStack {
    /// Create a new navigation stack with a root route
    pub fn new(root: Route) -> Self {
        Self {
            root: StackEntry::new(root),
            entries: Vec::new(),
        }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        self.entries.push(StackEntry::new(route));
    }

    /// Pop the top route (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        self.entries.pop().is_some()
    }

    /// Pop to root
    pub fn pop_to_root(&mut self) {
        self.entries.clear();
    }

    /// Replace the top route
    pub fn replace(&mut self, route: Route) {
        match self.entries.last_mut() {
            Some(last) => *last = StackEntry::new(route),
            None => self.root = StackEntry::new(route),
        }
    }

    /// Get the current stack entry
    pub fn current_entry(&self) -> &StackEntry {
        self.entries.last().unwrap_or(&self.root)
    }

    /// Get the current (top) route
    pub fn current(&self) -> &Route {
        &self.current_entry().route
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len() + 1
    }

    /// Routes from root to top
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        std::iter::once(&self.root)
            .chain(self.entries.iter())
            .map(|entry| &entry.route)
    }

    /// Reset to a new root
    pub fn reset(&mut self, route: Route) {
        self.root = StackEntry::new(route);
        self.entries.clear();
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Complete navigation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    /// Current active tab
    pub active_tab: NavigationTab,
    /// Stacks for each tab, in [`NavigationTab::all`] order
    tab_stacks: [NavigationStack; 4],
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active_tab: NavigationTab::Home,
            tab_stacks: NavigationTab::all().map(|tab| NavigationStack::new(tab.root_route())),
        }
    }
}

impl NavigationState {
    /// Create a new navigation state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the stack for a tab
    pub fn stack(&self, tab: NavigationTab) -> &NavigationStack {
        &self.tab_stacks[tab.index()]
    }

    /// Get the current stack for the active tab
    pub fn current_stack(&self) -> &NavigationStack {
        self.stack(self.active_tab)
    }

    fn current_stack_mut(&mut self) -> &mut NavigationStack {
        &mut self.tab_stacks[self.active_tab.index()]
    }

    /// Get the current route
    pub fn current_route(&self) -> &Route {
        self.current_stack().current()
    }

    /// Navigate to a route
    pub fn push(&mut self, route: Route) {
        tracing::debug!(path = %route.to_path(), tab = ?self.active_tab, "navigate");
        self.current_stack_mut().push(route);
    }

    /// Go back
    pub fn back(&mut self) -> bool {
        let popped = self.current_stack_mut().pop();
        if popped {
            tracing::debug!(path = %self.current_route().to_path(), "navigate back");
        }
        popped
    }

    /// Replace the current route without growing the stack
    pub fn replace(&mut self, route: Route) {
        tracing::debug!(path = %route.to_path(), "navigate replace");
        self.current_stack_mut().replace(route);
    }

    /// Make `route` the only entry of the active tab
    pub fn reset(&mut self, route: Route) {
        tracing::debug!(path = %route.to_path(), "navigate reset");
        self.current_stack_mut().reset(route);
    }

    /// Switch to a tab, keeping each tab's stack
    pub fn switch_tab(&mut self, tab: NavigationTab) {
        if self.active_tab != tab {
            tracing::debug!(from = ?self.active_tab, to = ?tab, "switch tab");
            self.active_tab = tab;
        }
    }

    /// Switch to a tab and pop it to its root
    pub fn reset_to_tab(&mut self, tab: NavigationTab) {
        self.tab_stacks[tab.index()].pop_to_root();
        self.active_tab = tab;
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.current_stack().can_go_back()
    }

    /// Whether the bottom tab bar is visible
    pub fn tab_bar_visible(&self) -> bool {
        !self.current_route().hides_tab_bar()
    }
}

// =============================================================================
// Router
// =============================================================================

type RouteBuilder = fn(&str, &RouteParams) -> Result<Route>;

/// Route pattern for matching
struct RoutePattern {
    /// Original pattern text
    pattern: &'static str,
    /// Pattern segments
    segments: Vec<PatternSegment>,
    /// Route builder
    builder: RouteBuilder,
}

/// Segment type in a pattern
#[derive(Debug, Clone)]
enum PatternSegment {
    /// Literal segment
    Literal(String),
    /// Parameter segment
    Param(String),
}

/// URL Router for parsing paths to routes
pub struct Router {
    /// Route patterns
    patterns: Vec<RoutePattern>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

fn param(pattern: &str, params: &RouteParams, name: &str) -> Result<String> {
    params
        .get(name)
        .cloned()
        .ok_or_else(|| NavigationError::MissingParameter {
            route: pattern.to_string(),
            param: name.to_string(),
        })
}

fn numeric_param(pattern: &str, params: &RouteParams, name: &str) -> Result<u32> {
    param(pattern, params, name)?
        .parse()
        .map_err(|_| NavigationError::MissingParameter {
            route: pattern.to_string(),
            param: name.to_string(),
        })
}

impl Router {
    /// Create a new router with all routes
    pub fn new() -> Self {
        let mut router = Self {
            patterns: Vec::new(),
        };

        router.add_route("/", |_, _| Ok(Route::Home));
        router.add_route("/scan", |_, _| Ok(Route::Scan));
        router.add_route("/scan/:bookId/ar", |p, params| {
            Ok(Route::ArCamera {
                book_id: param(p, params, "bookId")?,
            })
        });
        router.add_route("/books/:bookId", |p, params| {
            Ok(Route::BookDetail {
                book_id: param(p, params, "bookId")?,
            })
        });
        router.add_route("/books/:bookId/quiz", |p, params| {
            Ok(Route::Quiz {
                book_id: param(p, params, "bookId")?,
            })
        });
        router.add_route("/books/:bookId/quiz/results", |p, params| {
            Ok(Route::QuizResults {
                book_id: param(p, params, "bookId")?,
                score: numeric_param(p, params, "score")?,
                total: numeric_param(p, params, "total")?,
            })
        });
        router.add_route("/achievements", |_, _| Ok(Route::Achievements));
        router.add_route("/progress", |_, _| Ok(Route::Progress));
        router.add_route("/profile", |_, _| Ok(Route::Profile));
        router.add_route("/settings", |_, _| Ok(Route::Settings));

        router
    }

    /// Add a route pattern
    fn add_route(&mut self, pattern: &'static str, builder: RouteBuilder) {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                if let Some(param) = s.strip_prefix(':') {
                    PatternSegment::Param(param.to_string())
                } else {
                    PatternSegment::Literal(s.to_string())
                }
            })
            .collect();

        self.patterns.push(RoutePattern {
            pattern,
            segments,
            builder,
        });
    }

    /// Resolve a path to a route
    pub fn resolve(&self, path: &str) -> Result<Route> {
        let (pathname, query) = match path.split_once('?') {
            Some((pathname, query)) => (pathname, Some(query)),
            None => (path, None),
        };

        let path_segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();

        for pattern in &self.patterns {
            if let Some(params) = match_pattern(&pattern.segments, &path_segments, query) {
                return (pattern.builder)(pattern.pattern, &params);
            }
        }

        tracing::warn!(path, "unregistered route");
        Err(NavigationError::UnregisteredRoute(path.to_string()))
    }
}

/// Match a pattern against path segments
fn match_pattern(
    pattern: &[PatternSegment],
    path: &[&str],
    query: Option<&str>,
) -> Option<RouteParams> {
    if pattern.len() != path.len() {
        return None;
    }

    let mut params = RouteParams::new();

    for (segment, actual) in pattern.iter().zip(path.iter()) {
        match segment {
            PatternSegment::Literal(expected) => {
                if expected != actual {
                    return None;
                }
            }
            PatternSegment::Param(name) => {
                params.insert(name.clone(), urlencoding::decode(actual).ok()?.into_owned());
            }
        }
    }

    parse_query(query, &mut params);

    Some(params)
}

/// Parse query string into params
fn parse_query(query: Option<&str>, params: &mut RouteParams) {
    if let Some(query) = query {
        for pair in query.split('&') {
            if let Some((key, value)) = pair.split_once('=') {
                if let Ok(decoded) = urlencoding::decode(value) {
                    params.insert(key.to_string(), decoded.into_owned());
                }
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
