//! Reactive store
//!
//! Each view owns its snapshots and publishes [`StoreEvent`]s on a broadcast
//! channel whenever observable state changes. Front-ends subscribe and re-read
//! the view; derived values are recomputed by the view itself on the
//! recompute triggers (see [`StoreEvent::triggers_recompute`]).
//!
//! # Command lifecycle
//!
//! ```text
//! Idle -> Validating -> Submitting -> Refreshing -> Idle
//!              |             |
//!              v             v
//!            Failed        Failed
//! ```

mod category_view;
mod product_detail;
mod product_view;

pub use category_view::CategoryView;
pub use product_detail::ProductDetailView;
pub use product_view::ProductView;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use shared::Route;
use tokio::sync::broadcast;

/// Buffered events per subscriber before it starts lagging
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Change notification emitted by a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    CategoriesReplaced,
    ProductsReplaced,
    FilterChanged,
    SearchChanged,
    SelectionChanged,
    DraftChanged,
    LoadingChanged(bool),
    ErrorChanged,
    PhaseChanged(CommandPhase),
}

impl StoreEvent {
    /// Whether derived values depend on this change
    pub fn triggers_recompute(&self) -> bool {
        matches!(
            self,
            Self::CategoriesReplaced
                | Self::ProductsReplaced
                | Self::FilterChanged
                | Self::SearchChanged
                | Self::SelectionChanged
        )
    }
}

/// Phase of the command currently (or last) handled by a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Refreshing,
    /// Last command failed; cleared by the next command
    Failed,
}

/// Result of a command handler
///
/// Handlers never return errors: failures are logged, surfaced through the
/// view's error message, and reported here.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum CommandOutcome {
    /// Write confirmed and collection refreshed
    Completed,
    /// Write confirmed; the front-end should navigate
    NavigateTo(Route),
    /// Nothing to do (no confirmation, no selection)
    Cancelled,
    /// Client-side validation failed; no request was issued
    Rejected(String),
    /// The gateway rejected or failed the request
    Failed(String),
}

impl CommandOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed | Self::NavigateTo(_))
    }
}

/// Broadcast side of a view's change notifications
#[derive(Debug, Clone)]
pub struct StoreNotifier {
    tx: broadcast::Sender<StoreEvent>,
}

impl StoreNotifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }

    pub fn emit(&self, event: StoreEvent) {
        // No subscribers is fine
        let _ = self.tx.send(event);
    }
}

impl Default for StoreNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Loading flag shared by nested operations
///
/// The flag is raised while at least one [`LoadingGuard`] is alive, so a
/// command that refreshes its collection keeps it raised until the command
/// itself finishes. Guards clear on drop, which covers early returns,
/// errors, and futures abandoned mid-flight.
#[derive(Debug, Clone)]
pub struct LoadingFlag {
    depth: Arc<AtomicUsize>,
    notifier: StoreNotifier,
}

impl LoadingFlag {
    pub fn new(notifier: StoreNotifier) -> Self {
        Self {
            depth: Arc::new(AtomicUsize::new(0)),
            notifier,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.depth.load(Ordering::SeqCst) > 0
    }

    /// Raise the flag until the returned guard drops
    pub fn enter(&self) -> LoadingGuard {
        if self.depth.fetch_add(1, Ordering::SeqCst) == 0 {
            self.notifier.emit(StoreEvent::LoadingChanged(true));
        }
        LoadingGuard { flag: self.clone() }
    }
}

/// RAII guard returned by [`LoadingFlag::enter`]
#[derive(Debug)]
#[must_use = "the loading flag drops as soon as the guard does"]
pub struct LoadingGuard {
    flag: LoadingFlag,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if self.flag.depth.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.flag.notifier.emit(StoreEvent::LoadingChanged(false));
        }
    }
}

/// Status shared by every view: loading, messages, command phase
#[derive(Debug)]
pub struct ViewStatus {
    notifier: StoreNotifier,
    loading: LoadingFlag,
    error_message: Option<String>,
    notice: Option<String>,
    phase: CommandPhase,
}

impl ViewStatus {
    pub fn new() -> Self {
        let notifier = StoreNotifier::new();
        Self {
            loading: LoadingFlag::new(notifier.clone()),
            notifier,
            error_message: None,
            notice: None,
            phase: CommandPhase::Idle,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.notifier.subscribe()
    }

    pub fn emit(&self, event: StoreEvent) {
        self.notifier.emit(event);
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn enter_loading(&self) -> LoadingGuard {
        self.loading.enter()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn phase(&self) -> CommandPhase {
        self.phase
    }

    /// Start of an operation: previous messages no longer apply
    pub(crate) fn clear_messages(&mut self) {
        self.notice = None;
        if self.error_message.take().is_some() {
            self.emit(StoreEvent::ErrorChanged);
        }
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
        self.emit(StoreEvent::ErrorChanged);
    }

    pub(crate) fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub(crate) fn set_phase(&mut self, phase: CommandPhase) {
        if self.phase != phase {
            self.phase = phase;
            self.emit(StoreEvent::PhaseChanged(phase));
        }
    }

    /// Record a failed command and build its outcome
    pub(crate) fn fail(&mut self, message: impl Into<String>) -> CommandOutcome {
        let message = message.into();
        self.set_error(message.clone());
        self.set_phase(CommandPhase::Failed);
        CommandOutcome::Failed(message)
    }

    /// Record a client-side rejection and build its outcome
    pub(crate) fn reject(&mut self, err: &crate::ClientError) -> CommandOutcome {
        let message = match err {
            crate::ClientError::Validation(msg) => msg.clone(),
            other => other.to_string(),
        };
        tracing::warn!(%message, "Command rejected by validation");
        self.set_error(message.clone());
        self.set_phase(CommandPhase::Failed);
        CommandOutcome::Rejected(message)
    }
}

impl Default for ViewStatus {
    fn default() -> Self {
        Self::new()
    }
}
