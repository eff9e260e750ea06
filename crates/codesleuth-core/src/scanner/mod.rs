/// Scanner module: orchestrates the background walk and its lifecycle.
///
/// A scan runs on one named producer thread that walks the tree, folds
/// per-file counts into the shared [`aggregate::Totals`], and streams
/// [`progress::ScanMessage`]s through an unbounded channel. Consumers drain
/// at their own cadence and learn about the end of a scan from the single
/// terminal message, never from queue emptiness.
pub mod aggregate;
pub mod progress;

mod walk;

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use std::thread;

use tracing::info;

use crate::classify::ClassifyRules;
use crate::error::ScanError;
use crate::model::ScanSummary;
use aggregate::Totals;
use progress::{progress_channel, ProgressReceiver, ScanMessage};
use walk::{WalkContext, WalkStatus};

/// Lifecycle of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ScanState {
    /// No scan has been started yet.
    Idle = 0,
    /// The walker thread is working.
    Running = 1,
    /// The walk covered the whole tree; the summary message is queued.
    Completed = 2,
    /// The walk stopped at a cancellation point; the partial summary
    /// message is queued.
    Cancelled = 3,
}

impl ScanState {
    /// True once the scan can no longer produce messages.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// Atomic cell holding a [`ScanState`].
struct StateCell(AtomicU8);

impl StateCell {
    fn new(state: ScanState) -> Self {
        Self(AtomicU8::new(state as u8))
    }

    fn load(&self) -> ScanState {
        // Acquire pairs with the Release store after the terminal push, so
        // an observed terminal state implies the summary is drainable.
        match self.0.load(Ordering::Acquire) {
            0 => ScanState::Idle,
            1 => ScanState::Running,
            2 => ScanState::Completed,
            _ => ScanState::Cancelled,
        }
    }

    fn store(&self, state: ScanState) {
        self.0.store(state as u8, Ordering::Release);
    }
}

/// Handle to a running or finished scan.
///
/// Dropping the handle detaches the walker thread, which exits on its own
/// once the walk ends; nothing blocks on an unconsumed channel.
pub struct ScanHandle {
    /// Receiver side of the progress stream.
    pub messages: ProgressReceiver,
    totals: Arc<Totals>,
    cancel_flag: Arc<AtomicBool>,
    state: Arc<StateCell>,
    thread: Option<thread::JoinHandle<()>>,
}

impl ScanHandle {
    /// Request the scan to stop at the next entry boundary.
    ///
    /// Returns `false` when the scan is no longer running, in which case
    /// the request changes nothing.
    pub fn cancel(&self) -> bool {
        let was_running = self.state.load() == ScanState::Running;
        self.cancel_flag.store(true, Ordering::Relaxed);
        was_running
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }

    /// Current lifecycle state. Never [`ScanState::Idle`]: a handle exists
    /// only for a started scan.
    pub fn state(&self) -> ScanState {
        self.state.load()
    }

    /// Consistent point-in-time totals, valid mid-scan and after the end.
    pub fn snapshot(&self) -> ScanSummary {
        self.totals.snapshot()
    }

    /// Block until the walker thread exits.
    pub fn join(mut self) {
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Start a scan of `root` on a background thread.
///
/// The root is validated up front so a bad path fails this call instead of
/// surfacing as a broken scan; past this point the walk itself never
/// returns an error, only warnings and degraded counts.
pub fn start_scan(root: PathBuf, rules: ClassifyRules) -> Result<ScanHandle, ScanError> {
    let meta = std::fs::metadata(&root).map_err(|err| ScanError::io(root.clone(), err))?;
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory { path: root });
    }

    let (messages_tx, messages_rx) = progress_channel();
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let state = Arc::new(StateCell::new(ScanState::Running));
    let totals = Arc::new(Totals::new());

    let thread = {
        let cancel_flag = cancel_flag.clone();
        let state = state.clone();
        let totals = totals.clone();
        thread::Builder::new()
            .name("codesleuth-scanner".into())
            .spawn(move || {
                info!("starting scan of {}", root.display());

                let ctx = WalkContext {
                    rules: &rules,
                    totals: &totals,
                    messages: &messages_tx,
                    cancel: &cancel_flag,
                };
                let status = walk::visit_dir(&root, &ctx);
                let summary = totals.finish();

                // Terminal message first, state flip second: an observer
                // that sees a terminal state can always drain the summary.
                match status {
                    WalkStatus::Completed => {
                        info!(
                            "scan complete: {} files, {} lines in {:?}",
                            summary.files, summary.lines, summary.elapsed
                        );
                        messages_tx.push(ScanMessage::Complete(summary));
                        state.store(ScanState::Completed);
                    }
                    WalkStatus::Cancelled => {
                        info!("scan cancelled after {} files", summary.files);
                        messages_tx.push(ScanMessage::Cancelled(summary));
                        state.store(ScanState::Cancelled);
                    }
                }
            })
            .expect("failed to spawn scanner thread")
    };

    Ok(ScanHandle {
        messages: messages_rx,
        totals,
        cancel_flag,
        state,
        thread: Some(thread),
    })
}

/// One-scan-at-a-time front door.
///
/// Wraps [`start_scan`] with the lifecycle checks a single-view front end
/// wants: starting while a scan runs is refused, and all scan-scoped state
/// is replaced wholesale on the next start.
pub struct ScanController {
    rules: ClassifyRules,
    current: Option<ScanHandle>,
}

impl ScanController {
    pub fn new(rules: ClassifyRules) -> Self {
        Self {
            rules,
            current: None,
        }
    }

    /// Current state: [`ScanState::Idle`] before the first start, otherwise
    /// whatever the most recently started scan reports.
    pub fn state(&self) -> ScanState {
        self.current
            .as_ref()
            .map_or(ScanState::Idle, ScanHandle::state)
    }

    /// Start a new scan of `root`.
    ///
    /// Fails with [`ScanError::ScanInProgress`] while a scan is running and
    /// with a root-validation error if `root` is unusable; either way the
    /// previous scan's state is left untouched.
    pub fn start(&mut self, root: impl Into<PathBuf>) -> Result<(), ScanError> {
        if self.state() == ScanState::Running {
            return Err(ScanError::ScanInProgress);
        }
        let handle = start_scan(root.into(), self.rules.clone())?;
        if let Some(previous) = self.current.replace(handle) {
            // Already terminal, so this join is immediate.
            previous.join();
        }
        Ok(())
    }

    /// Request cancellation of the running scan. Returns `false` when no
    /// scan is running.
    pub fn cancel(&self) -> bool {
        match &self.current {
            Some(handle) => handle.cancel(),
            None => false,
        }
    }

    /// Drain at most `max` pending messages from the current scan.
    pub fn drain_up_to(&self, max: usize) -> Vec<ScanMessage> {
        self.current
            .as_ref()
            .map_or_else(Vec::new, |handle| handle.messages.drain_up_to(max))
    }

    /// Totals snapshot of the current scan, if one was ever started.
    pub fn snapshot(&self) -> Option<ScanSummary> {
        self.current.as_ref().map(ScanHandle::snapshot)
    }
}

impl Default for ScanController {
    fn default() -> Self {
        Self::new(ClassifyRules::cpp())
    }
}
