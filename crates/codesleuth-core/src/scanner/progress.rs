/// Scan progress reporting: messages sent from the walker thread to the
/// consumer via a crossbeam channel, and the drain-side wrapper that caps
/// how many are taken per tick.
use std::path::PathBuf;

use crossbeam_channel::{Receiver, Sender, TryRecvError};

use crate::model::{FileStats, ScanSummary};

/// Default cap on messages drained per consumer tick.
///
/// The cap throttles rendering, not production: the walker pushes into an
/// unbounded channel and never blocks, while a consumer ticking every 30 ms
/// prints at most this many status lines per refresh. Anything beyond the
/// cap stays queued for the next tick, so nothing is lost on a fast scan.
pub const DEFAULT_DRAIN_BATCH: usize = 10;

/// Messages streamed from the walker thread to the consumer.
///
/// Exactly one terminal message (`Complete` or `Cancelled`) is sent per
/// scan, always last. The terminal message is the completion signal; an
/// empty queue only means the consumer caught up.
#[derive(Debug)]
pub enum ScanMessage {
    /// A file was classified and counted.
    Counted(FileStats),
    /// A directory could not be listed; its subtree was skipped.
    Warning { path: PathBuf, message: String },
    /// The walk covered the whole tree. Carries the final totals.
    Complete(ScanSummary),
    /// The walk stopped at a cancellation point. Carries the partial totals.
    Cancelled(ScanSummary),
}

impl ScanMessage {
    /// True for the end-of-scan messages.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete(_) | Self::Cancelled(_))
    }

    /// The summary carried by a terminal message.
    pub fn summary(&self) -> Option<ScanSummary> {
        match self {
            Self::Complete(summary) | Self::Cancelled(summary) => Some(*summary),
            _ => None,
        }
    }
}

/// Create the channel connecting a walker thread to its consumer.
///
/// Unbounded on purpose: the producer must never stall behind a slow
/// consumer (the drain cap is a render throttle, not back-pressure), and
/// queue growth is bounded in practice by the number of files in the tree.
pub(crate) fn progress_channel() -> (ProgressSender, ProgressReceiver) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (ProgressSender { tx }, ProgressReceiver { rx })
}

/// Producer side, owned by the walker thread.
pub(crate) struct ProgressSender {
    tx: Sender<ScanMessage>,
}

impl ProgressSender {
    /// Queue a message. A send failure means the consumer dropped the
    /// receiver and stopped caring; the walker just keeps going.
    pub(crate) fn push(&self, message: ScanMessage) {
        let _ = self.tx.send(message);
    }
}

/// Consumer side, exposed on the scan handle.
pub struct ProgressReceiver {
    rx: Receiver<ScanMessage>,
}

impl ProgressReceiver {
    /// Take up to `max` pending messages without blocking, in FIFO order.
    ///
    /// Returns an empty vec when nothing is pending. The producer having
    /// exited only shortens the result; it is not an error.
    pub fn drain_up_to(&self, max: usize) -> Vec<ScanMessage> {
        let mut drained = Vec::with_capacity(max.min(64));
        while drained.len() < max {
            match self.rx.try_recv() {
                Ok(message) => drained.push(message),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        drained
    }

    /// Number of messages currently queued.
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    /// True when nothing is queued right now.
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}
