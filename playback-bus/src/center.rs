//! Process-wide notification center backed by the dispatch worker.

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::JoinHandle;

use tokio::sync::{mpsc, oneshot};

use crate::bus::{ListenerId, NotificationBus, NotificationListener};
use crate::dispatch::{spawn_dispatch_worker, Command};
use crate::error::{BusError, BusResult};
use crate::notification::PlaybackNotification;

/// The default [`NotificationBus`] implementation.
///
/// All operations are synchronous from the caller's point of view: they
/// enqueue a command for the background dispatch worker and return. The
/// worker processes commands strictly in order on a single thread, which
/// gives two guarantees consumers rely on:
///
/// - listeners see notifications in posting order, and
/// - once [`unsubscribe`](NotificationBus::unsubscribe) has been processed,
///   the listener is never invoked again, even for posts that were already
///   queued.
///
/// Use [`flush`](NotificationBus::flush) as a barrier when a caller needs to
/// observe the effects of earlier commands.
///
/// # Example
///
/// ```rust,ignore
/// use playback_bus::{MediaItem, NotificationBus, NotificationCenter,
///                    NotificationKind, PlaybackNotification};
///
/// let bus = NotificationCenter::new();
/// let id = bus.subscribe(Box::new(my_listener))?;
///
/// let item = MediaItem::parse("https://example.com/a.mp4")?;
/// bus.post(PlaybackNotification::new(NotificationKind::PlayedToEnd, item))?;
/// bus.flush()?; // my_listener has now seen the notification
///
/// bus.unsubscribe(id)?;
/// ```
pub struct NotificationCenter {
    /// Send commands to the background worker
    command_tx: mpsc::UnboundedSender<Command>,

    /// Atomic counter for allocating listener ids
    next_id: AtomicU64,

    /// Background worker handle (kept alive)
    _worker: JoinHandle<()>,
}

impl NotificationCenter {
    /// Create a new notification center with its own dispatch worker.
    pub fn new() -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let worker = spawn_dispatch_worker(command_rx);

        Self {
            command_tx,
            next_id: AtomicU64::new(1),
            _worker: worker,
        }
    }

    fn send(&self, cmd: Command) -> BusResult<()> {
        self.command_tx
            .send(cmd)
            .map_err(|_| BusError::WorkerDisconnected)
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationBus for NotificationCenter {
    fn subscribe(&self, listener: Box<dyn NotificationListener>) -> BusResult<ListenerId> {
        let id = ListenerId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.send(Command::Subscribe { id, listener })?;
        tracing::debug!("Subscribed {}", id);
        Ok(id)
    }

    fn unsubscribe(&self, id: ListenerId) -> BusResult<()> {
        self.send(Command::Unsubscribe { id })?;
        tracing::debug!("Requested unsubscribe for {}", id);
        Ok(())
    }

    fn post(&self, notification: PlaybackNotification) -> BusResult<()> {
        self.send(Command::Post(notification))
    }

    fn flush(&self) -> BusResult<()> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.send(Command::Flush(ack_tx))?;
        ack_rx.blocking_recv().map_err(|_| BusError::FlushFailed)
    }
}

impl Drop for NotificationCenter {
    fn drop(&mut self) {
        // Worker also exits when the last sender drops; this just makes
        // shutdown prompt.
        let _ = self.command_tx.send(Command::Shutdown);
    }
}
