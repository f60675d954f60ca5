//! Background dispatch worker for the notification center.
//!
//! Spawns a thread with its own tokio runtime that owns the listener table
//! and processes every bus command in order. Because subscription changes and
//! notification delivery share the single command queue, an unsubscribe can
//! never race an in-flight delivery to the same listener.

use std::collections::HashMap;
use std::thread::{self, JoinHandle};

use tokio::sync::{mpsc, oneshot};

use crate::bus::{ListenerId, NotificationListener};
use crate::notification::PlaybackNotification;

/// Commands sent from bus handles to the dispatch worker.
pub(crate) enum Command {
    /// Register a listener under a pre-allocated id
    Subscribe {
        id: ListenerId,
        listener: Box<dyn NotificationListener>,
    },
    /// Remove a listener
    Unsubscribe { id: ListenerId },
    /// Deliver a notification to every registered listener
    Post(PlaybackNotification),
    /// Acknowledge once all earlier commands have been processed
    Flush(oneshot::Sender<()>),
    /// Shutdown the worker
    Shutdown,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Subscribe { id, .. } => f.debug_struct("Subscribe").field("id", id).finish(),
            Self::Unsubscribe { id } => f.debug_struct("Unsubscribe").field("id", id).finish(),
            Self::Post(n) => f.debug_tuple("Post").field(&n.kind).finish(),
            Self::Flush(_) => f.write_str("Flush"),
            Self::Shutdown => f.write_str("Shutdown"),
        }
    }
}

/// Spawns the background dispatch worker thread.
///
/// The worker owns its own tokio runtime and the listener table. It exits
/// when a `Shutdown` command arrives or every command sender is dropped.
pub(crate) fn spawn_dispatch_worker(
    command_rx: mpsc::UnboundedReceiver<Command>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                tracing::error!("Failed to create tokio runtime for dispatch worker: {}", e);
                return;
            }
        };

        rt.block_on(async {
            run_dispatch_loop(command_rx).await;
        });
    })
}

/// Main dispatch loop running inside the tokio runtime.
async fn run_dispatch_loop(mut command_rx: mpsc::UnboundedReceiver<Command>) {
    let mut listeners: HashMap<ListenerId, Box<dyn NotificationListener>> = HashMap::new();

    tracing::info!("Notification dispatch worker started");

    while let Some(cmd) = command_rx.recv().await {
        match cmd {
            Command::Subscribe { id, listener } => {
                tracing::debug!("Worker: registering {}", id);
                listeners.insert(id, listener);
            }
            Command::Unsubscribe { id } => {
                if listeners.remove(&id).is_some() {
                    tracing::debug!("Worker: removed {}", id);
                } else {
                    tracing::debug!("Worker: {} not registered, ignoring unsubscribe", id);
                }
            }
            Command::Post(notification) => {
                tracing::trace!(
                    "Worker: delivering {} notification to {} listener(s)",
                    notification.kind,
                    listeners.len()
                );
                for listener in listeners.values() {
                    listener.on_notification(&notification);
                }
            }
            Command::Flush(ack) => {
                // Every earlier command has been processed by now
                if ack.send(()).is_err() {
                    tracing::debug!("Worker: flush caller went away before acknowledgement");
                }
            }
            Command::Shutdown => {
                tracing::info!("Dispatch worker received shutdown command");
                break;
            }
        }
    }

    tracing::info!(
        "Notification dispatch worker shut down, {} listener(s) dropped",
        listeners.len()
    );
}
