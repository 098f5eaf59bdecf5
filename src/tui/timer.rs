//! # Background Tasks
//!
//! Deferred and periodic messages for the event loop. Each task posts into the
//! loop's `std::sync::mpsc` channel and is owned through a [`TaskHandle`].
//!
//! Dropping a `TaskHandle` aborts its task, so a timer can never deliver a
//! message after its owner is gone.

use std::sync::mpsc;
use std::time::Duration;

use log::{debug, warn};
use tokio::task::AbortHandle;
use tokio::time::{Instant, interval_at};

/// Owning handle for a spawned task. Aborts the task on drop.
#[derive(Debug)]
pub struct TaskHandle {
    handle: AbortHandle,
}

impl TaskHandle {
    pub fn new(handle: AbortHandle) -> Self {
        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Send `message` once, after `delay`.
pub fn schedule_once<T>(delay: Duration, tx: mpsc::Sender<T>, message: T) -> TaskHandle
where
    T: Send + 'static,
{
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if tx.send(message).is_err() {
            warn!("Timer fired after receiver dropped");
        }
    });
    TaskHandle::new(task.abort_handle())
}

/// Send `make()` every `period`, starting one period from now.
/// Stops on its own once the receiver is gone.
pub fn schedule_every<T, F>(period: Duration, tx: mpsc::Sender<T>, make: F) -> TaskHandle
where
    T: Send + 'static,
    F: Fn() -> T + Send + 'static,
{
    let task = tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        loop {
            ticker.tick().await;
            if tx.send(make()).is_err() {
                debug!("Periodic timer stopping: receiver dropped");
                return;
            }
        }
    });
    TaskHandle::new(task.abort_handle())
}
