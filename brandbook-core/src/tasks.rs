//! Keyed async tasks that report back with actions
//!
//! Every task is registered under a [`TaskKey`]. Starting a task under a key
//! that is already in use aborts the previous one, which gives debounce and
//! "latest wins" behaviour for free:
//!
//! ```ignore
//! // Open the inspector 50ms after the last click; a newer click restarts the timer
//! tasks.debounce("inspector_open", Duration::from_millis(50), async move {
//!     Action::ElementSelect(Some(element))
//! });
//!
//! // Clicking away before the timer fires cancels the pending open
//! tasks.cancel(&"inspector_open".into());
//!
//! // Periodic tick driving status expiry and the live indicator
//! tasks.interval("tick", Duration::from_millis(100), || Action::Tick);
//! ```

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};

use crate::Action;

/// Identifies a task for cancellation and replacement.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TaskKey(String);

impl TaskKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for TaskKey {
    fn from(s: &'static str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TaskKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Manages async task lifecycle with automatic cancellation.
///
/// Completed tasks are forgotten lazily; [`is_running`](Self::is_running)
/// only reports tasks that have not finished yet.
pub struct TaskManager<A> {
    tasks: HashMap<TaskKey, AbortHandle>,
    action_tx: mpsc::UnboundedSender<A>,
}

impl<A> TaskManager<A>
where
    A: Action,
{
    /// Actions produced by tasks are sent through `action_tx`.
    pub fn new(action_tx: mpsc::UnboundedSender<A>) -> Self {
        Self {
            tasks: HashMap::new(),
            action_tx,
        }
    }

    fn register(&mut self, key: TaskKey, handle: JoinHandle<()>) {
        self.tasks.retain(|_, h| !h.is_finished());
        self.tasks.insert(key, handle.abort_handle());
    }

    /// Spawn a task, cancelling any existing task with the same key.
    ///
    /// The action returned by the future is sent when it completes. A task
    /// cancelled before completion sends nothing.
    pub fn spawn<F>(&mut self, key: impl Into<TaskKey>, future: F) -> &mut Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        let key = key.into();
        self.cancel(&key);

        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            let action = future.await;
            let _ = tx.send(action);
        });

        self.register(key, handle);
        self
    }

    /// Spawn a task that waits `duration` before running.
    ///
    /// Calling again with the same key before the duration expires cancels
    /// the previous task and restarts the timer.
    pub fn debounce<F>(
        &mut self,
        key: impl Into<TaskKey>,
        duration: Duration,
        future: F,
    ) -> &mut Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        let key = key.into();
        self.cancel(&key);

        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let action = future.await;
            let _ = tx.send(action);
        });

        self.register(key, handle);
        self
    }

    /// Emit `action_fn()` every `duration`, starting one period from now.
    ///
    /// The task stops on its own once the action channel is closed.
    pub fn interval<F>(&mut self, key: impl Into<TaskKey>, duration: Duration, action_fn: F) -> &mut Self
    where
        F: Fn() -> A + Send + 'static,
    {
        let key = key.into();
        self.cancel(&key);

        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(duration);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            // The first tick completes immediately
            interval.tick().await;

            loop {
                interval.tick().await;
                if tx.send(action_fn()).is_err() {
                    break;
                }
            }
        });

        self.register(key, handle);
        self
    }

    /// Cancel a task by key. Unknown keys are a no-op.
    pub fn cancel(&mut self, key: &TaskKey) {
        if let Some(handle) = self.tasks.remove(key) {
            handle.abort();
        }
    }

    /// Cancel all running tasks.
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }

    /// Whether a task with the given key is registered and not yet finished.
    pub fn is_running(&self, key: &TaskKey) -> bool {
        self.tasks.get(key).is_some_and(|h| !h.is_finished())
    }

    /// Number of unfinished tasks.
    pub fn len(&self) -> usize {
        self.tasks.values().filter(|h| !h.is_finished()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<A> Drop for TaskManager<A> {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}
