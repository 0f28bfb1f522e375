//! Debounced auto-save scheduling.
//!
//! Each call to [`AutoSaveScheduler::schedule`] aborts the pending task and
//! spawns a new one that sleeps for the debounce window before saving. The
//! save closure runs at fire time, so it always sees the latest draft.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

/// Default inactivity window before an auto-save fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Default time the "auto-saving" indicator stays on after a save.
pub const DEFAULT_INDICATOR: Duration = Duration::from_millis(800);

/// Auto-save timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoSaveSettings {
    pub debounce: Duration,
    pub indicator: Duration,
}

impl Default for AutoSaveSettings {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            indicator: DEFAULT_INDICATOR,
        }
    }
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A single cancellable debounce timer.
///
/// Dropping the scheduler cancels any pending save.
#[derive(Debug)]
pub struct AutoSaveScheduler {
    settings: AutoSaveSettings,
    pending: Mutex<Option<JoinHandle<()>>>,
    last_auto_save: Arc<Mutex<Option<Instant>>>,
}

impl AutoSaveScheduler {
    pub fn new(settings: AutoSaveSettings) -> Self {
        Self {
            settings,
            pending: Mutex::new(None),
            last_auto_save: Arc::new(Mutex::new(None)),
        }
    }

    pub fn settings(&self) -> AutoSaveSettings {
        self.settings
    }

    /// Restarts the debounce window with `save` as the action.
    ///
    /// `save` resolves to true when something was stored; only then is the
    /// indicator turned on.
    pub fn schedule<F, Fut>(&self, save: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        let delay = self.settings.debounce;
        let last_auto_save = Arc::clone(&self.last_auto_save);

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if save().await {
                *locked(&last_auto_save) = Some(Instant::now());
            }
        });

        if let Some(previous) = locked(&self.pending).replace(handle) {
            previous.abort();
        }
    }

    /// Aborts the pending save, if any.
    pub fn cancel(&self) {
        if let Some(pending) = locked(&self.pending).take() {
            pending.abort();
        }
    }

    /// True while a save is waiting for the debounce window to elapse.
    pub fn is_pending(&self) -> bool {
        locked(&self.pending)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// True for the indicator window after the last auto-save.
    pub fn is_indicating(&self) -> bool {
        locked(&self.last_auto_save)
            .is_some_and(|saved_at| saved_at.elapsed() < self.settings.indicator)
    }
}

impl Drop for AutoSaveScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
