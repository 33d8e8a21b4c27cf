//! Trailing-edge debounce on tokio timers.

use std::{sync::Arc, time::Duration};

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// Trailing-edge debouncer.
///
/// Each [`Debouncer::trigger`] cancels the pending timer and starts a new
/// one; the callback runs once the delay elapses without another trigger,
/// with the last value received. The callback runs synchronously on the
/// timer task, so anything it spawns outlives later triggers.
///
/// Must be triggered from inside a tokio runtime.
pub struct Debouncer<T> {
    delay: Duration,
    callback: Arc<dyn Fn(T) + Send + Sync>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T> Debouncer<T>
where
    T: Send + 'static,
{
    /// Debouncer that calls `callback` once input has been quiet for `delay`.
    pub fn new<F>(delay: Duration, callback: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            delay,
            callback: Arc::new(callback),
            pending: Mutex::new(None),
        }
    }

    /// Settle delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Restart the settle timer with `value`.
    pub fn trigger(&self, value: T) {
        let callback = Arc::clone(&self.callback);
        let delay = self.delay;

        let mut pending = self.pending.lock();
        if let Some(timer) = pending.take() {
            timer.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback(value);
        }));
        tracing::debug!(delay_ms = delay.as_millis() as u64, "debounce timer scheduled");
    }

    /// Drop the pending timer. Returns whether one was still waiting.
    pub fn cancel(&self) -> bool {
        match self.pending.lock().take() {
            Some(timer) => {
                let waiting = !timer.is_finished();
                timer.abort();
                waiting
            },
            None => false,
        }
    }

    /// A timer is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(timer) = self.pending.get_mut().take() {
            timer.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;
    use tokio::time::sleep;

    use super::*;

    fn recording(delay_ms: u64) -> (Debouncer<&'static str>, Arc<Mutex<Vec<&'static str>>>) {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&fired);
        let debouncer =
            Debouncer::new(Duration::from_millis(delay_ms), move |value| sink.lock().push(value));
        (debouncer, fired)
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_triggers_fire_once_with_last_value() {
        let (debouncer, fired) = recording(300);
        debouncer.trigger("r");
        sleep(Duration::from_millis(100)).await;
        debouncer.trigger("ru");
        sleep(Duration::from_millis(299)).await;
        debouncer.trigger("rust");
        assert!(fired.lock().is_empty());

        sleep(Duration::from_millis(301)).await;
        assert_eq!(*fired.lock(), vec!["rust"]);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn spaced_triggers_fire_independently() {
        let (debouncer, fired) = recording(300);
        debouncer.trigger("first");
        sleep(Duration::from_millis(350)).await;
        debouncer.trigger("second");
        sleep(Duration::from_millis(350)).await;
        assert_eq!(*fired.lock(), vec!["first", "second"]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_pending_value() {
        let (debouncer, fired) = recording(300);
        debouncer.trigger("never");
        assert!(debouncer.is_pending());
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());

        sleep(Duration::from_millis(500)).await;
        assert!(fired.lock().is_empty());
    }
}
