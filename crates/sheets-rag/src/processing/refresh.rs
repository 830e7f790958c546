//! Periodic refresh with a single active schedule

use futures::future::BoxFuture;
use parking_lot::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Owns at most one recurring background job
///
/// Scheduling aborts whatever was scheduled before, so two refresh chains never
/// run side by side. Dropping the scheduler aborts the job.
#[derive(Default)]
pub struct RefreshScheduler {
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl RefreshScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `job` every `period`, first one period from now
    ///
    /// Must be called inside a tokio runtime.
    pub fn schedule<F>(&self, period: Duration, job: F)
    where
        F: Fn() -> BoxFuture<'static, ()> + Send + Sync + 'static,
    {
        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                tracing::debug!("Running scheduled refresh");
                job().await;
            }
        });

        if let Some(previous) = self.handle.lock().replace(task) {
            previous.abort();
            tracing::debug!("Replaced previous refresh schedule");
        }
    }

    /// Stop the current schedule, if any
    pub fn cancel(&self) {
        if let Some(handle) = self.handle.lock().take() {
            handle.abort();
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle
            .lock()
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.get_mut().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_job(
        counter: Arc<AtomicUsize>,
    ) -> impl Fn() -> BoxFuture<'static, ()> + Send + Sync {
        move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
            .boxed()
        }
    }

    async fn advance(secs: u64) {
        tokio::time::sleep(Duration::from_secs(secs)).await;
        // Let spawned tasks observe the new time
        tokio::task::yield_now().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_each_period() {
        let counter = Arc::new(AtomicUsize::new(0));
        let scheduler = RefreshScheduler::new();
        scheduler.schedule(Duration::from_secs(10), counting_job(counter.clone()));

        advance(5).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        advance(6).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        advance(10).await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);
        assert!(scheduler.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_replaces_previous() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let scheduler = RefreshScheduler::new();

        scheduler.schedule(Duration::from_secs(10), counting_job(first.clone()));
        advance(5).await;
        scheduler.schedule(Duration::from_secs(10), counting_job(second.clone()));

        // Second schedule fires at 15s, 25s and 35s
        advance(32).await;
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_and_drop_stop_the_job() {
        let counter = Arc::new(AtomicUsize::new(0));
        let scheduler = RefreshScheduler::new();
        scheduler.schedule(Duration::from_secs(10), counting_job(counter.clone()));
        scheduler.cancel();
        assert!(!scheduler.is_active());

        advance(30).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        let dropped = RefreshScheduler::new();
        dropped.schedule(Duration::from_secs(10), counting_job(counter.clone()));
        drop(dropped);

        advance(30).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }
}
