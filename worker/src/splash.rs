//! Splash sequence timing.
//!
//! Holds a fixed-duration introductory display, then signals
//! completion exactly once. Tearing the sequence down before the
//! delay elapses cancels the pending timer; no callback fires after
//! teardown.

use std::time::Duration;

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

/// Handle to a running splash sequence. Dropping the handle tears the
/// sequence down.
pub struct SplashHandle {
    token: CancellationToken,
    task: Option<tokio::task::JoinHandle<()>>,
}

/// Start the splash sequence.
///
/// `on_complete` is invoked at most once, after `duration` elapses
/// uncancelled. A later `start` call is an independent activation
/// with its own timer.
pub fn start<F>(duration: Duration, on_complete: F) -> SplashHandle
where
    F: FnOnce() + Send + 'static,
{
    let token = CancellationToken::new();
    let timer_token = token.clone();

    let task = tokio::spawn(async move {
        tokio::select! {
            _ = timer_token.cancelled() => {
                tracing::debug!("Splash sequence cancelled before completion");
            }
            _ = sleep(duration) => {
                tracing::debug!("Splash sequence completed");
                on_complete();
            }
        }
    });

    SplashHandle {
        token,
        task: Some(task),
    }
}

impl SplashHandle {
    /// Cancel the pending timer. No-op once the sequence completed.
    pub fn teardown(&self) {
        self.token.cancel();
    }

    /// Wait until the sequence has either completed or been torn down.
    pub async fn finished(mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for SplashHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::start;

    const SPLASH: Duration = Duration::from_millis(5600);

    fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
        let fired = Arc::new(AtomicUsize::new(0));
        let inner = fired.clone();
        (fired, move || {
            inner.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn completes_exactly_once_after_the_delay() {
        let (fired, on_complete) = counter();
        let handle = start(SPLASH, on_complete);

        handle.finished().await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_before_the_delay_suppresses_the_callback() {
        let (fired, on_complete) = counter();
        let handle = start(SPLASH, on_complete);

        handle.teardown();
        handle.finished().await;

        // Let the original deadline pass as well.
        tokio::time::sleep(SPLASH * 2).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_tears_the_sequence_down() {
        let (fired, on_complete) = counter();
        drop(start(SPLASH, on_complete));

        tokio::time::sleep(SPLASH * 2).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn reactivation_schedules_an_independent_timer() {
        let (first_fired, first_cb) = counter();
        let first = start(SPLASH, first_cb);
        first.teardown();
        first.finished().await;

        let (second_fired, second_cb) = counter();
        let second = start(SPLASH, second_cb);
        second.finished().await;

        assert_eq!(first_fired.load(Ordering::SeqCst), 0);
        assert_eq!(second_fired.load(Ordering::SeqCst), 1);
    }
}
