//! Source of the waits between the steps of an order

use futures::future::BoxFuture;
use futures::FutureExt;
use std::time::Duration;

#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Returns a future that completes once `duration` has elapsed
    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()>;
}

/// Clock backed by the tokio timer. Under a paused runtime it follows virtual time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()> {
        tokio::time::sleep(duration).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_tokio_clock_waits_the_duration() {
        let start = Instant::now();
        TokioClock.sleep(Duration::from_millis(2000)).await;
        assert!(start.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_clock_zero_duration() {
        let start = Instant::now();
        TokioClock.sleep(Duration::ZERO).await;
        assert!(start.elapsed() <= Duration::from_millis(1));
    }
}
