use std::time::Duration;

#[trait_variant::make(Sleeper: Send)]
pub trait UnsendSleeper {
    async fn sleep(&self, duration: Duration);
}

/// Suspends on the tokio timer.
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Returns immediately; used to drive the loop without waiting.
pub struct NoopSleeper;

impl Sleeper for NoopSleeper {
    async fn sleep(&self, _duration: Duration) {}
}
