use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Exponential backoff for startup connection attempts.
///
/// Defaults: 3 retries, 100ms first delay, doubling, capped at 5s, jittered.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub multiplier: u32,
    /// Scale each delay into [50%, 100%) so replicas do not reconnect in lockstep
    pub jitter: bool,
}

impl RetryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_delays(mut self, initial: Duration, max: Duration) -> Self {
        self.initial_delay = initial;
        self.max_delay = max;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.jitter = false;
        self
    }

    /// Delay before retry number `retry` (1-based), before jitter.
    pub fn backoff(&self, retry: u32) -> Duration {
        let factor = self
            .multiplier
            .checked_pow(retry.saturating_sub(1))
            .unwrap_or(u32::MAX);
        self.initial_delay
            .checked_mul(factor)
            .map_or(self.max_delay, |d| d.min(self.max_delay))
    }

    fn delay(&self, retry: u32) -> Duration {
        let base = self.backoff(retry);
        if self.jitter { jittered(base) } else { base }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(5),
            multiplier: 2,
            jitter: true,
        }
    }
}

/// Run `operation` until it succeeds or `config.max_retries` retries have
/// failed, in which case the last error is returned.
///
/// ```ignore
/// let db = retry_with_backoff(|| connect_with_options(options.clone()), RetryConfig::new()).await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut retries = 0;

    loop {
        let err = match operation().await {
            Ok(value) => {
                if retries > 0 {
                    debug!(retries, "Succeeded after retrying");
                }
                return Ok(value);
            }
            Err(err) => err,
        };

        if retries == config.max_retries {
            warn!(attempts = retries + 1, error = %err, "Giving up");
            return Err(err);
        }
        retries += 1;

        let delay = config.delay(retries);
        debug!(
            retry = retries,
            max_retries = config.max_retries,
            error = %err,
            ?delay,
            "Attempt failed, backing off"
        );
        tokio::time::sleep(delay).await;
    }
}

// Pseudo-random factor from a freshly keyed std hasher
fn jittered(delay: Duration) -> Duration {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let percent = 50 + (RandomState::new().hash_one(std::time::Instant::now()) % 50) as u32;
    delay * percent / 100
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast() -> RetryConfig {
        RetryConfig::new()
            .with_delays(Duration::from_millis(5), Duration::from_millis(20))
            .without_jitter()
    }

    #[test]
    fn test_backoff_doubles_and_caps() {
        let config = RetryConfig::new()
            .with_delays(Duration::from_millis(100), Duration::from_millis(350));
        let delays: Vec<u128> = (1..=4).map(|n| config.backoff(n).as_millis()).collect();
        assert_eq!(delays, vec![100, 200, 350, 350]);
        assert_eq!(config.backoff(1_000), Duration::from_millis(350));
    }

    #[test]
    fn test_jitter_stays_within_half_to_full() {
        for _ in 0..20 {
            let d = jittered(Duration::from_millis(1000));
            assert!(d >= Duration::from_millis(500) && d < Duration::from_millis(1000));
        }
    }

    #[tokio::test]
    async fn test_recovers_after_transient_failures() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = calls.clone();

        let result = retry_with_backoff(
            move || {
                let c = c.clone();
                async move {
                    if c.fetch_add(1, Ordering::SeqCst) < 2 {
                        Err("connection refused")
                    } else {
                        Ok("connected")
                    }
                }
            },
            fast(),
        )
        .await;

        assert_eq!(result, Ok("connected"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_returns_last_error_when_exhausted() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = calls.clone();

        let result = retry_with_backoff(
            move || {
                let c = c.clone();
                async move {
                    let n = c.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>(format!("starting up ({n})"))
                }
            },
            fast().with_max_retries(2),
        )
        .await;

        // first attempt plus two retries
        assert_eq!(result, Err("starting up (2)".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_zero_retries_makes_one_attempt() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = calls.clone();

        let result = retry_with_backoff(
            move || {
                c.fetch_add(1, Ordering::SeqCst);
                async { Err::<(), _>("down") }
            },
            fast().with_max_retries(0),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
