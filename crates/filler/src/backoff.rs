use standing_intents_config::FillerConfig;
use std::time::Duration;

/// Delay schedule between sequence retries: `initial * multiplier^attempt`, capped at `max`
#[derive(Debug, Clone)]
pub struct ExponentialBackoff {
    initial: Duration,
    max: Duration,
    multiplier: f64,
    attempt: u32,
}

impl ExponentialBackoff {
    pub fn new(initial: Duration, max: Duration) -> Self {
        Self {
            initial,
            max,
            multiplier: 2.0,
            attempt: 0,
        }
    }

    pub fn from_config(config: &FillerConfig) -> Self {
        Self::new(
            Duration::from_millis(config.backoff_base_ms),
            Duration::from_millis(config.backoff_max_ms),
        )
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn next_delay(&mut self) -> Duration {
        let factor = self.multiplier.powi(self.attempt.min(i32::MAX as u32) as i32);
        let max_ms = self.max.as_millis() as f64;
        let delay_ms = (self.initial.as_millis() as f64 * factor).min(max_ms);

        self.attempt = self.attempt.saturating_add(1);
        Duration::from_millis(delay_ms as u64)
    }

    pub fn reset(&mut self) {
        self.attempt = 0;
    }

    /// Number of delays handed out since the last reset
    pub fn attempts(&self) -> u32 {
        self.attempt
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self::from_config(&FillerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_until_cap() {
        let mut backoff =
            ExponentialBackoff::new(Duration::from_millis(50), Duration::from_millis(300));

        let delays: Vec<_> = (0..5).map(|_| backoff.next_delay()).collect();
        assert_eq!(
            delays,
            vec![
                Duration::from_millis(50),
                Duration::from_millis(100),
                Duration::from_millis(200),
                Duration::from_millis(300),
                Duration::from_millis(300),
            ]
        );
        assert_eq!(backoff.attempts(), 5);
    }

    #[test]
    fn test_backoff_reset() {
        let mut backoff = ExponentialBackoff::default();
        backoff.next_delay();
        backoff.next_delay();

        backoff.reset();
        assert_eq!(backoff.attempts(), 0);
        assert_eq!(backoff.next_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_backoff_custom_multiplier() {
        let mut backoff =
            ExponentialBackoff::new(Duration::from_millis(10), Duration::from_secs(1))
                .with_multiplier(3.0);

        backoff.next_delay();
        assert_eq!(backoff.next_delay(), Duration::from_millis(30));
        assert_eq!(backoff.next_delay(), Duration::from_millis(90));
    }

    #[test]
    fn test_backoff_from_config() {
        let config = FillerConfig {
            backoff_base_ms: 5,
            backoff_max_ms: 8,
            ..FillerConfig::default()
        };
        let mut backoff = ExponentialBackoff::from_config(&config);

        assert_eq!(backoff.next_delay(), Duration::from_millis(5));
        assert_eq!(backoff.next_delay(), Duration::from_millis(8));
    }

    #[test]
    fn test_backoff_survives_many_attempts() {
        let mut backoff =
            ExponentialBackoff::new(Duration::from_millis(100), Duration::from_secs(30));
        for _ in 0..2_000 {
            assert!(backoff.next_delay() <= Duration::from_secs(30));
        }
    }
}
