//! Timing configuration for the sync driver.
//!
//! A single tunable lives here: the artificial delay inserted between sync
//! waves, which gives other controllers a chance to react to the spec change
//! that was just applied before resource health is assessed against a stale
//! object. The driver applies it between non-final waves only.

use std::time::Duration;

use thiserror::Error;
use tracing::warn;

/// Environment variable controlling the delay in seconds between sync waves.
pub const ENV_SYNC_WAVE_DELAY: &str = "SYNC_WAVE_DELAY";

/// Delay applied when the variable is unset or unparsable.
pub const DEFAULT_WAVE_DELAY_SECS: u64 = 2;

/// Error from strictly parsing a wave-delay value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WaveDelayParseError {
    #[error("wave delay is not a whole number of seconds: {0:?}")]
    NotANumber(String),
}

/// The configured inter-wave delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveDelay {
    delay: Duration,
}

impl Default for WaveDelay {
    fn default() -> Self {
        WaveDelay {
            delay: Duration::from_secs(DEFAULT_WAVE_DELAY_SECS),
        }
    }
}

impl WaveDelay {
    pub fn from_secs(secs: u64) -> Self {
        WaveDelay {
            delay: Duration::from_secs(secs),
        }
    }

    /// Strictly parses a delay value in whole seconds.
    pub fn parse(value: &str) -> Result<Self, WaveDelayParseError> {
        value
            .trim()
            .parse::<u64>()
            .map(Self::from_secs)
            .map_err(|_| WaveDelayParseError::NotANumber(value.to_string()))
    }

    /// Resolves the delay from an environment value, falling back to the
    /// default when the variable is unset or unparsable. Total by design:
    /// a malformed knob must not block syncing.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            None => Self::default(),
            Some(raw) => Self::parse(raw).unwrap_or_else(|err| {
                warn!(%err, "falling back to default wave delay");
                Self::default()
            }),
        }
    }

    /// Reads [`ENV_SYNC_WAVE_DELAY`] from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(ENV_SYNC_WAVE_DELAY).ok().as_deref())
    }

    pub fn duration(&self) -> Duration {
        self.delay
    }

    /// Sleeps for the configured delay, unless the wave just finished was
    /// the final one. The driver calls this between waves.
    pub async fn pause_after(&self, final_wave: bool) {
        if final_wave {
            return;
        }
        tokio::time::sleep(self.delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_whole_seconds() {
        assert_eq!(WaveDelay::parse("5"), Ok(WaveDelay::from_secs(5)));
        assert_eq!(WaveDelay::parse(" 0 "), Ok(WaveDelay::from_secs(0)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(WaveDelay::parse("2s").is_err());
        assert!(WaveDelay::parse("-1").is_err());
        assert!(WaveDelay::parse("").is_err());
    }

    #[test]
    fn unset_env_uses_default() {
        assert_eq!(WaveDelay::from_env_value(None), WaveDelay::default());
        assert_eq!(
            WaveDelay::default().duration(),
            Duration::from_secs(DEFAULT_WAVE_DELAY_SECS)
        );
    }

    #[test]
    fn valid_env_overrides_default() {
        assert_eq!(
            WaveDelay::from_env_value(Some("7")),
            WaveDelay::from_secs(7)
        );
    }

    #[test]
    fn unparsable_env_falls_back_to_default() {
        assert_eq!(
            WaveDelay::from_env_value(Some("not-a-number")),
            WaveDelay::default()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn pause_skipped_after_final_wave() {
        let delay = WaveDelay::from_secs(60);
        let started = tokio::time::Instant::now();
        delay.pause_after(true).await;
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn pause_sleeps_between_nonfinal_waves() {
        let delay = WaveDelay::from_secs(60);
        let started = tokio::time::Instant::now();
        delay.pause_after(false).await;
        assert_eq!(started.elapsed(), Duration::from_secs(60));
    }
}
