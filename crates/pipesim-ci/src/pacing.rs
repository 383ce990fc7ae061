//! Cosmetic pacing between console lines.
//!
//! The pacer owns its own random source. Outcome draws never share it, so a
//! seeded run produces the same outcomes whether pacing is on or off.

use std::time::Duration;

use pipesim_core::PacingConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sleeps between lines when enabled; a no-op otherwise.
pub struct Pacer {
    config: PacingConfig,
    rng: StdRng,
}

impl Pacer {
    /// Create a pacer with an entropy-seeded jitter source.
    pub fn new(config: PacingConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a pacer that never sleeps.
    pub fn disabled() -> Self {
        Self::new(PacingConfig::disabled())
    }

    /// Fixed pause used inside analysis, setup and aggregation stages.
    pub fn stage_delay(&self) -> Duration {
        if self.config.enabled {
            Duration::from_millis(self.config.stage_delay_ms)
        } else {
            Duration::ZERO
        }
    }

    /// Draw the pause taken before a test result is shown.
    pub fn test_delay(&mut self) -> Duration {
        if !self.config.enabled {
            return Duration::ZERO;
        }
        let (min, max) = (self.config.test_delay_min_ms, self.config.test_delay_max_ms);
        if min >= max {
            return Duration::from_millis(min);
        }
        Duration::from_millis(self.rng.gen_range(min..=max))
    }

    pub async fn stage_pause(&mut self) {
        pause(self.stage_delay()).await;
    }

    pub async fn test_pause(&mut self) {
        let delay = self.test_delay();
        pause(delay).await;
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
