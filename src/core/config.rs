//! Application defaults: the values the form starts with plus pacing knobs.
//!
//! ```json
//! { "bit_width": 16, "count": 5, "format": "hex", "delay_ms": 0, "seed": 42 }
//! ```
//! Missing keys keep their defaults.

use std::time::Duration;

use crate::controller::DEFAULT_DELAY;
use crate::error::{QrngError, Result};
use crate::format::NumberFormat;
use crate::particles::DEFAULT_PARTICLE_COUNT;
use crate::request::GenerationRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct AppConfig {
    pub bit_width: i64,
    pub count: i64,
    pub format: NumberFormat,
    pub delay_ms: u64,
    pub particle_count: usize,
    /// Fixed PRNG seed for reproducible runs; `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bit_width: 8,
            count: 10,
            format: NumberFormat::Decimal,
            delay_ms: DEFAULT_DELAY.as_millis() as u64,
            particle_count: DEFAULT_PARTICLE_COUNT,
            seed: None,
        }
    }
}

impl AppConfig {
    #[cfg(feature = "serde")]
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| QrngError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    #[cfg(feature = "serde")]
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| QrngError::Config(e.to_string()))
    }

    /// Check the form defaults the same way user input is checked.
    pub fn validate(&self) -> Result<()> {
        self.request().map(|_| ())
    }

    pub fn request(&self) -> Result<GenerationRequest> {
        GenerationRequest::new(self.bit_width, self.count, self.format)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Apply a `QRNG_SEED`-style override. Empty strings are ignored.
    pub fn apply_seed_override(&mut self, raw: &str) -> Result<()> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(());
        }
        let seed = raw
            .parse::<u64>()
            .map_err(|_| QrngError::Config(format!("seed must be an unsigned integer, got {raw:?}")))?;
        self.seed = Some(seed);
        Ok(())
    }
}
