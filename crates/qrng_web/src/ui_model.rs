//! UI copy and control metadata that should be available on both wasm and
//! native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! form inventory on the host.

use qrng::config::AppConfig;
use qrng::format::NumberFormat;
use qrng::particles::{spawn_particles, Particle};
use qrng::prng::Prng;
use qrng::request::{MAX_BIT_WIDTH, MAX_COUNT};
use qrng::stats::StatisticsSummary;

pub const APP_TITLE: &str = "Quantum Random Number Generator";
pub const APP_SUBTITLE: &str = "Simulated qubit measurements. Not quantum, not secure, just fun.";
pub const GENERATE_LABEL: &str = "Generate Quantum Numbers";
pub const LOADING_TEXT: &str = "Collapsing wavefunctions...";
pub const INIT_LOG: &str = "🌌 Quantum Random Number Generator initialized!";

/// A numeric `<input>` and its bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberField {
    pub id: &'static str,
    pub label: &'static str,
    pub min: i64,
    pub max: i64,
    pub default: i64,
}

impl NumberField {
    pub fn bit_width() -> Self {
        Self {
            id: "bits",
            label: "Bits per number",
            min: 0,
            max: MAX_BIT_WIDTH as i64,
            default: AppConfig::default().bit_width,
        }
    }

    pub fn count() -> Self {
        Self {
            id: "count",
            label: "How many numbers",
            min: 0,
            max: MAX_COUNT as i64,
            default: AppConfig::default().count,
        }
    }
}

/// `(value, label)` pairs for the format `<select>`.
pub fn format_options() -> Vec<(&'static str, &'static str)> {
    NumberFormat::all()
        .iter()
        .map(|f| (f.label(), f.display_name()))
        .collect()
}

/// The four cards of the statistics panel, in display order.
pub fn stat_cards(stats: &StatisticsSummary) -> [(&'static str, String); 4] {
    [
        ("Average", stats.average_text()),
        ("Minimum", stats.minimum.to_string()),
        ("Maximum", stats.maximum.to_string()),
        ("Range", stats.range.to_string()),
    ]
}

/// Background particles for a page running with `cfg`.
pub fn particle_field(cfg: &AppConfig, seed: u64) -> Vec<Particle> {
    spawn_particles(&mut Prng::new(seed), cfg.particle_count)
}
