//! # qrng
//!
//! A toy "quantum" random number generator. Each number is built by measuring
//! `bit_width` simulated qubits (fair coin flips from an ordinary PRNG),
//! rendered in decimal, binary or hex, and summarized (average, min, max,
//! range). Nothing here is quantum and nothing here is cryptographically
//! secure.
//!
//! ## Quick Start
//!
//! ```
//! use qrng::prelude::*;
//!
//! let ctl = Controller::new(Immediate, Prng::new(42));
//! let view = pollster::block_on(ctl.generate(&FormInput::new("8", "5", "hex")))
//!     .expect("controller is idle");
//!
//! assert_eq!(view.entries.len(), 5);
//! assert!(view.entries.iter().all(|e| e.starts_with("0x")));
//! assert!(view.stats_visible());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): JSON config loading and serializable results
//!
//! ## Modules
//!
//! - [`generator`]: per-bit coin-flip number generation
//! - [`format`]: decimal/binary/hex rendering
//! - [`stats`]: statistics panel values
//! - [`controller`]: busy state, cosmetic pause, failure policy
//! - [`particles`]: decorative background particles

#[path = "core/error.rs"]
pub mod error;

#[path = "core/prng.rs"]
pub mod prng;

#[path = "core/request.rs"]
pub mod request;

#[path = "core/generator.rs"]
pub mod generator;

#[path = "core/format.rs"]
pub mod format;

#[path = "core/float_fmt.rs"]
pub mod float_fmt;

#[path = "core/stats.rs"]
pub mod stats;

#[path = "core/controller.rs"]
pub mod controller;

#[path = "core/particles.rs"]
pub mod particles;

#[path = "core/config.rs"]
pub mod config;

/// Prelude module for convenient imports.
///
/// ```
/// use qrng::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::AppConfig;
    pub use crate::controller::{
        Controller, Immediate, Phase, ResultsView, Scheduler, DECOHERENCE_MESSAGE,
    };
    pub use crate::error::QrngError;
    pub use crate::format::{format_value, parse_value, NumberFormat};
    pub use crate::generator::generate;
    pub use crate::particles::{spawn_particles, Particle};
    pub use crate::prng::{BitSource, Prng};
    pub use crate::request::{FormInput, GenerationRequest};
    pub use crate::stats::{summarize, StatisticsSummary};
}
