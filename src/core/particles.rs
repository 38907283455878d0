//! Decorative background particles. Purely cosmetic.

use crate::float_fmt::fmt_f64_fixed;
use crate::prng::Prng;

pub const DEFAULT_PARTICLE_COUNT: usize = 30;

/// `@keyframes float`, referenced by every particle's animation.
pub const FLOAT_KEYFRAMES: &str = "\
@keyframes float {
    0%, 100% { transform: translateY(0px) translateX(0px) rotate(0deg); }
    25% { transform: translateY(-20px) translateX(10px) rotate(90deg); }
    50% { transform: translateY(-40px) translateX(-10px) rotate(180deg); }
    75% { transform: translateY(-20px) translateX(-15px) rotate(270deg); }
}
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleColor {
    Cyan,
    Violet,
}

impl ParticleColor {
    pub fn css(self) -> &'static str {
        match self {
            ParticleColor::Cyan => "#00d4ff",
            ParticleColor::Violet => "#8338ec",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Width and height, in px. [1, 5)
    pub size_px: f64,
    pub color: ParticleColor,
    /// [0, 100)
    pub left_pct: f64,
    /// [0, 100)
    pub top_pct: f64,
    /// [0.1, 0.8)
    pub opacity: f64,
    /// One loop of the float animation, in seconds. [5, 20)
    pub duration_s: f64,
}

impl Particle {
    pub fn random(rng: &mut Prng) -> Self {
        let size_px = rng.gen_range_f64(1.0, 5.0);
        let color = if rng.next_f64_01() > 0.5 {
            ParticleColor::Cyan
        } else {
            ParticleColor::Violet
        };
        Self {
            size_px,
            color,
            left_pct: rng.gen_range_f64(0.0, 100.0),
            top_pct: rng.gen_range_f64(0.0, 100.0),
            opacity: rng.gen_range_f64(0.1, 0.8),
            duration_s: rng.gen_range_f64(5.0, 20.0),
        }
    }

    /// Inline CSS for an absolutely positioned round dot.
    pub fn style(&self) -> String {
        let size = fmt_f64_fixed(self.size_px, 2);
        format!(
            "position: absolute; width: {size}px; height: {size}px; background: {}; \
             border-radius: 50%; left: {}%; top: {}%; opacity: {}; \
             animation: float {}s infinite ease-in-out;",
            self.color.css(),
            fmt_f64_fixed(self.left_pct, 2),
            fmt_f64_fixed(self.top_pct, 2),
            fmt_f64_fixed(self.opacity, 2),
            fmt_f64_fixed(self.duration_s, 2),
        )
    }
}

pub fn spawn_particles(rng: &mut Prng, count: usize) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}
