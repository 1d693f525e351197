//! Decorative background balls: random size, position, and drift duration.

#[cfg(test)]
#[path = "glass_balls_test.rs"]
mod glass_balls_test;

use std::ops::Range;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const SIZE_PX: Range<f64> = 100.0..250.0;
pub const POSITION_PCT: Range<f64> = 0.0..100.0;
pub const DURATION_S: Range<f64> = 15.0..25.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlassBall {
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
}

impl GlassBall {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            size_px: rng.random_range(SIZE_PX),
            left_pct: rng.random_range(POSITION_PCT),
            top_pct: rng.random_range(POSITION_PCT),
            duration_s: rng.random_range(DURATION_S),
        }
    }

    /// Inline `style` attribute value.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "width: {size:.1}px; height: {size:.1}px; left: {left:.2}%; top: {top:.2}%; animation-duration: {dur:.2}s;",
            size = self.size_px,
            left = self.left_pct,
            top = self.top_pct,
            dur = self.duration_s,
        )
    }
}

pub fn generate(rng: &mut impl Rng, count: usize) -> Vec<GlassBall> {
    (0..count).map(|_| GlassBall::random(rng)).collect()
}

/// Seed for a fresh layout: wall-clock time in the browser, fixed elsewhere.
#[must_use]
pub fn layout_seed() -> u64 {
    #[cfg(feature = "csr")]
    {
        // Millisecond timestamps fit comfortably in u64.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let seed = js_sys::Date::now() as u64;
        seed
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}

/// Generate a layout from `layout_seed`.
#[must_use]
pub fn fresh_layout(count: usize) -> Vec<GlassBall> {
    let mut rng = SmallRng::seed_from_u64(layout_seed());
    generate(&mut rng, count)
}
