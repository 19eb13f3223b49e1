//! Bouncing bullseye target
//!
//! The number-selector target drifts on a velocity vector that re-randomizes
//! on a countdown and snaps back toward center after leaving its box. Ring
//! clicks report a ring index the caller concatenates into a number; the
//! center dot reports "close".

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Half-extent of the bounding box on each axis, px.
pub const MAX_X: f32 = 200.0;
pub const MAX_Y: f32 = 200.0;
/// Velocity magnitude, both for the return-to-center vector and for freshly
/// randomized directions.
pub const MOVE_SPEED: f32 = 3.0;
/// Ticks granted to re-enter bounds before the next randomization can fire.
pub const SETTLE_TICKS: u32 = 20;
/// Inclusive range the randomization countdown is drawn from.
pub const CYCLE_RANGE: std::ops::RangeInclusive<u32> = 10..=59;

/// Number of concentric rings.
pub const RING_COUNT: u32 = 10;
/// Outermost ring radius in viewbox units; each inner ring shrinks by `RING_STEP`.
pub const MAX_RING_RADIUS: f32 = 10.0;
pub const RING_STEP: f32 = 1.0;

/// How a freshly drawn direction vector is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizationMode {
    /// True Euclidean normalization: the intended motion.
    #[default]
    Euclidean,
    /// Bit-faithful shipped behavior: each component is truncated to i32 and
    /// XORed with 2 in place of squaring. For components in (-1, 1) that
    /// makes the length a constant 2; when both components truncate to -1
    /// the sum goes negative and the length is NaN.
    LegacyXor,
}

fn legacy_xor_length(v: Vec2) -> f32 {
    let x = (v.x as i32) ^ 2;
    let y = (v.y as i32) ^ 2;
    ((x + y) as f32).sqrt()
}

/// Bouncing target state. Advanced at 125 Hz (8 ms timestep).
#[derive(Debug, Clone)]
pub struct TargetSim {
    pos: Vec2,
    vel: Vec2,
    cycle: u32,
    mode: NormalizationMode,
    rng: Pcg32,
}

impl TargetSim {
    pub fn new(seed: u64) -> Self {
        Self::with_mode(seed, NormalizationMode::default())
    }

    pub fn with_mode(seed: u64, mode: NormalizationMode) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ONE,
            cycle: 5,
            mode,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    /// Ticks left until the next direction randomization.
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    /// Advance one tick.
    ///
    /// Order matters: the boundary check inspects the pre-move position, the
    /// move applies the velocity current at tick entry, and a boundary
    /// redirect suppresses the countdown for this tick so the settle counter
    /// survives at exactly `SETTLE_TICKS`.
    pub fn tick(&mut self) {
        let escaped = self.pos.x > MAX_X
            || self.pos.x < -MAX_X
            || self.pos.y > MAX_Y
            || self.pos.y < -MAX_Y;

        let entry_vel = self.vel;
        if escaped {
            log::debug!("target left its box at {:?}, returning to center", self.pos);
            self.vel = Vec2::new(
                if self.pos.x > MAX_X { -MOVE_SPEED } else { MOVE_SPEED },
                if self.pos.y > MAX_Y { -MOVE_SPEED } else { MOVE_SPEED },
            );
            self.cycle = SETTLE_TICKS;
        }

        self.pos += entry_vel;

        if escaped {
            return;
        }

        if self.cycle == 0 {
            let dir = Vec2::new(
                self.rng.random_range(-1.0..1.0),
                self.rng.random_range(-1.0..1.0),
            );
            self.vel = match self.mode {
                NormalizationMode::Euclidean => dir.normalize_or_zero() * MOVE_SPEED,
                NormalizationMode::LegacyXor => dir / legacy_xor_length(dir) * MOVE_SPEED,
            };
            self.cycle = self.rng.random_range(CYCLE_RANGE);
        } else {
            self.cycle -= 1;
        }
    }
}

/// What a click on the bullseye hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingHit {
    /// A ring, 0 = outermost .. 9 = innermost.
    Ring(u32),
    /// The always-present center dot: close the selector.
    Close,
}

/// Radius of ring `index` in viewbox units.
pub fn ring_radius(index: u32) -> f32 {
    MAX_RING_RADIUS - index as f32 * RING_STEP
}

/// Digit label printed on ring `index` (outermost shows 9, innermost 0).
pub fn ring_digit(index: u32) -> u32 {
    (RING_COUNT - 1).saturating_sub(index)
}

/// Accumulates clicked ring indices into a multi-digit number: each click
/// concatenates its index as the next decimal digit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberEntry {
    value: Option<u64>,
}

impl NumberEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number entered so far, if any ring has been hit.
    pub fn value(&self) -> Option<u64> {
        self.value
    }

    /// Apply a bullseye hit. Digits concatenate by string append + re-parse,
    /// keeping the previous value if the result would overflow. Returns true
    /// when the center dot asked to close the selector.
    pub fn apply(&mut self, hit: RingHit) -> bool {
        match hit {
            RingHit::Close => true,
            RingHit::Ring(index) => {
                let concatenated = match self.value {
                    None => Some(index as u64),
                    Some(v) => format!("{v}{index}").parse().ok(),
                };
                if let Some(v) = concatenated {
                    self.value = Some(v);
                }
                false
            }
        }
    }
}
