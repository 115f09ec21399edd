//! Random primitives used to fill step payloads.
//!
//! Every function takes the random source explicitly so callers decide between a
//! seeded generator for reproducible fixtures and an entropy-backed one.

use crate::routine::{JOINT_ANGLE_RANGE, JointAngles, POSITION_RANGE, Pose, Quaternion};
use rand::Rng;
use std::ops::RangeInclusive;

/// Draws below this norm are rejected instead of normalized.
pub const MIN_QUATERNION_NORM: f64 = f64::EPSILON;

/// Draws four components uniformly from [-1, 1] and normalizes them.
///
/// A draw whose norm falls below [`MIN_QUATERNION_NORM`] is discarded and redrawn.
pub fn unit_quaternion<R: Rng + ?Sized>(rng: &mut R) -> Quaternion {
    loop {
        let i: f64 = rng.random_range(-1.0..=1.0);
        let j: f64 = rng.random_range(-1.0..=1.0);
        let k: f64 = rng.random_range(-1.0..=1.0);
        let w: f64 = rng.random_range(-1.0..=1.0);

        let norm = (w * w + i * i + j * j + k * k).sqrt();
        if norm >= MIN_QUATERNION_NORM {
            return Quaternion {
                w: w / norm,
                i: i / norm,
                j: j / norm,
                k: k / norm,
            };
        }
    }
}

/// Six independent angles in [-π, π]. No kinematic limits are applied.
pub fn joint_angles<R: Rng + ?Sized>(rng: &mut R) -> JointAngles {
    JointAngles(std::array::from_fn(|_| rng.random_range(JOINT_ANGLE_RANGE)))
}

pub fn pose<R: Rng + ?Sized>(rng: &mut R) -> Pose {
    let orientation = unit_quaternion(rng);
    Pose {
        orientation,
        x: rng.random_range(POSITION_RANGE),
        y: rng.random_range(POSITION_RANGE),
        z: rng.random_range(POSITION_RANGE),
    }
}

/// A gripper diameter drawn uniformly from `range`. `range` must not be inverted.
pub fn diameter<R: Rng + ?Sized>(rng: &mut R, range: RangeInclusive<f64>) -> f64 {
    rng.random_range(range)
}

/// Rounds a diameter to two decimals, clamped back onto `range`.
pub fn round_diameter(value: f64, range: &RangeInclusive<f64>) -> f64 {
    ((value * 100.0).round() / 100.0).clamp(*range.start(), *range.end())
}
