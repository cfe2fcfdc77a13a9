//! Sunflower seed arrangement of points in a disc.
//!
//! Seed `k` of `n` sits at the golden angle times `k`, with a radius chosen so
//! the seeds cover the disc evenly. The last `b` seeds are pushed onto the
//! rim, which gives the disc a crisp boundary.

use std::f64::consts::TAU;

use crate::utils::js_round;

/// The golden ratio.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Angle of seed `k`, in radians.
pub fn seed_angle(k: f64) -> f64 {
   TAU * k / (PHI * PHI)
}

/// How many of `n` seeds sit on the rim for a given `alpha`.
#[expect(clippy::cast_precision_loss, reason = "seed counts are small")]
pub fn boundary_points(n: usize, alpha: f64) -> f64 {
   js_round(alpha * (n as f64).sqrt())
}

/// Normalized radius of seed `k` of `n`, with `boundary` seeds on the rim.
///
/// `k` is real so that a random position along the spiral can be drawn.
/// Seeds below `k = 0.5` collapse onto the center.
#[expect(clippy::cast_precision_loss, reason = "seed counts are small")]
pub fn radius(k: f64, n: usize, boundary: f64) -> f64 {
   let n = n as f64;
   if k > n - boundary {
      return 1.0;
   }
   (k - 0.5).max(0.0).sqrt() / (n - (boundary + 1.0) / 2.0).sqrt()
}
