//! Linear interpolation.

/// Lerp between two values: `from * (1 - factor) + to * factor`.
pub fn lerp(from: f64, to: f64, factor: f64) -> f64 {
   from.mul_add(1.0 - factor, to * factor)
}

/// Interpolates two points coordinate-wise.
pub fn lerp_point(from: [f64; 2], to: [f64; 2], factor: f64) -> [f64; 2] {
   [lerp(from[0], to[0], factor), lerp(from[1], to[1], factor)]
}
