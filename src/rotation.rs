//! Polar placement around the canvas center.

/// Offset of a point at `radius` and angle `theta` (radians) from its origin.
pub fn polar_offset(radius: f64, theta: f64) -> [f64; 2] {
   let (sin, cos) = theta.sin_cos();
   [radius * cos, radius * sin]
}

/// `origin` moved by [`polar_offset`].
pub fn polar_point(origin: [f64; 2], radius: f64, theta: f64) -> [f64; 2] {
   let [dx, dy] = polar_offset(radius, theta);
   [origin[0] + dx, origin[1] + dy]
}
