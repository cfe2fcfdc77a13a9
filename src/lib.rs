//! Cubic bezier easing and a headless sunflower particle sketch.
//!
//! ```
//! use sunflower_easing::BezierEasing;
//!
//! let ease = BezierEasing::new(0.165, 0.84, 0.44, 1.0)?;
//! assert_eq!(ease.evaluate(0.0), 0.0);
//! assert!(ease.evaluate(0.5) > 0.9);
//! # Ok::<(), sunflower_easing::Error>(())
//! ```
//!
//! The sketch seeds two particle populations and yields one frame at a time:
//!
//! ```
//! use sunflower_easing::{Sketch, SketchConfig};
//!
//! let mut sketch = Sketch::from_phrase(SketchConfig::default(), "sunflower")?;
//! for frame in sketch.by_ref().take(3) {
//!    assert!(!frame.shapes.is_empty());
//! }
//! # Ok::<(), sunflower_easing::Error>(())
//! ```

mod config;
mod cubic_curve;
mod error;
mod frame;
mod interpolate;
mod particle;
mod rotation;
mod sketch;
mod sunflower;
#[cfg(feature = "svg")]
mod svg;
mod utils;

pub use config::{
   SketchConfig,
   SolverConfig,
};
pub use cubic_curve::{
   BezierEasing,
   Easing,
   Linear,
};
pub use error::Error;
pub use frame::{
   Frame,
   Paint,
   Shape,
};
pub use particle::{
   Appearance,
   RotatingParticle,
   ShootingParticle,
};
pub use sketch::Sketch;
