//! Solver tuning and sketch parameters.

use std::time::Duration;

use crate::error::Error;

/// Numeric tuning for [`BezierEasing`](crate::BezierEasing).
///
/// The defaults trade a little precision for a fixed, small cost per call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
   /// Newton-Raphson steps taken once the initial slope is steep enough.
   pub newton_iterations:          u32,
   /// Below this slope the solver bisects instead of using Newton-Raphson.
   pub newton_min_slope:           f64,
   /// Bisection stops once `|x(t) - x|` is within this distance.
   pub subdivision_precision:      f64,
   pub subdivision_max_iterations: u32,
   /// Number of `x(t)` samples taken at evenly spaced `t`, endpoints included.
   pub sample_count:               usize,
}

impl Default for SolverConfig {
   fn default() -> Self {
      Self {
         newton_iterations:          4,
         newton_min_slope:           0.001,
         subdivision_precision:      0.000_000_1,
         subdivision_max_iterations: 10,
         sample_count:               11,
      }
   }
}

impl SolverConfig {
   pub fn validate(&self) -> Result<(), Error> {
      if self.sample_count < 2 {
         return Err(Error::InvalidConfig(format!(
            "sample_count must be at least 2, got {}",
            self.sample_count
         )));
      }
      if self.subdivision_max_iterations == 0 {
         return Err(Error::InvalidConfig(
            "subdivision_max_iterations must be positive".to_owned(),
         ));
      }
      if !(self.newton_min_slope.is_finite() && self.newton_min_slope >= 0.0) {
         return Err(Error::InvalidConfig(format!(
            "newton_min_slope must be finite and non-negative, got {}",
            self.newton_min_slope
         )));
      }
      if !(self.subdivision_precision.is_finite() && self.subdivision_precision >= 0.0) {
         return Err(Error::InvalidConfig(format!(
            "subdivision_precision must be finite and non-negative, got {}",
            self.subdivision_precision
         )));
      }
      Ok(())
   }
}

/// Canvas and particle parameters for [`Sketch`](crate::Sketch).
#[derive(Clone, Debug, PartialEq)]
pub struct SketchConfig {
   pub width:             f64,
   pub height:            f64,
   /// Upper bound for a particle's base diameter.
   pub max_particle_size: f64,
   pub rotating_count:    usize,
   /// Frames a rotating particle lives before it reappears elsewhere.
   pub rotating_lifetime: u32,
   pub shooting_count:    usize,
   /// Frames a shooting particle takes to travel between its endpoints.
   pub shooting_lifetime: u32,
   pub max_gray:          f64,
   /// Rotating particles never get darker than this.
   pub min_gray:          f64,
   /// Scales how many sunflower seeds are pushed onto the outer boundary.
   pub alpha_rotating:    f64,
   pub alpha_shooting:    f64,
   /// Frames over which the whole sketch fades in.
   pub fade_in_frames:    u32,
   pub frame_rate:        u32,
   pub background:        String,
   /// Draws the boundary ring and per-particle markers.
   pub debug:             bool,
}

impl Default for SketchConfig {
   fn default() -> Self {
      Self::for_canvas(600.0, 600.0)
   }
}

impl SketchConfig {
   /// Derives particle counts and sizes from the canvas width.
   #[expect(clippy::cast_possible_truncation, reason = "counts are small")]
   #[expect(clippy::cast_sign_loss, reason = "negative widths are rejected by validate")]
   pub fn for_canvas(width: f64, height: f64) -> Self {
      Self {
         width,
         height,
         max_particle_size: width * 4.0 / 600.0,
         rotating_count: (width * 0.8) as usize,
         rotating_lifetime: 100,
         shooting_count: (width * 0.2) as usize,
         shooting_lifetime: 100,
         max_gray: 256.0,
         min_gray: 34.0,
         alpha_rotating: 2.0,
         alpha_shooting: 0.0,
         fade_in_frames: 50,
         frame_rate: 30,
         background: "#222".to_owned(),
         debug: false,
      }
   }

   pub fn center(&self) -> [f64; 2] {
      [self.width / 2.0, self.height / 2.0]
   }

   pub fn validate(&self) -> Result<(), Error> {
      let finite = [
         ("width", self.width),
         ("height", self.height),
         ("max_particle_size", self.max_particle_size),
         ("max_gray", self.max_gray),
         ("min_gray", self.min_gray),
         ("alpha_rotating", self.alpha_rotating),
         ("alpha_shooting", self.alpha_shooting),
      ];
      if let Some(&(name, value)) = finite.iter().find(|&&(_, value)| !value.is_finite()) {
         return Err(Error::InvalidConfig(format!("{name} must be finite, got {value}")));
      }
      if !(self.width > 0.0 && self.height > 0.0) {
         return Err(Error::InvalidConfig(format!(
            "canvas must have a positive size, got {}x{}",
            self.width, self.height
         )));
      }
      if self.max_particle_size < 1.0 {
         return Err(Error::InvalidConfig(format!(
            "max_particle_size must be at least 1, got {}",
            self.max_particle_size
         )));
      }
      if self.rotating_lifetime == 0 || self.shooting_lifetime == 0 {
         return Err(Error::InvalidConfig("particle lifetimes must be positive".to_owned()));
      }
      if self.fade_in_frames == 0 {
         return Err(Error::InvalidConfig("fade_in_frames must be positive".to_owned()));
      }
      if self.frame_rate == 0 {
         return Err(Error::InvalidConfig("frame_rate must be positive".to_owned()));
      }
      Ok(())
   }

   /// Wall-clock time one frame stays on screen.
   pub fn frame_duration(&self) -> Duration {
      Duration::from_secs(1) / self.frame_rate.max(1)
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn default_sketch_matches_canvas() {
      let config = SketchConfig::default();
      assert_eq!(config.rotating_count, 480);
      assert_eq!(config.shooting_count, 120);
      assert!((config.max_particle_size - 4.0).abs() < f64::EPSILON);
      assert_eq!(config.center(), [300.0, 300.0]);
      config.validate().unwrap();
   }

   #[test]
   fn sketch_rejects_bad_values() {
      let mut config = SketchConfig::default();
      config.shooting_lifetime = 0;
      config.validate().unwrap_err();

      let mut config = SketchConfig::default();
      config.fade_in_frames = 0;
      config.validate().unwrap_err();

      SketchConfig::for_canvas(0.0, 100.0).validate().unwrap_err();
      SketchConfig::for_canvas(f64::NAN, 100.0).validate().unwrap_err();
      SketchConfig::for_canvas(f64::INFINITY, 100.0).validate().unwrap_err();

      let mut config = SketchConfig::default();
      config.frame_rate = 0;
      config.validate().unwrap_err();
   }

   #[test]
   fn sketch_rejects_non_finite_floats() {
      let cases: [fn(&mut SketchConfig); 6] = [
         |config| config.max_particle_size = f64::NAN,
         |config| config.max_particle_size = f64::INFINITY,
         |config| config.max_gray = f64::NAN,
         |config| config.min_gray = f64::NAN,
         |config| config.alpha_rotating = f64::NAN,
         |config| config.alpha_shooting = f64::NEG_INFINITY,
      ];
      for apply in cases {
         let mut config = SketchConfig::default();
         apply(&mut config);
         let err = config.validate().unwrap_err();
         assert!(err.to_string().contains("must be finite"));
      }
   }

   #[test]
   fn frame_duration_follows_rate() {
      let config = SketchConfig::default();
      assert_eq!(config.frame_duration(), Duration::from_secs(1) / 30);
   }

   #[test]
   fn solver_defaults_are_valid() {
      SolverConfig::default().validate().unwrap();
   }

   #[test]
   fn solver_rejects_bad_values() {
      let config = SolverConfig {
         sample_count: 1,
         ..SolverConfig::default()
      };
      assert!(config.validate().unwrap_err().to_string().contains("sample_count"));

      let config = SolverConfig {
         newton_min_slope: f64::NAN,
         ..SolverConfig::default()
      };
      config.validate().unwrap_err();

      let config = SolverConfig {
         subdivision_precision: -1.0,
         ..SolverConfig::default()
      };
      config.validate().unwrap_err();

      let config = SolverConfig {
         subdivision_max_iterations: 0,
         ..SolverConfig::default()
      };
      config.validate().unwrap_err();
   }
}
