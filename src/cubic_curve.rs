//! Cubic bezier easing, like CSS `cubic-bezier()`.
//!
//! The curve runs from (0, 0) to (1, 1) with two free control points. Mapping
//! a progress value `x` to `y` means inverting `x(t)`, which is done with a
//! precomputed sample table, a few Newton-Raphson steps, and a bisection
//! fallback where the curve is too flat for Newton's method.

use tracing::debug;

use crate::{
   config::SolverConfig,
   error::Error,
};

/// Anything that reshapes normalized animation progress.
pub trait Easing {
   /// Maps progress in `[0, 1]` to eased progress.
   fn ease(&self, progress: f64) -> f64;
}

/// The identity easing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Linear;

impl Easing for Linear {
   fn ease(&self, progress: f64) -> f64 {
      progress
   }
}

/// One coordinate of the curve in polynomial form: `((a*t + b)*t + c)*t`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Cubic {
   a: f64,
   b: f64,
   c: f64,
}

impl Cubic {
   /// Coefficients for a coordinate whose inner control values are `p1`, `p2`.
   fn new(p1: f64, p2: f64) -> Self {
      Self {
         a: 3.0f64.mul_add(p1, 3.0f64.mul_add(-p2, 1.0)),
         b: 3.0f64.mul_add(p2, -6.0 * p1),
         c: 3.0 * p1,
      }
   }

   fn value(self, param: f64) -> f64 {
      self.a.mul_add(param, self.b).mul_add(param, self.c) * param
   }

   /// Derivative with respect to the curve parameter.
   fn slope(self, param: f64) -> f64 {
      (3.0 * self.a * param).mul_add(param, (2.0 * self.b).mul_add(param, self.c))
   }
}

#[derive(Clone, Debug, PartialEq)]
struct Curve {
   x:       Cubic,
   y:       Cubic,
   samples: Box<[f64]>,
   step:    f64,
   config:  SolverConfig,
}

#[derive(Clone, Debug, PartialEq)]
enum Kind {
   Identity,
   Curve(Curve),
}

/// Easing function built from the control points `(x1, y1)` and `(x2, y2)`.
///
/// `x1` and `x2` must lie in `[0, 1]` so that `x(t)` is a function of `t`.
/// `y1` and `y2` are free; values outside `[0, 1]` overshoot.
#[derive(Clone, Debug, PartialEq)]
pub struct BezierEasing {
   kind: Kind,
}

impl BezierEasing {
   /// Builds an easing with the default solver tuning.
   pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, Error> {
      Self::with_config(x1, y1, x2, y2, SolverConfig::default())
   }

   /// Builds an easing with explicit solver tuning.
   pub fn with_config(
      x1: f64,
      y1: f64,
      x2: f64,
      y2: f64,
      config: SolverConfig,
   ) -> Result<Self, Error> {
      if !((0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2)) {
         return Err(Error::InvalidControlPoint { x1, x2 });
      }
      config.validate()?;
      Ok(Self::build(x1, y1, x2, y2, config))
   }

   /// `cubic-bezier(0.165, 0.84, 0.44, 1)`, the curve the sketch moves
   /// shooting particles with.
   pub fn ease_in_quart() -> Self {
      Self::build(0.165, 0.84, 0.44, 1.0, SolverConfig::default())
   }

   #[expect(clippy::float_cmp, reason = "identity curve is detected by exact equality")]
   #[expect(clippy::cast_precision_loss, reason = "sample counts are tiny")]
   fn build(x1: f64, y1: f64, x2: f64, y2: f64, config: SolverConfig) -> Self {
      if x1 == y1 && x2 == y2 {
         debug!(x1, x2, "bezier easing is the identity");
         return Self {
            kind: Kind::Identity,
         };
      }

      let x = Cubic::new(x1, x2);
      let step = 1.0 / (config.sample_count - 1) as f64;
      let samples = (0..config.sample_count)
         .map(|idx| x.value(idx as f64 * step))
         .collect();

      debug!(x1, y1, x2, y2, samples = config.sample_count, "built bezier easing");

      Self {
         kind: Kind::Curve(Curve {
            x,
            y: Cubic::new(y1, y2),
            samples,
            step,
            config,
         }),
      }
   }

   /// Whether the control points collapsed into the identity line.
   pub const fn is_identity(&self) -> bool {
      matches!(self.kind, Kind::Identity)
   }

   /// Returns `y` for progress `x`.
   ///
   /// `x` must lie in `[0, 1]`; other inputs are not checked and give
   /// meaningless results. `0` and `1` map to exactly `0` and `1`.
   #[expect(clippy::float_cmp, reason = "endpoints are pinned exactly")]
   pub fn evaluate(&self, x: f64) -> f64 {
      match self.kind {
         Kind::Identity => x,
         Kind::Curve(ref curve) => {
            if x == 0.0 {
               return 0.0;
            }
            if x == 1.0 {
               return 1.0;
            }
            curve.y.value(curve.param_for(x))
         },
      }
   }
}

impl Easing for BezierEasing {
   fn ease(&self, progress: f64) -> f64 {
      self.evaluate(progress)
   }
}

impl Curve {
   /// Inverts `x(t)`.
   #[expect(clippy::float_cmp, reason = "a zero slope cannot be refined")]
   fn param_for(&self, target: f64) -> f64 {
      let last = self.samples.len() - 1;
      let mut interval_start = 0.0;
      let mut current = 1;

      while current != last && self.samples[current] <= target {
         interval_start += self.step;
         current += 1;
      }
      current -= 1;

      let low = self.samples[current];
      let high = self.samples[current + 1];
      let guess = ((target - low) / (high - low)).mul_add(self.step, interval_start);

      let initial_slope = self.x.slope(guess);
      if initial_slope >= self.config.newton_min_slope {
         self.newton_raphson(target, guess)
      } else if initial_slope == 0.0 {
         guess
      } else {
         self.bisect(target, interval_start, interval_start + self.step)
      }
   }

   #[expect(clippy::float_cmp, reason = "stop before dividing by zero")]
   fn newton_raphson(&self, target: f64, mut guess: f64) -> f64 {
      for _ in 0..self.config.newton_iterations {
         let slope = self.x.slope(guess);
         if slope == 0.0 {
            return guess;
         }
         guess -= (self.x.value(guess) - target) / slope;
      }
      guess
   }

   fn bisect(&self, target: f64, mut low: f64, mut high: f64) -> f64 {
      let mut iterations = 0;
      loop {
         let mid = f64::midpoint(low, high);
         let residual = self.x.value(mid) - target;

         if residual > 0.0 {
            high = mid;
         } else {
            low = mid;
         }

         iterations += 1;
         if residual.abs() <= self.config.subdivision_precision
            || iterations >= self.config.subdivision_max_iterations
         {
            return mid;
         }
      }
   }
}
