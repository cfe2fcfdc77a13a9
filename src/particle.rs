//! The two particle populations and their per-frame motion.

use std::f64::consts::{
   PI,
   TAU,
};

use rand::Rng;
use tracing::trace;

use crate::{
   config::SketchConfig,
   cubic_curve::Easing,
   interpolate::lerp_point,
   rotation::polar_point,
   sunflower::{
      radius,
      seed_angle,
   },
};

/// Largest angular speed of a rotating particle, in radians per frame.
const MAX_ROTATION: f64 = PI / 400.0;

/// Smallest fraction of its size a particle shrinks to.
const MIN_SIZE_FACTOR: f64 = 0.5;

/// Where a particle is drawn this frame and how.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
   pub center:   [f64; 2],
   pub diameter: f64,
   pub gray:     f64,
}

/// Brightness envelope over a lifetime: 0 at birth, 1 halfway, 0 at death.
fn envelope(life: f64) -> f64 {
   (life * PI).sin()
}

/// A particle orbiting the center on a fixed radius.
#[derive(Clone, Debug, PartialEq)]
pub struct RotatingParticle {
   pub radius:   f64,
   pub theta:    f64,
   /// Radians added to `theta` every frame.
   pub rotation: f64,
   pub age:      f64,
   pub gray:     f64,
   pub size:     f64,
}

impl RotatingParticle {
   /// Seeds particle `k` of the sunflower with `boundary` rim seeds.
   pub fn seed(config: &SketchConfig, k: usize, boundary: f64, rng: &mut impl Rng) -> Self {
      #[expect(clippy::cast_precision_loss, reason = "seed counts are small")]
      let k = k as f64;
      Self {
         radius:   config.width / 2.0 * radius(k, config.rotating_count, boundary),
         theta:    seed_angle(k),
         rotation: rng.random_range(-MAX_ROTATION..MAX_ROTATION),
         age:      rng.random_range(0.0..f64::from(config.rotating_lifetime)),
         gray:     rng.random_range(0.5..1.0),
         size:     rng.random_range(1.0..=config.max_particle_size),
      }
   }

   /// Advances one frame. `fade` scales brightness while the sketch fades in.
   pub fn step(&mut self, config: &SketchConfig, fade: f64, rng: &mut impl Rng) -> Appearance {
      let lifetime = f64::from(config.rotating_lifetime);

      self.theta += self.rotation;
      self.age += 1.0;
      if self.age >= lifetime {
         self.age = 0.0;
         self.theta = rng.random_range(0.0..TAU);
         trace!(radius = self.radius, theta = self.theta, "rotating particle reappeared");
      }

      let shade = envelope(self.age / lifetime);
      Appearance {
         center:   polar_point(config.center(), self.radius, self.theta),
         diameter: shade.max(MIN_SIZE_FACTOR) * self.size,
         gray:     (shade * config.max_gray * fade * self.gray).max(config.min_gray),
      }
   }
}

/// A particle travelling from a sunflower seed to a random point.
#[derive(Clone, Debug, PartialEq)]
pub struct ShootingParticle {
   pub source:      [f64; 2],
   pub destination: [f64; 2],
   /// Frames travelled so far, from 0 to the lifetime.
   pub age:         u32,
   /// Unused by shading; drawn so seeding consumes the same random values.
   pub gray:        f64,
   pub size:        f64,
}

impl ShootingParticle {
   /// Seeds particle `k` with `boundary` rim seeds.
   pub fn seed(config: &SketchConfig, k: usize, boundary: f64, rng: &mut impl Rng) -> Self {
      #[expect(clippy::cast_precision_loss, reason = "seed counts are small")]
      let (source, destination) = Self::endpoints(config, k as f64, boundary, rng);

      #[expect(clippy::cast_possible_truncation, reason = "floored below the lifetime")]
      #[expect(clippy::cast_sign_loss, reason = "sampled from a non-negative range")]
      let age = rng
         .random_range(0.0..f64::from(config.shooting_lifetime))
         .floor() as u32;

      Self {
         source,
         destination,
         age,
         gray: rng.random_range(0.5..1.0),
         size: rng.random_range(1.0..=config.max_particle_size),
      }
   }

   fn endpoints(
      config: &SketchConfig,
      k: f64,
      boundary: f64,
      rng: &mut impl Rng,
   ) -> ([f64; 2], [f64; 2]) {
      let center = config.center();
      let source = polar_point(
         center,
         radius(k, config.shooting_count, boundary) * config.width / 2.0,
         seed_angle(k),
      );

      let theta = rng.random_range(0.0..TAU);
      let distance = rng.random_range(0.0..config.height / 2.0);
      (source, polar_point(center, distance, theta))
   }

   /// Advances one frame, easing the position along the path.
   ///
   /// A particle that finished its trip starts a new one from a random point
   /// on the spiral.
   pub fn step(
      &mut self,
      config: &SketchConfig,
      boundary: f64,
      easing: &impl Easing,
      fade: f64,
      rng: &mut impl Rng,
   ) -> Appearance {
      if self.age == config.shooting_lifetime {
         self.age = 0;
         #[expect(clippy::cast_precision_loss, reason = "seed counts are small")]
         let k = rng.random_range(0.0..config.shooting_count as f64);
         (self.source, self.destination) = Self::endpoints(config, k, boundary, rng);
         trace!(k, "shooting particle relaunched");
      }
      self.age += 1;

      let life = f64::from(self.age) / f64::from(config.shooting_lifetime);
      let shade = envelope(life);
      Appearance {
         center:   lerp_point(self.source, self.destination, easing.ease(life)),
         diameter: shade.max(MIN_SIZE_FACTOR) * self.size,
         gray:     shade * config.max_gray * fade,
      }
   }
}

#[cfg(test)]
mod tests {
   use rand::{
      SeedableRng,
      rngs::StdRng,
   };

   use super::*;
   use crate::{
      cubic_curve::{
         BezierEasing,
         Linear,
      },
      sunflower::boundary_points,
   };

   const TOLERANCE: f64 = 1e-9;

   fn distance(a: [f64; 2], b: [f64; 2]) -> f64 {
      (a[0] - b[0]).hypot(a[1] - b[1])
   }

   #[test]
   fn rotating_seed_ranges() {
      let config = SketchConfig::default();
      let mut rng = StdRng::seed_from_u64(7);
      let boundary = boundary_points(config.rotating_count, config.alpha_rotating);

      for k in 0..config.rotating_count {
         let particle = RotatingParticle::seed(&config, k, boundary, &mut rng);
         assert!(particle.radius >= 0.0 && particle.radius <= 300.0);
         assert!(particle.rotation.abs() <= MAX_ROTATION);
         assert!(particle.age >= 0.0 && particle.age < 100.0);
         assert!(particle.gray >= 0.5 && particle.gray < 1.0);
         assert!(particle.size >= 1.0 && particle.size <= 4.0);
      }
   }

   #[test]
   fn rotating_step_keeps_radius() {
      let config = SketchConfig::default();
      let mut rng = StdRng::seed_from_u64(1);
      let mut particle = RotatingParticle {
         radius:   120.0,
         theta:    0.0,
         rotation: 0.01,
         age:      10.0,
         gray:     0.8,
         size:     3.0,
      };

      let appearance = particle.step(&config, 1.0, &mut rng);
      assert!((particle.theta - 0.01).abs() < TOLERANCE);
      assert!((particle.age - 11.0).abs() < TOLERANCE);
      assert!((distance(appearance.center, config.center()) - 120.0).abs() < 1e-6);
      assert!(appearance.gray >= config.min_gray);
      assert!(appearance.diameter >= 1.5 && appearance.diameter <= 3.0);
   }

   #[test]
   fn rotating_gray_is_floored() {
      let config = SketchConfig::default();
      let mut rng = StdRng::seed_from_u64(2);
      let mut particle = RotatingParticle {
         radius:   50.0,
         theta:    1.0,
         rotation: 0.0,
         age:      50.0,
         gray:     0.9,
         size:     2.0,
      };

      // Still fading in, so the floor wins.
      let appearance = particle.step(&config, 0.0, &mut rng);
      assert!((appearance.gray - config.min_gray).abs() < TOLERANCE);
   }

   #[test]
   fn rotating_particle_reappears() {
      let config = SketchConfig::default();
      let mut rng = StdRng::seed_from_u64(3);
      let mut particle = RotatingParticle {
         radius:   80.0,
         theta:    0.5,
         rotation: 0.0,
         age:      99.5,
         gray:     0.6,
         size:     2.0,
      };

      let appearance = particle.step(&config, 1.0, &mut rng);
      assert!(particle.age.abs() < TOLERANCE);
      assert!((0.0..TAU).contains(&particle.theta));
      assert!((appearance.diameter - 1.0).abs() < TOLERANCE);
   }

   #[test]
   fn shooting_follows_segment() {
      let config = SketchConfig::default();
      let mut rng = StdRng::seed_from_u64(4);
      let easing = BezierEasing::ease_in_quart();
      let mut particle = ShootingParticle {
         source:      [100.0, 100.0],
         destination: [200.0, 300.0],
         age:         0,
         gray:        0.7,
         size:        2.0,
      };

      let total = distance(particle.source, particle.destination);
      for _ in 0..config.shooting_lifetime {
         let appearance = particle.step(&config, 0.0, &easing, 1.0, &mut rng);
         let along = distance(particle.source, appearance.center)
            + distance(appearance.center, particle.destination);
         assert!((along - total).abs() < 1e-6);
      }

      assert_eq!(particle.age, config.shooting_lifetime);
      let last = particle.step(&config, 0.0, &easing, 1.0, &mut rng);
      assert_eq!(particle.age, 1);
      assert!(last.gray > 0.0);
   }

   #[test]
   fn shooting_arrives_at_destination() {
      let config = SketchConfig::default();
      let mut rng = StdRng::seed_from_u64(5);
      let mut particle = ShootingParticle {
         source:      [10.0, 20.0],
         destination: [30.0, 40.0],
         age:         config.shooting_lifetime - 1,
         gray:        0.7,
         size:        2.0,
      };

      let appearance = particle.step(&config, 0.0, &Linear, 1.0, &mut rng);
      assert_eq!(appearance.center, [30.0, 40.0]);
      assert!(appearance.gray.abs() < 1e-9);
      assert!((appearance.diameter - 1.0).abs() < TOLERANCE);
   }

   #[test]
   fn shooting_seed_ranges() {
      let config = SketchConfig::default();
      let mut rng = StdRng::seed_from_u64(6);
      let boundary = boundary_points(config.shooting_count, config.alpha_shooting);
      for k in 0..config.shooting_count {
         let particle = ShootingParticle::seed(&config, k, boundary, &mut rng);
         assert!(particle.age < config.shooting_lifetime);
         assert!(distance(particle.source, config.center()) <= 300.0 + 1e-9);
         assert!(distance(particle.destination, config.center()) < 300.0);
      }
   }
}
