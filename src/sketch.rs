//! The sunflower sketch: two particle populations advanced frame by frame.

use rand::{
   SeedableRng,
   rngs::StdRng,
};
use tracing::debug;

use crate::{
   config::SketchConfig,
   cubic_curve::{
      BezierEasing,
      Easing,
   },
   error::Error,
   frame::{
      Frame,
      Paint,
      Shape,
   },
   particle::{
      Appearance,
      RotatingParticle,
      ShootingParticle,
   },
   sunflower::boundary_points,
   utils::seed_from_phrase,
};

/// Headless generative sketch.
///
/// Rotating particles orbit the center on a sunflower spiral and pulse in and
/// out of view. Shooting particles leave spiral seeds for random points, with
/// their motion shaped by `E`. Each [`step`](Self::step) yields one [`Frame`].
///
/// ```
/// use sunflower_easing::{Sketch, SketchConfig};
///
/// let mut sketch = Sketch::new(SketchConfig::default(), 42)?;
/// let frame = sketch.step();
/// assert_eq!(frame.index, 1);
/// # Ok::<(), sunflower_easing::Error>(())
/// ```
pub struct Sketch<E = BezierEasing> {
   config:            SketchConfig,
   easing:            E,
   rng:               StdRng,
   frame:             u64,
   shooting_boundary: f64,
   rotating:          Vec<RotatingParticle>,
   shooting:          Vec<ShootingParticle>,
}

impl Sketch {
   /// Seeds a sketch whose shooting particles use the ease-in-quart curve.
   pub fn new(config: SketchConfig, seed: u64) -> Result<Self, Error> {
      Self::with_easing(config, BezierEasing::ease_in_quart(), seed)
   }

   /// Seeds a sketch from a phrase instead of a number.
   pub fn from_phrase(config: SketchConfig, phrase: &str) -> Result<Self, Error> {
      Self::new(config, seed_from_phrase(phrase))
   }
}

impl<E: Easing> Sketch<E> {
   pub fn with_easing(config: SketchConfig, easing: E, seed: u64) -> Result<Self, Error> {
      config.validate()?;

      let mut rng = StdRng::seed_from_u64(seed);
      let shooting_boundary = boundary_points(config.shooting_count, config.alpha_shooting);
      let shooting = (0..config.shooting_count)
         .map(|k| ShootingParticle::seed(&config, k, shooting_boundary, &mut rng))
         .collect();

      let rotating_boundary = boundary_points(config.rotating_count, config.alpha_rotating);
      let rotating = (0..config.rotating_count)
         .map(|k| RotatingParticle::seed(&config, k, rotating_boundary, &mut rng))
         .collect();

      debug!(
         seed,
         rotating = config.rotating_count,
         shooting = config.shooting_count,
         "seeded sketch"
      );

      Ok(Self {
         config,
         easing,
         rng,
         frame: 0,
         shooting_boundary,
         rotating,
         shooting,
      })
   }

   pub const fn config(&self) -> &SketchConfig {
      &self.config
   }

   pub fn rotating(&self) -> &[RotatingParticle] {
      &self.rotating
   }

   pub fn shooting(&self) -> &[ShootingParticle] {
      &self.shooting
   }

   /// Frames produced so far.
   pub const fn frame_count(&self) -> u64 {
      self.frame
   }

   /// Flips the debug overlay on or off.
   pub const fn toggle_debug(&mut self) {
      self.config.debug = !self.config.debug;
   }

   /// Brightness multiplier while the sketch fades in.
   #[expect(clippy::cast_precision_loss, reason = "frame counts stay far below 2^52")]
   fn fade(&self) -> f64 {
      (self.frame as f64 / f64::from(self.config.fade_in_frames)).min(1.0)
   }

   /// Advances every particle by one frame and describes what to draw.
   pub fn step(&mut self) -> Frame {
      self.frame += 1;
      let fade = self.fade();
      let debug = self.config.debug;
      let center = self.config.center();
      let marker = self.config.max_particle_size;

      let mut shapes = Vec::with_capacity(self.rotating.len() + self.shooting.len());

      if debug {
         shapes.push(Shape::Ring {
            center,
            width: self.config.width,
            height: self.config.height,
            stroke: Paint::Named("green"),
         });
      }

      for particle in &mut self.rotating {
         let appearance = particle.step(&self.config, fade, &mut self.rng);
         shapes.push(circle(appearance, Paint::Gray(appearance.gray)));
         if debug {
            shapes.push(circle(appearance, Paint::Named("blue")));
         }
      }

      for particle in &mut self.shooting {
         let appearance = particle.step(
            &self.config,
            self.shooting_boundary,
            &self.easing,
            fade,
            &mut self.rng,
         );
         shapes.push(circle(appearance, Paint::Gray(appearance.gray)));
         if debug {
            shapes.push(Shape::Circle {
               center:   particle.destination,
               diameter: marker,
               paint:    Paint::Named("red"),
            });
            shapes.push(Shape::Circle {
               center:   particle.source,
               diameter: marker,
               paint:    Paint::Named("yellow"),
            });
         }
      }

      Frame {
         index: self.frame,
         duration: self.config.frame_duration(),
         width: self.config.width,
         height: self.config.height,
         background: self.config.background.clone(),
         shapes,
      }
   }
}

const fn circle(appearance: Appearance, paint: Paint) -> Shape {
   Shape::Circle {
      center: appearance.center,
      diameter: appearance.diameter,
      paint,
   }
}

impl<E: Easing> Iterator for Sketch<E> {
   type Item = Frame;

   fn next(&mut self) -> Option<Frame> {
      Some(self.step())
   }
}
