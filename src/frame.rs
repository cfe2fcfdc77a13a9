//! Headless description of one rendered frame.

use std::time::Duration;

/// How a shape is colored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
   /// Gray level; 0 is black and 255 is white. Values may leave that range.
   Gray(f64),
   /// A named CSS color.
   Named(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
   /// A filled circle.
   Circle {
      center:   [f64; 2],
      diameter: f64,
      paint:    Paint,
   },
   /// An unfilled ellipse outline.
   Ring {
      center: [f64; 2],
      width:  f64,
      height: f64,
      stroke: Paint,
   },
}

/// Everything drawn for one frame, back to front.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
   /// 1-based frame number.
   pub index:      u64,
   /// How long the frame stays on screen.
   pub duration:   Duration,
   pub width:      f64,
   pub height:     f64,
   pub background: String,
   pub shapes:     Vec<Shape>,
}

impl Frame {
   /// Filled circles in the frame.
   pub fn circles(&self) -> impl Iterator<Item = (&[f64; 2], f64, Paint)> {
      self.shapes.iter().filter_map(|shape| match *shape {
         Shape::Circle {
            ref center,
            diameter,
            paint,
         } => Some((center, diameter, paint)),
         Shape::Ring { .. } => None,
      })
   }
}
