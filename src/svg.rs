//! SVG serialization of frames.

use std::fmt::Write as _;

use crate::{
   error::Error,
   frame::{
      Frame,
      Paint,
      Shape,
   },
   utils::{
      base64_encode,
      gray_hex,
   },
};

fn color(paint: Paint) -> String {
   match paint {
      Paint::Gray(level) => gray_hex(level),
      Paint::Named(name) => name.to_owned(),
   }
}

impl Frame {
   /// Renders the frame as a standalone SVG document.
   pub fn to_svg(&self) -> Result<String, Error> {
      let mut svg = String::with_capacity(64 + self.shapes.len() * 80);
      write!(
         svg,
         r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
         w = self.width,
         h = self.height,
      )?;
      write!(
         svg,
         r#"<rect width="100%" height="100%" fill="{}"/>"#,
         self.background
      )?;

      for shape in &self.shapes {
         match *shape {
            Shape::Circle {
               center: [x, y],
               diameter,
               paint,
            } => write!(
               svg,
               r#"<circle cx="{x:.3}" cy="{y:.3}" r="{:.3}" fill="{}"/>"#,
               diameter / 2.0,
               color(paint)
            )?,
            Shape::Ring {
               center: [x, y],
               width,
               height,
               stroke,
            } => write!(
               svg,
               r#"<ellipse cx="{x:.3}" cy="{y:.3}" rx="{:.3}" ry="{:.3}" fill="none" stroke="{}"/>"#,
               width / 2.0,
               height / 2.0,
               color(stroke)
            )?,
         }
      }

      svg.push_str("</svg>");
      Ok(svg)
   }

   /// Renders the frame as a `data:image/svg+xml;base64,` URI.
   pub fn to_data_uri(&self) -> Result<String, Error> {
      let svg = self.to_svg()?;
      Ok(format!("data:image/svg+xml;base64,{}", base64_encode(svg.as_bytes())))
   }
}
