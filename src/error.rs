//! Error types.

use std::{
   error::Error as StdError,
   fmt,
};

#[derive(Debug)]
pub enum Error {
   /// An x control value lies outside `[0, 1]`.
   InvalidControlPoint { x1: f64, x2: f64 },
   /// Solver or sketch configuration was rejected.
   InvalidConfig(String),
   /// Writing SVG markup failed.
   #[cfg(feature = "svg")]
   Format(fmt::Error),
}

impl fmt::Display for Error {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      match *self {
         Self::InvalidControlPoint { x1, x2 } => {
            write!(f, "bezier x values must be in [0, 1] range (x1 = {x1}, x2 = {x2})")
         },
         Self::InvalidConfig(ref msg) => write!(f, "invalid configuration: {msg}"),
         #[cfg(feature = "svg")]
         Self::Format(ref err) => write!(f, "failed to write svg: {err}"),
      }
   }
}

impl StdError for Error {
   fn source(&self) -> Option<&(dyn StdError + 'static)> {
      match *self {
         Self::InvalidControlPoint { .. } | Self::InvalidConfig(_) => None,
         #[cfg(feature = "svg")]
         Self::Format(ref err) => Some(err),
      }
   }
}

#[cfg(feature = "svg")]
impl From<fmt::Error> for Error {
   fn from(err: fmt::Error) -> Self {
      Self::Format(err)
   }
}
