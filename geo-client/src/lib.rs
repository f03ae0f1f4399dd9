#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![cfg_attr(feature = "fail-on-warnings", deny(clippy::all))]

mod client;
mod distance;
mod error;

pub use client::*;
pub use distance::*;
pub use error::*;
