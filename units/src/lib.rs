#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![cfg_attr(feature = "fail-on-warnings", deny(clippy::all))]

mod amount;
pub mod currency;
mod error;
pub mod fiat;
mod scale;

pub use amount::*;
pub use error::*;
pub use scale::*;
