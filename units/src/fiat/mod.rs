mod convert;
mod converter;
mod price_quote;
mod traits;

pub use convert::*;
pub use converter::*;
pub use price_quote::*;
pub use traits::*;
