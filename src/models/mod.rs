mod listing;
mod product;

pub use listing::*;
pub use product::*;
