mod error;
mod union_builder;

pub use error::*;
pub use union_builder::*;
