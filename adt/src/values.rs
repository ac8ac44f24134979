mod error;
mod factory;
mod instance;
mod value;

pub use error::*;
pub use factory::*;
pub use instance::*;
pub use value::*;
