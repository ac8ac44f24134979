mod primitive;
mod type_;
mod union;
mod variant;

pub use primitive::*;
pub use type_::*;
pub use union::*;
pub use variant::*;
