use crate::types::Type;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConstructionError {
    ArityMismatch {
        union: String,
        variant: String,
        expected: usize,
        found: usize,
    },
    TypeMismatch {
        union: String,
        variant: String,
        field_index: usize,
        expected: Type,
        found: Type,
    },
}

impl Display for ConstructionError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{:?}", self)
    }
}

impl Error for ConstructionError {}
