use super::instance::Instance;
use crate::types::{Primitive, Type};
use std::fmt::{self, Display, Formatter};

/// A runtime value: a scalar or a union instance.
///
/// Scalars are limited to types with total structural equality so that values
/// can live in host sets and maps.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Value {
    Boolean(bool),
    Instance(Instance),
    Integer64(i64),
    String(String),
}

impl Value {
    pub fn type_(&self) -> Type {
        match self {
            Self::Boolean(_) => Primitive::Boolean.into(),
            Self::Instance(instance) => instance.union().clone().into(),
            Self::Integer64(_) => Primitive::Integer64.into(),
            Self::String(_) => Primitive::String.into(),
        }
    }

    pub fn to_boolean(&self) -> Option<bool> {
        if let Self::Boolean(boolean) = self {
            Some(*boolean)
        } else {
            None
        }
    }

    pub fn to_instance(&self) -> Option<&Instance> {
        if let Self::Instance(instance) = self {
            Some(instance)
        } else {
            None
        }
    }

    pub fn to_integer64(&self) -> Option<i64> {
        if let Self::Integer64(number) = self {
            Some(*number)
        } else {
            None
        }
    }

    pub fn to_str(&self) -> Option<&str> {
        if let Self::String(string) = self {
            Some(string)
        } else {
            None
        }
    }
}

impl Display for Value {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::Boolean(boolean) => write!(formatter, "{}", boolean),
            Self::Instance(instance) => write!(formatter, "{}", instance),
            Self::Integer64(number) => write!(formatter, "{}", number),
            Self::String(string) => write!(formatter, "{:?}", string),
        }
    }
}

impl From<bool> for Value {
    fn from(boolean: bool) -> Self {
        Self::Boolean(boolean)
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        Self::Instance(instance)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Integer64(number)
    }
}

impl From<&str> for Value {
    fn from(string: &str) -> Self {
        Self::String(string.into())
    }
}

impl From<String> for Value {
    fn from(string: String) -> Self {
        Self::String(string)
    }
}
