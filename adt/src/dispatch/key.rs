use crate::values::{Factory, Value};

/// A match table key: a variant tag or a scalar value.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Key {
    Scalar(Value),
    Tag(String),
}

impl Key {
    pub fn tag(name: impl Into<String>) -> Self {
        Self::Tag(name.into())
    }

    pub(crate) fn of(value: &Value) -> Self {
        if let Some(instance) = value.to_instance() {
            Self::Tag(instance.tag().into())
        } else {
            Self::Scalar(value.clone())
        }
    }
}

impl From<Factory> for Key {
    fn from(factory: Factory) -> Self {
        Self::Tag(factory.name().into())
    }
}

impl From<&Factory> for Key {
    fn from(factory: &Factory) -> Self {
        Self::Tag(factory.name().into())
    }
}

impl From<Value> for Key {
    fn from(value: Value) -> Self {
        Self::Scalar(value)
    }
}

impl From<bool> for Key {
    fn from(boolean: bool) -> Self {
        Self::Scalar(boolean.into())
    }
}

impl From<i64> for Key {
    fn from(number: i64) -> Self {
        Self::Scalar(number.into())
    }
}

impl From<&str> for Key {
    fn from(string: &str) -> Self {
        Self::Scalar(string.into())
    }
}
