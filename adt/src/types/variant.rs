use super::type_::Type;
use std::sync::Arc;

/// A variant descriptor with a normalized, terminator-ended field type list.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Variant {
    name: Arc<str>,
    field_types: Arc<[Type]>,
}

impl Variant {
    pub fn new(name: impl Into<String>, field_types: Vec<Type>) -> Self {
        Self {
            name: name.into().into(),
            field_types: normalize(field_types).into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_types(&self) -> &[Type] {
        &self.field_types
    }

    pub fn payload_types(&self) -> &[Type] {
        &self.field_types[..self.arity()]
    }

    pub fn arity(&self) -> usize {
        self.field_types
            .iter()
            .position(|type_| type_ == &Type::Unit)
            .unwrap_or(self.field_types.len())
    }

    pub fn is_recursive(&self) -> bool {
        self.payload_types()
            .iter()
            .any(|type_| type_ == &Type::Recursive)
    }
}

fn normalize(mut types: Vec<Type>) -> Vec<Type> {
    if let Some(index) = types.iter().position(|type_| type_ == &Type::Unit) {
        types.truncate(index + 1);
    } else {
        types.push(Type::Unit);
    }

    types
}
