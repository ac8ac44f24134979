use super::{error::ConstructionError, instance::Instance, value::Value};
use crate::types::{Type, Union, Variant};
use std::hash::{Hash, Hasher};

/// A variant factory. It compares equal to its own variant name so that it can
/// key a match table directly.
#[derive(Clone, Debug)]
pub struct Factory {
    union: Union,
    variant_index: usize,
}

impl Factory {
    pub(crate) fn new(union: Union, variant_index: usize) -> Self {
        Self {
            union,
            variant_index,
        }
    }

    pub fn union(&self) -> &Union {
        &self.union
    }

    pub fn variant(&self) -> &Variant {
        self.union.variant_at(self.variant_index)
    }

    pub fn name(&self) -> &str {
        self.variant().name()
    }

    /// Validates arguments eagerly in declared field order and constructs an
    /// immutable instance. No instance is ever observable on failure.
    pub fn construct(&self, arguments: Vec<Value>) -> Result<Instance, ConstructionError> {
        let variant = self.variant();
        let mut field_types = variant.field_types().iter();

        for (index, argument) in arguments.iter().enumerate() {
            match field_types.next() {
                None | Some(Type::Unit) => return Err(self.arity_mismatch(&arguments)),
                Some(type_) => {
                    if !check_argument(argument, type_, &self.union) {
                        return Err(ConstructionError::TypeMismatch {
                            union: self.union.name().into(),
                            variant: variant.name().into(),
                            field_index: index,
                            expected: type_.clone(),
                            found: argument.type_(),
                        });
                    }
                }
            }
        }

        // The terminator must come up right after the last argument.
        if field_types.next() != Some(&Type::Unit) {
            return Err(self.arity_mismatch(&arguments));
        }

        Ok(Instance::new(
            self.union.clone(),
            self.variant_index,
            arguments,
        ))
    }

    fn arity_mismatch(&self, arguments: &[Value]) -> ConstructionError {
        ConstructionError::ArityMismatch {
            union: self.union.name().into(),
            variant: self.name().into(),
            expected: self.variant().arity(),
            found: arguments.len(),
        }
    }
}

fn check_argument(argument: &Value, type_: &Type, union: &Union) -> bool {
    match type_ {
        Type::Any => true,
        Type::Primitive(primitive) => argument.type_().to_primitive() == Some(*primitive),
        Type::Recursive => argument
            .to_instance()
            .map(|instance| instance.union() == union)
            .unwrap_or(false),
        Type::Union(other) => argument
            .to_instance()
            .map(|instance| instance.union() == other)
            .unwrap_or(false),
        Type::Unit => false,
    }
}

impl PartialEq for Factory {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Factory {}

impl PartialEq<str> for Factory {
    fn eq(&self, other: &str) -> bool {
        self.name() == other
    }
}

impl PartialEq<&str> for Factory {
    fn eq(&self, other: &&str) -> bool {
        self.name() == *other
    }
}

impl Hash for Factory {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.name().hash(hasher);
    }
}
