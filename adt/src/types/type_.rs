use super::{primitive::Primitive, union::Union};

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Type {
    /// Accepts any value, like a top type.
    Any,
    Primitive(Primitive),
    /// The union type being defined itself.
    Recursive,
    Union(Union),
    /// A field list terminator. Every normalized field list ends with one.
    Unit,
}

impl Type {
    pub fn to_primitive(&self) -> Option<Primitive> {
        if let Type::Primitive(primitive) = self {
            Some(*primitive)
        } else {
            None
        }
    }

    pub fn to_union(&self) -> Option<&Union> {
        if let Type::Union(union) = self {
            Some(union)
        } else {
            None
        }
    }
}

impl From<Primitive> for Type {
    fn from(primitive: Primitive) -> Self {
        Self::Primitive(primitive)
    }
}

impl From<Union> for Type {
    fn from(union: Union) -> Self {
        Self::Union(union)
    }
}
