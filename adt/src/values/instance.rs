use super::value::Value;
use crate::format::format_instance;
use crate::types::{Union, Variant};
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An immutable union instance carrying a variant tag and payload.
#[derive(Clone, Debug)]
pub struct Instance(Arc<InstanceInner>);

#[derive(Debug)]
struct InstanceInner {
    union: Union,
    variant_index: usize,
    payload: Vec<Value>,
}

impl Instance {
    pub(crate) fn new(union: Union, variant_index: usize, payload: Vec<Value>) -> Self {
        Self(
            InstanceInner {
                union,
                variant_index,
                payload,
            }
            .into(),
        )
    }

    pub fn union(&self) -> &Union {
        &self.0.union
    }

    pub fn variant(&self) -> &Variant {
        self.0.union.variant_at(self.0.variant_index)
    }

    pub fn tag(&self) -> &str {
        self.variant().name()
    }

    pub fn payload(&self) -> &[Value] {
        &self.0.payload
    }
}

// Equality is structural over the tag and payload, not instance identity.
impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.tag() == other.tag() && self.payload() == other.payload()
    }
}

impl Eq for Instance {}

impl Hash for Instance {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.tag().hash(hasher);
        self.payload().hash(hasher);
    }
}

impl Display for Instance {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        if let Some(renderer) = self.union().renderer() {
            write!(formatter, "{}", renderer(self))
        } else {
            write!(formatter, "{}", format_instance(self))
        }
    }
}
