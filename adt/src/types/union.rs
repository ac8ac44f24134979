use super::variant::Variant;
use crate::values::{Factory, Instance};
use indexmap::IndexMap;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A custom textual renderer preferred over the default rendering.
pub type Renderer = Box<dyn Fn(&Instance) -> String + Send + Sync>;

/// A union type handle. Cheap to clone and freely shareable across threads.
#[derive(Clone)]
pub struct Union(Arc<UnionInner>);

struct UnionInner {
    name: String,
    variants: IndexMap<String, Variant>,
    renderer: Option<Renderer>,
}

impl Union {
    pub(crate) fn new(
        name: String,
        variants: IndexMap<String, Variant>,
        renderer: Option<Renderer>,
    ) -> Self {
        Self(
            UnionInner {
                name,
                variants,
                renderer,
            }
            .into(),
        )
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn variants(&self) -> impl ExactSizeIterator<Item = &Variant> {
        self.0.variants.values()
    }

    pub fn variant(&self, name: &str) -> Option<Factory> {
        self.0
            .variants
            .get_index_of(name)
            .map(|index| Factory::new(self.clone(), index))
    }

    /// Variant factories in declaration order.
    pub fn factories(&self) -> impl Iterator<Item = Factory> + '_ {
        (0..self.0.variants.len()).map(|index| Factory::new(self.clone(), index))
    }

    pub(crate) fn variant_at(&self, index: usize) -> &Variant {
        &self.0.variants[index]
    }

    pub(crate) fn renderer(&self) -> Option<&Renderer> {
        self.0.renderer.as_ref()
    }
}

impl PartialEq for Union {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
            || self.0.name == other.0.name
                && self.0.variants.iter().eq(other.0.variants.iter())
    }
}

impl Eq for Union {}

impl Hash for Union {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.0.name.hash(hasher);

        for variant in self.0.variants.values() {
            variant.hash(hasher);
        }
    }
}

impl Debug for Union {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter
            .debug_struct("Union")
            .field("name", &self.0.name)
            .field("variants", &self.0.variants)
            .finish()
    }
}
