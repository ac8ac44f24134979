use super::error::DefinitionError;
use crate::types::{Renderer, Type, Union, Variant};
use crate::values::Instance;
use indexmap::IndexMap;

/// A declarative union definition. Variants are registered in order and
/// validated once by [`build`](UnionBuilder::build).
pub struct UnionBuilder {
    name: String,
    variants: Vec<Variant>,
    renderer: Option<Renderer>,
}

impl UnionBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: vec![],
            renderer: None,
        }
    }

    pub fn variant(mut self, name: impl Into<String>, field_types: Vec<Type>) -> Self {
        self.variants.push(Variant::new(name, field_types));
        self
    }

    pub fn renderer(
        mut self,
        renderer: impl Fn(&Instance) -> String + Send + Sync + 'static,
    ) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn build(self) -> Result<Union, DefinitionError> {
        let mut variants = IndexMap::with_capacity(self.variants.len());

        for variant in self.variants {
            let name = variant.name().to_owned();

            if variants.insert(name.clone(), variant).is_some() {
                return Err(DefinitionError::DuplicateVariantName {
                    union: self.name.clone(),
                    variant: name,
                });
            }
        }

        Ok(Union::new(self.name, variants, self.renderer))
    }
}
