use super::key::Key;
use crate::values::Value;
use fnv::FnvHashMap;

type Handler<'a, R> = Box<dyn Fn(&[Value]) -> R + 'a>;
type Wildcard<'a, R> = Box<dyn Fn() -> R + 'a>;

/// A transient match table supplied per call. Handlers receive the matched
/// instance's payload; the wildcard receives nothing. The table does not need
/// to be exhaustive as long as a wildcard catches the rest.
pub struct Table<'a, R> {
    handlers: FnvHashMap<Key, Handler<'a, R>>,
    wildcard: Option<Wildcard<'a, R>>,
}

impl<'a, R> Table<'a, R> {
    pub fn new() -> Self {
        Self {
            handlers: FnvHashMap::default(),
            wildcard: None,
        }
    }

    pub fn case(mut self, key: impl Into<Key>, handler: impl Fn(&[Value]) -> R + 'a) -> Self {
        self.handlers.insert(key.into(), Box::new(handler));
        self
    }

    pub fn wildcard(mut self, handler: impl Fn() -> R + 'a) -> Self {
        self.wildcard = Some(Box::new(handler));
        self
    }

    pub(crate) fn handler(&self, key: &Key) -> Option<&Handler<'a, R>> {
        self.handlers.get(key)
    }

    pub(crate) fn wildcard_handler(&self) -> Option<&Wildcard<'a, R>> {
        self.wildcard.as_ref()
    }
}

impl<R> Default for Table<'_, R> {
    fn default() -> Self {
        Self::new()
    }
}
