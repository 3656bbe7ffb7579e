//! Named hook factories consumed by the runtime's marker lookup.

use indexmap::IndexMap;

use crate::dom::Element;
use crate::error::{HookError, HookResult};
use crate::hooks::{
    AutoScrollHook, ChartHook, CopyHook, HighlightHook, Hook, TimestampHook, TooltipHook,
};

type HookFactory<E> = Box<dyn Fn() -> Box<dyn Hook<E>>>;

/// Registry mapping hook marker names to hook constructors.
///
/// The host looks hooks up by the marker attribute value on each attached
/// element; one fresh hook instance is constructed per binding.
pub struct HookRegistry<E: Element> {
    factories: IndexMap<String, HookFactory<E>>,
}

impl<E: Element> HookRegistry<E> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: IndexMap::new(),
        }
    }

    /// Registry preloaded with the built-in hooks under their exported names:
    /// `Chart`, `Copy`, `AutoScroll`, `Timestamp`, `Tooltip`, `Highlight`.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.insert_factory("Chart", || Box::new(ChartHook::new()));
        registry.insert_factory("Copy", || Box::new(CopyHook::new()));
        registry.insert_factory("AutoScroll", || Box::new(AutoScrollHook));
        registry.insert_factory("Timestamp", || Box::new(TimestampHook::new()));
        registry.insert_factory("Tooltip", || Box::new(TooltipHook));
        registry.insert_factory("Highlight", || Box::new(HighlightHook::new()));
        registry
    }

    /// Registers a hook factory under a unique, non-empty name.
    pub fn register(
        &mut self,
        name: &str,
        factory: impl Fn() -> Box<dyn Hook<E>> + 'static,
    ) -> HookResult<()> {
        if name.is_empty() {
            return Err(HookError::EmptyHookName);
        }
        if self.factories.contains_key(name) {
            return Err(HookError::DuplicateHook(name.to_owned()));
        }
        self.insert_factory(name, factory);
        Ok(())
    }

    /// Unregisters a hook by name. Returns `true` when removed.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.factories.shift_remove(name).is_some()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Hook names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub(crate) fn instantiate(&self, name: &str) -> HookResult<Box<dyn Hook<E>>> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| HookError::UnknownHook(name.to_owned()))
    }

    fn insert_factory(&mut self, name: &str, factory: impl Fn() -> Box<dyn Hook<E>> + 'static) {
        self.factories.insert(name.to_owned(), Box::new(factory));
    }
}

impl<E: Element> Default for HookRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}
