//! Hook runtime: binds hooks to elements and dispatches lifecycle events.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dom::Element;
use crate::error::{HookError, HookResult};
use crate::hooks::{Hook, HookContext};
use crate::host::HostServices;
use crate::registry::HookRegistry;
use crate::timers::{TimerQueue, TimerScope};

/// Runtime-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookRuntimeConfig {
    /// Attribute naming the hook an element carries.
    pub hook_attribute: String,
}

impl Default for HookRuntimeConfig {
    fn default() -> Self {
        Self {
            hook_attribute: "phx-hook".to_owned(),
        }
    }
}

struct Binding<E: Element> {
    element: E,
    hook: Box<dyn Hook<E>>,
}

/// Owns hook bindings, the millisecond clock, and the timer queue.
///
/// The host view-update runtime reports element lifecycle through
/// [`attach`](Self::attach) / [`refresh`](Self::refresh) /
/// [`detach`](Self::detach), forwards user clicks through
/// [`click`](Self::click), and drives time with [`advance`](Self::advance).
/// Everything runs single-threaded; expiry order is deterministic.
pub struct HookRuntime<E: Element> {
    registry: HookRegistry<E>,
    services: HostServices<E>,
    config: HookRuntimeConfig,
    bindings: IndexMap<String, Binding<E>>,
    timers: TimerQueue<E>,
    now_ms: u64,
}

impl<E: Element> HookRuntime<E> {
    #[must_use]
    pub fn new(
        registry: HookRegistry<E>,
        services: HostServices<E>,
        config: HookRuntimeConfig,
    ) -> Self {
        Self {
            registry,
            services,
            config,
            bindings: IndexMap::new(),
            timers: TimerQueue::new(),
            now_ms: 0,
        }
    }

    /// Binds `element` under `id` and runs the attach callback of the hook
    /// named by the marker attribute.
    pub fn attach(&mut self, id: &str, element: E) -> HookResult<()> {
        if self.bindings.contains_key(id) {
            return Err(HookError::AlreadyBound(id.to_owned()));
        }
        let Some(hook_name) = element.attribute(&self.config.hook_attribute) else {
            return Err(HookError::MissingHookMarker(id.to_owned()));
        };
        let hook = self.registry.instantiate(hook_name)?;
        self.bindings.insert(id.to_owned(), Binding { element, hook });
        self.dispatch(id, |hook, ctx| hook.attach(ctx))
    }

    /// Runs the refresh callback after the host patched the element.
    ///
    /// Attribute patches are applied first via [`element_mut`](Self::element_mut).
    pub fn refresh(&mut self, id: &str) -> HookResult<()> {
        self.dispatch(id, |hook, ctx| hook.refresh(ctx))
    }

    /// Delivers a user click to the bound hook.
    pub fn click(&mut self, id: &str) -> HookResult<()> {
        self.dispatch(id, |hook, ctx| hook.click(ctx))
    }

    /// Runs the detach callback, drops the element's pending timers, removes
    /// the binding, and returns the element to the host.
    pub fn detach(&mut self, id: &str) -> HookResult<E> {
        self.dispatch(id, |hook, ctx| hook.detach(ctx))?;
        self.timers.cancel_element(id);
        match self.bindings.shift_remove(id) {
            Some(binding) => Ok(binding.element),
            None => Err(HookError::NotBound(id.to_owned())),
        }
    }

    /// Advances the clock by `dt_ms` and runs timer tasks that came due, in
    /// due-time then schedule order. Tasks whose element was detached in the
    /// meantime are dropped.
    pub fn advance(&mut self, dt_ms: u64) {
        self.now_ms = self.now_ms.saturating_add(dt_ms);
        for entry in self.timers.drain_due(self.now_ms) {
            if let Some(binding) = self.bindings.get_mut(&entry.element) {
                (entry.action)(&mut binding.element);
            }
        }
    }

    #[must_use]
    pub fn element(&self, id: &str) -> Option<&E> {
        self.bindings.get(id).map(|binding| &binding.element)
    }

    /// Mutable element access for applying server-driven attribute patches
    /// before calling [`refresh`](Self::refresh).
    pub fn element_mut(&mut self, id: &str) -> Option<&mut E> {
        self.bindings.get_mut(id).map(|binding| &mut binding.element)
    }

    #[must_use]
    pub fn is_bound(&self, id: &str) -> bool {
        self.bindings.contains_key(id)
    }

    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn pending_timer_count(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    #[must_use]
    pub fn services(&self) -> &HostServices<E> {
        &self.services
    }

    pub fn services_mut(&mut self) -> &mut HostServices<E> {
        &mut self.services
    }

    fn dispatch(
        &mut self,
        id: &str,
        call: impl FnOnce(&mut dyn Hook<E>, &mut HookContext<'_, E>),
    ) -> HookResult<()> {
        let Some(binding) = self.bindings.get_mut(id) else {
            return Err(HookError::NotBound(id.to_owned()));
        };
        let mut ctx = HookContext {
            element: &mut binding.element,
            services: &mut self.services,
            timers: TimerScope {
                queue: &mut self.timers,
                element_id: id,
                now_ms: self.now_ms,
            },
        };
        call(binding.hook.as_mut(), &mut ctx);
        Ok(())
    }
}
