use serde::{Deserialize, Serialize};

use crate::dom::Element;
use crate::timers::TimerId;

use super::{Hook, HookContext};

/// Behavior knobs for the transient refresh highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightBehavior {
    /// Class toggled on the element while the highlight is active.
    pub class: String,
    /// Delay before the class is removed again.
    pub clear_after_ms: u64,
}

impl Default for HighlightBehavior {
    fn default() -> Self {
        Self {
            class: "bg-yellow-100".to_owned(),
            clear_after_ms: 1000,
        }
    }
}

/// Flashes a highlight class on the element on every refresh.
///
/// A refresh inside an active highlight window cancels the superseded clear
/// timer, so back-to-back refreshes extend the highlight instead of
/// flickering it. The runtime drops the pending clear when the element is
/// detached.
pub struct HighlightHook {
    behavior: HighlightBehavior,
    pending_clear: Option<TimerId>,
}

impl HighlightHook {
    #[must_use]
    pub fn new() -> Self {
        Self::with_behavior(HighlightBehavior::default())
    }

    #[must_use]
    pub fn with_behavior(behavior: HighlightBehavior) -> Self {
        Self {
            behavior,
            pending_clear: None,
        }
    }
}

impl Default for HighlightHook {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element> Hook<E> for HighlightHook {
    fn refresh(&mut self, ctx: &mut HookContext<'_, E>) {
        if let Some(timer) = self.pending_clear.take() {
            ctx.timers.cancel(timer);
        }
        ctx.element.add_class(&self.behavior.class);
        let class = self.behavior.class.clone();
        let timer = ctx
            .timers
            .schedule(self.behavior.clear_after_ms, move |element: &mut E| {
                element.remove_class(&class);
            });
        self.pending_clear = Some(timer);
    }

    fn detach(&mut self, ctx: &mut HookContext<'_, E>) {
        if let Some(timer) = self.pending_clear.take() {
            ctx.timers.cancel(timer);
        }
    }
}
