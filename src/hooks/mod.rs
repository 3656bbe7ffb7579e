//! Built-in element behavior hooks and the lifecycle contract they share.
//!
//! Each hook reacts to at most three lifecycle moments delivered by the host
//! view-update runtime: attach (element inserted), refresh (element patched
//! after a server-driven update), and detach (element removed). Hooks are
//! independent of each other; their only shared convention is reading
//! configuration from element attributes.

mod auto_scroll;
mod chart;
mod copy;
mod highlight;
mod timestamp;
mod tooltip;

pub use auto_scroll::AutoScrollHook;
pub use chart::ChartHook;
pub use copy::{CopyFeedback, CopyHook};
pub use highlight::{HighlightBehavior, HighlightHook};
pub use timestamp::{TimestampFormat, TimestampHook};
pub use tooltip::TooltipHook;

use serde_json::Value;
use tracing::warn;

use crate::dom::Element;
use crate::host::HostServices;
use crate::timers::TimerScope;

/// Per-call context handed to hook callbacks.
pub struct HookContext<'a, E: Element> {
    pub element: &'a mut E,
    pub services: &'a mut HostServices<E>,
    pub timers: TimerScope<'a, E>,
}

/// Lifecycle contract for one element behavior.
///
/// All callbacks default to no-ops so a hook implements only the moments it
/// reacts to. Callbacks never return errors: per-element failure is fail-soft
/// and logged, never propagated into the host's patch loop.
pub trait Hook<E: Element> {
    /// Element entered the tree.
    fn attach(&mut self, _ctx: &mut HookContext<'_, E>) {}

    /// Element was patched by a server-driven update.
    fn refresh(&mut self, _ctx: &mut HookContext<'_, E>) {}

    /// Element left the tree.
    fn detach(&mut self, _ctx: &mut HookContext<'_, E>) {}

    /// User clicked the element.
    fn click(&mut self, _ctx: &mut HookContext<'_, E>) {}
}

/// Reads a JSON attribute, failing soft to an empty object when the attribute
/// is absent or malformed.
pub(crate) fn json_attribute<E: Element>(element: &E, name: &str) -> Value {
    let Some(raw) = element.attribute(name) else {
        return Value::Object(serde_json::Map::new());
    };
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            warn!(
                attribute = name,
                error = %err,
                "malformed json attribute, using empty object"
            );
            Value::Object(serde_json::Map::new())
        }
    }
}
