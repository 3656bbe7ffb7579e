use crate::dom::{Element, attrs};

use super::{Hook, HookContext};

/// Pins the element's scroll position to its bottom edge.
///
/// Attach always scrolls. Refresh scrolls only while `data-auto-scroll` is
/// exactly the string `"true"`, so hosts can pause following without
/// detaching the element.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoScrollHook;

fn scroll_to_bottom<E: Element>(element: &mut E) {
    let bottom = element.scroll_height();
    element.set_scroll_top(bottom);
}

impl<E: Element> Hook<E> for AutoScrollHook {
    fn attach(&mut self, ctx: &mut HookContext<'_, E>) {
        scroll_to_bottom(ctx.element);
    }

    fn refresh(&mut self, ctx: &mut HookContext<'_, E>) {
        if ctx.element.attribute(attrs::AUTO_SCROLL) == Some("true") {
            scroll_to_bottom(ctx.element);
        }
    }
}
