use crate::dom::{Element, attrs};

use super::{Hook, HookContext};

/// Mirrors `data-tooltip` into the element's native title at attach time.
///
/// Later refreshes deliberately leave the title alone: the tooltip is fixed
/// once the element enters the tree. An absent attribute sets no title.
#[derive(Debug, Default, Clone, Copy)]
pub struct TooltipHook;

impl<E: Element> Hook<E> for TooltipHook {
    fn attach(&mut self, ctx: &mut HookContext<'_, E>) {
        if let Some(tooltip) = ctx.element.attribute(attrs::TOOLTIP) {
            let tooltip = tooltip.to_owned();
            ctx.element.set_title(&tooltip);
        }
    }
}
