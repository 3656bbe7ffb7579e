use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::dom::{Element, attrs};
use crate::timers::TimerId;

use super::{Hook, HookContext};

/// Feedback behavior for the copy hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyFeedback {
    /// Text shown while the feedback window is active.
    pub text: String,
    /// Delay before the original text is restored.
    pub restore_after_ms: u64,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self {
            text: "Copied!".to_owned(),
            restore_after_ms: 2000,
        }
    }
}

/// Copies `data-copy-value` to the clipboard on click and shows transient
/// feedback text.
///
/// A click inside an active feedback window supersedes the pending restore:
/// the stale timer is cancelled and the first saved original text is kept, so
/// the feedback text itself can never be captured as the original. A failed
/// clipboard write is logged and leaves the element untouched.
pub struct CopyHook {
    feedback: CopyFeedback,
    pending: Option<PendingRestore>,
}

struct PendingRestore {
    timer: TimerId,
    original_text: String,
}

impl CopyHook {
    #[must_use]
    pub fn new() -> Self {
        Self::with_feedback(CopyFeedback::default())
    }

    #[must_use]
    pub fn with_feedback(feedback: CopyFeedback) -> Self {
        Self {
            feedback,
            pending: None,
        }
    }
}

impl Default for CopyHook {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element> Hook<E> for CopyHook {
    fn click(&mut self, ctx: &mut HookContext<'_, E>) {
        let Some(value) = ctx.element.attribute(attrs::COPY_VALUE) else {
            debug!("element carries no copy value, skipping clipboard write");
            return;
        };
        let value = value.to_owned();
        if let Err(err) = ctx.services.clipboard.write_text(&value) {
            warn!(error = %err, "clipboard write failed, skipping copy feedback");
            return;
        }

        // A pending restore whose timer already fired holds a stale original;
        // only reuse the saved text when the cancel actually lands.
        let mut original_text = None;
        if let Some(prior) = self.pending.take() {
            if ctx.timers.cancel(prior.timer) {
                original_text = Some(prior.original_text);
            }
        }
        let original_text = original_text.unwrap_or_else(|| ctx.element.text().to_owned());

        ctx.element.set_text(&self.feedback.text);
        let restore_text = original_text.clone();
        let timer = ctx
            .timers
            .schedule(self.feedback.restore_after_ms, move |element: &mut E| {
                element.set_text(&restore_text);
            });
        self.pending = Some(PendingRestore {
            timer,
            original_text,
        });
    }

    fn detach(&mut self, ctx: &mut HookContext<'_, E>) {
        if let Some(pending) = self.pending.take() {
            ctx.timers.cancel(pending.timer);
        }
    }
}
