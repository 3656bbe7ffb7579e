use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{HookError, HookResult};

/// Platform clipboard-write capability.
///
/// `Ok(())` is the completion signal for the write; `Err` surfaces a
/// recoverable failure the caller may log and ignore.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> HookResult<()>;
}

/// Records writes and always succeeds. Used by tests and headless hosts.
///
/// Clones share the same write log, so a test can keep a handle while the
/// runtime owns the boxed capability.
#[derive(Debug, Default, Clone)]
pub struct NullClipboard {
    writes: Rc<RefCell<Vec<String>>>,
}

impl NullClipboard {
    #[must_use]
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    #[must_use]
    pub fn last_write(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }
}

impl Clipboard for NullClipboard {
    fn write_text(&mut self, text: &str) -> HookResult<()> {
        self.writes.borrow_mut().push(text.to_owned());
        Ok(())
    }
}

/// Always fails. Models a host without clipboard access, such as a headless
/// session with no display server.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingClipboard;

impl Clipboard for FailingClipboard {
    fn write_text(&mut self, _text: &str) -> HookResult<()> {
        Err(HookError::Clipboard("clipboard unavailable".to_owned()))
    }
}

/// System clipboard adapter backed by `arboard`.
///
/// The clipboard is opened fresh on each write to avoid holding platform
/// resources between writes.
#[cfg(feature = "arboard-clipboard")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[cfg(feature = "arboard-clipboard")]
impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> HookResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|err| HookError::Clipboard(err.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|err| HookError::Clipboard(err.to_string()))?;
        Ok(())
    }
}
