//! Deterministic timer scheduling for transient hook effects.
//!
//! Timer tasks are element-scoped closures owned by the runtime. The host
//! drives time explicitly, so expiry is reproducible under test, and tasks
//! whose element binding was removed are dropped instead of acting on a stale
//! handle.

use crate::dom::Element;

/// Identifier for a scheduled task, usable to cancel it before expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

type TimerAction<E> = Box<dyn FnOnce(&mut E)>;

pub(crate) struct TimerEntry<E: Element> {
    pub(crate) id: TimerId,
    pub(crate) element: String,
    pub(crate) due_ms: u64,
    pub(crate) action: TimerAction<E>,
}

/// Pending timer tasks keyed by owning element binding.
pub(crate) struct TimerQueue<E: Element> {
    entries: Vec<TimerEntry<E>>,
    next_id: u64,
}

impl<E: Element> TimerQueue<E> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    pub(crate) fn schedule(
        &mut self,
        element: &str,
        due_ms: u64,
        action: TimerAction<E>,
    ) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(TimerEntry {
            id,
            element: element.to_owned(),
            due_ms,
            action,
        });
        id
    }

    /// Returns `true` when the task was still pending.
    pub(crate) fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() < before
    }

    /// Drops every pending task owned by `element`.
    pub(crate) fn cancel_element(&mut self, element: &str) {
        self.entries.retain(|entry| entry.element != element);
    }

    /// Removes and returns tasks due at or before `now_ms`, ordered by due
    /// time then schedule order.
    pub(crate) fn drain_due(&mut self, now_ms: u64) -> Vec<TimerEntry<E>> {
        let mut due = Vec::new();
        let mut index = 0;
        while index < self.entries.len() {
            if self.entries[index].due_ms <= now_ms {
                due.push(self.entries.remove(index));
            } else {
                index += 1;
            }
        }
        due.sort_by_key(|entry| (entry.due_ms, entry.id.0));
        due
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Scheduling surface exposed to hooks, scoped to their bound element.
pub struct TimerScope<'a, E: Element> {
    pub(crate) queue: &'a mut TimerQueue<E>,
    pub(crate) element_id: &'a str,
    pub(crate) now_ms: u64,
}

impl<E: Element> TimerScope<'_, E> {
    /// Schedules `action` to run against the bound element after `delay_ms`,
    /// unless cancelled or the element is detached first.
    pub fn schedule(&mut self, delay_ms: u64, action: impl FnOnce(&mut E) + 'static) -> TimerId {
        self.queue.schedule(
            self.element_id,
            self.now_ms + delay_ms,
            Box::new(action),
        )
    }

    /// Cancels a pending task. Returns `true` when it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.queue.cancel(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::FakeElement;

    fn set_marker(text: &'static str) -> TimerAction<FakeElement> {
        Box::new(move |element| element.set_text(text))
    }

    #[test]
    fn drain_returns_due_tasks_in_due_then_schedule_order() {
        let mut queue = TimerQueue::new();
        queue.schedule("a", 20, set_marker("second"));
        queue.schedule("a", 10, set_marker("first"));
        queue.schedule("a", 30, set_marker("late"));

        let due = queue.drain_due(20);
        let order: Vec<u64> = due.iter().map(|entry| entry.due_ms).collect();
        assert_eq!(order, [10, 20]);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn cancel_removes_only_the_named_task() {
        let mut queue = TimerQueue::new();
        let first = queue.schedule("a", 10, set_marker("first"));
        queue.schedule("a", 10, set_marker("second"));

        assert!(queue.cancel(first));
        assert!(!queue.cancel(first));

        let due = queue.drain_due(10);
        assert_eq!(due.len(), 1);

        let mut element = FakeElement::new();
        for entry in due {
            (entry.action)(&mut element);
        }
        assert_eq!(element.text(), "second");
    }

    #[test]
    fn cancel_element_drops_all_tasks_for_that_binding() {
        let mut queue = TimerQueue::new();
        queue.schedule("a", 10, set_marker("a1"));
        queue.schedule("b", 10, set_marker("b1"));
        queue.schedule("a", 20, set_marker("a2"));

        queue.cancel_element("a");
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.drain_due(100)[0].element, "b");
    }
}
