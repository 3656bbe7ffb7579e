use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dom::Element;

/// Chart construction payload assembled from element attributes.
///
/// `data` and `options` carry whatever JSON the server rendered into the
/// element; malformed values are replaced with empty objects before this type
/// is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Chart kind understood by the engine ("line", "bar", ...).
    pub kind: String,
    pub data: Value,
    pub options: Value,
}

/// Live chart object exclusively owned by one chart hook instance.
pub trait ChartHandle {
    /// Replaces the chart's data in place.
    fn set_data(&mut self, data: Value);

    /// Triggers a redraw after a data replacement.
    fn update(&mut self);

    /// Releases the engine-side resources.
    fn destroy(self: Box<Self>);
}

/// Charting engine constructor capability.
///
/// Mirrors the documented engine contract: a constructor accepting the bound
/// element plus a `{type, data, options}` payload and returning a live
/// handle.
pub trait ChartFactory<E: Element> {
    fn create(&mut self, element: &E, spec: ChartSpec) -> Box<dyn ChartHandle>;
}

/// Instance counters observed by a [`RecordingChartFactory`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartCounters {
    pub created: usize,
    pub updated: usize,
    pub destroyed: usize,
}

#[derive(Debug, Default)]
struct RecordingState {
    counters: ChartCounters,
    last_spec: Option<ChartSpec>,
    last_data: Option<Value>,
}

/// No-op engine used by tests and headless hosts.
///
/// It records construction payloads and instance counters so tests can assert
/// chart lifecycle without a real renderer. Clones share the same state.
#[derive(Debug, Default, Clone)]
pub struct RecordingChartFactory {
    state: Rc<RefCell<RecordingState>>,
}

impl RecordingChartFactory {
    #[must_use]
    pub fn counters(&self) -> ChartCounters {
        self.state.borrow().counters
    }

    #[must_use]
    pub fn last_spec(&self) -> Option<ChartSpec> {
        self.state.borrow().last_spec.clone()
    }

    /// Most recent payload passed to a handle's `set_data`.
    #[must_use]
    pub fn last_data(&self) -> Option<Value> {
        self.state.borrow().last_data.clone()
    }
}

impl<E: Element> ChartFactory<E> for RecordingChartFactory {
    fn create(&mut self, _element: &E, spec: ChartSpec) -> Box<dyn ChartHandle> {
        let mut state = self.state.borrow_mut();
        state.counters.created += 1;
        state.last_spec = Some(spec);
        Box::new(RecordingChart {
            state: Rc::clone(&self.state),
        })
    }
}

/// Handle produced by [`RecordingChartFactory`].
#[derive(Debug)]
pub struct RecordingChart {
    state: Rc<RefCell<RecordingState>>,
}

impl ChartHandle for RecordingChart {
    fn set_data(&mut self, data: Value) {
        self.state.borrow_mut().last_data = Some(data);
    }

    fn update(&mut self) {
        self.state.borrow_mut().counters.updated += 1;
    }

    fn destroy(self: Box<Self>) {
        self.state.borrow_mut().counters.destroyed += 1;
    }
}
