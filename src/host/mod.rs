//! Injected host capabilities: clipboard access and the charting engine.
//!
//! Hooks never reach for ambient platform state. Whatever the host can do is
//! handed to them through [`HostServices`], and every capability has a
//! recording fake so the runtime stays testable without a platform.

mod chart;
mod clipboard;

pub use chart::{
    ChartCounters, ChartFactory, ChartHandle, ChartSpec, RecordingChart, RecordingChartFactory,
};
pub use clipboard::{Clipboard, FailingClipboard, NullClipboard};

#[cfg(feature = "arboard-clipboard")]
pub use clipboard::SystemClipboard;

use crate::dom::Element;

/// Capability bundle handed to hooks on every lifecycle call.
///
/// The chart factory is optional: `None` models a host without a charting
/// engine, in which case the chart hook does nothing.
pub struct HostServices<E: Element> {
    pub chart_factory: Option<Box<dyn ChartFactory<E>>>,
    pub clipboard: Box<dyn Clipboard>,
}

impl<E: Element> HostServices<E> {
    #[must_use]
    pub fn new(clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            chart_factory: None,
            clipboard,
        }
    }

    #[must_use]
    pub fn with_chart_factory(mut self, factory: Box<dyn ChartFactory<E>>) -> Self {
        self.chart_factory = Some(factory);
        self
    }
}

impl<E: Element> Default for HostServices<E> {
    fn default() -> Self {
        Self::new(Box::new(NullClipboard::default()))
    }
}
