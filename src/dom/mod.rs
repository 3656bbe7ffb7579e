//! Injected element surface.
//!
//! The runtime never touches a real document. Hosts adapt their element
//! representation to [`Element`]; tests and headless hosts use
//! [`FakeElement`].

mod fake_element;

pub use fake_element::FakeElement;

/// Attribute names consumed by the built-in hooks, as produced by
/// server-rendered markup.
pub mod attrs {
    pub const CHART_TYPE: &str = "data-chart-type";
    pub const CHART_DATA: &str = "data-chart-data";
    pub const CHART_OPTIONS: &str = "data-chart-options";
    pub const COPY_VALUE: &str = "data-copy-value";
    pub const AUTO_SCROLL: &str = "data-auto-scroll";
    pub const TIMESTAMP: &str = "data-timestamp";
    pub const TOOLTIP: &str = "data-tooltip";
}

/// Contract implemented by any host element handle.
///
/// Hooks receive one mutable handle per lifecycle call and stay isolated from
/// the host's document representation. All attribute values are untyped
/// strings; hooks own their interpretation.
pub trait Element: 'static {
    /// Returns the attribute value, or `None` when absent.
    fn attribute(&self, name: &str) -> Option<&str>;

    fn set_attribute(&mut self, name: &str, value: &str);

    /// Visible text content.
    fn text(&self) -> &str;

    fn set_text(&mut self, text: &str);

    fn add_class(&mut self, class: &str);

    fn remove_class(&mut self, class: &str);

    fn has_class(&self, class: &str) -> bool;

    /// Sets the native tooltip title.
    fn set_title(&mut self, title: &str);

    /// Total scrollable content height in pixels.
    fn scroll_height(&self) -> f64;

    fn scroll_top(&self) -> f64;

    fn set_scroll_top(&mut self, offset_px: f64);
}
