use indexmap::IndexMap;
use smallvec::SmallVec;

use super::Element;

/// In-memory element used by tests and headless hosts.
///
/// It records every surface the built-in hooks touch (attributes, text,
/// classes, native title, scroll state) so assertions can observe behavior
/// without a document.
#[derive(Debug, Default, Clone)]
pub struct FakeElement {
    attributes: IndexMap<String, String>,
    text: String,
    classes: SmallVec<[String; 4]>,
    title: Option<String>,
    scroll_top: f64,
    scroll_height: f64,
}

impl FakeElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_owned();
        self
    }

    #[must_use]
    pub fn with_scroll_height(mut self, height_px: f64) -> Self {
        self.scroll_height = height_px;
        self
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.shift_remove(name);
    }

    /// Grows or shrinks the scrollable content, as a host patch would.
    pub fn set_scroll_height(&mut self, height_px: f64) {
        self.scroll_height = height_px;
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

impl Element for FakeElement {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_owned(), value.to_owned());
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_owned();
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|existing| existing != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_owned());
    }

    fn scroll_height(&self) -> f64 {
        self.scroll_height
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn set_scroll_top(&mut self, offset_px: f64) {
        self.scroll_top = offset_px.clamp(0.0, self.scroll_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_list_stays_deduplicated() {
        let mut element = FakeElement::new();
        element.add_class("active");
        element.add_class("active");
        assert_eq!(element.classes(), ["active".to_owned()]);

        element.remove_class("active");
        assert!(!element.has_class("active"));
    }

    #[test]
    fn scroll_top_is_clamped_to_content() {
        let mut element = FakeElement::new().with_scroll_height(300.0);
        element.set_scroll_top(900.0);
        assert_eq!(element.scroll_top(), 300.0);

        element.set_scroll_top(-5.0);
        assert_eq!(element.scroll_top(), 0.0);
    }
}
