use hooks_rs::dom::{Element, FakeElement, attrs};
use hooks_rs::host::{FailingClipboard, HostServices, NullClipboard};
use hooks_rs::registry::HookRegistry;
use hooks_rs::runtime::{HookRuntime, HookRuntimeConfig};

fn runtime_with_clipboard(clipboard: &NullClipboard) -> HookRuntime<FakeElement> {
    HookRuntime::new(
        HookRegistry::standard(),
        HostServices::new(Box::new(clipboard.clone())),
        HookRuntimeConfig::default(),
    )
}

fn copy_element(value: &str) -> FakeElement {
    FakeElement::new()
        .with_attribute("phx-hook", "Copy")
        .with_attribute(attrs::COPY_VALUE, value)
        .with_text("Copy token")
}

#[test]
fn click_writes_clipboard_and_shows_transient_feedback() {
    let clipboard = NullClipboard::default();
    let mut runtime = runtime_with_clipboard(&clipboard);
    runtime.attach("copy", copy_element("abc123")).expect("attach");

    runtime.click("copy").expect("click");
    assert_eq!(clipboard.last_write().as_deref(), Some("abc123"));
    assert_eq!(runtime.element("copy").expect("bound").text(), "Copied!");

    runtime.advance(1999);
    assert_eq!(runtime.element("copy").expect("bound").text(), "Copied!");

    runtime.advance(1);
    assert_eq!(runtime.element("copy").expect("bound").text(), "Copy token");
}

#[test]
fn click_without_copy_value_is_a_noop() {
    let clipboard = NullClipboard::default();
    let mut runtime = runtime_with_clipboard(&clipboard);
    let element = FakeElement::new()
        .with_attribute("phx-hook", "Copy")
        .with_text("Copy token");
    runtime.attach("copy", element).expect("attach");

    runtime.click("copy").expect("click");

    assert!(clipboard.writes().is_empty());
    assert_eq!(runtime.element("copy").expect("bound").text(), "Copy token");
    assert_eq!(runtime.pending_timer_count(), 0);
}

#[test]
fn second_click_within_window_keeps_the_first_original_text() {
    let clipboard = NullClipboard::default();
    let mut runtime = runtime_with_clipboard(&clipboard);
    runtime.attach("copy", copy_element("abc123")).expect("attach");

    runtime.click("copy").expect("first click");
    runtime.advance(1500);
    runtime.click("copy").expect("second click");

    // The superseded restore never fires; only one timer stays pending.
    assert_eq!(runtime.pending_timer_count(), 1);
    runtime.advance(1999);
    assert_eq!(runtime.element("copy").expect("bound").text(), "Copied!");

    runtime.advance(1);
    assert_eq!(runtime.element("copy").expect("bound").text(), "Copy token");
    assert_eq!(clipboard.writes().len(), 2);
}

#[test]
fn click_after_restore_recaptures_current_text() {
    let clipboard = NullClipboard::default();
    let mut runtime = runtime_with_clipboard(&clipboard);
    runtime.attach("copy", copy_element("abc123")).expect("attach");

    runtime.click("copy").expect("first click");
    runtime.advance(2000);

    // Server patch changes the label between feedback windows.
    runtime
        .element_mut("copy")
        .expect("bound")
        .set_text("Copy fresh token");
    runtime.click("copy").expect("second click");
    runtime.advance(2000);

    assert_eq!(
        runtime.element("copy").expect("bound").text(),
        "Copy fresh token"
    );
}

#[test]
fn clipboard_failure_shows_no_feedback() {
    let mut runtime: HookRuntime<FakeElement> = HookRuntime::new(
        HookRegistry::standard(),
        HostServices::new(Box::new(FailingClipboard)),
        HookRuntimeConfig::default(),
    );
    runtime.attach("copy", copy_element("abc123")).expect("attach");

    runtime.click("copy").expect("click");

    assert_eq!(runtime.element("copy").expect("bound").text(), "Copy token");
    assert_eq!(runtime.pending_timer_count(), 0);
}

#[test]
fn pending_restore_is_dropped_on_detach() {
    let clipboard = NullClipboard::default();
    let mut runtime = runtime_with_clipboard(&clipboard);
    runtime.attach("copy", copy_element("abc123")).expect("attach");

    runtime.click("copy").expect("click");
    assert_eq!(runtime.pending_timer_count(), 1);

    let element = runtime.detach("copy").expect("detach");
    assert_eq!(runtime.pending_timer_count(), 0);
    assert_eq!(element.text(), "Copied!");

    runtime.advance(5000);
}
