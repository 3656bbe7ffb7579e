use hooks_rs::dom::{Element, FakeElement, attrs};
use hooks_rs::host::HostServices;
use hooks_rs::registry::HookRegistry;
use hooks_rs::runtime::{HookRuntime, HookRuntimeConfig};

fn runtime() -> HookRuntime<FakeElement> {
    HookRuntime::new(
        HookRegistry::standard(),
        HostServices::default(),
        HookRuntimeConfig::default(),
    )
}

#[test]
fn attach_mirrors_tooltip_attribute_into_native_title() {
    let mut runtime = runtime();
    let element = FakeElement::new()
        .with_attribute("phx-hook", "Tooltip")
        .with_attribute(attrs::TOOLTIP, "Click to expand");
    runtime.attach("tip", element).expect("attach");

    assert_eq!(
        runtime.element("tip").expect("bound").title(),
        Some("Click to expand")
    );
}

#[test]
fn missing_tooltip_attribute_sets_no_title() {
    let mut runtime = runtime();
    let element = FakeElement::new().with_attribute("phx-hook", "Tooltip");
    runtime.attach("tip", element).expect("attach");

    assert_eq!(runtime.element("tip").expect("bound").title(), None);
}

#[test]
fn tooltip_is_fixed_at_attach_time() {
    let mut runtime = runtime();
    let element = FakeElement::new()
        .with_attribute("phx-hook", "Tooltip")
        .with_attribute(attrs::TOOLTIP, "before");
    runtime.attach("tip", element).expect("attach");

    runtime
        .element_mut("tip")
        .expect("bound")
        .set_attribute(attrs::TOOLTIP, "after");
    runtime.refresh("tip").expect("refresh");

    assert_eq!(runtime.element("tip").expect("bound").title(), Some("before"));
}
