//! hooks-rs: lifecycle hook runtime for server-patched element trees.
//!
//! A host view-update runtime (the component that inserts, patches, and
//! removes elements) reports element lifecycle to [`HookRuntime`], which binds
//! named behavior hooks to elements and dispatches attach/refresh/detach and
//! click input to them. All platform capabilities are injected traits:
//! element access ([`dom::Element`]), clipboard and charting engine
//! ([`host`]), and timer scheduling ([`timers`]). Nothing in the crate touches
//! ambient global state, so the whole runtime runs headless under test.

pub mod dom;
pub mod error;
pub mod hooks;
pub mod host;
pub mod registry;
pub mod runtime;
pub mod telemetry;
pub mod timers;

pub use error::{HookError, HookResult};
pub use runtime::{HookRuntime, HookRuntimeConfig};
