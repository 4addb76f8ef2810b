use gloo_console::{error, log};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Event, ServiceWorkerGlobalScope};

use crate::notify::NotificationPayload;

/// Entry point for the worker context.
///
/// Registers the lifecycle and message listeners on the global scope. Called
/// once from the generated worker shim; must never throw back into the host.
#[wasm_bindgen]
pub async fn service_worker() {
    console_error_panic_hook::set_once();

    let Ok(scope) = js_sys::global().dyn_into::<ServiceWorkerGlobalScope>() else {
        error!("service_worker() called outside a service worker scope");
        return;
    };

    if let Err(err) = register_listeners(&scope) {
        error!("failed to register worker listeners:", err);
    }
}

/// Hooks up `install`, `activate` and `message`.
///
/// The closures belong to the host for the lifetime of the worker, so each
/// one is leaked with `forget()` after registration. No listener consumes
/// its event payload.
fn register_listeners(scope: &ServiceWorkerGlobalScope) -> Result<(), JsValue> {
    let install = Closure::<dyn FnMut(Event)>::new(|_: Event| {
        log!("Service Worker installing.");
    });
    scope.add_event_listener_with_callback("install", install.as_ref().unchecked_ref())?;
    install.forget();

    let activate = Closure::<dyn FnMut(Event)>::new(|_: Event| {
        log!("Service Worker activated.");
    });
    scope.add_event_listener_with_callback("activate", activate.as_ref().unchecked_ref())?;
    activate.forget();

    // Any message means "show the ping"; content is never inspected.
    let message_scope = scope.clone();
    let message = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        NotificationPayload::minute_ping().show(&message_scope.registration());
    });
    scope.add_event_listener_with_callback("message", message.as_ref().unchecked_ref())?;
    message.forget();

    Ok(())
}
