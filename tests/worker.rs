//! Browser-context checks, compiled only for wasm32. Run with
//! `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use minute_notifier::notify::NotificationPayload;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn options_carry_the_ping_body() {
    let options = NotificationPayload::minute_ping().options();
    let body = js_sys::Reflect::get(options.as_ref(), &JsValue::from_str("body")).unwrap();
    assert_eq!(
        body.as_string().as_deref(),
        Some("This is your minute notification!")
    );
}

#[wasm_bindgen_test]
async fn entry_is_inert_outside_a_worker_scope() {
    // The harness runs in a window; the entry must return without throwing.
    minute_notifier::service_worker().await;
}
