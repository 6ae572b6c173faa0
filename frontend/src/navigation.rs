//! Browser location and unsaved-changes guard.

use common::route::Route;
use js_sys::Reflect;
use wasm_bindgen::JsValue;

/// Global flag the host shell reads before leaving the micro-frontend.
const DIRTY_FLAG: &str = "app_dirty";

pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::recognize(&path))
        .unwrap_or(Route::NotFound)
}

/// Pushes `route` onto the browser history without reloading.
pub fn push_route(route: &Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(history) = window.history() {
        if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(&route.path())) {
            gloo_console::warn!("could not push history entry", err);
        }
    }
}

pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

/// Publishes whether the open form has unsaved changes.
pub fn set_dirty_flag(dirty: bool) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str(DIRTY_FLAG),
            &JsValue::from_bool(dirty),
        );
    }
}

pub fn has_unsaved_changes() -> bool {
    web_sys::window()
        .and_then(|window| Reflect::get(&window, &JsValue::from_str(DIRTY_FLAG)).ok())
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
}
