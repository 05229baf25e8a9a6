use abzarestan_shared::persian_date::local_datetime;
use chrono::{DateTime, FixedOffset};
use js_sys::Date;
use rand::{rngs::StdRng, SeedableRng};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Element, ScrollBehavior, ScrollToOptions};

/// Current time in the browser's timezone.
pub fn now_local() -> DateTime<FixedOffset> {
    let now = Date::new_0();
    // getTimezoneOffset is minutes west of UTC.
    let offset_minutes = -(now.get_timezone_offset() as i32);
    local_datetime(now.get_time() as i64, offset_minutes)
}

/// RNG seeded from `Math.random`; the wasm target has no OS entropy source
/// wired into `rand`.
pub fn page_rng() -> StdRng {
    let high = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let low = (js_sys::Math::random() * u32::MAX as f64) as u64;
    StdRng::seed_from_u64((high << 32) | low)
}

pub fn current_href() -> Option<String> {
    window().and_then(|win| win.location().href().ok())
}

pub fn current_scroll_y() -> f64 {
    window().and_then(|win| win.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(win) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn element_by_id(id: &str) -> Option<Element> {
    window().and_then(|win| win.document()).and_then(|doc| doc.get_element_by_id(id))
}

/// Viewport tops of every element matching `selector`, in document order.
pub fn element_tops(selector: &str) -> Vec<f64> {
    let Some(list) = window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.query_selector_all(selector).ok())
    else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|el| el.get_bounding_client_rect().top())
        .collect()
}

pub fn toggle_body_class(class: &str, on: bool) {
    if let Some(body) = window().and_then(|win| win.document()).and_then(|doc| doc.body()) {
        let classes = body.class_list();
        let _ = if on { classes.add_1(class) } else { classes.remove_1(class) };
    }
}

/// Writes `text` through `navigator.clipboard.writeText`; `false` when the
/// API is missing or the promise rejects.
pub async fn copy_to_clipboard(text: &str) -> bool {
    let Some(win) = window() else {
        return false;
    };
    let navigator = win.navigator();
    let Ok(clipboard) = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")) else {
        return false;
    };
    if clipboard.is_undefined() || clipboard.is_null() {
        return false;
    }
    let Ok(write_text) = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText")) else {
        return false;
    };
    let Some(write_fn) = write_text.dyn_ref::<js_sys::Function>() else {
        return false;
    };
    match write_fn
        .call1(&clipboard, &JsValue::from_str(text))
        .ok()
        .and_then(|promise| promise.dyn_into::<js_sys::Promise>().ok())
    {
        Some(promise) => wasm_bindgen_futures::JsFuture::from(promise).await.is_ok(),
        None => false,
    }
}
