//! Hooks shared by the pages: route-change scroll reset and a frame-throttled
//! scroll listener.

use std::{cell::Cell, rc::Rc};

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::use_location;

/// Automatically scroll the viewport to the top whenever the current route
/// changes.
///
/// Call this hook inside top-level pages to keep navigation consistent.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();

    use_effect_with(location, move |location| {
        if location.is_some() {
            scroll_window_to_top();
        }

        || ()
    });
}

/// Calls `on_frame` once on mount and then at most once per animation frame
/// while the window scrolls. The listener is registered once; the latest
/// callback passed in is the one that runs.
#[hook]
pub fn use_throttled_scroll(on_frame: Callback<()>) {
    let latest = use_mut_ref(|| on_frame.clone());
    *latest.borrow_mut() = on_frame;

    use_effect_with((), move |_| {
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let frame = {
            let pending = pending.clone();
            let latest = latest.clone();
            Closure::wrap(Box::new(move || {
                pending.set(None);
                let callback = latest.borrow().clone();
                callback.emit(());
            }) as Box<dyn Fn()>)
        };

        let listener = {
            let pending = pending.clone();
            let frame_fn: js_sys::Function = frame.as_ref().unchecked_ref::<js_sys::Function>().clone();
            Closure::wrap(Box::new(move || {
                let Some(win) = window() else {
                    return;
                };
                if let Some(id) = pending.take() {
                    let _ = win.cancel_animation_frame(id);
                }
                if let Ok(id) = win.request_animation_frame(&frame_fn) {
                    pending.set(Some(id));
                }
            }) as Box<dyn Fn()>)
        };

        let win = window();
        if let Some(win) = win.as_ref() {
            let _ = win.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
        }
        let initial = latest.borrow().clone();
        initial.emit(());

        move || {
            if let Some(win) = win {
                let _ = win
                    .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
                if let Some(id) = pending.take() {
                    let _ = win.cancel_animation_frame(id);
                }
            }
            drop(listener);
            drop(frame);
        }
    });
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
