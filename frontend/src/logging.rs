use abzarestan_shared::logging::{line_subscriber, LineMakeWriter};
use tracing::Level;
use wasm_bindgen::JsValue;
use web_sys::console;

use crate::config::LOG_LEVEL;

fn to_console(level: Level, line: &str) {
    let message = JsValue::from_str(line);
    if level == Level::ERROR {
        console::error_1(&message);
    } else if level == Level::WARN {
        console::warn_1(&message);
    } else if level == Level::INFO {
        console::info_1(&message);
    } else {
        console::debug_1(&message);
    }
}

/// Sends `tracing` events, including the shared crate's storage and ranking
/// logs, to the developer console.
pub fn init() {
    let subscriber = line_subscriber(LineMakeWriter::new(to_console), LOG_LEVEL);
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        console::warn_1(&format!("Logging not initialised: {}", e).into());
    }
}
