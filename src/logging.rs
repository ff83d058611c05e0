//! `log` backend that writes to the browser console

use log::{Level, Log, Metadata, Record};
use wasm_bindgen::JsValue;

/// Routes `log` records to `console.debug/info/warn/error`
pub struct ConsoleLogger {
    level: Level,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger once; later calls are ignored
pub fn init(level: Level) {
    let logger = Box::new(ConsoleLogger { level });
    if log::set_boxed_logger(logger).is_ok() {
        log::set_max_level(level.to_level_filter());
    }
}
