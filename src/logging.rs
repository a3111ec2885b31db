//! Console Logger
//!
//! `log` backend that writes to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        write_line(record.level(), &format_line(record));
    }

    fn flush(&self) {}
}

/// Debug and trace lines carry the emitting module path
fn format_line(record: &Record) -> String {
    if record.level() >= Level::Debug {
        format!("{} [{}] {}", record.level(), record.target(), record.args())
    } else {
        format!("{} {}", record.level(), record.args())
    }
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let msg = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&msg),
        Level::Warn => web_sys::console::warn_1(&msg),
        _ => web_sys::console::log_1(&msg),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{line}");
}

/// Install the console logger. Safe to call more than once.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_line_names_module() {
        let line = format_line(
            &Record::builder()
                .args(format_args!("renumbered 3"))
                .level(Level::Debug)
                .target("lookup_admin_ui::sync")
                .build(),
        );
        assert_eq!(line, "DEBUG [lookup_admin_ui::sync] renumbered 3");
    }

    #[test]
    fn test_info_line_stays_short() {
        let line = format_line(
            &Record::builder()
                .args(format_args!("Starting"))
                .level(Level::Info)
                .target("lookup_admin_ui")
                .build(),
        );
        assert_eq!(line, "INFO Starting");
    }
}
