//! Browser console logging via the `log` facade.

use log::{Level, LevelFilter};

/// Install the console logger. Safe to call more than once.
pub fn init() {
    if console_log::init_with_level(Level::Trace).is_err() {
        log::warn!("[LOG] logger already installed");
    }
}

/// Narrow the active level once config is known
pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}
