//! Logging macros used throughout the planner crates.
//!
//! Messages are tagged with the file and line they come from and handed to the
//! `log` facade under the `tp` target. Installing a backend is left to the
//! binary or test that embeds the planner.

pub use log::Level;

pub const LOG_TARGET: &str = "tp";

pub fn emit(msg: &str, file: &str, line: u32, level: Level) {
    log::log!(target: LOG_TARGET, level, "{}:{} - {}", file, line, msg);
}

pub fn enabled(level: Level) -> bool {
    log::log_enabled!(target: LOG_TARGET, level)
}

#[macro_export]
macro_rules! log_debug {
    ($($args:tt)*) => {{
        if $crate::logging::enabled($crate::logging::Level::Debug) {
            $crate::logging::emit(&std::fmt::format(format_args!($($args)*)), file!(), line!(), $crate::logging::Level::Debug);
        }
    }}
}

#[macro_export]
macro_rules! log_info {
    ($($args:tt)*) => {{
        if $crate::logging::enabled($crate::logging::Level::Info) {
            $crate::logging::emit(&std::fmt::format(format_args!($($args)*)), file!(), line!(), $crate::logging::Level::Info);
        }
    }}
}

#[macro_export]
macro_rules! log_warn {
    ($($args:tt)*) => {{
        if $crate::logging::enabled($crate::logging::Level::Warn) {
            $crate::logging::emit(&std::fmt::format(format_args!($($args)*)), file!(), line!(), $crate::logging::Level::Warn);
        }
    }}
}

#[macro_export]
macro_rules! log_error {
    ($($args:tt)*) => {{
        if $crate::logging::enabled($crate::logging::Level::Error) {
            $crate::logging::emit(&std::fmt::format(format_args!($($args)*)), file!(), line!(), $crate::logging::Level::Error);
        }
    }}
}
