//! Thin wrappers around the optional `log` crate so call sites don't need to
//! `#[cfg]` every individual log statement.

#[macro_export]
#[cfg(feature = "log")]
macro_rules! trace_log {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}
#[macro_export]
#[cfg(not(feature = "log"))]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

#[macro_export]
#[cfg(feature = "log")]
macro_rules! debug_log {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}
#[macro_export]
#[cfg(not(feature = "log"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}
