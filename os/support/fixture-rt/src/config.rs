//! Compile-time configuration, driven by Cargo features.

use log::LevelFilter;

/// Maximum level the fixture logger emits.
///
/// Logging is off unless the `trace` feature is enabled, so a plain build
/// only touches `__putstr` for the characters the fixture itself prints.
#[cfg(feature = "trace")]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Trace;

/// Maximum level the fixture logger emits.
#[cfg(not(feature = "trace"))]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Off;

/// The value the fixture hands to `__puthex`.
pub const PUTHEX_VALUE: u64 = 0x11_1111;
