//! The `boot_params` symbol the harness expects to find.

use core::sync::atomic::{AtomicI32, Ordering};

/// Exported as the C `int boot_params` in runtime builds. `AtomicI32` has the
/// layout of an `i32`, so the harness sees a plain four-byte integer.
#[cfg_attr(feature = "runtime", unsafe(export_name = "boot_params"))]
pub static BOOT_PARAMS: AtomicI32 = AtomicI32::new(0);

/// Current value of `boot_params`. The fixture never writes it.
#[must_use]
pub fn boot_params() -> i32 {
    BOOT_PARAMS.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boot_params_starts_zeroed() {
        assert_eq!(boot_params(), 0);
        assert_eq!(size_of_val(&BOOT_PARAMS), size_of::<i32>());
    }
}
