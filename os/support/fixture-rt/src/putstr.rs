//! The `__putstr` stub and the byte-wise output built on top of it.
//!
//! The stub is an assertion, not a printer: it accepts exactly one character
//! and executes `int3` when handed anything longer. The harness watches for
//! that trap. Output routed through [`PutStrSink`] goes one character per
//! call, so it never trips the assertion.

use core::ffi::CStr;
use core::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PutStrError {
    #[error("__putstr takes a single character, got a longer string")]
    TooLong,
}

/// Decides from the first two bytes of a NUL-terminated string.
///
/// An empty string ends at `first`, so `second` is not part of it and is
/// ignored.
///
/// # Errors
/// [`PutStrError::TooLong`] if the string has a second character.
pub const fn inspect(first: u8, second: u8) -> Result<(), PutStrError> {
    if first != 0 && second != 0 {
        return Err(PutStrError::TooLong);
    }
    Ok(())
}

/// [`inspect`] on a safe C string.
///
/// # Errors
/// [`PutStrError::TooLong`] if `s` is two or more characters long.
pub fn check(s: &CStr) -> Result<(), PutStrError> {
    match s.to_bytes_with_nul() {
        [first, second, ..] => inspect(*first, *second),
        _ => Ok(()),
    }
}

/// Exported stub the fixture is linked with.
///
/// # Safety
/// `s` must point to a readable NUL-terminated string.
#[cfg(feature = "putstr-stub")]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn __putstr(s: *const core::ffi::c_char) {
    // Never read past the terminator of an empty string.
    let first = unsafe { s.cast::<u8>().read() };
    let second = if first == 0 {
        0
    } else {
        unsafe { s.cast::<u8>().add(1).read() }
    };

    if inspect(first, second).is_err() {
        crate::syscall::breakpoint();
    }
}

/// Anything that takes one byte at a time.
pub trait ByteSink {
    fn put_byte(&mut self, b: u8);
}

/// Adapts a [`ByteSink`] to `core::fmt::Write`.
pub struct Bytewise<S>(pub S);

impl<S: ByteSink> fmt::Write for Bytewise<S> {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for b in s.bytes() {
            self.0.put_byte(b);
        }
        Ok(())
    }

    #[inline]
    fn write_char(&mut self, c: char) -> fmt::Result {
        // UTF-8 encode without allocation.
        let mut buf = [0u8; 4];
        let s = c.encode_utf8(&mut buf);
        self.write_str(s)
    }
}

/// Feeds every byte to `__putstr` as its own one-character string.
#[cfg(feature = "putstr-stub")]
pub struct PutStrSink;

#[cfg(feature = "putstr-stub")]
impl ByteSink for PutStrSink {
    #[inline]
    fn put_byte(&mut self, b: u8) {
        let one = [b, 0];
        unsafe { __putstr(one.as_ptr().cast()) }
    }
}

#[doc(hidden)]
#[cfg(feature = "putstr-stub")]
#[inline(always)]
#[allow(clippy::inline_always)]
pub fn putstr_write(args: fmt::Arguments) {
    // Ignore errors; this is best-effort debug output.
    fmt::write(&mut Bytewise(PutStrSink), args).ok();
}

#[cfg(feature = "putstr-stub")]
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {{
        $crate::putstr::putstr_write(core::format_args!($($arg)*));
    }};
}

#[cfg(feature = "putstr-stub")]
#[macro_export]
macro_rules! println {
    ($($arg:tt)*) => {{
        $crate::putstr::putstr_write(core::format_args!($($arg)*));
        $crate::putstr::putstr_write(core::format_args!("\n"));
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    #[test]
    fn single_character_passes() {
        assert_eq!(check(c"A"), Ok(()));
        assert_eq!(check(c"\n"), Ok(()));
        for b in 1..=u8::MAX {
            assert_eq!(inspect(b, 0), Ok(()), "byte {b:#x}");
        }
    }

    #[test]
    fn longer_strings_trap() {
        assert_eq!(check(c"ab"), Err(PutStrError::TooLong));
        assert_eq!(check(c"hello, world"), Err(PutStrError::TooLong));
        for b in 1..=u8::MAX {
            assert_eq!(inspect(b'x', b), Err(PutStrError::TooLong), "byte {b:#x}");
        }
    }

    #[test]
    fn empty_string_passes_without_looking_further() {
        assert_eq!(check(c""), Ok(()));
        assert_eq!(inspect(0, b'x'), Ok(()));
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<[u8; 2]>,
    }

    impl ByteSink for &mut Recorder {
        fn put_byte(&mut self, b: u8) {
            self.calls.push([b, 0]);
        }
    }

    #[test]
    fn bytewise_sink_only_ever_passes_one_character() {
        let mut rec = Recorder::default();
        write!(Bytewise(&mut rec), "0x{:X} ok ü", 0x11_1111).unwrap();

        let bytes: Vec<u8> = rec.calls.iter().map(|c| c[0]).collect();
        assert_eq!(bytes, "0x111111 ok ü".as_bytes());
        for call in &rec.calls {
            let s = CStr::from_bytes_until_nul(call).unwrap();
            assert_eq!(check(s), Ok(()));
        }
    }

    #[cfg(all(unix, feature = "putstr-stub"))]
    mod stub {
        use super::*;
        use std::os::unix::process::ExitStatusExt;
        use std::process::{Command, ExitStatus};

        const CASE_VAR: &str = "FIXTURE_RT_PUTSTR_CASE";
        const RETURNED: i32 = 99;
        const SIGTRAP: i32 = 5;

        /// Runs in a child process only: one stub call, then a marker exit.
        #[test]
        fn putstr_child() {
            let Ok(case) = std::env::var(CASE_VAR) else {
                return;
            };
            let s = match case.as_str() {
                "ab" => c"ab",
                "a" => c"a",
                _ => c"",
            };
            unsafe { __putstr(s.as_ptr()) };
            std::process::exit(RETURNED);
        }

        fn run_child(case: &str) -> ExitStatus {
            Command::new(std::env::current_exe().unwrap())
                .args([
                    "putstr::tests::stub::putstr_child",
                    "--exact",
                    "--nocapture",
                    "--test-threads=1",
                ])
                .env(CASE_VAR, case)
                .status()
                .unwrap()
        }

        #[test]
        fn two_characters_trap() {
            let status = run_child("ab");
            assert_eq!(status.signal(), Some(SIGTRAP), "{status:?}");
        }

        #[test]
        fn single_character_returns() {
            let status = run_child("a");
            assert_eq!(status.code(), Some(RETURNED), "{status:?}");
        }

        #[test]
        fn empty_string_returns() {
            let status = run_child("");
            assert_eq!(status.code(), Some(RETURNED), "{status:?}");
        }

        #[test]
        fn returns_in_process_for_single_characters() {
            unsafe {
                __putstr(c"Z".as_ptr());
                __putstr(c"".as_ptr());
            }
        }
    }
}
