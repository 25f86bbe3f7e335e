//! Hexadecimal rendering of 64-bit values.

use core::fmt;

#[cfg(feature = "harness")]
unsafe extern "C" {
    /// Supplied by the harness; prints `value` in hex.
    safe fn __puthex(value: u64);
}

/// Hands `value` to the harness' `__puthex`.
#[cfg(feature = "harness")]
#[inline(always)]
#[allow(clippy::inline_always)]
pub fn puthex(value: u64) {
    __puthex(value);
}

#[inline(always)]
#[allow(clippy::inline_always)]
#[must_use]
pub const fn hex_digit(n: u8) -> u8 {
    if n < 10 { b'0' + n } else { b'A' + (n - 10) }
}

/// Sixteen uppercase digits, most significant nibble first.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn encode(mut x: u64) -> [u8; 16] {
    let mut out = [0u8; 16];
    let mut i = 0;
    while i < out.len() {
        x = x.rotate_left(4);
        out[i] = hex_digit((x as u8) & 0x0F);
        i += 1;
    }
    out
}

/// `Display` adapter for [`encode`]; no allocation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HexWord(pub u64);

impl fmt::Display for HexWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in encode(self.0) {
            fmt::Write::write_char(f, char::from(b))?;
        }
        Ok(())
    }
}
