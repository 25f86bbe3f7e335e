//! The fixture as a script: print one value, then exit.

use crate::config::PUTHEX_VALUE;
use crate::syscall_abi::{ExitCode, Int80Call};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    /// Hand the value to `__puthex`.
    PutHex(u64),
    /// Raw `int 0x80` exit.
    Exit(ExitCode),
}

impl Step {
    /// Register image for steps that trap into the system call gate.
    #[must_use]
    pub const fn int80(&self) -> Option<Int80Call> {
        match *self {
            Self::PutHex(_) => None,
            Self::Exit(code) => Some(Int80Call::exit(code)),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub hex: u64,
    pub exit: ExitCode,
}

impl Fixture {
    pub const PUTHEX: Self = Self {
        hex: PUTHEX_VALUE,
        exit: ExitCode::SUCCESS,
    };

    #[must_use]
    pub const fn with_hex(self, hex: u64) -> Self {
        Self { hex, ..self }
    }

    /// Steps in execution order. The last one always exits.
    #[must_use]
    pub const fn steps(&self) -> [Step; 2] {
        [Step::PutHex(self.hex), Step::Exit(self.exit)]
    }

    /// Prints through every step ahead of the closing `Exit`, then exits.
    #[cfg(feature = "harness")]
    pub fn run(&self) -> ! {
        let [body @ .., _] = self.steps();

        for step in body {
            if let Step::PutHex(value) = step {
                log::debug!("puthex 0x{}", crate::HexWord(value));
                crate::hex::puthex(value);
            }
        }

        log::debug!("exit {}", self.exit.0);
        crate::syscall::sys_exit(self.exit)
    }
}
