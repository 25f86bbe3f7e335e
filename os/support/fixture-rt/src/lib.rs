//! Runtime support for the `puthex` bare-metal fixture.
//!
//! The fixture prints a value through the harness-provided `__puthex`,
//! exports a `__putstr` stub that traps on multi-character strings and leaves
//! through a raw `int 0x80` exit. Everything that does not need inline
//! assembly builds on a hosted target, which is where the unit tests run.

#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(any(feature = "syscall", feature = "putstr-stub")), forbid(unsafe_code))]
#![cfg_attr(any(feature = "syscall", feature = "putstr-stub"), allow(unsafe_code))]

pub mod boot;
pub mod config;
pub mod hex;
pub mod logger;

#[macro_use]
pub mod putstr;

#[cfg(feature = "syscall")]
pub mod syscall;

#[cfg(feature = "syscall-abi")]
pub mod syscall_abi;

#[cfg(feature = "syscall-abi")]
pub mod fixture;

pub use hex::HexWord;
pub use logger::PutStrLogger;
pub use putstr::PutStrError;

#[cfg(feature = "syscall-abi")]
pub use fixture::{Fixture, Step};
#[cfg(feature = "syscall-abi")]
pub use syscall_abi::{ExitCode, Int80Call, SyscallError, Sysno};

#[cfg(all(feature = "runtime", not(test)))]
mod panic {
    /// A panic inside the fixture is a failed assertion; report it the same
    /// way `__putstr` does.
    #[panic_handler]
    fn panic(info: &core::panic::PanicInfo) -> ! {
        log::error!("{info}");
        crate::syscall::breakpoint();
        loop {
            core::hint::spin_loop();
        }
    }
}
