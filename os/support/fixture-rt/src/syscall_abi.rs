//! Register contract of the legacy `int 0x80` system call gate.
//!
//! The gate follows the i386 convention even in 64-bit code: the call
//! number goes into `rax` and the first argument into `rbx`.

/// Legacy system call numbers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u64)]
pub enum Sysno {
    /// Terminate the calling process; `rbx` holds the exit status.
    Exit = 1,
}

impl TryFrom<u64> for Sysno {
    type Error = SyscallError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            x if x == Self::Exit as u64 => Ok(Self::Exit),
            other => Err(SyscallError::UnknownSysno(other)),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyscallError {
    #[error("unknown system call number {0:#x}")]
    UnknownSysno(u64),
}

/// Process exit status passed to [`Sysno::Exit`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct ExitCode(pub u32);

impl ExitCode {
    pub const SUCCESS: Self = Self(0);

    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn as_u64(self) -> u64 {
        self.0 as u64
    }
}

/// Register image loaded right before `int 0x80`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Int80Call {
    pub rax: u64,
    pub rbx: u64,
}

impl Int80Call {
    #[must_use]
    pub const fn exit(code: ExitCode) -> Self {
        Self {
            rax: Sysno::Exit as u64,
            rbx: code.as_u64(),
        }
    }

    /// Decodes the call number held in `rax`.
    ///
    /// # Errors
    /// Returns [`SyscallError::UnknownSysno`] if `rax` names no known call.
    pub fn sysno(&self) -> Result<Sysno, SyscallError> {
        Sysno::try_from(self.rax)
    }
}
