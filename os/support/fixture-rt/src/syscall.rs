use crate::syscall_abi::{ExitCode, Int80Call};

/// Executes a debug breakpoint. Execution continues afterwards only if
/// whoever catches the trap resumes it.
#[inline(always)]
#[allow(clippy::inline_always)]
pub fn breakpoint() {
    unsafe {
        core::arch::asm!("int3", options(nomem, nostack));
    }
}

/// Leaves the process through the legacy `int 0x80` gate.
///
/// LLVM reserves `rbx`, so it cannot be an operand; the assembly loads it
/// itself. A call that comes back lands on `int3` and then spins.
#[inline(always)]
#[allow(clippy::inline_always)]
pub fn sys_exit(code: ExitCode) -> ! {
    let call = Int80Call::exit(code);
    unsafe {
        core::arch::asm!(
            "mov rbx, {arg0}",
            "int 0x80",
            "int3",
            "2:",
            "jmp 2b",
            arg0 = in(reg) call.rbx,
            in("rax") call.rax,
            options(noreturn, nostack)
        );
    }
}
