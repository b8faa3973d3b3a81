//! System V AMD64 ABI tables for the emitted code.
//!
//! The language has a single 64-bit integer type, so only the integer
//! register class matters. Registers are textual operands because the
//! generator emits a listing, not machine code.

/// System V AMD64 calling convention.
pub struct SystemVAbi;

impl SystemVAbi {
    /// Integer argument registers in order.
    pub const ARG_REGS: [&'static str; 6] = ["rdi", "rsi", "rdx", "rcx", "r8", "r9"];

    /// Return register for integer values.
    pub const RET_REG: &'static str = "rax";

    /// Get the argument register for a given argument index.
    ///
    /// Arguments past the sixth have no register; the language does not
    /// support passing them.
    pub fn arg_register(index: usize) -> Option<&'static str> {
        Self::ARG_REGS.get(index).copied()
    }
}

/// Linux syscall numbers used by the emitted code.
pub mod syscall {
    /// write(2)
    pub const WRITE: u32 = 1;
    /// exit(2)
    pub const EXIT: u32 = 60;
}
