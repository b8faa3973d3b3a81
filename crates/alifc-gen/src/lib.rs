//! alifc-gen - x86-64 code generation for the alif language.
//!
//! Lowers an analyzed [`Program`](alifc_par::Program) to a textual
//! assembly listing: Intel syntax without register prefixes, System V
//! AMD64 calling convention, Linux syscalls, intended for the GNU
//! assembler. No external runtime is linked; the only helper is an
//! inlined integer-print routine, and process exit goes through the
//! exit syscall from a synthetic `_start`.
//!
//! Expression evaluation follows an accumulator discipline: every
//! expression leaves its value in `rax`, binary operators stash the
//! right operand on the machine stack, and locals live in fixed
//! `[rbp-offset]` slots.

pub mod abi;
mod asm;
pub mod error;

pub use asm::CodeGenerator;
pub use error::CodeGenError;
