/*!
## Rust Machine Module

This Rust module is a compiler and virtual machine for Forth. Colon
definitions compile to threaded code: a flat sequence of cells that an
interpreter walks, dispatching each cell through the dictionary.

*/

pub type Address = usize;
pub type Cell = i64;

/// Data stack depth.
pub const STACK_SIZE: usize = 64;
/// Linear memory cells.
pub const MEM_SIZE: usize = 1024;
/// First memory cell handed out to `VARIABLE`.
pub const VAR_BASE: Address = 100;
/// Maximum number of variables.
pub const VAR_LIMIT: usize = 32;
/// Maximum number of dictionary entries.
pub const DICT_MAX: usize = 128;
/// Threaded-code store capacity, counted in cells. A compiled literal
/// occupies two cells, everything else one.
pub const THREAD_MAX: usize = 512;

#[cfg(test)]
mod tests;

mod dictionary;
mod memory;
mod opcode;
mod operation;
mod runtime;
mod stack;
mod thread;
mod var;

pub use dictionary::Dictionary;
pub use dictionary::Word;
pub use memory::Memory;
pub use opcode::Opcode;
pub use runtime::Runtime;
pub use stack::Stack;
pub use thread::Code;
pub use thread::Thread;
pub use var::Var;
