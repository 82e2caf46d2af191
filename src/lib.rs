//! # Forth
//!
//! A tiny Forth: a fixed dictionary of native words, `VARIABLE` and
//! `CONSTANT` declarations, and colon definitions compiled to
//! indirect-threaded code walked by a dispatcher.
//!
//! Start the interpreter from a terminal:
//! ```text
//! Simple Forth Interpreter
//! : SQR DUP * ;
//!  ok
//! 5 SQR .
//!  25 ok
//! ```
//!
//! Every machine lives in one [`mach::Runtime`] value, so embedding a
//! session is `Runtime::default()` plus `enter` per input line.

pub mod lang;
pub mod mach;
pub mod term;
