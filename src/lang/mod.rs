/*!
# Rust Language Module

This Rust module provides the error type and the whitespace tokenizer
for the Forth language. There is no grammar beyond tokens: every token
is either a dictionary name or an integer literal, decided at dispatch
time by the machine module.

*/

#[macro_use]
mod error;
mod lex;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::INPUT_BUF;
pub use lex::WORD_BUF;
