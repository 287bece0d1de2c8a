//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that turns source text into
//! tokens for the parser. It handles:
//!
//! - Character-by-character scanning with one character of lookahead
//! - Recognition of keywords, identifiers and integer literals
//! - One and two character operators (`=`/`==`, `!`/`!=`)
//! - Unknown characters, surfaced as `ILLEGAL` tokens rather than errors

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
