#![allow(clippy::module_inception)]

//! Front end of a small interpreted language: tokenizer, Pratt parser and
//! the syntax tree they produce.
//!
//! ```ignore
//! let (parser, program) = monkey_front::parser::parser::parse("let x = 1 + 2;");
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.string(), "let x = (1 + 2);");
//! ```

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// Formats one parse error for a terminal.
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `5`, expected ASSIGN)
///   | expected next token to be ASSIGN, got INT instead
/// ```
pub fn format_error(error: &Error) -> String {
    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    format!("{}\n  | {}", header, error)
}

pub fn display_error(error: &Error) {
    println!("{}", format_error(error));
}
