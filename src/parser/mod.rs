//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that pulls tokens from a lexer one at a
//! time and builds a [`Program`](crate::ast::ast::Program). It uses a Pratt
//! parser for expressions with operator precedence and handles:
//!
//! - Statement parsing (`let`, `return`, expression statements, blocks)
//! - Expression parsing (prefix and infix operators, literals, grouping,
//!   `if`, function literals and calls)
//! - Error recovery: failures are recorded and parsing resumes at the next
//!   statement
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with a precedence for each infix operator.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
