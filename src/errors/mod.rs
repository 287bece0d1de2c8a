//! Error types for the front end.
//!
//! Parsing never stops at the first problem. Each failure is recorded as an
//! [`errors::Error`] on the parser and parsing carries on with the next
//! statement. This module defines:
//!
//! - The error variants, one per kind of syntax failure
//! - The offending token kept with each error
//! - Short names and suggestions for user-facing output

pub mod errors;
