//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program-level driver.
//! The parser owns its lexer and keeps exactly one token of lookahead: the
//! current token and the peek token. Expressions are parsed Pratt style with
//! NUD/LED handlers looked up by token kind.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Precedences of infix operators

use std::{collections::HashMap, mem};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, LEDHandler, LEDLookup, NUDHandler, NUDLookup, Precedence,
        PrecedenceLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Deepest `parse_expr` nesting accepted before the parser gives up on an expression.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// A parser is bound to one lexer and is meant to parse one program. Errors
/// are appended to an internal list instead of aborting the parse.
pub struct Parser {
    /// Source of tokens, pulled one at a time
    lexer: Lexer,
    cur_token: Token,
    peek_token: Token,
    /// Every error recorded so far, in order
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix operator precedences
    precedence_lookup: PrecedenceLookup,
    /// Number of distinct tokens that have been the current token
    tokens_consumed: usize,
    /// Current `parse_expr` recursion depth
    depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// Reads two tokens so that both the current and the peek token are set,
    /// and registers every statement, prefix and infix handler.
    pub fn new(mut lexer: Lexer) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();

        let mut parser = Parser {
            lexer,
            cur_token,
            peek_token,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            precedence_lookup: HashMap::new(),
            tokens_consumed: 1,
            depth: 0,
        };

        create_token_lookups(&mut parser);
        parser
    }

    /// Parses statements until the current token is `EOF`.
    ///
    /// Statements that fail to parse are left out of the program; the errors
    /// they produced are available from [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.cur_token_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }

            self.next_token();
        }

        program
    }

    /// Error messages recorded so far. Empty means the parse was clean.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    /// The structured errors behind [`Parser::errors`].
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    pub fn tokens_consumed(&self) -> usize {
        self.tokens_consumed
    }

    /// Returns the current token without advancing.
    pub fn cur_token(&self) -> &Token {
        &self.cur_token
    }

    /// Returns the lookahead token without advancing.
    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    /// Shifts the peek token into the current slot and pulls a new peek token.
    ///
    /// Once the current token is `EOF` it stays `EOF` and is not counted again.
    pub fn next_token(&mut self) {
        if self.cur_token_is(TokenKind::EOF) {
            return;
        }

        let next = self.lexer.next_token();
        self.cur_token = mem::replace(&mut self.peek_token, next);
        self.tokens_consumed += 1;
    }

    pub fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advances if the peek token is of the expected kind.
    ///
    /// # Returns
    ///
    /// Returns true after advancing. Otherwise records an `UnexpectedToken`
    /// error, leaves the tokens untouched and returns false.
    pub fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    pub fn peek_precedence(&self) -> Precedence {
        self.precedence_of(self.peek_token.kind)
    }

    pub fn cur_precedence(&self) -> Precedence {
        self.precedence_of(self.cur_token.kind)
    }

    fn precedence_of(&self, kind: TokenKind) -> Precedence {
        self.precedence_lookup
            .get(&kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                actual: self.peek_token.kind,
            },
            self.peek_token.clone(),
        );
        self.push_error(error);
    }

    pub fn push_error(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Steps one level deeper into expression parsing.
    ///
    /// Returns false and records a `NestingTooDeep` error when the limit is
    /// already reached; the caller must not recurse and must not call
    /// [`Parser::leave_nesting`].
    pub fn enter_nesting(&mut self) -> bool {
        if self.depth >= MAX_NESTING_DEPTH {
            let error = Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.cur_token.clone(),
            );
            self.push_error(error);
            return false;
        }

        self.depth += 1;
        true
    }

    pub fn leave_nesting(&mut self) {
        self.depth -= 1;
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `precedence` - How tightly this operator binds
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, precedence: Precedence, led_fn: LEDHandler) {
        self.precedence_lookup.insert(kind, precedence);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses one source unit with a fresh lexer and parser.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, whose `errors()` tell whether the parse was clean
/// - The parsed Program, possibly partial when errors were recorded
pub fn parse(source: &str) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (parser, program)
}
