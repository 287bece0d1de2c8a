use crate::MK_TOKEN;

use super::tokens::{lookup_ident, Token, TokenKind};

/// A single-pass character cursor over one source string.
///
/// `ch` is `None` once the cursor has moved past the last character; from then
/// on every call to [`Lexer::next_token`] yields an `EOF` token.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: Vec<char>,
    pos: usize,
    read_pos: usize,
    ch: Option<char>,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        let mut lexer = Lexer {
            source: source.chars().collect(),
            pos: 0,
            read_pos: 0,
            ch: None,
        };

        // load the first character so `pos` and `ch` agree
        lexer.advance();
        lexer
    }

    /// Moves the cursor forward by one character.
    pub fn advance(&mut self) {
        self.ch = self.source.get(self.read_pos).copied();
        self.pos = self.read_pos;
        if self.read_pos < self.source.len() {
            self.read_pos += 1;
        }
    }

    /// Returns the character after the cursor without moving it.
    pub fn peek(&self) -> Option<char> {
        self.source.get(self.read_pos).copied()
    }

    pub fn at_eof(&self) -> bool {
        self.ch.is_none()
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let ch = match self.ch {
            Some(ch) => ch,
            None => return Token::eof(),
        };

        let token = match ch {
            '=' => self.one_or_two(TokenKind::Assign, TokenKind::Equals),
            '!' => self.one_or_two(TokenKind::Bang, TokenKind::NotEquals),
            '+' => MK_TOKEN!(TokenKind::Plus, ch),
            '-' => MK_TOKEN!(TokenKind::Minus, ch),
            '*' => MK_TOKEN!(TokenKind::Asterisk, ch),
            '/' => MK_TOKEN!(TokenKind::Slash, ch),
            '<' => MK_TOKEN!(TokenKind::LessThan, ch),
            '>' => MK_TOKEN!(TokenKind::GreaterThan, ch),
            ',' => MK_TOKEN!(TokenKind::Comma, ch),
            ';' => MK_TOKEN!(TokenKind::Semicolon, ch),
            '(' => MK_TOKEN!(TokenKind::OpenParen, ch),
            ')' => MK_TOKEN!(TokenKind::CloseParen, ch),
            '{' => MK_TOKEN!(TokenKind::OpenCurly, ch),
            '}' => MK_TOKEN!(TokenKind::CloseCurly, ch),
            c if is_letter(c) => return self.read_identifier(),
            c if c.is_ascii_digit() => return self.read_number(),
            _ => MK_TOKEN!(TokenKind::Illegal, ch),
        };

        self.advance();
        token
    }

    /// Handles `x` vs `x=` operators. Leaves the cursor on the last character of the token.
    fn one_or_two(&mut self, single: TokenKind, double: TokenKind) -> Token {
        let first = self.ch.unwrap_or_default();
        if self.peek() == Some('=') {
            self.advance();
            MK_TOKEN!(double, format!("{}=", first))
        } else {
            MK_TOKEN!(single, first)
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn read_while(&mut self, accept: fn(char) -> bool) -> String {
        let start = self.pos;
        while matches!(self.ch, Some(c) if accept(c)) {
            self.advance();
        }

        self.source[start..self.pos].iter().collect()
    }

    fn read_identifier(&mut self) -> Token {
        let word = self.read_while(|c| is_letter(c) || c.is_ascii_digit());
        MK_TOKEN!(lookup_ident(&word), word)
    }

    fn read_number(&mut self) -> Token {
        let digits = self.read_while(|c| c.is_ascii_digit());
        MK_TOKEN!(TokenKind::Int, digits)
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Drains a fresh lexer over `source`, returning every token up to and including the first `EOF`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
