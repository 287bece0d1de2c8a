//! Unit tests for the lexer module.
//!
//! Covers keywords and identifiers, integer literals, one and two character
//! operators, delimiters, illegal characters and end-of-input behavior.

use super::{
    lexer::{tokenize, Lexer},
    tokens::{lookup_ident, TokenKind},
};

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("fn let true false if else return");

    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
    assert_eq!(tokens[4].literal, "if");
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar_1 _under letter fnx");

    let expected = ["foo", "bar_1", "_under", "letter", "fnx"];
    for (token, name) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, TokenKind::Ident);
        assert_eq!(token.literal, name);
    }
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("5 10 007 123abc");

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].literal, "5");
    assert_eq!(tokens[1].literal, "10");
    assert_eq!(tokens[2].literal, "007");
    // digits stop at the first non-digit
    assert_eq!(tokens[3].kind, TokenKind::Int);
    assert_eq!(tokens[3].literal, "123");
    assert_eq!(tokens[4].kind, TokenKind::Ident);
    assert_eq!(tokens[4].literal, "abc");
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("= + - ! * / < > == !=");

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Bang,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::LessThan,
            TokenKind::GreaterThan,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[8].literal, "==");
    assert_eq!(tokens[9].literal, "!=");
}

#[test]
fn test_tokenize_two_char_operators_without_spaces() {
    let tokens = tokenize("a==b!=!c=d");

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident,
            TokenKind::Equals,
            TokenKind::Ident,
            TokenKind::NotEquals,
            TokenKind::Bang,
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::Ident,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_delimiters() {
    let tokens = tokenize("(){},;");

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[3].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[4].kind, TokenKind::Comma);
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_simple_program() {
    let tokens = tokenize("let x = 42;");

    assert_eq!(tokens.len(), 6); // let, x, =, 42, ;, EOF
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert_eq!(tokens[1].literal, "x");
    assert_eq!(tokens[2].kind, TokenKind::Assign);
    assert_eq!(tokens[3].kind, TokenKind::Int);
    assert_eq!(tokens[3].literal, "42");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_full_program() {
    let source = "
        let five = 5;
        let add = fn(x, y) {
            x + y;
        };
        let result = add(five, 10);
        if (5 < 10) { return true; } else { return false; }
    ";
    let tokens = tokenize(source);

    let expected = vec![
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "five"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "add"),
        (TokenKind::Assign, "="),
        (TokenKind::Function, "fn"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Ident, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Ident, "y"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Ident, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Ident, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "result"),
        (TokenKind::Assign, "="),
        (TokenKind::Ident, "add"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Ident, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Int, "10"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::If, "if"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Int, "5"),
        (TokenKind::LessThan, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::True, "true"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Else, "else"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::False, "false"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::EOF, ""),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, literal)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
        assert_eq!(token.literal, literal);
    }
}

#[test]
fn test_tokenize_unrecognized_character() {
    let tokens = tokenize("let x = @;");

    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].literal, "@");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
}

#[test]
fn test_tokenize_non_ascii_is_illegal() {
    let tokens = tokenize("é");

    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].literal, "é");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_empty_and_whitespace() {
    assert_eq!(tokenize("").len(), 1);
    assert_eq!(tokenize(" \t\r\n ").len(), 1);
    assert_eq!(tokenize("")[0].kind, TokenKind::EOF);
    assert_eq!(tokenize("")[0].literal, "");
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    for _ in 0..5 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.literal, "");
    }
    assert!(lexer.at_eof());
}

#[test]
fn test_trailing_operator_at_end_of_input() {
    let tokens = tokenize("x =");

    assert_eq!(tokens[1].kind, TokenKind::Assign);
    assert_eq!(tokens[2].kind, TokenKind::EOF);

    let tokens = tokenize("!");
    assert_eq!(tokens[0].kind, TokenKind::Bang);
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_advance_and_peek() {
    let mut lexer = Lexer::new("ab");

    assert_eq!(lexer.peek(), Some('b'));
    lexer.advance();
    assert_eq!(lexer.peek(), None);
    assert!(!lexer.at_eof());
    lexer.advance();
    assert!(lexer.at_eof());
    assert_eq!(lexer.peek(), None);
}

#[test]
fn test_lookup_ident() {
    assert_eq!(lookup_ident("let"), TokenKind::Let);
    assert_eq!(lookup_ident("fn"), TokenKind::Function);
    assert_eq!(lookup_ident("lets"), TokenKind::Ident);
    assert_eq!(TokenKind::Assign.to_string(), "ASSIGN");
    assert_eq!(TokenKind::NotEquals.to_string(), "NOT_EQ");
}
