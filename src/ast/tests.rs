//! Unit tests for rendering trees built by hand.

use crate::{
    ast::{
        ast::{Expression, Node, Program, Statement},
        expressions::{Identifier, IfExpression, InfixExpression, IntegerLiteral},
        statements::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement},
    },
    lexer::tokens::{Token, TokenKind},
};

fn ident(name: &str) -> Identifier {
    Identifier {
        token: Token::new(TokenKind::Ident, name),
        value: name.to_string(),
    }
}

fn int(value: i64) -> Expression {
    Expression::Integer(IntegerLiteral {
        token: Token::new(TokenKind::Int, value.to_string()),
        value,
    })
}

#[test]
fn test_program_string() {
    let program = Program {
        statements: vec![Statement::Let(LetStatement {
            token: Token::new(TokenKind::Let, "let"),
            name: ident("myVar"),
            value: Some(Expression::Identifier(ident("anotherVar"))),
        })],
    };

    assert_eq!(program.string(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
    assert_eq!(program.to_string(), program.string());
}

#[test]
fn test_missing_values_render_empty() {
    let let_stmt = LetStatement {
        token: Token::new(TokenKind::Let, "let"),
        name: ident("x"),
        value: None,
    };
    let return_stmt = ReturnStatement {
        token: Token::new(TokenKind::Return, "return"),
        value: None,
    };
    let expr_stmt = ExpressionStatement {
        token: Token::new(TokenKind::Semicolon, ";"),
        value: None,
    };

    assert_eq!(let_stmt.string(), "let x = ;");
    assert_eq!(return_stmt.string(), "return ;");
    assert_eq!(expr_stmt.string(), "");
}

#[test]
fn test_nested_infix_string() {
    let sum = Expression::Infix(Box::new(InfixExpression {
        token: Token::new(TokenKind::Plus, "+"),
        operator: "+".to_string(),
        left: int(1),
        right: Expression::Infix(Box::new(InfixExpression {
            token: Token::new(TokenKind::Asterisk, "*"),
            operator: "*".to_string(),
            left: int(2),
            right: int(3),
        })),
    }));

    assert_eq!(sum.string(), "(1 + (2 * 3))");
    assert_eq!(sum.token_literal(), "+");
}

#[test]
fn test_if_string_with_and_without_alternative() {
    let block = |name: &str| BlockStatement {
        token: Token::new(TokenKind::OpenCurly, "{"),
        statements: vec![Statement::Expression(ExpressionStatement {
            token: Token::new(TokenKind::Ident, name),
            value: Some(Expression::Identifier(ident(name))),
        })],
    };

    let mut if_expr = IfExpression {
        token: Token::new(TokenKind::If, "if"),
        condition: Expression::Identifier(ident("ok")),
        consequence: block("a"),
        alternative: None,
    };
    assert_eq!(if_expr.string(), "if (ok) { a; }");

    if_expr.alternative = Some(block("b"));
    assert_eq!(if_expr.string(), "if (ok) { a; } else { b; }");
    assert_eq!(if_expr.token_literal(), "if");
}

#[test]
fn test_block_string_separates_statements() {
    let expr_stmt = |name: &str| {
        Statement::Expression(ExpressionStatement {
            token: Token::new(TokenKind::Ident, name),
            value: Some(Expression::Identifier(ident(name))),
        })
    };
    let block = BlockStatement {
        token: Token::new(TokenKind::OpenCurly, "{"),
        statements: vec![
            expr_stmt("x"),
            Statement::Return(ReturnStatement {
                token: Token::new(TokenKind::Return, "return"),
                value: Some(int(1)),
            }),
            expr_stmt("y"),
        ],
    };

    assert_eq!(block.string(), "x; return 1; y;");
}
