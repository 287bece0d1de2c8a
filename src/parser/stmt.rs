use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement},
    },
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::Precedence, parser::Parser};

pub fn parse_stmt(parser: &mut Parser) -> Option<Statement> {
    let kind = parser.cur_token().kind;
    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&kind).copied() {
        return stmt_fn(parser);
    }

    parse_expression_stmt(parser)
}

/// `let <ident> = <expr>[;]`
pub fn parse_let_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.cur_token().clone();

    if !parser.expect_peek(TokenKind::Ident) {
        return None;
    }

    let name = Identifier {
        token: parser.cur_token().clone(),
        value: parser.cur_token().literal.clone(),
    };

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }

    parser.next_token();
    let value = parse_expr(parser, Precedence::Lowest);

    skip_optional_semicolon(parser);

    Some(Statement::Let(LetStatement { token, name, value }))
}

/// `return <expr>[;]`
pub fn parse_return_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.cur_token().clone();

    parser.next_token();
    let value = parse_expr(parser, Precedence::Lowest);

    skip_optional_semicolon(parser);

    Some(Statement::Return(ReturnStatement { token, value }))
}

/// A statement made of a single expression. A failed expression still
/// yields the statement, with its value left empty.
pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.cur_token().clone();
    let value = parse_expr(parser, Precedence::Lowest);

    skip_optional_semicolon(parser);

    Some(Statement::Expression(ExpressionStatement { token, value }))
}

/// Parses statements from the current `{` up to the matching `}` or `EOF`.
///
/// Leaves the closing `}` as the current token.
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStatement {
    let token = parser.cur_token().clone();
    parser.next_token();

    let mut statements = Vec::new();
    while !parser.cur_token_is(TokenKind::CloseCurly) && !parser.cur_token_is(TokenKind::EOF) {
        if let Some(stmt) = parse_stmt(parser) {
            statements.push(stmt);
        }
        parser.next_token();
    }

    BlockStatement { token, statements }
}

fn skip_optional_semicolon(parser: &mut Parser) {
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }
}
