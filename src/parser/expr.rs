use crate::{
    ast::{
        ast::Expression,
        expressions::{
            BooleanLiteral, CallExpression, FunctionLiteral, Identifier, IfExpression,
            InfixExpression, IntegerLiteral, PrefixExpression,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser, stmt::parse_block_stmt};

pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Option<Expression> {
    if !parser.enter_nesting() {
        return None;
    }

    let expr = parse_expr_inner(parser, precedence);
    parser.leave_nesting();
    expr
}

fn parse_expr_inner(parser: &mut Parser, precedence: Precedence) -> Option<Expression> {
    // First parse NUD
    let token_kind = parser.cur_token().kind;
    let nud = match parser.get_nud_lookup().get(&token_kind).copied() {
        Some(nud) => nud,
        None => {
            let error = Error::new(
                ErrorImpl::NoPrefixParseFn { kind: token_kind },
                parser.cur_token().clone(),
            );
            parser.push_error(error);
            return None;
        }
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than `precedence`, fold it into lhs
    while !parser.peek_token_is(TokenKind::Semicolon) && precedence < parser.peek_precedence() {
        let led = match parser.get_led_lookup().get(&parser.peek_token().kind).copied() {
            Some(led) => led,
            None => return Some(left),
        };

        parser.next_token();
        let operator_precedence = parser.cur_precedence();
        left = led(parser, left, operator_precedence)?;
    }

    Some(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Option<Expression> {
    let token = parser.cur_token().clone();
    Some(Expression::Identifier(Identifier {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Option<Expression> {
    let token = parser.cur_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Some(Expression::Integer(IntegerLiteral { token, value })),
        Err(_) => {
            let error = Error::new(
                ErrorImpl::IntegerParseError {
                    literal: token.literal.clone(),
                },
                token,
            );
            parser.push_error(error);
            None
        }
    }
}

pub fn parse_boolean_literal(parser: &mut Parser) -> Option<Expression> {
    let token = parser.cur_token().clone();
    Some(Expression::Boolean(BooleanLiteral {
        value: token.kind == TokenKind::True,
        token,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expression> {
    let token = parser.cur_token().clone();
    parser.next_token();

    let operand = parse_expr(parser, Precedence::Prefix)?;

    Some(Expression::Prefix(Box::new(PrefixExpression {
        operator: token.literal.clone(),
        token,
        operand,
    })))
}

pub fn parse_infix_expr(
    parser: &mut Parser,
    left: Expression,
    precedence: Precedence,
) -> Option<Expression> {
    let token = parser.cur_token().clone();
    parser.next_token();

    let right = parse_expr(parser, precedence)?;

    Some(Expression::Infix(Box::new(InfixExpression {
        operator: token.literal.clone(),
        token,
        left,
        right,
    })))
}

/// `( <expr> )`. Grouping only changes the tree shape, no node is produced for the parens.
pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expression> {
    parser.next_token();

    let expr = parse_expr(parser, Precedence::Lowest)?;

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(expr)
}

/// `if (<cond>) { ... } [else { ... }]`
pub fn parse_if_expr(parser: &mut Parser) -> Option<Expression> {
    let token = parser.cur_token().clone();

    if !parser.expect_peek(TokenKind::OpenParen) {
        return None;
    }

    parser.next_token();
    let condition = parse_expr(parser, Precedence::Lowest)?;

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    if !parser.expect_peek(TokenKind::OpenCurly) {
        return None;
    }

    let consequence = parse_block_stmt(parser);

    let alternative = if parser.peek_token_is(TokenKind::Else) {
        parser.next_token();

        if !parser.expect_peek(TokenKind::OpenCurly) {
            return None;
        }

        Some(parse_block_stmt(parser))
    } else {
        None
    };

    Some(Expression::If(Box::new(IfExpression {
        token,
        condition,
        consequence,
        alternative,
    })))
}

/// `fn(<params>) { ... }`
pub fn parse_function_literal(parser: &mut Parser) -> Option<Expression> {
    let token = parser.cur_token().clone();

    if !parser.expect_peek(TokenKind::OpenParen) {
        return None;
    }

    let parameters = parse_function_parameters(parser)?;

    if !parser.expect_peek(TokenKind::OpenCurly) {
        return None;
    }

    let body = parse_block_stmt(parser);

    Some(Expression::Function(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

fn parse_function_parameters(parser: &mut Parser) -> Option<Vec<Identifier>> {
    let mut parameters = vec![];

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.next_token();
        return Some(parameters);
    }

    loop {
        if !parser.expect_peek(TokenKind::Ident) {
            return None;
        }

        let token = parser.cur_token().clone();
        parameters.push(Identifier {
            value: token.literal.clone(),
            token,
        });

        if !parser.peek_token_is(TokenKind::Comma) {
            break;
        }
        parser.next_token();
    }

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(parameters)
}

pub fn parse_call_expr(
    parser: &mut Parser,
    callee: Expression,
    _precedence: Precedence,
) -> Option<Expression> {
    let token = parser.cur_token().clone();
    let arguments = parse_call_arguments(parser)?;

    Some(Expression::Call(Box::new(CallExpression {
        token,
        callee,
        arguments,
    })))
}

fn parse_call_arguments(parser: &mut Parser) -> Option<Vec<Expression>> {
    let mut args = vec![];

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.next_token();
        return Some(args);
    }

    parser.next_token();
    args.push(parse_expr(parser, Precedence::Lowest)?);

    while parser.peek_token_is(TokenKind::Comma) {
        parser.next_token();
        parser.next_token();
        args.push(parse_expr(parser, Precedence::Lowest)?);
    }

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(args)
}
