use std::fmt::Display;

use super::{
    expressions::{
        BooleanLiteral, CallExpression, FunctionLiteral, Identifier, IfExpression, InfixExpression,
        IntegerLiteral, PrefixExpression,
    },
    statements::{ExpressionStatement, LetStatement, ReturnStatement},
};

/// Node Trait
///
/// Shared behavior of every node in the tree.
pub trait Node {
    /// Returns the literal text of the token the node was built from.
    fn token_literal(&self) -> String;
    /// Renders the node back into approximate source text.
    ///
    /// Operators are fully parenthesised, so `-a * b` renders as `((-a) * b)`.
    fn string(&self) -> String;
}

/// Statement Types
///
/// Blocks are not statements on their own; they only appear inside `if` and `fn`.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> String {
        match self {
            Statement::Let(stmt) => stmt.token_literal(),
            Statement::Return(stmt) => stmt.token_literal(),
            Statement::Expression(stmt) => stmt.token_literal(),
        }
    }

    fn string(&self) -> String {
        match self {
            Statement::Let(stmt) => stmt.string(),
            Statement::Return(stmt) => stmt.string(),
            Statement::Expression(stmt) => stmt.string(),
        }
    }
}

/// Expression Types
///
/// Recursive children are boxed so the enum keeps a fixed size.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
    Prefix(Box<PrefixExpression>),
    Infix(Box<InfixExpression>),
    If(Box<IfExpression>),
    Function(FunctionLiteral),
    Call(Box<CallExpression>),
}

impl Node for Expression {
    fn token_literal(&self) -> String {
        match self {
            Expression::Identifier(expr) => expr.token_literal(),
            Expression::Integer(expr) => expr.token_literal(),
            Expression::Boolean(expr) => expr.token_literal(),
            Expression::Prefix(expr) => expr.token_literal(),
            Expression::Infix(expr) => expr.token_literal(),
            Expression::If(expr) => expr.token_literal(),
            Expression::Function(expr) => expr.token_literal(),
            Expression::Call(expr) => expr.token_literal(),
        }
    }

    fn string(&self) -> String {
        match self {
            Expression::Identifier(expr) => expr.string(),
            Expression::Integer(expr) => expr.string(),
            Expression::Boolean(expr) => expr.string(),
            Expression::Prefix(expr) => expr.string(),
            Expression::Infix(expr) => expr.string(),
            Expression::If(expr) => expr.string(),
            Expression::Function(expr) => expr.string(),
            Expression::Call(expr) => expr.string(),
        }
    }
}

/// Root of the tree: every statement parsed from one source unit, in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program { statements: vec![] }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }
}

impl Node for Program {
    fn token_literal(&self) -> String {
        match self.statements.first() {
            Some(stmt) => stmt.token_literal(),
            None => String::new(),
        }
    }

    fn string(&self) -> String {
        self.statements.iter().map(|stmt| stmt.string()).collect()
    }
}

macro_rules! impl_display_via_string {
    ($($node:ty),* $(,)?) => {
        $(
            impl Display for $node {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.string())
                }
            }
        )*
    };
}

impl_display_via_string!(Statement, Expression, Program);
