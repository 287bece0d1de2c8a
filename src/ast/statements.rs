use crate::lexer::tokens::Token;

use super::ast::{Expression, Node, Statement};
use super::expressions::Identifier;

/// `let <name> = <value>;`
///
/// `value` is `None` when the value expression failed to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expression>,
}

impl Node for LetStatement {
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    fn string(&self) -> String {
        let value = self.value.as_ref().map(|v| v.string()).unwrap_or_default();
        format!("{} {} = {};", self.token_literal(), self.name.string(), value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub token: Token,
    pub value: Option<Expression>,
}

impl Node for ReturnStatement {
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    fn string(&self) -> String {
        let value = self.value.as_ref().map(|v| v.string()).unwrap_or_default();
        format!("{} {};", self.token_literal(), value)
    }
}

/// A bare expression used as a statement, e.g. `x + 10;`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    /// First token of the expression
    pub token: Token,
    pub value: Option<Expression>,
}

impl Node for ExpressionStatement {
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    fn string(&self) -> String {
        self.value.as_ref().map(|v| v.string()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// The opening `{`
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl Node for BlockStatement {
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    /// Statements are separated by spaces, and expression statements keep a
    /// trailing `;` so neighbouring expressions never run together.
    fn string(&self) -> String {
        self.statements
            .iter()
            .map(|stmt| match stmt {
                Statement::Expression(ExpressionStatement { value: Some(_), .. }) => {
                    format!("{};", stmt.string())
                }
                _ => stmt.string(),
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}
