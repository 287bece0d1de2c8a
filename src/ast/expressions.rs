use crate::lexer::tokens::Token;

use super::{
    ast::{Expression, Node},
    statements::BlockStatement,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Node for Identifier {
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    fn string(&self) -> String {
        self.value.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl Node for IntegerLiteral {
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    fn string(&self) -> String {
        self.token.literal.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

impl Node for BooleanLiteral {
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    fn string(&self) -> String {
        self.token.literal.clone()
    }
}

/// `<operator><operand>`, rendered as `(<operator><operand>)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: String,
    pub operand: Expression,
}

impl Node for PrefixExpression {
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    fn string(&self) -> String {
        format!("({}{})", self.operator, self.operand.string())
    }
}

/// `<left> <operator> <right>`, rendered as `(<left> <operator> <right>)`.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    /// The operator token
    pub token: Token,
    pub operator: String,
    pub left: Expression,
    pub right: Expression,
}

impl Node for InfixExpression {
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    fn string(&self) -> String {
        format!(
            "({} {} {})",
            self.left.string(),
            self.operator,
            self.right.string()
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfExpression {
    pub token: Token,
    pub condition: Expression,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

impl Node for IfExpression {
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    fn string(&self) -> String {
        let mut out = format!(
            "if ({}) {{ {} }}",
            self.condition.string(),
            self.consequence.string()
        );

        if let Some(alternative) = &self.alternative {
            out.push_str(&format!(" else {{ {} }}", alternative.string()));
        }

        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    /// The `fn` keyword
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

impl Node for FunctionLiteral {
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    fn string(&self) -> String {
        let params = self
            .parameters
            .iter()
            .map(|p| p.string())
            .collect::<Vec<String>>()
            .join(", ");

        format!("{}({}) {{ {} }}", self.token_literal(), params, self.body.string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    /// The `(` token
    pub token: Token,
    pub callee: Expression,
    pub arguments: Vec<Expression>,
}

impl Node for CallExpression {
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    fn string(&self) -> String {
        let args = self
            .arguments
            .iter()
            .map(|a| a.string())
            .collect::<Vec<String>>()
            .join(", ");

        format!("{}({})", self.callee.string(), args)
    }
}
