//! Statement nodes and the `Program` root.

use crate::expression::Expression;
use crate::expression::Identifier;
use crate::Node;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    Block(BlockStatement),
}

impl Node for Statement {
    fn to_string(&self) -> String {
        match self {
            Statement::Let(s) => s.to_string(),
            Statement::Return(s) => s.to_string(),
            Statement::Expression(s) => s.to_string(),
            Statement::Block(s) => s.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    pub name: Identifier,
    pub value: Expression,
}

impl Node for LetStatement {
    fn to_string(&self) -> String {
        format!("let {} = {};", self.name.to_string(), self.value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub value: Expression,
}

impl Node for ReturnStatement {
    fn to_string(&self) -> String {
        format!("return {};", self.value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
}

impl Node for ExpressionStatement {
    fn to_string(&self) -> String {
        self.expression.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl Node for BlockStatement {
    fn to_string(&self) -> String {
        self.statements.iter().map(|s| s.to_string()).collect()
    }
}

/// The root of a parsed program: an ordered sequence of top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Node for Program {
    fn to_string(&self) -> String {
        self.statements.iter().map(|s| s.to_string()).collect()
    }
}
