//! Expression nodes.

use crate::statement::BlockStatement;
use crate::Node;

/// Any expression. Variants hold `Box`/`Vec` for recursive children since
/// the enum itself cannot otherwise be sized.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    BooleanLiteral(BooleanLiteral),
    StringLiteral(StringLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Function(FunctionLiteral),
    Call(CallExpression),
    Array(ArrayLiteral),
    Index(IndexExpression),
    Hash(HashLiteral),
    Macro(MacroLiteral),
}

impl Node for Expression {
    fn to_string(&self) -> String {
        match self {
            Expression::Identifier(e) => e.to_string(),
            Expression::IntegerLiteral(e) => e.to_string(),
            Expression::BooleanLiteral(e) => e.to_string(),
            Expression::StringLiteral(e) => e.to_string(),
            Expression::Prefix(e) => e.to_string(),
            Expression::Infix(e) => e.to_string(),
            Expression::If(e) => e.to_string(),
            Expression::Function(e) => e.to_string(),
            Expression::Call(e) => e.to_string(),
            Expression::Array(e) => e.to_string(),
            Expression::Index(e) => e.to_string(),
            Expression::Hash(e) => e.to_string(),
            Expression::Macro(e) => e.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
}

impl Node for Identifier {
    fn to_string(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerLiteral {
    pub value: i64,
}

impl Node for IntegerLiteral {
    fn to_string(&self) -> String {
        self.value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanLiteral {
    pub value: bool,
}

impl Node for BooleanLiteral {
    fn to_string(&self) -> String {
        self.value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub value: String,
}

impl Node for StringLiteral {
    fn to_string(&self) -> String {
        self.value.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    pub operator: String,
    pub right: Box<Expression>,
}

impl Node for PrefixExpression {
    fn to_string(&self) -> String {
        format!("({}{})", self.operator, self.right.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Box<Expression>,
}

impl Node for InfixExpression {
    fn to_string(&self) -> String {
        format!(
            "({} {} {})",
            self.left.to_string(),
            self.operator,
            self.right.to_string()
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfExpression {
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

impl Node for IfExpression {
    fn to_string(&self) -> String {
        let mut out = format!(
            "if{} {}",
            self.condition.to_string(),
            self.consequence.to_string()
        );
        if let Some(alt) = &self.alternative {
            out.push_str("else ");
            out.push_str(&alt.to_string());
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

impl Node for FunctionLiteral {
    fn to_string(&self) -> String {
        let params: Vec<String> = self.parameters.iter().map(|p| p.to_string()).collect();
        format!("fn({}){}", params.join(", "), self.body.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

impl Node for CallExpression {
    fn to_string(&self) -> String {
        let args: Vec<String> = self.arguments.iter().map(|a| a.to_string()).collect();
        format!("{}({})", self.function.to_string(), args.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLiteral {
    pub elements: Vec<Expression>,
}

impl Node for ArrayLiteral {
    fn to_string(&self) -> String {
        let elems: Vec<String> = self.elements.iter().map(|e| e.to_string()).collect();
        format!("[{}]", elems.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpression {
    pub left: Box<Expression>,
    pub index: Box<Expression>,
}

impl Node for IndexExpression {
    fn to_string(&self) -> String {
        format!("({}[{}])", self.left.to_string(), self.index.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HashLiteral {
    pub pairs: Vec<(Expression, Expression)>,
}

impl Node for HashLiteral {
    fn to_string(&self) -> String {
        let pairs: Vec<String> = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}:{}", k.to_string(), v.to_string()))
            .collect();
        format!("{{{}}}", pairs.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MacroLiteral {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

impl Node for MacroLiteral {
    fn to_string(&self) -> String {
        let params: Vec<String> = self.parameters.iter().map(|p| p.to_string()).collect();
        format!("macro({}){}", params.join(", "), self.body.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::{ExpressionStatement, Statement};

    #[test]
    fn infix_renders_with_spaces() {
        let expr = Expression::Infix(InfixExpression {
            left: Box::new(Expression::Identifier(Identifier { name: "a".into() })),
            operator: "+".into(),
            right: Box::new(Expression::Identifier(Identifier { name: "b".into() })),
        });
        assert_eq!(expr.to_string(), "(a + b)");
    }

    #[test]
    fn prefix_renders_without_space() {
        let expr = Expression::Prefix(PrefixExpression {
            operator: "-".into(),
            right: Box::new(Expression::Identifier(Identifier { name: "a".into() })),
        });
        assert_eq!(expr.to_string(), "(-a)");
    }

    #[test]
    fn function_literal_renders_params_and_body() {
        let stmt = Statement::Expression(ExpressionStatement {
            expression: Expression::Identifier(Identifier { name: "x".into() }),
        });
        let func = Expression::Function(FunctionLiteral {
            parameters: vec![Identifier { name: "x".into() }, Identifier { name: "y".into() }],
            body: BlockStatement {
                statements: vec![stmt],
            },
        });
        assert_eq!(func.to_string(), "fn(x, y)x");
    }
}
