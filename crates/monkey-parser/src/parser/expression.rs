//! The Pratt loop itself, plus prefix/infix handlers for atoms and the
//! arithmetic/comparison operators.

use monkey_ast::{
    BooleanLiteral, Expression, Identifier, InfixExpression, IntegerLiteral, PrefixExpression,
    StringLiteral,
};
use monkey_token::TokenKind;

use crate::error::ParseError;
use crate::parser::core::{Parser, ParseResult};
use crate::precedence::{precedence_of, Precedence};

pub(crate) fn register(parser: &mut Parser) {
    parser.prefix_fns.insert(TokenKind::Ident, parse_identifier);
    parser.prefix_fns.insert(TokenKind::Int, parse_integer_literal);
    parser
        .prefix_fns
        .insert(TokenKind::StringLit, parse_string_literal);
    parser.prefix_fns.insert(TokenKind::True, parse_boolean);
    parser.prefix_fns.insert(TokenKind::False, parse_boolean);
    parser
        .prefix_fns
        .insert(TokenKind::Bang, parse_prefix_expression);
    parser
        .prefix_fns
        .insert(TokenKind::Minus, parse_prefix_expression);
    parser
        .prefix_fns
        .insert(TokenKind::LParen, parse_grouped_expression);

    for kind in [
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Slash,
        TokenKind::Asterisk,
        TokenKind::Eq,
        TokenKind::NotEq,
        TokenKind::Lt,
        TokenKind::Gt,
    ] {
        parser.infix_fns.insert(kind, parse_infix_expression);
    }
}

impl Parser {
    /// Parses an expression binding at `precedence` or tighter.
    ///
    /// Starts with `cur_token` on the expression's first token and ends
    /// with `cur_token` on its last.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        let Some(prefix) = self.prefix_fns.get(&self.cur_token.kind).copied() else {
            let error = ParseError::NoPrefixParseFn {
                kind: self.cur_token.kind,
            };
            self.push_error(error.clone());
            return Err(error);
        };
        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < precedence_of(self.peek_token.kind) {
            let Some(infix) = self.infix_fns.get(&self.peek_token.kind).copied() else {
                return Ok(left);
            };
            self.next_token();
            left = infix(self, left)?;
        }
        Ok(left)
    }
}

fn parse_identifier(parser: &mut Parser) -> ParseResult<Expression> {
    Ok(Expression::Identifier(Identifier {
        name: parser.cur_token.literal.clone(),
    }))
}

fn parse_integer_literal(parser: &mut Parser) -> ParseResult<Expression> {
    let literal = parser.cur_token.literal.clone();
    match literal.parse::<i64>() {
        Ok(value) => Ok(Expression::IntegerLiteral(IntegerLiteral { value })),
        Err(_) => {
            let error = ParseError::InvalidInteger { literal };
            parser.push_error(error.clone());
            Err(error)
        }
    }
}

fn parse_string_literal(parser: &mut Parser) -> ParseResult<Expression> {
    Ok(Expression::StringLiteral(StringLiteral {
        value: parser.cur_token.literal.clone(),
    }))
}

fn parse_boolean(parser: &mut Parser) -> ParseResult<Expression> {
    Ok(Expression::BooleanLiteral(BooleanLiteral {
        value: parser.cur_is(TokenKind::True),
    }))
}

fn parse_prefix_expression(parser: &mut Parser) -> ParseResult<Expression> {
    let operator = parser.cur_token.literal.clone();
    parser.next_token();
    let right = parser.parse_expression(Precedence::Prefix)?;
    Ok(Expression::Prefix(PrefixExpression {
        operator,
        right: Box::new(right),
    }))
}

fn parse_grouped_expression(parser: &mut Parser) -> ParseResult<Expression> {
    parser.next_token();
    let expression = parser.parse_expression(Precedence::Lowest)?;
    if !parser.expect_peek(TokenKind::RParen) {
        return Err(ParseError::ExpectedNextToken {
            expected: TokenKind::RParen,
            got: parser.peek_token.kind,
        });
    }
    Ok(expression)
}

fn parse_infix_expression(parser: &mut Parser, left: Expression) -> ParseResult<Expression> {
    let operator = parser.cur_token.literal.clone();
    let precedence = precedence_of(parser.cur_token.kind);
    parser.next_token();
    let right = parser.parse_expression(precedence)?;
    Ok(Expression::Infix(InfixExpression {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}
