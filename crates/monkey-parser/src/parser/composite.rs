//! Handlers for the composite constructs: `if`, function/macro literals,
//! arrays, hashes, and the `(` / `[` infix operators (call and index).

use monkey_ast::{
    ArrayLiteral, CallExpression, Expression, FunctionLiteral, HashLiteral, Identifier,
    IfExpression, IndexExpression, MacroLiteral,
};
use monkey_token::TokenKind;

use crate::error::ParseError;
use crate::parser::core::{Parser, ParseResult};
use crate::precedence::Precedence;

pub(crate) fn register(parser: &mut Parser) {
    parser.prefix_fns.insert(TokenKind::If, parse_if_expression);
    parser
        .prefix_fns
        .insert(TokenKind::Function, parse_function_literal);
    parser
        .prefix_fns
        .insert(TokenKind::Macro, parse_macro_literal);
    parser
        .prefix_fns
        .insert(TokenKind::LBracket, parse_array_literal);
    parser
        .prefix_fns
        .insert(TokenKind::LBrace, parse_hash_literal);

    parser.infix_fns.insert(TokenKind::LParen, parse_call_expression);
    parser
        .infix_fns
        .insert(TokenKind::LBracket, parse_index_expression);
}

fn expect(parser: &mut Parser, kind: TokenKind) -> ParseResult<()> {
    if parser.expect_peek(kind) {
        Ok(())
    } else {
        Err(ParseError::ExpectedNextToken {
            expected: kind,
            got: parser.peek_token.kind,
        })
    }
}

fn parse_if_expression(parser: &mut Parser) -> ParseResult<Expression> {
    expect(parser, TokenKind::LParen)?;
    parser.next_token();
    let condition = parser.parse_expression(Precedence::Lowest)?;
    expect(parser, TokenKind::RParen)?;
    expect(parser, TokenKind::LBrace)?;
    let consequence = parser.parse_block_statement();

    let alternative = if parser.peek_is(TokenKind::Else) {
        parser.next_token();
        expect(parser, TokenKind::LBrace)?;
        Some(parser.parse_block_statement())
    } else {
        None
    };

    Ok(Expression::If(IfExpression {
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

/// Parses `( ident, ident, ... )`, consuming through the closing `)`.
/// Shared by function and macro literals. A trailing comma before `)` is
/// tolerated.
fn parse_identifier_list(parser: &mut Parser) -> ParseResult<Vec<Identifier>> {
    let mut identifiers = Vec::new();

    if parser.peek_is(TokenKind::RParen) {
        parser.next_token();
        return Ok(identifiers);
    }

    parser.next_token();
    identifiers.push(Identifier {
        name: parser.cur_token.literal.clone(),
    });

    while parser.peek_is(TokenKind::Comma) {
        parser.next_token();
        if parser.peek_is(TokenKind::RParen) {
            break;
        }
        parser.next_token();
        identifiers.push(Identifier {
            name: parser.cur_token.literal.clone(),
        });
    }

    expect(parser, TokenKind::RParen)?;
    Ok(identifiers)
}

fn parse_function_literal(parser: &mut Parser) -> ParseResult<Expression> {
    expect(parser, TokenKind::LParen)?;
    let parameters = parse_identifier_list(parser)?;
    expect(parser, TokenKind::LBrace)?;
    let body = parser.parse_block_statement();
    Ok(Expression::Function(FunctionLiteral { parameters, body }))
}

fn parse_macro_literal(parser: &mut Parser) -> ParseResult<Expression> {
    expect(parser, TokenKind::LParen)?;
    let parameters = parse_identifier_list(parser)?;
    expect(parser, TokenKind::LBrace)?;
    let body = parser.parse_block_statement();
    Ok(Expression::Macro(MacroLiteral { parameters, body }))
}

/// Parses a comma-separated expression list up to (and consuming) `end`.
/// Trailing comma permitted.
fn parse_expression_list(parser: &mut Parser, end: TokenKind) -> ParseResult<Vec<Expression>> {
    let mut list = Vec::new();

    if parser.peek_is(end) {
        parser.next_token();
        return Ok(list);
    }

    parser.next_token();
    list.push(parser.parse_expression(Precedence::Lowest)?);

    while parser.peek_is(TokenKind::Comma) {
        parser.next_token();
        if parser.peek_is(end) {
            break;
        }
        parser.next_token();
        list.push(parser.parse_expression(Precedence::Lowest)?);
    }

    expect(parser, end)?;
    Ok(list)
}

fn parse_array_literal(parser: &mut Parser) -> ParseResult<Expression> {
    let elements = parse_expression_list(parser, TokenKind::RBracket)?;
    Ok(Expression::Array(ArrayLiteral { elements }))
}

fn parse_hash_literal(parser: &mut Parser) -> ParseResult<Expression> {
    let mut pairs = Vec::new();

    while !parser.peek_is(TokenKind::RBrace) {
        parser.next_token();
        let key = parser.parse_expression(Precedence::Lowest)?;
        expect(parser, TokenKind::Colon)?;
        parser.next_token();
        let value = parser.parse_expression(Precedence::Lowest)?;
        pairs.push((key, value));

        if parser.peek_is(TokenKind::Comma) {
            parser.next_token();
        } else {
            break;
        }
    }

    expect(parser, TokenKind::RBrace)?;
    Ok(Expression::Hash(HashLiteral { pairs }))
}

fn parse_call_expression(parser: &mut Parser, function: Expression) -> ParseResult<Expression> {
    let arguments = parse_expression_list(parser, TokenKind::RParen)?;
    Ok(Expression::Call(CallExpression {
        function: Box::new(function),
        arguments,
    }))
}

fn parse_index_expression(parser: &mut Parser, left: Expression) -> ParseResult<Expression> {
    parser.next_token();
    let index = parser.parse_expression(Precedence::Lowest)?;
    expect(parser, TokenKind::RBracket)?;
    Ok(Expression::Index(IndexExpression {
        left: Box::new(left),
        index: Box::new(index),
    }))
}
