//! Statement-level parse routines: `let`, `return`, bare expressions, and
//! `{ ... }` blocks.

use monkey_ast::{BlockStatement, ExpressionStatement, Identifier, LetStatement, ReturnStatement, Statement};
use monkey_token::TokenKind;

use crate::parser::core::Parser;
use crate::precedence::Precedence;

impl Parser {
    pub(crate) fn parse_let_statement(&mut self) -> Option<Statement> {
        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier {
            name: self.cur_token.literal.clone(),
        };
        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest).ok()?;
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
        Some(Statement::Let(LetStatement { name, value }))
    }

    pub(crate) fn parse_return_statement(&mut self) -> Option<Statement> {
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest).ok()?;
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
        Some(Statement::Return(ReturnStatement { value }))
    }

    pub(crate) fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expression = self.parse_expression(Precedence::Lowest).ok()?;
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
        Some(Statement::Expression(ExpressionStatement { expression }))
    }

    /// Parses `{ statement* }`, starting with `cur_token` on `{` and ending
    /// with `cur_token` on the matching `}` (or `Eof` if unterminated).
    pub(crate) fn parse_block_statement(&mut self) -> BlockStatement {
        let mut block = BlockStatement::default();
        self.next_token();
        while !self.cur_is(TokenKind::RBrace) && !self.cur_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                block.statements.push(statement);
            }
            self.next_token();
        }
        block
    }
}
