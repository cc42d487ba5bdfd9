//! Statement parsing implementation
//!
//! This module handles the statement productions:
//!
//! ```text
//! stm         ::= stmCompound
//!               | "if" "(" expr ")" stm ( "else" stm )?
//!               | "while" "(" expr ")" stm
//!               | "for" "(" expr? ";" expr? ";" expr? ")" stm
//!               | "break" ";"
//!               | "return" expr? ";"
//!               | expr? ";"
//! stmCompound ::= "{" ( declVar | stm )* "}"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse a statement; `Ok(None)` if no statement starts here
    pub(crate) fn parse_statement(&mut self) -> Result<Option<AstNode>, ParseError> {
        let loc = self.current_location();

        if let Some(block) = self.parse_compound_statement()? {
            return Ok(Some(block));
        }

        if self.match_token(&Token::If(loc)) {
            return self.parse_if_statement(loc).map(Some);
        }

        if self.match_token(&Token::While(loc)) {
            return self.parse_while_statement(loc).map(Some);
        }

        if self.match_token(&Token::For(loc)) {
            return self.parse_for_statement(loc).map(Some);
        }

        if self.match_token(&Token::Break(loc)) {
            self.expect_token(
                &Token::Semicolon(self.current_location()),
                "expected ';' after 'break'",
            )?;
            return Ok(Some(AstNode::Break { location: loc }));
        }

        if self.match_token(&Token::Return(loc)) {
            let expr = self.parse_expression()?.map(Box::new);
            self.expect_token(
                &Token::Semicolon(self.current_location()),
                "expected ';' after 'return'",
            )?;
            return Ok(Some(AstNode::Return {
                expr,
                location: loc,
            }));
        }

        if let Some(expr) = self.parse_expression()? {
            self.expect_token(
                &Token::Semicolon(self.current_location()),
                "expected ';' after expression",
            )?;
            return Ok(Some(AstNode::ExpressionStatement {
                expr: Box::new(expr),
                location: loc,
            }));
        }

        if self.match_token(&Token::Semicolon(loc)) {
            return Ok(Some(AstNode::Empty { location: loc }));
        }

        Ok(None)
    }

    /// Parse a compound statement: `{ ( declVar | stm )* }`
    pub(crate) fn parse_compound_statement(
        &mut self,
    ) -> Result<Option<AstNode>, ParseError> {
        let loc = self.current_location();
        if !self.match_token(&Token::LBrace(loc)) {
            return Ok(None);
        }

        let mut items = Vec::new();
        loop {
            if let Some(decl) = self.parse_variable_declaration()? {
                items.push(decl);
            } else if let Some(stm) = self.parse_statement()? {
                items.push(stm);
            } else {
                break;
            }
        }

        self.expect_token(
            &Token::RBrace(self.current_location()),
            "expected '}' at end of block",
        )?;

        Ok(Some(AstNode::Compound {
            items,
            location: loc,
        }))
    }

    /// Parse an if statement (the `if` keyword is already consumed)
    fn parse_if_statement(&mut self, loc: SourceLocation) -> Result<AstNode, ParseError> {
        self.expect_token(
            &Token::LParen(self.current_location()),
            "expected '(' after 'if'",
        )?;
        let Some(condition) = self.parse_expression()? else {
            return Err(self.error_here("expected expression in 'if' condition"));
        };
        self.expect_token(
            &Token::RParen(self.current_location()),
            "expected ')' after if condition",
        )?;

        let Some(then_branch) = self.parse_statement()? else {
            return Err(self.error_here("expected statement after 'if'"));
        };

        let else_branch = if self.match_token(&Token::Else(self.current_location())) {
            let Some(stm) = self.parse_statement()? else {
                return Err(self.error_here("expected statement after 'else'"));
            };
            Some(Box::new(stm))
        } else {
            None
        };

        Ok(AstNode::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch,
            location: loc,
        })
    }

    /// Parse a while statement (the `while` keyword is already consumed)
    fn parse_while_statement(
        &mut self,
        loc: SourceLocation,
    ) -> Result<AstNode, ParseError> {
        self.expect_token(
            &Token::LParen(self.current_location()),
            "expected '(' after 'while'",
        )?;
        let Some(condition) = self.parse_expression()? else {
            return Err(self.error_here("expected expression in 'while' condition"));
        };
        self.expect_token(
            &Token::RParen(self.current_location()),
            "expected ')' after while condition",
        )?;

        let Some(body) = self.parse_statement()? else {
            return Err(self.error_here("expected statement after 'while'"));
        };

        Ok(AstNode::While {
            condition: Box::new(condition),
            body: Box::new(body),
            location: loc,
        })
    }

    /// Parse a for statement (the `for` keyword is already consumed).
    /// All three clauses are optional expressions.
    fn parse_for_statement(
        &mut self,
        loc: SourceLocation,
    ) -> Result<AstNode, ParseError> {
        self.expect_token(
            &Token::LParen(self.current_location()),
            "expected '(' after 'for'",
        )?;

        let init = self.parse_expression()?.map(Box::new);
        self.expect_token(
            &Token::Semicolon(self.current_location()),
            "expected ';' after for initializer",
        )?;

        let condition = self.parse_expression()?.map(Box::new);
        self.expect_token(
            &Token::Semicolon(self.current_location()),
            "expected ';' after for condition",
        )?;

        let increment = self.parse_expression()?.map(Box::new);
        self.expect_token(
            &Token::RParen(self.current_location()),
            "expected ')' after for clauses",
        )?;

        let Some(body) = self.parse_statement()? else {
            return Err(self.error_here("expected statement after 'for'"));
        };

        Ok(AstNode::For {
            init,
            condition,
            increment,
            body: Box::new(body),
            location: loc,
        })
    }
}
