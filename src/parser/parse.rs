//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing
//! infrastructure: the error type, cursor helpers, the backtracking
//! combinator, and the top-level parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following
//! organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: struct, variable, and function declarations
//! - `statements`: statements (if, while, for, blocks, ...)
//! - `expressions`: expressions via a left-associative precedence ladder
//!
//! Parser methods are split across multiple files using `impl Parser`
//! blocks, allowing each module to extend the Parser with related
//! functionality while maintaining access to the shared parser state.
//!
//! # Production results
//!
//! Every production returns `Result<Option<T>, ParseError>`:
//! - `Ok(Some(node))`: matched, cursor advanced past everything accepted
//! - `Ok(None)`: no match, cursor restored to the entry position
//! - `Err(_)`: fatal syntax error; the first one aborts the whole parse
//!
//! Ambiguous prefixes (a variable declaration that turns out to be a
//! function, an lvalue that is not followed by `=`, a `(` that opens a
//! cast or just a parenthesized expression) go through [`Parser::attempt`],
//! which rolls the cursor back on no-match so failed speculation never
//! leaks partial consumption.

use crate::parser::ast::*;
use crate::parser::lexer::{LexError, Lexer, Token};
use thiserror::Error;

/// Parser error type
#[derive(Debug, Clone, Error)]
#[error("syntax error at line {}, column {}: {message}", .location.line, .location.column)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            message: err.message,
            location: err.location,
        }
    }
}

/// Recursive descent parser for Mini-C
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    /// Tokenize the source and set the cursor at the first token.
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self::from_tokens(tokens))
    }

    /// Build a parser over an already-lexed token sequence.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the entire program: `( struct | var | func )*` then end of input.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();

        loop {
            if let Some(decl) = self.parse_struct_declaration()? {
                program.nodes.push(decl);
            } else if let Some(decl) = self.parse_variable_declaration()? {
                program.nodes.push(decl);
            } else if let Some(decl) = self.parse_function_definition()? {
                program.nodes.push(decl);
            } else {
                break;
            }
        }

        // Nothing matched: the only acceptable remainder is end of input
        if !self.is_at_end() {
            return Err(self.error_here(format!(
                "expected declaration or end of input, found {}",
                self.peek()
            )));
        }

        log::debug!("parsed {} top-level declarations", program.nodes.len());

        Ok(program)
    }

    // ===== Backtracking =====

    /// Run a speculative production, restoring the cursor on no-match.
    ///
    /// Fatal errors propagate; only `Ok(None)` rolls the cursor back, so
    /// after a failed attempt the cursor equals its pre-attempt position.
    pub(crate) fn attempt<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<Option<T>, ParseError>,
    ) -> Result<Option<T>, ParseError> {
        let saved = self.position;
        let result = parse(self)?;
        if result.is_none() {
            self.position = saved;
        }
        Ok(result)
    }

    // ===== Helper methods =====

    pub(crate) fn match_token(&mut self, token: &Token) -> bool {
        if std::mem::discriminant(self.peek()) == std::mem::discriminant(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(self.peek()) == std::mem::discriminant(token)
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
            &self.tokens[self.position - 1]
        } else {
            &self.tokens[self.position]
        }
    }

    /// The cursor rests on the end-of-input token once everything else
    /// has been consumed.
    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek(), Token::Eof(_))
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn peek_token(&self) -> Token {
        self.tokens[self.position].clone()
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location()
    }

    pub(crate) fn error_here(&self, message: impl Into<String>) -> ParseError {
        ParseError {
            message: message.into(),
            location: self.current_location(),
        }
    }

    pub(crate) fn expect_token(
        &mut self,
        token: &Token,
        message: &str,
    ) -> Result<(), ParseError> {
        if self.check(token) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_here(format!("{}, found {}", message, self.peek())))
        }
    }

    pub(crate) fn expect_identifier(
        &mut self,
        message: &str,
    ) -> Result<String, ParseError> {
        if let Token::Ident(name, _) = self.peek_token() {
            self.advance();
            Ok(name)
        } else {
            Err(self.error_here(format!("{}, found {}", message, self.peek())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_function() {
        let source = "int f() { return 0; }";
        let mut parser = Parser::new(source).unwrap();
        let program = parser.parse_program().unwrap();

        assert_eq!(program.nodes.len(), 1);
        match &program.nodes[0] {
            AstNode::FunctionDef {
                name,
                params,
                return_type,
                ..
            } => {
                assert_eq!(name, "f");
                assert_eq!(params.len(), 0);
                assert!(matches!(
                    return_type,
                    ReturnType::Base {
                        base: TypeBase::Int,
                        pointer: false
                    }
                ));
            }
            other => panic!("expected function definition, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_variable() {
        let source = "int x;";
        let mut parser = Parser::new(source).unwrap();
        let program = parser.parse_program().unwrap();

        assert_eq!(program.nodes.len(), 1);
        match &program.nodes[0] {
            AstNode::VarDecl {
                base, declarators, ..
            } => {
                assert_eq!(*base, TypeBase::Int);
                assert_eq!(declarators.len(), 1);
                assert_eq!(declarators[0].name, "x");
                assert!(declarators[0].array.is_none());
            }
            other => panic!("expected variable declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_struct() {
        let source = "struct Point { int x; int y; };";
        let mut parser = Parser::new(source).unwrap();
        let program = parser.parse_program().unwrap();

        assert_eq!(program.nodes.len(), 1);
        match &program.nodes[0] {
            AstNode::StructDef { name, members, .. } => {
                assert_eq!(name, "Point");
                assert_eq!(members.len(), 2);
            }
            other => panic!("expected struct definition, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_semicolon_reports_line() {
        let source = "int x;\nint y";
        let mut parser = Parser::new(source).unwrap();
        let err = parser.parse_program().unwrap_err();

        assert_eq!(err.location.line, 2);
    }

    #[test]
    fn test_cursor_rests_on_eof_after_success() {
        let source = "int f(int a) { return a; }";
        let mut parser = Parser::new(source).unwrap();
        parser.parse_program().unwrap();

        assert!(matches!(parser.peek(), Token::Eof(_)));
    }
}
