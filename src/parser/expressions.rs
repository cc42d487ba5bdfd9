//! Expression parsing implementation
//!
//! Expressions are parsed with one method per precedence level, lowest to
//! highest:
//!
//! ```text
//! expr        ::= exprAssign
//! exprAssign  ::= exprUnary "=" exprAssign | exprOr
//! exprOr      ::= exprAnd ( "||" exprAnd )*
//! exprAnd     ::= exprEq ( "&&" exprEq )*
//! exprEq      ::= exprRel ( ("=="|"!=") exprRel )*
//! exprRel     ::= exprAdd ( ("<"|"<="|">"|">=") exprAdd )*
//! exprAdd     ::= exprMul ( ("+"|"-") exprMul )*
//! exprMul     ::= exprCast ( ("*"|"/") exprCast )*
//! exprCast    ::= "(" typeName ")" exprCast | exprUnary
//! exprUnary   ::= ("-"|"!") exprUnary | exprPostfix
//! exprPostfix ::= exprPrimary ( "[" expr "]" | "." ID )*
//! exprPrimary ::= ID ( "(" ( expr ("," expr)* )? ")" )?
//!               | literals | "(" expr ")"
//! ```
//!
//! The binary levels are iterative loops building left-associative nodes
//! (the grammar's left recursion eliminated); assignment recurses to the
//! right. Assignment, casts, and parenthesized primaries are ambiguous on
//! their first token and are resolved by speculative parsing through
//! [`Parser::attempt`].
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Option<AstNode>, ParseError> {
        self.parse_assignment()
    }

    /// Parse assignment (right-associative) or fall through to `||`
    ///
    /// `exprUnary "="` is tried first; if no `=` follows the unary
    /// expression, the cursor is rolled back and the same tokens are
    /// reparsed as the start of an `exprOr`.
    fn parse_assignment(&mut self) -> Result<Option<AstNode>, ParseError> {
        if let Some(assign) = self.attempt(|p| {
            let Some(lhs) = p.parse_unary()? else {
                return Ok(None);
            };
            let loc = p.current_location();
            if !p.match_token(&Token::Eq(loc)) {
                return Ok(None);
            }
            let Some(rhs) = p.parse_assignment()? else {
                return Err(p.error_here("expected expression after '='"));
            };
            Ok(Some(AstNode::Assignment {
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
                location: loc,
            }))
        })? {
            return Ok(Some(assign));
        }

        self.parse_logical_or()
    }

    /// Parse logical OR (`||`)
    fn parse_logical_or(&mut self) -> Result<Option<AstNode>, ParseError> {
        let Some(mut left) = self.parse_logical_and()? else {
            return Ok(None);
        };

        loop {
            let loc = self.current_location();
            if !self.match_token(&Token::OrOr(loc)) {
                break;
            }
            let Some(right) = self.parse_logical_and()? else {
                return Err(self.error_here("expected expression after '||'"));
            };
            left = AstNode::BinaryOp {
                op: BinOp::Or,
                left: Box::new(left),
                right: Box::new(right),
                location: loc,
            };
        }

        Ok(Some(left))
    }

    /// Parse logical AND (`&&`)
    fn parse_logical_and(&mut self) -> Result<Option<AstNode>, ParseError> {
        let Some(mut left) = self.parse_equality()? else {
            return Ok(None);
        };

        loop {
            let loc = self.current_location();
            if !self.match_token(&Token::AndAnd(loc)) {
                break;
            }
            let Some(right) = self.parse_equality()? else {
                return Err(self.error_here("expected expression after '&&'"));
            };
            left = AstNode::BinaryOp {
                op: BinOp::And,
                left: Box::new(left),
                right: Box::new(right),
                location: loc,
            };
        }

        Ok(Some(left))
    }

    /// Parse equality (`==` `!=`)
    fn parse_equality(&mut self) -> Result<Option<AstNode>, ParseError> {
        let Some(mut left) = self.parse_relational()? else {
            return Ok(None);
        };

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::EqEq(loc)) {
                BinOp::Eq
            } else if self.match_token(&Token::NotEq(loc)) {
                BinOp::Ne
            } else {
                break;
            };

            let Some(right) = self.parse_relational()? else {
                return Err(self.error_here("expected expression after equality operator"));
            };
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
                location: loc,
            };
        }

        Ok(Some(left))
    }

    /// Parse relational (`<` `<=` `>` `>=`)
    fn parse_relational(&mut self) -> Result<Option<AstNode>, ParseError> {
        let Some(mut left) = self.parse_additive()? else {
            return Ok(None);
        };

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::Lt(loc)) {
                BinOp::Lt
            } else if self.match_token(&Token::Le(loc)) {
                BinOp::Le
            } else if self.match_token(&Token::Gt(loc)) {
                BinOp::Gt
            } else if self.match_token(&Token::Ge(loc)) {
                BinOp::Ge
            } else {
                break;
            };

            let Some(right) = self.parse_additive()? else {
                return Err(self.error_here("expected expression after relational operator"));
            };
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
                location: loc,
            };
        }

        Ok(Some(left))
    }

    /// Parse additive (`+` `-`)
    fn parse_additive(&mut self) -> Result<Option<AstNode>, ParseError> {
        let Some(mut left) = self.parse_multiplicative()? else {
            return Ok(None);
        };

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::Plus(loc)) {
                BinOp::Add
            } else if self.match_token(&Token::Minus(loc)) {
                BinOp::Sub
            } else {
                break;
            };

            let Some(right) = self.parse_multiplicative()? else {
                return Err(self.error_here("expected expression after '+' or '-'"));
            };
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
                location: loc,
            };
        }

        Ok(Some(left))
    }

    /// Parse multiplicative (`*` `/`)
    fn parse_multiplicative(&mut self) -> Result<Option<AstNode>, ParseError> {
        let Some(mut left) = self.parse_cast()? else {
            return Ok(None);
        };

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::Star(loc)) {
                BinOp::Mul
            } else if self.match_token(&Token::Slash(loc)) {
                BinOp::Div
            } else {
                break;
            };

            let Some(right) = self.parse_cast()? else {
                return Err(self.error_here("expected expression after '*' or '/'"));
            };
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
                location: loc,
            };
        }

        Ok(Some(left))
    }

    /// Parse cast: `( typeName ) exprCast`, falling back to unary
    ///
    /// The whole `( typeName )` prefix is speculative: `(x)` rolls back
    /// and is parsed as a parenthesized expression instead.
    fn parse_cast(&mut self) -> Result<Option<AstNode>, ParseError> {
        if let Some(cast) = self.attempt(|p| {
            let loc = p.current_location();
            if !p.match_token(&Token::LParen(loc)) {
                return Ok(None);
            }
            let Some(target_type) = p.parse_type_name()? else {
                return Ok(None);
            };
            if !p.match_token(&Token::RParen(p.current_location())) {
                return Ok(None);
            }
            let Some(expr) = p.parse_cast()? else {
                return Ok(None);
            };
            Ok(Some(AstNode::Cast {
                target_type,
                expr: Box::new(expr),
                location: loc,
            }))
        })? {
            return Ok(Some(cast));
        }

        self.parse_unary()
    }

    /// Parse unary (`-` `!`)
    pub(crate) fn parse_unary(&mut self) -> Result<Option<AstNode>, ParseError> {
        let loc = self.current_location();

        let op = if self.match_token(&Token::Minus(loc)) {
            Some(UnOp::Neg)
        } else if self.match_token(&Token::Bang(loc)) {
            Some(UnOp::Not)
        } else {
            None
        };

        if let Some(op) = op {
            let Some(operand) = self.parse_unary()? else {
                return Err(self.error_here("expected expression after unary operator"));
            };
            return Ok(Some(AstNode::UnaryOp {
                op,
                operand: Box::new(operand),
                location: loc,
            }));
        }

        self.parse_postfix()
    }

    /// Parse postfix (`[]` `.`)
    fn parse_postfix(&mut self) -> Result<Option<AstNode>, ParseError> {
        let Some(mut expr) = self.parse_primary()? else {
            return Ok(None);
        };

        loop {
            let loc = self.current_location();

            if self.match_token(&Token::LBracket(loc)) {
                let Some(index) = self.parse_expression()? else {
                    return Err(self.error_here("expected expression after '['"));
                };
                self.expect_token(
                    &Token::RBracket(self.current_location()),
                    "expected ']' after array index",
                )?;
                expr = AstNode::ArrayAccess {
                    array: Box::new(expr),
                    index: Box::new(index),
                    location: loc,
                };
            } else if self.match_token(&Token::Dot(loc)) {
                let member = self.expect_identifier("expected member name after '.'")?;
                expr = AstNode::MemberAccess {
                    object: Box::new(expr),
                    member,
                    location: loc,
                };
            } else {
                break;
            }
        }

        Ok(Some(expr))
    }

    /// Parse primary: literals, identifiers (possibly called), `( expr )`
    fn parse_primary(&mut self) -> Result<Option<AstNode>, ParseError> {
        match self.peek_token() {
            Token::IntLiteral(n, loc) => {
                self.advance();
                Ok(Some(AstNode::IntLiteral(n, loc)))
            }
            Token::RealLiteral(r, loc) => {
                self.advance();
                Ok(Some(AstNode::RealLiteral(r, loc)))
            }
            Token::CharLiteral(c, loc) => {
                self.advance();
                Ok(Some(AstNode::CharLiteral(c, loc)))
            }
            Token::StringLiteral(s, loc) => {
                self.advance();
                Ok(Some(AstNode::StringLiteral(s, loc)))
            }
            Token::Ident(name, loc) => {
                self.advance();

                if !self.match_token(&Token::LParen(loc)) {
                    return Ok(Some(AstNode::Variable(name, loc)));
                }

                let mut args = Vec::new();
                if let Some(first) = self.parse_expression()? {
                    args.push(first);
                    while self.match_token(&Token::Comma(self.current_location())) {
                        let Some(arg) = self.parse_expression()? else {
                            return Err(self.error_here("expected argument after ','"));
                        };
                        args.push(arg);
                    }
                }
                self.expect_token(
                    &Token::RParen(self.current_location()),
                    "expected ')' after arguments",
                )?;

                Ok(Some(AstNode::FunctionCall {
                    name,
                    args,
                    location: loc,
                }))
            }
            Token::LParen(_) => self.attempt(|p| {
                p.advance();
                let Some(expr) = p.parse_expression()? else {
                    // not an expression after all; let the caller decide
                    return Ok(None);
                };
                p.expect_token(
                    &Token::RParen(p.current_location()),
                    "expected ')' after expression",
                )?;
                Ok(Some(expr))
            }),
            _ => Ok(None),
        }
    }
}
