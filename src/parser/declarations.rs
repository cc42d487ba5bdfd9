//! Declaration parsing implementation
//!
//! This module handles the declaration productions:
//!
//! ```text
//! declStruct ::= "struct" ID "{" declVar* "}" ";"
//! declVar    ::= typeBase ID arrayDecl? ( "," ID arrayDecl? )* ";"
//! typeBase   ::= "int" | "double" | "char" | "struct" ID
//! arrayDecl  ::= "[" expr? "]"
//! typeName   ::= typeBase arrayDecl?
//! declFunc   ::= ( typeBase "*"? | "void" ) ID
//!                "(" ( funcArg ( "," funcArg )* )? ")" stmCompound
//! funcArg    ::= typeBase ID arrayDecl?
//! ```
//!
//! A struct declaration, a variable declaration, and a function definition
//! all begin with a type, so the three are disambiguated by speculative
//! parsing: each alternative either commits or rolls the cursor back to
//! where it started.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse a struct declaration: `struct Name { members };`
    ///
    /// `struct Name` followed by anything other than `{` is a no-match:
    /// it may be the type of a variable or function declaration.
    pub(crate) fn parse_struct_declaration(
        &mut self,
    ) -> Result<Option<AstNode>, ParseError> {
        self.attempt(|p| {
            let loc = p.current_location();
            if !p.match_token(&Token::Struct(loc)) {
                return Ok(None);
            }
            let name = p.expect_identifier("expected identifier after 'struct'")?;

            if !p.match_token(&Token::LBrace(p.current_location())) {
                return Ok(None);
            }

            let mut members = Vec::new();
            while let Some(member) = p.parse_variable_declaration()? {
                members.push(member);
            }

            p.expect_token(
                &Token::RBrace(p.current_location()),
                "expected '}' after struct members",
            )?;
            p.expect_token(
                &Token::Semicolon(p.current_location()),
                "expected ';' after struct declaration",
            )?;

            Ok(Some(AstNode::StructDef {
                name,
                members,
                location: loc,
            }))
        })
    }

    /// Parse a variable declaration:
    /// `typeBase name arrayDecl? ( , name arrayDecl? )* ;`
    ///
    /// No-match is reported both when no type starts here and when the
    /// terminating `;` is absent, because the same prefix may still be a
    /// function definition (`int f(` ... or `int *f(` ...).
    pub(crate) fn parse_variable_declaration(
        &mut self,
    ) -> Result<Option<AstNode>, ParseError> {
        self.attempt(|p| {
            let loc = p.current_location();
            let Some(base) = p.parse_type_base()? else {
                return Ok(None);
            };

            let Token::Ident(name, name_loc) = p.peek_token() else {
                return Ok(None);
            };
            p.advance();

            let mut declarators = Vec::new();
            let array = p.parse_array_decl()?;
            declarators.push(Declarator {
                name,
                array,
                location: name_loc,
            });

            while p.match_token(&Token::Comma(p.current_location())) {
                let name_loc = p.current_location();
                let name = p.expect_identifier("expected identifier after ','")?;
                let array = p.parse_array_decl()?;
                declarators.push(Declarator {
                    name,
                    array,
                    location: name_loc,
                });
            }

            if !p.match_token(&Token::Semicolon(p.current_location())) {
                return Ok(None);
            }

            Ok(Some(AstNode::VarDecl {
                base,
                declarators,
                location: loc,
            }))
        })
    }

    /// Parse a base type: `int`, `double`, `char`, or `struct Name`
    pub(crate) fn parse_type_base(
        &mut self,
    ) -> Result<Option<TypeBase>, ParseError> {
        let loc = self.current_location();

        if self.match_token(&Token::Int(loc)) {
            Ok(Some(TypeBase::Int))
        } else if self.match_token(&Token::Double(loc)) {
            Ok(Some(TypeBase::Double))
        } else if self.match_token(&Token::Char(loc)) {
            Ok(Some(TypeBase::Char))
        } else if self.match_token(&Token::Struct(loc)) {
            let name = self.expect_identifier("expected identifier after 'struct'")?;
            Ok(Some(TypeBase::Struct(name)))
        } else {
            Ok(None)
        }
    }

    /// Parse an array suffix: `[ expr? ]`
    pub(crate) fn parse_array_decl(
        &mut self,
    ) -> Result<Option<ArrayDecl>, ParseError> {
        if !self.match_token(&Token::LBracket(self.current_location())) {
            return Ok(None);
        }

        let size = self.parse_expression()?;

        self.expect_token(
            &Token::RBracket(self.current_location()),
            "expected ']' in array declaration",
        )?;

        Ok(Some(match size {
            Some(expr) => ArrayDecl::Sized(Box::new(expr)),
            None => ArrayDecl::Unsized,
        }))
    }

    /// Parse a type as written in a cast: `typeBase arrayDecl?`
    pub(crate) fn parse_type_name(
        &mut self,
    ) -> Result<Option<TypeName>, ParseError> {
        let Some(base) = self.parse_type_base()? else {
            return Ok(None);
        };
        let array = self.parse_array_decl()?;
        Ok(Some(TypeName { base, array }))
    }

    /// Parse a function definition:
    /// `( typeBase *? | void ) name ( params? ) compound`
    pub(crate) fn parse_function_definition(
        &mut self,
    ) -> Result<Option<AstNode>, ParseError> {
        self.attempt(|p| {
            let loc = p.current_location();

            let return_type = if p.match_token(&Token::Void(loc)) {
                ReturnType::Void
            } else if let Some(base) = p.parse_type_base()? {
                let pointer = p.match_token(&Token::Star(p.current_location()));
                ReturnType::Base { base, pointer }
            } else {
                return Ok(None);
            };

            let Token::Ident(name, _) = p.peek_token() else {
                return Ok(None);
            };
            p.advance();

            if !p.match_token(&Token::LParen(p.current_location())) {
                return Ok(None);
            }

            let mut params = Vec::new();
            if let Some(first) = p.parse_function_param()? {
                params.push(first);
                while p.match_token(&Token::Comma(p.current_location())) {
                    let Some(param) = p.parse_function_param()? else {
                        return Err(p.error_here("expected parameter after ','"));
                    };
                    params.push(param);
                }
            }

            p.expect_token(
                &Token::RParen(p.current_location()),
                "expected ')' after parameters",
            )?;

            let Some(body) = p.parse_compound_statement()? else {
                return Err(p.error_here("expected '{' to begin function body"));
            };

            Ok(Some(AstNode::FunctionDef {
                name,
                params,
                return_type,
                body: Box::new(body),
                location: loc,
            }))
        })
    }

    /// Parse one function parameter: `typeBase name arrayDecl?`
    pub(crate) fn parse_function_param(
        &mut self,
    ) -> Result<Option<Param>, ParseError> {
        let Some(base) = self.parse_type_base()? else {
            return Ok(None);
        };
        let loc = self.current_location();
        let name = self.expect_identifier("expected parameter name")?;
        let array = self.parse_array_decl()?;
        Ok(Some(Param {
            name,
            base,
            array,
            location: loc,
        }))
    }
}
