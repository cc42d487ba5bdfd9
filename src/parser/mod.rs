//! Mini-C source code parser
//!
//! This module transforms Mini-C source text into an Abstract Syntax Tree:
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST), with the grammar split across
//!   [`declarations`], [`statements`], and [`expressions`]
//! - [`ast`]: AST node definitions
//!
//! # Supported Language
//!
//! Mini-C is a small C-like language:
//! - Types: `int`, `double`, `char`, structs, arrays
//! - Declarations: global/local variables, structs, functions
//! - Statements: blocks, `if`/`else`, `while`, `for`, `break`, `return`
//! - Expressions: assignment, logical, relational, arithmetic, casts,
//!   array indexing, member access, function calls
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser. The few ambiguous productions
//! (declaration vs. function, assignment vs. lvalue, cast vs.
//! parenthesized expression) are resolved by speculative parsing with
//! cursor rollback. No external parser generator dependencies.

pub mod ast;
pub mod declarations;
pub mod expressions;
pub mod lexer;
pub mod parse;
pub mod statements;

pub use ast::{AstNode, Program, SourceLocation};
pub use lexer::{LexError, Lexer, Token};
pub use parse::{ParseError, Parser};
