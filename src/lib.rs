//! # Introduction
//!
//! minicc is the front end for Mini-C, a small C-like imperative language
//! with structs, typed variables, functions, block-structured control flow,
//! and arithmetic/logical/relational expressions.
//!
//! ## Analysis pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST
//! ```
//!
//! 1. [`parser::lexer`] — one eager pass over the source text producing an
//!    ordered token sequence terminated by an end-of-input marker.
//! 2. [`parser::parse`] — backtracking recursive descent over the token
//!    sequence, building an AST or failing fast with a line-tagged
//!    diagnostic on the first lexical or syntax error.
//! 3. [`symbols`] — the symbol/type vocabulary for a future semantic pass;
//!    declared here but not consulted during parsing.
//!
//! Each analysis owns its own lexer/parser state, so independent analyses
//! can run concurrently or repeatedly in one process.
//!
//! ## Example
//!
//! ```
//! use minicc::parser::Parser;
//!
//! let mut parser = Parser::new("int f(int a, int b) { return a + b; }").unwrap();
//! let program = parser.parse_program().unwrap();
//! assert_eq!(program.nodes.len(), 1);
//! ```

pub mod parser;
pub mod symbols;
