//! Lexer (tokenizer) for Mini-C source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. The whole input is scanned in one eager pass; the stream is always
//! terminated by [`Token::Eof`].

use super::ast::SourceLocation;
use std::fmt;
use thiserror::Error;

/// All token variants produced by the lexer.
///
/// Every variant carries a [`SourceLocation`] so that parse errors can report
/// an accurate line and column without a separate token→location table.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    IntLiteral(i64, SourceLocation),
    RealLiteral(f64, SourceLocation),
    CharLiteral(char, SourceLocation),
    StringLiteral(String, SourceLocation),

    // Identifiers
    Ident(String, SourceLocation),

    // Keywords
    Break(SourceLocation),
    Char(SourceLocation),
    Double(SourceLocation),
    Else(SourceLocation),
    For(SourceLocation),
    If(SourceLocation),
    Int(SourceLocation),
    Return(SourceLocation),
    Struct(SourceLocation),
    Void(SourceLocation),
    While(SourceLocation),

    // Arithmetic
    Plus(SourceLocation),  // +
    Minus(SourceLocation), // -
    Star(SourceLocation),  // *
    Slash(SourceLocation), // /

    // Comparison
    EqEq(SourceLocation),  // ==
    NotEq(SourceLocation), // !=
    Lt(SourceLocation),    // <
    Le(SourceLocation),    // <=
    Gt(SourceLocation),    // >
    Ge(SourceLocation),    // >=

    // Logical
    AndAnd(SourceLocation), // &&
    OrOr(SourceLocation),   // ||
    Bang(SourceLocation),   // !

    // Assignment
    Eq(SourceLocation), // =

    // Member access
    Dot(SourceLocation), // .

    // Punctuation
    LParen(SourceLocation),    // (
    RParen(SourceLocation),    // )
    LBrace(SourceLocation),    // {
    RBrace(SourceLocation),    // }
    LBracket(SourceLocation),  // [
    RBracket(SourceLocation),  // ]
    Semicolon(SourceLocation), // ;
    Comma(SourceLocation),     // ,

    // End of input
    Eof(SourceLocation),
}

impl Token {
    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::IntLiteral(_, loc)
            | Token::RealLiteral(_, loc)
            | Token::CharLiteral(_, loc)
            | Token::StringLiteral(_, loc)
            | Token::Ident(_, loc)
            | Token::Break(loc)
            | Token::Char(loc)
            | Token::Double(loc)
            | Token::Else(loc)
            | Token::For(loc)
            | Token::If(loc)
            | Token::Int(loc)
            | Token::Return(loc)
            | Token::Struct(loc)
            | Token::Void(loc)
            | Token::While(loc)
            | Token::Plus(loc)
            | Token::Minus(loc)
            | Token::Star(loc)
            | Token::Slash(loc)
            | Token::EqEq(loc)
            | Token::NotEq(loc)
            | Token::Lt(loc)
            | Token::Le(loc)
            | Token::Gt(loc)
            | Token::Ge(loc)
            | Token::AndAnd(loc)
            | Token::OrOr(loc)
            | Token::Bang(loc)
            | Token::Eq(loc)
            | Token::Dot(loc)
            | Token::LParen(loc)
            | Token::RParen(loc)
            | Token::LBrace(loc)
            | Token::RBrace(loc)
            | Token::LBracket(loc)
            | Token::RBracket(loc)
            | Token::Semicolon(loc)
            | Token::Comma(loc)
            | Token::Eof(loc) => *loc,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::IntLiteral(n, _) => write!(f, "int literal {}", n),
            Token::RealLiteral(r, _) => write!(f, "real literal {}", r),
            Token::CharLiteral(c, _) => {
                if c.is_ascii_graphic() || *c == ' ' {
                    write!(f, "char literal '{}'", c)
                } else {
                    write!(f, "char literal '\\x{:02x}'", *c as u32)
                }
            }
            Token::StringLiteral(s, _) => write!(f, "string literal \"{}\"", s),
            Token::Ident(s, _) => write!(f, "identifier '{}'", s),
            Token::Break(_) => write!(f, "'break'"),
            Token::Char(_) => write!(f, "'char'"),
            Token::Double(_) => write!(f, "'double'"),
            Token::Else(_) => write!(f, "'else'"),
            Token::For(_) => write!(f, "'for'"),
            Token::If(_) => write!(f, "'if'"),
            Token::Int(_) => write!(f, "'int'"),
            Token::Return(_) => write!(f, "'return'"),
            Token::Struct(_) => write!(f, "'struct'"),
            Token::Void(_) => write!(f, "'void'"),
            Token::While(_) => write!(f, "'while'"),
            Token::Plus(_) => write!(f, "'+'"),
            Token::Minus(_) => write!(f, "'-'"),
            Token::Star(_) => write!(f, "'*'"),
            Token::Slash(_) => write!(f, "'/'"),
            Token::EqEq(_) => write!(f, "'=='"),
            Token::NotEq(_) => write!(f, "'!='"),
            Token::Lt(_) => write!(f, "'<'"),
            Token::Le(_) => write!(f, "'<='"),
            Token::Gt(_) => write!(f, "'>'"),
            Token::Ge(_) => write!(f, "'>='"),
            Token::AndAnd(_) => write!(f, "'&&'"),
            Token::OrOr(_) => write!(f, "'||'"),
            Token::Bang(_) => write!(f, "'!'"),
            Token::Eq(_) => write!(f, "'='"),
            Token::Dot(_) => write!(f, "'.'"),
            Token::LParen(_) => write!(f, "'('"),
            Token::RParen(_) => write!(f, "')'"),
            Token::LBrace(_) => write!(f, "'{{'"),
            Token::RBrace(_) => write!(f, "'}}'"),
            Token::LBracket(_) => write!(f, "'['"),
            Token::RBracket(_) => write!(f, "']'"),
            Token::Semicolon(_) => write!(f, "';'"),
            Token::Comma(_) => write!(f, "','"),
            Token::Eof(_) => write!(f, "end of input"),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, Error)]
#[error("lexical error at line {}, column {}: {message}", .location.line, .location.column)]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

impl LexError {
    fn new(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

/// Lexer for Mini-C source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments()?;

            if self.is_at_end() {
                tokens.push(Token::Eof(self.current_location()));
                break;
            }

            tokens.push(self.next_token()?);
        }

        log::debug!(
            "lexed {} tokens across {} lines",
            tokens.len(),
            self.line
        );

        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let ch = self
            .advance()
            .ok_or_else(|| LexError::new("unexpected end of input", loc))?;

        match ch {
            // String literals
            '"' => self.string_literal(loc),

            // Character literals
            '\'' => self.char_literal(loc),

            // Numeric literals
            '0'..='9' => self.number_literal(ch, loc),

            // Identifiers and keywords
            'a'..='z' | 'A'..='Z' | '_' => self.identifier_or_keyword(ch, loc),

            // Operators and punctuation
            '+' => Ok(Token::Plus(loc)),
            '-' => Ok(Token::Minus(loc)),
            '*' => Ok(Token::Star(loc)),
            // Comments were already skipped, so a remaining '/' is division
            '/' => Ok(Token::Slash(loc)),
            '.' => Ok(Token::Dot(loc)),
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::EqEq(loc))
                } else {
                    Ok(Token::Eq(loc))
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::NotEq(loc))
                } else {
                    Ok(Token::Bang(loc))
                }
            }
            '<' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::Le(loc))
                } else {
                    Ok(Token::Lt(loc))
                }
            }
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::Ge(loc))
                } else {
                    Ok(Token::Gt(loc))
                }
            }
            // Mini-C has no bitwise operators, so lone '&' and '|' are errors
            '&' => {
                if self.peek() == Some('&') {
                    self.advance();
                    Ok(Token::AndAnd(loc))
                } else {
                    Err(LexError::new("expected '&&', found lone '&'", loc))
                }
            }
            '|' => {
                if self.peek() == Some('|') {
                    self.advance();
                    Ok(Token::OrOr(loc))
                } else {
                    Err(LexError::new("expected '||', found lone '|'", loc))
                }
            }
            '(' => Ok(Token::LParen(loc)),
            ')' => Ok(Token::RParen(loc)),
            '{' => Ok(Token::LBrace(loc)),
            '}' => Ok(Token::RBrace(loc)),
            '[' => Ok(Token::LBracket(loc)),
            ']' => Ok(Token::RBracket(loc)),
            ';' => Ok(Token::Semicolon(loc)),
            ',' => Ok(Token::Comma(loc)),

            _ => Err(LexError::new(
                format!("unexpected character: '{}'", ch),
                loc,
            )),
        }
    }

    /// Decode the character following a backslash.
    fn escape_char(&self, escaped: char) -> Result<char, LexError> {
        match escaped {
            'a' => Ok('\x07'),
            'b' => Ok('\x08'),
            'f' => Ok('\x0c'),
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            't' => Ok('\t'),
            '0' => Ok('\0'),
            '\'' => Ok('\''),
            '"' => Ok('"'),
            '\\' => Ok('\\'),
            _ => Err(LexError::new(
                format!("unknown escape sequence: \\{}", escaped),
                self.current_location(),
            )),
        }
    }

    /// Parse string literal (opening quote already consumed)
    fn string_literal(&mut self, loc: SourceLocation) -> Result<Token, LexError> {
        let mut string = String::new();

        while let Some(ch) = self.peek() {
            if ch == '"' {
                self.advance(); // consume closing quote
                return Ok(Token::StringLiteral(string, loc));
            }

            if ch == '\\' {
                self.advance();
                let escaped = self.advance().ok_or_else(|| {
                    LexError::new(
                        "unexpected end of input in string literal",
                        self.current_location(),
                    )
                })?;
                string.push(self.escape_char(escaped)?);
            } else {
                string.push(ch);
                self.advance();
            }
        }

        Err(LexError::new("unterminated string literal", loc))
    }

    /// Parse character literal (opening quote already consumed)
    fn char_literal(&mut self, loc: SourceLocation) -> Result<Token, LexError> {
        let ch = self.advance().ok_or_else(|| {
            LexError::new("unterminated character literal", loc)
        })?;

        let value = match ch {
            '\\' => {
                let escaped = self.advance().ok_or_else(|| {
                    LexError::new("unterminated character literal", loc)
                })?;
                self.escape_char(escaped)?
            }
            '\'' => {
                return Err(LexError::new("empty character literal", loc));
            }
            c => c,
        };

        // Exactly one character is allowed before the closing quote
        if self.advance() != Some('\'') {
            return Err(LexError::new(
                "expected closing quote in character literal",
                loc,
            ));
        }

        Ok(Token::CharLiteral(value, loc))
    }

    /// Parse numeric literal: decimal, octal, hex, or real.
    ///
    /// A leading `1`-`9` starts a decimal run; a leading `0` starts an
    /// octal run that branches to hex on `x`/`X`. Decimal and octal runs
    /// may continue into a real number on `.` or `e`/`E`. The integer
    /// forms are decoded honoring their base.
    fn number_literal(
        &mut self,
        first_digit: char,
        loc: SourceLocation,
    ) -> Result<Token, LexError> {
        // Hex branch: 0x / 0X followed by at least one hex digit
        if first_digit == '0' && matches!(self.peek(), Some('x') | Some('X')) {
            self.advance();
            let mut digits = String::new();
            while let Some(ch) = self.peek() {
                if ch.is_ascii_hexdigit() {
                    digits.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
            if digits.is_empty() {
                return Err(LexError::new(
                    "expected hex digits after '0x'",
                    self.current_location(),
                ));
            }
            let value = i64::from_str_radix(&digits, 16).map_err(|_| {
                LexError::new(format!("invalid hex literal: 0x{}", digits), loc)
            })?;
            return Ok(Token::IntLiteral(value, loc));
        }

        let mut num_str = String::new();
        num_str.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                num_str.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let mut is_real = false;

        // Fractional part: a digit must follow the point
        if self.peek() == Some('.') {
            self.advance();
            num_str.push('.');
            is_real = true;
            if !matches!(self.peek(), Some('0'..='9')) {
                return Err(LexError::new(
                    "expected digit after decimal point",
                    self.current_location(),
                ));
            }
            while let Some(ch) = self.peek() {
                if ch.is_ascii_digit() {
                    num_str.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
        }

        // Exponent: optional sign, then at least one digit
        if matches!(self.peek(), Some('e') | Some('E')) {
            self.advance();
            num_str.push('e');
            is_real = true;
            if let Some(sign @ ('+' | '-')) = self.peek() {
                num_str.push(sign);
                self.advance();
            }
            if !matches!(self.peek(), Some('0'..='9')) {
                return Err(LexError::new(
                    "expected digit in exponent",
                    self.current_location(),
                ));
            }
            while let Some(ch) = self.peek() {
                if ch.is_ascii_digit() {
                    num_str.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
        }

        if is_real {
            let value = num_str.parse::<f64>().map_err(|_| {
                LexError::new(format!("invalid real literal: {}", num_str), loc)
            })?;
            return Ok(Token::RealLiteral(value, loc));
        }

        // A leading 0 makes the run octal; 8 and 9 are only legal if the
        // number turned out to be a real
        let value = if first_digit == '0' && num_str.len() > 1 {
            if num_str.bytes().any(|b| b == b'8' || b == b'9') {
                return Err(LexError::new(
                    format!("invalid digit in octal literal: {}", num_str),
                    loc,
                ));
            }
            i64::from_str_radix(&num_str[1..], 8).map_err(|_| {
                LexError::new(format!("invalid octal literal: {}", num_str), loc)
            })?
        } else {
            num_str.parse::<i64>().map_err(|_| {
                LexError::new(format!("invalid integer literal: {}", num_str), loc)
            })?
        };

        Ok(Token::IntLiteral(value, loc))
    }

    /// Parse identifier or keyword: maximal munch over the full run, then a
    /// whole-text lookup against the keyword set
    fn identifier_or_keyword(
        &mut self,
        first_char: char,
        loc: SourceLocation,
    ) -> Result<Token, LexError> {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let token = match ident.as_str() {
            "break" => Token::Break(loc),
            "char" => Token::Char(loc),
            "double" => Token::Double(loc),
            "else" => Token::Else(loc),
            "for" => Token::For(loc),
            "if" => Token::If(loc),
            "int" => Token::Int(loc),
            "return" => Token::Return(loc),
            "struct" => Token::Struct(loc),
            "void" => Token::Void(loc),
            "while" => Token::While(loc),
            _ => Token::Ident(ident, loc),
        };

        Ok(token)
    }

    /// Skip whitespace and comments
    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek() {
                Some(' ') | Some('\t') | Some('\r') | Some('\n') => {
                    self.advance();
                }
                Some('/') => {
                    if self.peek_ahead(1) == Some('/') {
                        self.skip_line_comment();
                    } else if self.peek_ahead(1) == Some('*') {
                        self.skip_block_comment()?;
                    } else {
                        break;
                    }
                }
                _ => break,
            }
        }
        Ok(())
    }

    /// Skip single-line comment (// ...)
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            self.advance();
            if ch == '\n' {
                break;
            }
        }
    }

    /// Skip multi-line comment (/* ... */), tracking embedded newlines
    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let start_loc = self.current_location();
        self.advance(); // skip '/'
        self.advance(); // skip '*'

        while !self.is_at_end() {
            if self.peek() == Some('*') && self.peek_ahead(1) == Some('/') {
                self.advance(); // skip '*'
                self.advance(); // skip '/'
                return Ok(());
            }
            self.advance();
        }

        Err(LexError::new("unterminated block comment", start_loc))
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.input.get(self.position).copied()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tokens() {
        let mut lexer = Lexer::new("int x;");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Int(_)));
        assert!(matches!(tokens[1], Token::Ident(ref s, _) if s == "x"));
        assert!(matches!(tokens[2], Token::Semicolon(_)));
        assert!(matches!(tokens[3], Token::Eof(_)));
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_operators() {
        let mut lexer = Lexer::new("== != <= >= && || < > ! = + - * / .");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::EqEq(_)));
        assert!(matches!(tokens[1], Token::NotEq(_)));
        assert!(matches!(tokens[2], Token::Le(_)));
        assert!(matches!(tokens[3], Token::Ge(_)));
        assert!(matches!(tokens[4], Token::AndAnd(_)));
        assert!(matches!(tokens[5], Token::OrOr(_)));
        assert!(matches!(tokens[6], Token::Lt(_)));
        assert!(matches!(tokens[7], Token::Gt(_)));
        assert!(matches!(tokens[8], Token::Bang(_)));
        assert!(matches!(tokens[9], Token::Eq(_)));
        assert!(matches!(tokens[10], Token::Plus(_)));
        assert!(matches!(tokens[11], Token::Minus(_)));
        assert!(matches!(tokens[12], Token::Star(_)));
        assert!(matches!(tokens[13], Token::Slash(_)));
        assert!(matches!(tokens[14], Token::Dot(_)));
    }

    #[test]
    fn test_keywords_and_identifiers() {
        let mut lexer = Lexer::new("while whilex if iff _for for");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::While(_)));
        assert!(matches!(tokens[1], Token::Ident(ref s, _) if s == "whilex"));
        assert!(matches!(tokens[2], Token::If(_)));
        assert!(matches!(tokens[3], Token::Ident(ref s, _) if s == "iff"));
        assert!(matches!(tokens[4], Token::Ident(ref s, _) if s == "_for"));
        assert!(matches!(tokens[5], Token::For(_)));
    }

    #[test]
    fn test_number_bases() {
        let mut lexer = Lexer::new("7 0x1F 010 0");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::IntLiteral(7, _)));
        assert!(matches!(tokens[1], Token::IntLiteral(31, _)));
        assert!(matches!(tokens[2], Token::IntLiteral(8, _)));
        assert!(matches!(tokens[3], Token::IntLiteral(0, _)));
    }

    #[test]
    fn test_real_literals() {
        let mut lexer = Lexer::new("1.5e3 2.25 3e-2 7E+1");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::RealLiteral(v, _) if v == 1500.0));
        assert!(matches!(tokens[1], Token::RealLiteral(v, _) if v == 2.25));
        assert!(matches!(tokens[2], Token::RealLiteral(v, _) if v == 0.03));
        assert!(matches!(tokens[3], Token::RealLiteral(v, _) if v == 70.0));
    }

    #[test]
    fn test_malformed_numbers() {
        assert!(Lexer::new("1.").tokenize().is_err());
        assert!(Lexer::new("1e").tokenize().is_err());
        assert!(Lexer::new("1e+").tokenize().is_err());
        assert!(Lexer::new("0x").tokenize().is_err());
        assert!(Lexer::new("08").tokenize().is_err());
        // but 08.5 is a valid real
        let tokens = Lexer::new("08.5").tokenize().unwrap();
        assert!(matches!(tokens[0], Token::RealLiteral(v, _) if v == 8.5));
    }

    #[test]
    fn test_string_literal() {
        let mut lexer = Lexer::new(r#""ab\nc""#);
        let tokens = lexer.tokenize().unwrap();

        match &tokens[0] {
            Token::StringLiteral(s, _) => assert_eq!(s, "ab\nc"),
            other => panic!("expected string literal, got {:?}", other),
        }
    }

    #[test]
    fn test_char_literals() {
        let mut lexer = Lexer::new(r"'a' '\n' '\\' '\''");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::CharLiteral('a', _)));
        assert!(matches!(tokens[1], Token::CharLiteral('\n', _)));
        assert!(matches!(tokens[2], Token::CharLiteral('\\', _)));
        assert!(matches!(tokens[3], Token::CharLiteral('\'', _)));
    }

    #[test]
    fn test_char_literal_errors() {
        assert!(Lexer::new("''").tokenize().is_err());
        assert!(Lexer::new("'ab'").tokenize().is_err());
        assert!(Lexer::new("'a").tokenize().is_err());
        assert!(Lexer::new(r"'\q'").tokenize().is_err());
    }

    #[test]
    fn test_comments() {
        let mut lexer =
            Lexer::new("int x; // comment\nint y; /* block\ncomment */ int z;");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Int(_)));
        assert!(matches!(tokens[1], Token::Ident(ref s, _) if s == "x"));
        assert!(matches!(tokens[2], Token::Semicolon(_)));
        assert!(matches!(tokens[3], Token::Int(_)));
        assert!(matches!(tokens[4], Token::Ident(ref s, _) if s == "y"));
        assert!(matches!(tokens[5], Token::Semicolon(_)));
        assert!(matches!(tokens[6], Token::Int(_)));
        assert!(matches!(tokens[7], Token::Ident(ref s, _) if s == "z"));
        // the 'int z' after the block comment starts on line 3
        assert_eq!(tokens[6].location().line, 3);
    }

    #[test]
    fn test_lone_amp_and_pipe() {
        assert!(Lexer::new("a & b").tokenize().is_err());
        assert!(Lexer::new("a | b").tokenize().is_err());
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = Lexer::new("int x; /* oops").tokenize().unwrap_err();
        assert!(err.message.contains("unterminated block comment"));
    }
}
