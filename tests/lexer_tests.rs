// Integration tests for the Mini-C lexer

use minicc::parser::{Lexer, Token};

#[test]
fn test_declaration_token_stream() {
    let mut lexer = Lexer::new("int x;");
    let tokens = lexer.tokenize().unwrap();

    assert_eq!(tokens.len(), 4);
    assert!(matches!(tokens[0], Token::Int(_)));
    assert!(matches!(tokens[1], Token::Ident(ref s, _) if s == "x"));
    assert!(matches!(tokens[2], Token::Semicolon(_)));
    assert!(matches!(tokens[3], Token::Eof(_)));
}

#[test]
fn test_numeric_decoding_is_exact() {
    let mut lexer = Lexer::new("0x1F 010 1.5e3 7");
    let tokens = lexer.tokenize().unwrap();

    assert!(matches!(tokens[0], Token::IntLiteral(31, _)));
    assert!(matches!(tokens[1], Token::IntLiteral(8, _)));
    assert!(matches!(tokens[2], Token::RealLiteral(v, _) if v == 1500.0));
    assert!(matches!(tokens[3], Token::IntLiteral(7, _)));
}

#[test]
fn test_string_escape_decoded_in_place() {
    let mut lexer = Lexer::new(r#""ab\nc""#);
    let tokens = lexer.tokenize().unwrap();

    assert_eq!(tokens.len(), 2); // string + Eof
    match &tokens[0] {
        Token::StringLiteral(s, _) => assert_eq!(s, "ab\nc"),
        other => panic!("expected a single string literal, got {:?}", other),
    }
}

#[test]
fn test_line_numbers_across_comments_and_newlines() {
    let source = "int a;\n/* two\nlines */ double b;\n// trailing\nchar c;";
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize().unwrap();

    assert_eq!(tokens[0].location().line, 1); // int
    assert!(matches!(tokens[3], Token::Double(_)));
    assert_eq!(tokens[3].location().line, 3); // after the block comment
    assert!(matches!(tokens[6], Token::Char(_)));
    assert_eq!(tokens[6].location().line, 5); // after the line comment
}

#[test]
fn test_token_order_reconstructs_source() {
    // ignoring elided whitespace/comments, the token sequence carries the
    // meaningful content of the source in order
    let source = "if (x <= 10) { y = y || z; }";
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize().unwrap();

    let rendered: Vec<String> = tokens
        .iter()
        .take_while(|t| !matches!(t, Token::Eof(_)))
        .map(|t| t.to_string())
        .collect();
    assert_eq!(
        rendered,
        [
            "'if'",
            "'('",
            "identifier 'x'",
            "'<='",
            "int literal 10",
            "')'",
            "'{'",
            "identifier 'y'",
            "'='",
            "identifier 'y'",
            "'||'",
            "identifier 'z'",
            "';'",
            "'}'"
        ]
    );
}

#[test]
fn test_lexical_errors_are_line_tagged() {
    let err = Lexer::new("int a;\nint b @;").tokenize().unwrap_err();
    assert_eq!(err.location.line, 2);

    let err = Lexer::new("\n\n\"open").tokenize().unwrap_err();
    assert_eq!(err.location.line, 3);
}

#[test]
fn test_unterminated_string_and_char() {
    assert!(Lexer::new("\"abc").tokenize().is_err());
    assert!(Lexer::new("'a").tokenize().is_err());
}

#[test]
fn test_invalid_escape_sequence() {
    let err = Lexer::new(r#""a\qb""#).tokenize().unwrap_err();
    assert!(err.message.contains("escape"));
}
