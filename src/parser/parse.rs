//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: the grammar productions (package, import, qualified
//!   names, remaining top-level declarations)
//!
//! # Implementation
//!
//! Parser methods are split across files using `impl Parser` blocks, allowing
//! each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state. Recognition is strictly
//! forward with one token of lookahead; the first syntax error aborts the
//! parse and no partial tree is returned.

use crate::parser::ast::{Node, NodeKind};
use crate::parser::lexer::{LexError, Lexer, SourceLocation, Token};
use std::fmt;

/// Error raised at the first token that cannot extend any grammar production.
///
/// Carries the offending location and a message naming the unexpected token
/// and the construct that was expected instead.
#[derive(Debug)]
pub struct SyntaxError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Syntax error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for SyntaxError {}

impl From<LexError> for SyntaxError {
    fn from(err: LexError) -> Self {
        SyntaxError {
            message: err.message,
            location: err.location,
        }
    }
}

/// Recursive descent parser for the declaration language
#[derive(Debug)]
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    pub fn new(source: &str) -> Result<Self, SyntaxError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self {
            tokens,
            position: 0,
        })
    }

    /// Parse the entire program.
    ///
    /// The returned root node has kind [`NodeKind::Program`] and holds, in
    /// source order: an optional package declaration, zero or more import
    /// declarations, and the remaining top-level declarations. Empty input
    /// is a valid program whose root has no children.
    pub fn parse_program(&mut self) -> Result<Node, SyntaxError> {
        let mut program = Node::new(NodeKind::Program);

        // Section order is fixed: package, then imports, then the rest.
        // A misplaced 'package' or 'import' keyword falls through to
        // parse_top_level_declaration, which rejects it.
        if self.check(&Token::Package(self.current_location())) {
            program.attach(Some(self.parse_package_declaration()?));
        }

        while self.check(&Token::Import(self.current_location())) {
            program.attach(Some(self.parse_import_declaration()?));
        }

        while !self.is_at_end() {
            program.attach(Some(self.parse_top_level_declaration()?));
        }

        Ok(program)
    }

    // ===== Helper methods =====

    pub(crate) fn match_token(&mut self, token: &Token) -> bool {
        if std::mem::discriminant(&self.peek_token()) == std::mem::discriminant(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(&self.peek_token()) == std::mem::discriminant(token)
    }

    pub(crate) fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek_token(), Token::Eof(_))
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

    pub(crate) fn expect_token(&mut self, token: &Token, message: &str) -> Result<(), SyntaxError> {
        if self.check(token) {
            self.advance();
            Ok(())
        } else {
            Err(SyntaxError {
                message: format!("{}, found {}", message, self.peek()),
                location: self.current_location(),
            })
        }
    }

    pub(crate) fn expect_semicolon(&mut self, ctx: &str) -> Result<(), SyntaxError> {
        self.expect_token(
            &Token::Semicolon(self.current_location()),
            &format!("Expected ';' {ctx}"),
        )
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<String, SyntaxError> {
        if let Token::Ident(name, _) = self.peek_token() {
            self.advance();
            Ok(name)
        } else {
            Err(SyntaxError {
                message: format!("Expected identifier, found {}", self.peek()),
                location: self.current_location(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_package_only() {
        let source = "package a.b;";
        let mut parser = Parser::new(source).unwrap();
        let program = parser.parse_program().unwrap();

        assert_eq!(program.kind(), NodeKind::Program);
        assert_eq!(program.num_children(), 1);
        assert_eq!(program.children()[0].kind(), NodeKind::Package);
        assert_eq!(program.children()[0].name(), "a.b");
    }

    #[test]
    fn test_parse_package_and_imports() {
        let source = "package a.b; import x.y; import z;";
        let mut parser = Parser::new(source).unwrap();
        let program = parser.parse_program().unwrap();

        assert_eq!(program.num_children(), 3);

        assert_eq!(program.children()[0].kind(), NodeKind::Package);
        assert_eq!(program.children()[0].name(), "a.b");
        assert_eq!(program.children()[1].kind(), NodeKind::Import);
        assert_eq!(program.children()[1].name(), "x.y");
        assert_eq!(program.children()[2].kind(), NodeKind::Import);
        assert_eq!(program.children()[2].name(), "z");
    }

    #[test]
    fn test_qualified_name_is_flattened() {
        let source = "a.b.c;";
        let mut parser = Parser::new(source).unwrap();
        let program = parser.parse_program().unwrap();

        // One node with the dot-joined text, not a chain of three
        assert_eq!(program.num_children(), 1);
        let qualified = &program.children()[0];
        assert_eq!(qualified.kind(), NodeKind::QualifiedName);
        assert_eq!(qualified.name(), "a.b.c");
        assert_eq!(qualified.num_children(), 0);
    }

    #[test]
    fn test_bare_identifier() {
        let source = "x;";
        let mut parser = Parser::new(source).unwrap();
        let program = parser.parse_program().unwrap();

        assert_eq!(program.children()[0].kind(), NodeKind::Identifier);
        assert_eq!(program.children()[0].name(), "x");
    }

    #[test]
    fn test_integer_literal_value() {
        let source = "42;";
        let mut parser = Parser::new(source).unwrap();
        let program = parser.parse_program().unwrap();

        let literal = &program.children()[0];
        assert_eq!(literal.kind(), NodeKind::IntValue);
        assert_eq!(literal.value(), 42.0);
        assert_eq!(literal.name(), "");
    }

    #[test]
    fn test_decimal_literal_not_truncated() {
        let source = "3.14;";
        let mut parser = Parser::new(source).unwrap();
        let program = parser.parse_program().unwrap();

        assert_eq!(program.children()[0].kind(), NodeKind::IntValue);
        assert_eq!(program.children()[0].value(), 3.14);
    }

    #[test]
    fn test_import_without_name_fails() {
        let source = "import ;";
        let mut parser = Parser::new(source).unwrap();
        let err = parser.parse_program().unwrap_err();

        assert!(err.message.contains("Expected identifier"));
        assert!(err.message.contains("';'"));
    }

    #[test]
    fn test_package_after_import_fails() {
        let source = "import a; package b;";
        let mut parser = Parser::new(source).unwrap();
        let err = parser.parse_program().unwrap_err();

        assert!(err.message.contains("'package'"));
    }

    #[test]
    fn test_second_package_fails() {
        let source = "package a; package b;";
        let mut parser = Parser::new(source).unwrap();
        assert!(parser.parse_program().is_err());
    }

    #[test]
    fn test_unterminated_package_fails() {
        let source = "package a.b";
        let mut parser = Parser::new(source).unwrap();
        let err = parser.parse_program().unwrap_err();

        assert!(err.message.contains("end of file"));
    }

    #[test]
    fn test_empty_input_is_valid() {
        let mut parser = Parser::new("").unwrap();
        let program = parser.parse_program().unwrap();

        assert_eq!(program.kind(), NodeKind::Program);
        assert_eq!(program.num_children(), 0);
    }

    #[test]
    fn test_lex_error_surfaces_as_syntax_error() {
        let err = Parser::new("package @;").unwrap_err();

        assert!(err.message.contains("Unexpected character"));
    }

    #[test]
    fn test_attach_none_is_noop() {
        let mut node = Node::new(NodeKind::Program);
        node.attach(None);
        assert_eq!(node.num_children(), 0);

        node.attach(Some(Node::new(NodeKind::Identifier)));
        assert_eq!(node.num_children(), 1);
    }

    #[test]
    fn test_set_modifiers_overwrites() {
        let mut node = Node::with_payload(NodeKind::Identifier, 0.0, "x");
        assert_eq!(node.modifiers(), None);

        node.set_modifiers("public");
        node.set_modifiers("private");
        assert_eq!(node.modifiers(), Some("private"));
    }
}
