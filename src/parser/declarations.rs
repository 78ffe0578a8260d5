//! Declaration parsing implementation
//!
//! This module handles the grammar productions of the declaration language:
//!
//! - Package declarations: `package a.b;`
//! - Import declarations: `import x.y;`
//! - Remaining top-level declarations: qualified names, bare identifiers,
//!   and numeric literals, each terminated by `;`
//!
//! # Grammar
//!
//! ```text
//! program        ::= package_decl? import_decl* top_level*
//! package_decl   ::= "package" qualified_name ";"
//! import_decl    ::= "import" qualified_name ";"
//! top_level      ::= (qualified_name | number) ";"
//! qualified_name ::= identifier ("." identifier)*
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::{Node, NodeKind};
use crate::parser::lexer::Token;
use crate::parser::parse::{Parser, SyntaxError};

impl Parser {
    /// Parse a package declaration: `package a.b;`
    pub(crate) fn parse_package_declaration(&mut self) -> Result<Node, SyntaxError> {
        self.expect_token(&Token::Package(self.current_location()), "Expected 'package'")?;
        let name = self.parse_qualified_name()?;
        self.expect_semicolon("after package declaration")?;

        Ok(Node::with_payload(NodeKind::Package, 0.0, name))
    }

    /// Parse an import declaration: `import x.y;`
    pub(crate) fn parse_import_declaration(&mut self) -> Result<Node, SyntaxError> {
        self.expect_token(&Token::Import(self.current_location()), "Expected 'import'")?;
        let name = self.parse_qualified_name()?;
        self.expect_semicolon("after import declaration")?;

        Ok(Node::with_payload(NodeKind::Import, 0.0, name))
    }

    /// Parse one remaining top-level declaration.
    ///
    /// A numeric literal yields an `IntValue` node carrying the parsed
    /// magnitude. A name yields an `Identifier` node when it has a single
    /// segment and a `QualifiedName` node otherwise. Any other token,
    /// including a misplaced `package` or `import` keyword, is a syntax
    /// error.
    pub(crate) fn parse_top_level_declaration(&mut self) -> Result<Node, SyntaxError> {
        if let Token::NumberLiteral(value, _) = self.peek_token() {
            self.advance();
            self.expect_semicolon("after numeric literal")?;
            return Ok(Node::with_payload(NodeKind::IntValue, value, ""));
        }

        if matches!(self.peek_token(), Token::Ident(_, _)) {
            let name = self.parse_qualified_name()?;
            self.expect_semicolon("after declaration")?;

            let kind = if name.contains('.') {
                NodeKind::QualifiedName
            } else {
                NodeKind::Identifier
            };
            return Ok(Node::with_payload(kind, 0.0, name));
        }

        Err(SyntaxError {
            message: format!("Expected declaration, found {}", self.peek()),
            location: self.current_location(),
        })
    }

    /// Parse a qualified name: one identifier followed by zero or more
    /// (separator, identifier) pairs, collapsed to a single dot-joined
    /// string rather than a nested chain.
    pub(crate) fn parse_qualified_name(&mut self) -> Result<String, SyntaxError> {
        let mut name = self.expect_identifier()?;

        while self.match_token(&Token::Dot(self.current_location())) {
            name.push('.');
            name.push_str(&self.expect_identifier()?);
        }

        Ok(name)
    }
}
