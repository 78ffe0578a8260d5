//! Lexer (tokenizer) for declaration source text
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. Whitespace and comments (`//` line and `/* */` block) are
//! silently skipped rather than emitted as tokens.

use rustc_hash::FxHashMap;
use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// All token variants produced by the lexer.
///
/// Every variant carries a [`SourceLocation`] so that parse errors can report
/// an accurate line and column without a separate token→location table.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    NumberLiteral(f64, SourceLocation),

    // Identifiers
    Ident(String, SourceLocation),

    // Keywords
    Package(SourceLocation),
    Import(SourceLocation),

    // Punctuation
    Dot(SourceLocation),       // .
    Semicolon(SourceLocation), // ;

    // End of file
    Eof(SourceLocation),
}

impl Token {
    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::NumberLiteral(_, loc)
            | Token::Ident(_, loc)
            | Token::Package(loc)
            | Token::Import(loc)
            | Token::Dot(loc)
            | Token::Semicolon(loc)
            | Token::Eof(loc) => *loc,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::NumberLiteral(n, _) => write!(f, "number literal {}", n),
            Token::Ident(s, _) => write!(f, "identifier '{}'", s),
            Token::Package(_) => write!(f, "'package'"),
            Token::Import(_) => write!(f, "'import'"),
            Token::Dot(_) => write!(f, "'.'"),
            Token::Semicolon(_) => write!(f, "';'"),
            Token::Eof(_) => write!(f, "end of file"),
        }
    }
}

/// Lexer error type
#[derive(Debug)]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexer error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for LexError {}

/// Reserved words of the declaration language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Package,
    Import,
}

/// Lexer for declaration source text
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    keywords: FxHashMap<&'static str, Keyword>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        let mut keywords = FxHashMap::default();
        keywords.insert("package", Keyword::Package);
        keywords.insert("import", Keyword::Import);

        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            keywords,
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

        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let ch = self.advance().ok_or_else(|| LexError {
            message: "Unexpected end of file".to_string(),
            location: loc,
        })?;

        match ch {
            // Numeric literals
            '0'..='9' => self.number_literal(ch),

            // Identifiers and keywords
            'a'..='z' | 'A'..='Z' => self.identifier_or_keyword(ch),

            // Punctuation
            '.' => Ok(Token::Dot(loc)),
            ';' => Ok(Token::Semicolon(loc)),

            _ => Err(LexError {
                message: format!("Unexpected character: '{}'", ch),
                location: loc,
            }),
        }
    }

    /// Parse numeric literal (integer or decimal)
    fn number_literal(&mut self, first_digit: char) -> Result<Token, LexError> {
        let loc = SourceLocation::new(self.line, self.column - 1);
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

        // A '.' extends the literal only when a digit follows; otherwise it
        // is left in the stream as the qualifier separator.
        if self.peek() == Some('.')
            && self.peek_ahead(1).map(|c| c.is_ascii_digit()).unwrap_or(false)
        {
            num_str.push('.');
            self.advance();

            while let Some(ch) = self.peek() {
                if ch.is_ascii_digit() {
                    num_str.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
        }

        let value = num_str.parse::<f64>().map_err(|_| LexError {
            message: format!("Invalid numeric literal: {}", num_str),
            location: loc,
        })?;

        Ok(Token::NumberLiteral(value, loc))
    }

    /// Parse identifier or keyword (letter-led alphanumeric)
    fn identifier_or_keyword(&mut self, first_char: char) -> Result<Token, LexError> {
        let loc = SourceLocation::new(self.line, self.column - 1);
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let token = match self.keywords.get(ident.as_str()).copied() {
            Some(Keyword::Package) => Token::Package(loc),
            Some(Keyword::Import) => Token::Import(loc),
            None => Token::Ident(ident, loc),
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
                        // Single-line comment
                        self.skip_line_comment();
                    } else if self.peek_ahead(1) == Some('*') {
                        // Multi-line comment
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

    /// Skip multi-line comment (/* ... */)
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

        Err(LexError {
            message: "Unterminated block comment".to_string(),
            location: start_loc,
        })
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        if self.position < self.input.len() {
            Some(self.input[self.position])
        } else {
            None
        }
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        let pos = self.position + n;
        if pos < self.input.len() {
            Some(self.input[pos])
        } else {
            None
        }
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        if self.position >= self.input.len() {
            return None;
        }

        let ch = self.input[self.position];
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
