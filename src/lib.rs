//! # Introduction
//!
//! decltree parses a minimal declaration language — an optional `package`
//! declaration, `import` declarations, and simple terminated top-level
//! declarations — into an abstract syntax tree, then renders the tree as an
//! indented human-readable listing.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → Printer
//! ```
//!
//! 1. [`parser`] — tokenises the source and builds the AST. Parsing is
//!    all-or-nothing: the first syntax error aborts with a located
//!    diagnostic and no partial tree escapes.
//! 2. [`printer`] — renders the tree as an indented listing, one line per
//!    node, template chosen by node kind.
//!
//! ## Supported syntax
//!
//! ```text
//! package a.b;
//! import x.y;
//! import z;
//!
//! some.qualified.name;
//! bareIdentifier;
//! 42;
//! 3.14;
//! ```

pub mod parser;
pub mod printer;
