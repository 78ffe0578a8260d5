// AST (Abstract Syntax Tree) definitions for the declaration language

/// The closed set of node categories produced by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Program,
    Package,
    Import,
    QualifiedName,
    Identifier,
    IntValue,
}

/// A single node of the abstract syntax tree.
///
/// Every syntactic construct shares the same node shape: a [`NodeKind`] tag
/// plus the payload fields that kind makes meaningful. Non-literal kinds
/// leave `value` at `0.0`; unnamed kinds leave `name` empty. Children are
/// exclusively owned, kept in source order, and only ever appended.
///
/// The model performs no validation of its own: the parser is the sole
/// producer of nodes and supplies kind-appropriate payloads.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    value: f64,
    name: String,
    children: Vec<Node>,
    modifiers: Option<String>,
}

impl Node {
    /// Create a structural node with default payload.
    pub fn new(kind: NodeKind) -> Self {
        Node {
            kind,
            value: 0.0,
            name: String::new(),
            children: Vec::new(),
            modifiers: None,
        }
    }

    /// Create a leaf node carrying a payload.
    pub fn with_payload(kind: NodeKind, value: f64, name: impl Into<String>) -> Self {
        Node {
            kind,
            value,
            name: name.into(),
            children: Vec::new(),
            modifiers: None,
        }
    }

    /// Append a child, preserving source order. `None` has no effect.
    pub fn attach(&mut self, child: Option<Node>) {
        if let Some(child) = child {
            self.children.push(child);
        }
    }

    /// Get the node category.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Numeric payload; `0.0` for non-literal kinds.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Name payload; empty for unnamed kinds.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of attached children.
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Attached children in source order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Set the optional annotation (e.g. access modifiers), replacing any
    /// previous value.
    pub fn set_modifiers(&mut self, modifiers: impl Into<String>) {
        self.modifiers = Some(modifiers.into());
    }

    /// Current annotation, if one was set.
    pub fn modifiers(&self) -> Option<&str> {
        self.modifiers.as_deref()
    }
}
