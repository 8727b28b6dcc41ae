//! Host-facing syntax shapes.
//!
//! The crate never parses source text. A host adapter maps its own syntax
//! tree into these types, keeping only the shapes the rule reasons about:
//! invocation expressions, identifier callees, `if` statements with a
//! null-equality condition, and `throw`/`return` exits. Everything else is
//! collapsed into `Other` so unknown constructs degrade to "not flagged"
//! rather than erroring.

use serde::Serialize;
use std::fmt;

/// Byte span in the original source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// True if this span begins strictly before `other` in source order.
    #[must_use]
    pub fn starts_before(self, other: Span) -> bool {
        self.start < other.start
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A bare identifier expression (`handler`), as written in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub text: String,
    pub span: Span,
}

impl Identifier {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

/// An invocation expression node (`callee(args)`).
#[derive(Debug, Clone)]
pub struct Invocation {
    pub span: Span,
    pub callee: Callee,
}

/// The expression being invoked.
#[derive(Debug, Clone)]
pub enum Callee {
    /// `name(args)` — the only shape the rule considers.
    Identifier(Identifier),
    /// Member access, call result, indexer, or any other computed callee.
    Other(Span),
}

impl Invocation {
    /// The callee identifier, if the invocation has the `name(args)` shape.
    #[must_use]
    pub fn callee_identifier(&self) -> Option<&Identifier> {
        match &self.callee {
            Callee::Identifier(ident) => Some(ident),
            Callee::Other(_) => None,
        }
    }
}

/// A top-level statement of a method body (or of a guard block).
#[derive(Debug, Clone)]
pub enum Statement {
    If(IfStatement),
    Return(Span),
    Throw(Span),
    Other(Span),
}

impl Statement {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Statement::If(if_stmt) => if_stmt.span,
            Statement::Return(span) | Statement::Throw(span) | Statement::Other(span) => *span,
        }
    }

    /// True for statements that exit the current control path.
    #[must_use]
    pub fn is_exit(&self) -> bool {
        matches!(self, Statement::Return(_) | Statement::Throw(_))
    }
}

/// An `if` statement with whatever condition and body shape the host found.
///
/// A missing condition or body models malformed source; the scanner treats
/// both as "not a guard".
#[derive(Debug, Clone)]
pub struct IfStatement {
    pub span: Span,
    pub condition: Option<Condition>,
    pub body: Option<GuardBody>,
}

/// Condition of an `if` statement.
#[derive(Debug, Clone)]
pub enum Condition {
    /// `left == right`.
    Equality { left: Operand, right: Operand },
    /// `!=`, pattern matches, helper calls — shapes the scanner ignores.
    Other(Span),
}

/// One side of an equality comparison.
#[derive(Debug, Clone)]
pub enum Operand {
    NullLiteral,
    Identifier(Identifier),
    Other(Span),
}

impl Operand {
    #[must_use]
    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Operand::Identifier(ident) => Some(ident),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_null_literal(&self) -> bool {
        matches!(self, Operand::NullLiteral)
    }
}

/// Body of an `if` statement: a braced block or a single statement.
#[derive(Debug, Clone)]
pub enum GuardBody {
    Block(Vec<Statement>),
    Single(Box<Statement>),
}

impl GuardBody {
    /// True if the body exits the current path via `throw` or `return`.
    ///
    /// Only direct statements of a block are inspected; nested branches are
    /// not, matching the scanner's lexical-only approximation.
    #[must_use]
    pub fn exits(&self) -> bool {
        match self {
            GuardBody::Block(statements) => statements.iter().any(Statement::is_exit),
            GuardBody::Single(statement) => statement.is_exit(),
        }
    }
}

/// The enclosing method declaration of a candidate site.
///
/// Read-only scan target: the ordered direct statements of the body. Nested
/// lambdas and local functions are represented as `Statement::Other` by the
/// host and never descended into.
#[derive(Debug, Clone, Default)]
pub struct MethodScope {
    pub statements: Vec<Statement>,
}

impl MethodScope {
    #[must_use]
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Direct `if` statements of the body, in source order.
    pub fn if_statements(&self) -> impl Iterator<Item = &IfStatement> {
        self.statements.iter().filter_map(|stmt| match stmt {
            Statement::If(if_stmt) => Some(if_stmt),
            _ => None,
        })
    }
}
