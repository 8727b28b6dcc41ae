//! Host-provided semantic services.
//!
//! The rule never resolves identifiers itself. A host adapter implements
//! [`SemanticModel`] on top of its own binder, and the classifier/scanner
//! stay host-agnostic and unit-testable against a hand-built fake.

use crate::syntax::{Identifier, Invocation, MethodScope, Span};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Opaque symbol identity assigned by the host binder.
///
/// Two identifiers refer to the same declaration exactly when their symbol
/// ids are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SymbolId(pub u32);

/// Declaration kind of a resolved symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Local,
    Parameter,
    Field,
    Property,
    Event,
}

/// A resolved symbol behind an identifier expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub id: SymbolId,
    pub kind: SymbolKind,
    pub name: String,
}

impl Symbol {
    pub fn new(id: SymbolId, kind: SymbolKind, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
        }
    }

    /// Symbol identity comparison, independent of display text.
    #[must_use]
    pub fn same_declaration(&self, other: &Symbol) -> bool {
        self.id == other.id
    }
}

/// Return shape of a delegate's invoke method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokeReturn {
    Void,
    /// Returns a reference type; a null-propagating call stays well-typed.
    Reference,
    /// Returns a non-void value type; no null-propagating replacement exists.
    Value,
}

/// Converted-type facts about an identifier expression.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    /// Whether the converted type derives from the multicast delegate base.
    pub is_multicast_delegate: bool,
    /// Invoke-method return shape, when the type is a resolvable delegate.
    pub invoke_return: Option<InvokeReturn>,
}

impl TypeInfo {
    /// A delegate type whose invoke method returns the given shape.
    #[must_use]
    pub fn delegate(invoke_return: InvokeReturn) -> Self {
        Self {
            is_multicast_delegate: true,
            invoke_return: Some(invoke_return),
        }
    }

    /// A non-delegate type.
    #[must_use]
    pub fn non_delegate() -> Self {
        Self {
            is_multicast_delegate: false,
            invoke_return: None,
        }
    }
}

/// Cooperative cancellation signal supplied by the host.
///
/// Checked on every semantic query; a signaled token aborts the in-progress
/// check with [`Cancelled`] and no diagnostic.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Bail out with `Cancelled` if the token has been signaled.
    pub fn checkpoint(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() { Err(Cancelled) } else { Ok(()) }
    }
}

/// The check was aborted by the host's cancellation token.
///
/// Propagates to the host; never converted into a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("analysis cancelled by host")]
pub struct Cancelled;

/// Capability set the host injects into the rule.
///
/// All queries are read-only and side-effect free. `type_of` and `symbol_of`
/// return `Ok(None)` for anything the binder cannot resolve; the rule
/// degrades to "not flagged" in that case rather than erroring.
pub trait SemanticModel {
    /// Generated-code predicate over a source span.
    fn is_generated(&self, span: Span) -> bool;

    /// Converted type of an identifier expression, if resolvable.
    fn type_of(
        &self,
        ident: &Identifier,
        token: &CancellationToken,
    ) -> Result<Option<TypeInfo>, Cancelled>;

    /// Symbol bound to an identifier expression, if resolvable.
    fn symbol_of(
        &self,
        ident: &Identifier,
        token: &CancellationToken,
    ) -> Result<Option<Symbol>, Cancelled>;

    /// Nearest enclosing method declaration of an invocation, if any.
    ///
    /// `None` models invocations outside any reachable method body, e.g.
    /// inside a lambda the host cannot attribute to a method.
    fn enclosing_method(&self, invocation: &Invocation) -> Option<&MethodScope>;
}
