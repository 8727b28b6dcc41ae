//! Hand-built host fake: a binder table plus one method scope.
//!
//! Integration tests describe a method body as explicit syntax shapes with
//! byte spans instead of parsing source text, since the crate consumes an
//! already-built tree.

#![allow(dead_code)]

use invoke_guard::semantic::{
    CancellationToken, Cancelled, SemanticModel, Symbol, SymbolId, SymbolKind, TypeInfo,
};
use invoke_guard::syntax::{
    Callee, Condition, GuardBody, Identifier, IfStatement, Invocation, MethodScope, Operand, Span,
    Statement,
};
use std::collections::HashMap;

/// In-memory semantic model keyed by identifier text.
#[derive(Default)]
pub struct FakeHost {
    types: HashMap<String, TypeInfo>,
    symbols: HashMap<String, Symbol>,
    generated_spans: Vec<Span>,
    method: Option<MethodScope>,
    next_symbol: u32,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to a fresh symbol of the given kind and type.
    pub fn bind(mut self, name: &str, kind: SymbolKind, ty: TypeInfo) -> Self {
        let id = SymbolId(self.next_symbol);
        self.next_symbol += 1;
        self.types.insert(name.to_string(), ty);
        self.symbols.insert(name.to_string(), Symbol::new(id, kind, name));
        self
    }

    /// Set the method body the scanner will see for every invocation.
    pub fn method(mut self, statements: Vec<Statement>) -> Self {
        self.method = Some(MethodScope::new(statements));
        self
    }

    /// Mark a span as generated code.
    pub fn generated(mut self, span: Span) -> Self {
        self.generated_spans.push(span);
        self
    }
}

impl SemanticModel for FakeHost {
    fn is_generated(&self, span: Span) -> bool {
        self.generated_spans.contains(&span)
    }

    fn type_of(
        &self,
        ident: &Identifier,
        token: &CancellationToken,
    ) -> Result<Option<TypeInfo>, Cancelled> {
        token.checkpoint()?;
        Ok(self.types.get(&ident.text).copied())
    }

    fn symbol_of(
        &self,
        ident: &Identifier,
        token: &CancellationToken,
    ) -> Result<Option<Symbol>, Cancelled> {
        token.checkpoint()?;
        Ok(self.symbols.get(&ident.text).cloned())
    }

    fn enclosing_method(&self, _invocation: &Invocation) -> Option<&MethodScope> {
        self.method.as_ref()
    }
}

/// `name(...)` invocation whose callee identifier starts at `at`.
pub fn invocation(name: &str, at: usize) -> Invocation {
    let ident_span = Span::new(at, at + name.len());
    Invocation {
        span: Span::new(at, at + name.len() + 2),
        callee: Callee::Identifier(Identifier::new(name, ident_span)),
    }
}

/// Invocation with a computed callee (member access, call result, ...).
pub fn computed_invocation(at: usize) -> Invocation {
    Invocation {
        span: Span::new(at, at + 12),
        callee: Callee::Other(Span::new(at, at + 10)),
    }
}

/// `if (name == null) <body>` starting at `at`.
pub fn null_guard(name: &str, at: usize, body: GuardBody) -> Statement {
    let ident = Identifier::new(name, Span::new(at + 4, at + 4 + name.len()));
    Statement::If(IfStatement {
        span: Span::new(at, at + 30),
        condition: Some(Condition::Equality {
            left: Operand::Identifier(ident),
            right: Operand::NullLiteral,
        }),
        body: Some(body),
    })
}

/// `if (null == name) <body>` starting at `at`.
pub fn reversed_null_guard(name: &str, at: usize, body: GuardBody) -> Statement {
    let ident = Identifier::new(name, Span::new(at + 12, at + 12 + name.len()));
    Statement::If(IfStatement {
        span: Span::new(at, at + 30),
        condition: Some(Condition::Equality {
            left: Operand::NullLiteral,
            right: Operand::Identifier(ident),
        }),
        body: Some(body),
    })
}

/// `if (<something else>) <body>` starting at `at` — e.g. `name != null`.
pub fn non_equality_guard(at: usize, body: GuardBody) -> Statement {
    Statement::If(IfStatement {
        span: Span::new(at, at + 30),
        condition: Some(Condition::Other(Span::new(at + 4, at + 14))),
        body: Some(body),
    })
}

/// Single-statement `return;` body located inside a guard starting at `at`.
pub fn return_body(at: usize) -> GuardBody {
    GuardBody::Single(Box::new(Statement::Return(Span::new(at + 18, at + 25))))
}

/// Single-statement `throw ...;` body located inside a guard starting at `at`.
pub fn throw_body(at: usize) -> GuardBody {
    GuardBody::Single(Box::new(Statement::Throw(Span::new(at + 18, at + 28))))
}
