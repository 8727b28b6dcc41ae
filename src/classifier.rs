//! Site classifier: decides whether an invocation expression is a delegate
//! invocation the rule cares about.

use crate::semantic::{
    CancellationToken, Cancelled, InvokeReturn, SemanticModel, Symbol, SymbolKind,
};
use crate::syntax::{Identifier, Invocation};

/// An invocation provisionally eligible for flagging, handed to the guard
/// scanner. Transient; borrows the invocation node it was built from.
#[derive(Debug)]
pub struct CandidateSite<'a> {
    pub invocation: &'a Invocation,
    pub identifier: &'a Identifier,
    pub symbol: Symbol,
}

/// Classify an invocation expression.
///
/// Every rule short-circuits: the first disqualifying condition yields
/// `Ok(None)` with no side effects. In order:
///
/// 1. generated code is skipped entirely;
/// 2. the callee must be a bare identifier (`name(args)`);
/// 3. the identifier's converted type must resolve and derive from the
///    multicast delegate base;
/// 4. the symbol must resolve and must not be a local variable (locals are
///    covered by definite-assignment and conventional null checks);
/// 5. the delegate's invoke method must resolve and return void or a
///    reference type, since a non-void value-type return has no
///    null-propagating replacement.
pub fn classify<'a, M: SemanticModel>(
    invocation: &'a Invocation,
    model: &M,
    token: &CancellationToken,
) -> Result<Option<CandidateSite<'a>>, Cancelled> {
    if model.is_generated(invocation.span) {
        return Ok(None);
    }

    let Some(identifier) = invocation.callee_identifier() else {
        return Ok(None);
    };

    let Some(type_info) = model.type_of(identifier, token)? else {
        return Ok(None);
    };
    if !type_info.is_multicast_delegate {
        return Ok(None);
    }

    let Some(symbol) = model.symbol_of(identifier, token)? else {
        return Ok(None);
    };
    if symbol.kind == SymbolKind::Local {
        return Ok(None);
    }

    let Some(invoke_return) = type_info.invoke_return else {
        return Ok(None);
    };
    if invoke_return == InvokeReturn::Value {
        return Ok(None);
    }

    #[cfg(feature = "telemetry")]
    tracing::trace!(
        identifier = %identifier.text,
        span = %invocation.span,
        "classified candidate delegate invocation"
    );

    Ok(Some(CandidateSite {
        invocation,
        identifier,
        symbol,
    }))
}
