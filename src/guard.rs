//! Guard scanner: looks for a null guard that textually precedes a candidate
//! delegate invocation in the enclosing method body.

use crate::classifier::CandidateSite;
use crate::semantic::{CancellationToken, Cancelled, SemanticModel, Symbol};
use crate::syntax::{Condition, Identifier, IfStatement, Operand};

/// Whether a recognized null guard covers `site`.
///
/// The scan is lexical, not control-flow based: it walks the direct `if`
/// statements of the enclosing method body in source order and stops at the
/// first one whose position is not strictly before the invocation. A guard
/// matches when its condition compares the candidate's symbol against the
/// null literal with `==` (either operand order) and its body exits via
/// `throw` or `return`.
///
/// Inequality guards (`!= null` wrapping the call), pattern-based null
/// checks, helper-method checks and guards inside nested branches are not
/// recognized; such sites stay flagged. No enclosing method means no guard.
pub fn has_preceding_guard<M: SemanticModel>(
    site: &CandidateSite<'_>,
    model: &M,
    token: &CancellationToken,
) -> Result<bool, Cancelled> {
    let Some(scope) = model.enclosing_method(site.invocation) else {
        return Ok(false);
    };

    for if_stmt in scope.if_statements() {
        if !if_stmt.span.starts_before(site.invocation.span) {
            // Guards must textually precede the use; everything from here on
            // is at or past the invocation.
            return Ok(false);
        }

        if guards_symbol(if_stmt, &site.symbol, model, token)? {
            #[cfg(feature = "telemetry")]
            tracing::trace!(
                identifier = %site.identifier.text,
                guard_span = %if_stmt.span,
                "null guard covers invocation"
            );
            return Ok(true);
        }
    }

    Ok(false)
}

/// Whether a single `if` statement is a null guard for `symbol`.
fn guards_symbol<M: SemanticModel>(
    if_stmt: &IfStatement,
    symbol: &Symbol,
    model: &M,
    token: &CancellationToken,
) -> Result<bool, Cancelled> {
    let Some(Condition::Equality { left, right }) = &if_stmt.condition else {
        return Ok(false);
    };

    let Some(checked) = null_compared_identifier(left, right) else {
        return Ok(false);
    };

    let Some(checked_symbol) = model.symbol_of(checked, token)? else {
        return Ok(false);
    };
    if !symbol.same_declaration(&checked_symbol) {
        return Ok(false);
    }

    Ok(if_stmt.body.as_ref().is_some_and(|body| body.exits()))
}

/// The identifier compared against the null literal, accepting either
/// operand order. Anything else (`x == y`, `null == null`, computed
/// operands) is not a recognized guard shape.
fn null_compared_identifier<'a>(left: &'a Operand, right: &'a Operand) -> Option<&'a Identifier> {
    if right.is_null_literal() {
        left.as_identifier()
    } else if left.is_null_literal() {
        right.as_identifier()
    } else {
        None
    }
}
