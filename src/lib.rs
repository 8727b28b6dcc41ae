//! Delegate-invocation null-guard rule.
//!
//! Flags direct invocations of multicast-delegate-typed values
//! (`handler(args)`) that are not preceded by a recognized null guard in the
//! enclosing method body, suggesting the null-propagating `?.Invoke` form
//! instead. The crate owns only the detection logic; parsing, symbol
//! binding and analyzer lifecycle belong to the host, which drives
//! [`InvokeGuard::check_invocation`] once per invocation-expression node
//! through the [`semantic::SemanticModel`] trait.

pub mod classifier;
pub mod config;
pub mod diagnostics;
pub mod guard;
pub mod semantic;
pub mod syntax;
pub mod telemetry;

use crate::config::InvokeGuardConfig;
use crate::diagnostics::{Diagnostic, LintLevel, RuleCategory, RuleDescriptor};
use crate::semantic::{CancellationToken, Cancelled, SemanticModel};
use crate::syntax::Invocation;

/// Metadata for the single rule this crate implements.
pub static USE_INVOKE_METHOD: RuleDescriptor = RuleDescriptor {
    id: "IG001",
    name: "use_invoke_method",
    category: RuleCategory::Design,
    description: "A delegate can be invoked with the null-propagating operator and its Invoke \
                  method, avoiding a null dereference when no method is attached.",
    default_level: LintLevel::Warn,
};

/// Per-rule settings derived from `invoke-guard.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSettings {
    level: Option<LintLevel>,
}

impl RuleSettings {
    /// Apply config overrides: a `disabled` entry wins over a level entry.
    #[must_use]
    pub fn from_config(cfg: &InvokeGuardConfig) -> Self {
        let mut level = cfg.rules.levels.get(USE_INVOKE_METHOD.name).copied();
        if cfg
            .rules
            .disabled
            .iter()
            .any(|name| name == USE_INVOKE_METHOD.name)
        {
            level = Some(LintLevel::Allow);
        }
        Self { level }
    }

    #[must_use]
    pub fn with_level(level: LintLevel) -> Self {
        Self { level: Some(level) }
    }

    pub fn effective_level(&self) -> LintLevel {
        self.level.unwrap_or(USE_INVOKE_METHOD.default_level)
    }
}

/// The rule engine a host registers and drives node by node.
///
/// Holds no mutable state, so one instance may be shared across threads and
/// files; every check touches only the arguments it is given.
#[derive(Debug, Clone, Default)]
pub struct InvokeGuard {
    settings: RuleSettings,
}

impl InvokeGuard {
    /// Engine with default settings (rule at its default level).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with explicit settings (e.g. from config).
    #[must_use]
    pub fn with_settings(settings: RuleSettings) -> Self {
        Self { settings }
    }

    /// Check one invocation-expression node.
    ///
    /// Returns at most one diagnostic per site. Cancellation signaled during
    /// a semantic query aborts with [`Cancelled`] and no diagnostic.
    pub fn check_invocation<M: SemanticModel>(
        &self,
        invocation: &Invocation,
        model: &M,
        token: &CancellationToken,
    ) -> Result<Option<Diagnostic>, Cancelled> {
        let level = self.settings.effective_level();
        if level == LintLevel::Allow {
            return Ok(None);
        }

        let Some(site) = classifier::classify(invocation, model, token)? else {
            return Ok(None);
        };

        if guard::has_preceding_guard(&site, model, token)? {
            return Ok(None);
        }

        Ok(Some(Diagnostic::new(
            &USE_INVOKE_METHOD,
            level,
            site.invocation.span,
            format!(
                "Use ?.Invoke operator and method to call on '{}' delegate.",
                site.identifier.text
            ),
        )))
    }
}
