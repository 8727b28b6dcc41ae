//! Diagnostic types and rule metadata.

use crate::syntax::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reporting level for a rule finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintLevel {
    Allow,
    Warn,
    Error,
}

impl LintLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LintLevel::Allow => "allow",
            LintLevel::Warn => "warning",
            LintLevel::Error => "error",
        }
    }
}

impl Default for LintLevel {
    fn default() -> Self {
        Self::Warn
    }
}

impl fmt::Display for LintLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// High-level category a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    Design,
    Usage,
}

impl RuleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCategory::Design => "design",
            RuleCategory::Usage => "usage",
        }
    }
}

const HELP_LINK_BASE: &str = "https://invoke-guard.github.io/rules";

/// Static metadata describing a rule.
#[derive(Debug, Serialize)]
pub struct RuleDescriptor {
    /// Stable rule code used in reports and help links (e.g. `IG001`).
    pub id: &'static str,
    /// Config-facing rule name.
    pub name: &'static str,
    pub category: RuleCategory,
    pub description: &'static str,
    /// Level applied when no config override is present.
    pub default_level: LintLevel,
}

impl RuleDescriptor {
    /// Documentation URI for this rule, keyed by its id.
    #[must_use]
    pub fn help_link(&self) -> String {
        format!("{}/{}.html", HELP_LINK_BASE, self.id)
    }
}

/// A single finding produced by the rule.
#[derive(Debug, Clone, Serialize)]
#[must_use]
pub struct Diagnostic {
    pub rule: &'static RuleDescriptor,
    pub level: LintLevel,
    /// Span of the flagged invocation expression.
    pub span: Span,
    pub message: String,
    pub help_link: String,
}

impl Diagnostic {
    pub fn new(
        rule: &'static RuleDescriptor,
        level: LintLevel,
        span: Span,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule,
            level,
            span,
            message: message.into(),
            help_link: rule.help_link(),
        }
    }

    /// Serialize for host pipelines that consume findings as JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]: {} @ {}",
            self.level, self.rule.id, self.message, self.span
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_RULE: RuleDescriptor = RuleDescriptor {
        id: "IG999",
        name: "test_rule",
        category: RuleCategory::Design,
        description: "test descriptor",
        default_level: LintLevel::Warn,
    };

    #[test]
    fn help_link_is_keyed_by_rule_id() {
        assert_eq!(
            TEST_RULE.help_link(),
            "https://invoke-guard.github.io/rules/IG999.html"
        );
    }

    #[test]
    fn display_includes_level_id_and_span() {
        let diag = Diagnostic::new(&TEST_RULE, LintLevel::Warn, Span::new(4, 9), "message text");
        assert_eq!(
            diag.to_string(),
            "warning [IG999]: message text @ 4..9"
        );
    }

    #[test]
    fn json_export_carries_rule_metadata() {
        let diag = Diagnostic::new(&TEST_RULE, LintLevel::Error, Span::new(0, 3), "m");
        let json = diag.to_json().expect("serialization should succeed");
        assert!(json.contains("\"id\":\"IG999\""));
        assert!(json.contains("\"level\":\"error\""));
        assert!(json.contains("\"help_link\""));
    }

    #[test]
    fn lint_level_roundtrips_through_serde_names() {
        let level: LintLevel = serde_json::from_str("\"warn\"").expect("lowercase variant name");
        assert_eq!(level, LintLevel::Warn);
        assert_eq!(serde_json::to_string(&LintLevel::Allow).unwrap(), "\"allow\"");
    }
}
