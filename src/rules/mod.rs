//! The repair-rule table: corruption patterns paired with their corrections.
//!
//! Rules are immutable, process-wide configuration data. Their order in the
//! table is the total priority order: the engine runs one full left-to-right
//! scan per rule, top to bottom, and commits each rule's output before the
//! next rule scans. A longer signature must therefore be listed before any
//! shorter signature it contains, or the shorter one would eat it first.
//!
//! Table construction validates two structural guarantees the rest of the
//! pipeline relies on:
//!
//! * short or unbounded patterns (literals under three characters, any
//!   regex) must carry a scope predicate or be explicitly marked
//!   unsafe-global, so ambiguous markers cannot fire in unrelated text;
//! * no rule's correction text may itself match any rule in the table
//!   (in particular none of equal or lower priority), which is what makes
//!   re-running the engine on its own output a no-op.

use crate::constants::{BOM, MIN_UNSCOPED_PATTERN_CHARS, REPLACEMENT_CHARACTER};
use crate::errors::AppError;
use glob::Pattern as GlobPattern;
use regex::Regex;
use std::path::Path;

pub mod catalog;
pub mod engine;

pub use catalog::built_in_rules;

/// The corruption pattern of a rule.
#[derive(Debug, Clone)]
pub enum RulePattern {
    /// An exact substring match.
    Literal(String),
    /// A regular-expression match. Regex matches have no useful static
    /// lower bound on their length, so global regex rules must be marked
    /// unsafe-global.
    Regex(Regex),
}

impl RulePattern {
    /// True if the pattern matches anywhere in `text`.
    fn matches(&self, text: &str) -> bool {
        match self {
            RulePattern::Literal(lit) => text.contains(lit.as_str()),
            RulePattern::Regex(re) => re.is_match(text),
        }
    }
}

/// Restricts where a rule is allowed to apply, beyond pattern matching.
///
/// Both predicates may be present; a match must satisfy every predicate
/// that is. A scope with neither predicate is global.
#[derive(Debug, Clone, Default)]
pub struct RuleScope {
    /// The rule fires only in files whose relative path matches this glob.
    pub path_glob: Option<GlobPattern>,
    /// The rule fires only on matches whose line also contains this
    /// literal. This is what makes short ambiguous markers safe to repair:
    /// the co-occurring phrase pins down the context.
    pub line_marker: Option<String>,
}

impl RuleScope {
    /// A scope with no predicates.
    pub fn global() -> Self {
        Self::default()
    }

    /// True when the scope carries no predicate at all.
    pub fn is_global(&self) -> bool {
        self.path_glob.is_none() && self.line_marker.is_none()
    }

    /// True when `relative_path` satisfies the path predicate (vacuously
    /// true without one).
    pub fn admits_path(&self, relative_path: &Path) -> bool {
        match &self.path_glob {
            Some(glob) => glob.matches_path(relative_path),
            None => true,
        }
    }
}

/// One corruption pattern paired with its correction and scope.
#[derive(Debug, Clone)]
pub struct RepairRule {
    /// Stable identifier, used in reports and logs.
    pub id: String,
    /// What to look for.
    pub pattern: RulePattern,
    /// What to put in its place.
    pub replacement: String,
    /// Where the rule may fire.
    pub scope: RuleScope,
    /// Opts a short or regex pattern out of the scope requirement. Use only
    /// when the pattern cannot plausibly occur in correct text.
    pub unsafe_global: bool,
}

impl RepairRule {
    /// A global literal rule.
    pub fn literal(id: &str, pattern: &str, replacement: &str) -> Self {
        Self {
            id: id.to_string(),
            pattern: RulePattern::Literal(pattern.to_string()),
            replacement: replacement.to_string(),
            scope: RuleScope::global(),
            unsafe_global: false,
        }
    }

    /// A global regex rule. Must be scoped or marked unsafe-global to pass
    /// validation.
    pub fn regex(id: &str, pattern: Regex, replacement: &str) -> Self {
        Self {
            id: id.to_string(),
            pattern: RulePattern::Regex(pattern),
            replacement: replacement.to_string(),
            scope: RuleScope::global(),
            unsafe_global: false,
        }
    }

    /// Restricts the rule to matches on lines that also contain `marker`.
    pub fn on_lines_with(mut self, marker: &str) -> Self {
        self.scope.line_marker = Some(marker.to_string());
        self
    }

    /// Restricts the rule to files whose relative path matches `glob`.
    ///
    /// # Panics
    /// Panics on an invalid glob; rule tables are static configuration, so
    /// a bad glob is a programming error caught by the table's own tests.
    pub fn in_paths(mut self, glob: &str) -> Self {
        self.scope.path_glob =
            Some(GlobPattern::new(glob).expect("rule path scope must be a valid glob"));
        self
    }

    /// Marks the rule as deliberately global despite a short or regex
    /// pattern.
    pub fn allow_unsafe_global(mut self) -> Self {
        self.unsafe_global = true;
        self
    }

    fn pattern_chars(&self) -> Option<usize> {
        match &self.pattern {
            RulePattern::Literal(lit) => Some(lit.chars().count()),
            RulePattern::Regex(_) => None,
        }
    }
}

/// A validated, ordered rule table.
///
/// The vector order IS the priority order. Construction fails with
/// [`AppError::InvalidRule`] instead of producing a table that could corrupt
/// files, and that failure aborts a run before any file is touched.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<RepairRule>,
}

impl RuleTable {
    /// Validates and wraps an ordered rule list.
    pub fn new(rules: Vec<RepairRule>) -> Result<Self, AppError> {
        for rule in &rules {
            validate_pattern(rule)?;
            validate_replacement(rule)?;
            validate_idempotence(rule, &rules)?;
        }
        Ok(Self { rules })
    }

    /// The rules, in priority order.
    pub fn rules(&self) -> &[RepairRule] {
        &self.rules
    }
}

fn invalid(rule: &RepairRule, reason: String) -> AppError {
    AppError::InvalidRule {
        id: rule.id.clone(),
        reason,
    }
}

fn validate_pattern(rule: &RepairRule) -> Result<(), AppError> {
    match rule.pattern_chars() {
        Some(0) => return Err(invalid(rule, "pattern must not be empty".to_string())),
        Some(len) => {
            if rule.scope.is_global() && !rule.unsafe_global && len < MIN_UNSCOPED_PATTERN_CHARS {
                return Err(invalid(
                    rule,
                    format!(
                        "global pattern is {} character(s), below the minimum of {}; \
                         add a scope predicate or mark the rule unsafe-global",
                        len, MIN_UNSCOPED_PATTERN_CHARS
                    ),
                ));
            }
        }
        None => {
            if rule.scope.is_global() && !rule.unsafe_global {
                return Err(invalid(
                    rule,
                    "regex patterns have no bounded match length; \
                     add a scope predicate or mark the rule unsafe-global"
                        .to_string(),
                ));
            }
        }
    }
    Ok(())
}

fn validate_replacement(rule: &RepairRule) -> Result<(), AppError> {
    if rule.replacement.contains(BOM) || rule.replacement.contains(REPLACEMENT_CHARACTER) {
        return Err(invalid(
            rule,
            "replacement must not introduce a BOM or replacement character".to_string(),
        ));
    }
    Ok(())
}

/// Every correction must be a fixed point of the whole table. Within one
/// run, a correction from an earlier rule must not be re-matched by any rule
/// of equal or lower priority (later rules scan the already-corrected text);
/// across runs every rule scans again, including higher-priority ones, so
/// the check covers the full table rather than only the tail.
fn validate_idempotence(rule: &RepairRule, all: &[RepairRule]) -> Result<(), AppError> {
    for other in all {
        if other.pattern.matches(&rule.replacement) {
            return Err(invalid(
                rule,
                format!(
                    "replacement {:?} would be re-matched by rule '{}'",
                    rule.replacement, other.id
                ),
            ));
        }
    }
    Ok(())
}
