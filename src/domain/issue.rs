//! Accessibility issue model and WCAG taxonomy.

use serde::Serialize;
use std::fmt;

/// The four WCAG principles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Principle {
    Perceivable,
    Operable,
    Understandable,
    Robust,
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Principle::Perceivable => "Perceivable",
            Principle::Operable => "Operable",
            Principle::Understandable => "Understandable",
            Principle::Robust => "Robust",
        };
        f.write_str(name)
    }
}

/// WCAG conformance level of a success criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConformanceLevel {
    A,
    AA,
    AAA,
}

impl fmt::Display for ConformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConformanceLevel::A => "A",
            ConformanceLevel::AA => "AA",
            ConformanceLevel::AAA => "AAA",
        };
        f.write_str(name)
    }
}

/// A single accessibility finding produced by a rule.
///
/// Field names mirror the report columns: rule, wcag_principle,
/// wcag_success_criterion, level, description, context, selector,
/// recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    /// Stable rule identifier, e.g. `IMG_ALT`.
    pub rule: &'static str,

    #[serde(rename = "wcag_principle")]
    pub principle: Principle,

    /// Success criterion reference, e.g. `1.1.1 Non-text Content`.
    #[serde(rename = "wcag_success_criterion")]
    pub success_criterion: &'static str,

    pub level: ConformanceLevel,

    /// What the rule requires.
    pub description: &'static str,

    /// Offending element markup, truncated to 200 characters.
    pub context: String,

    /// Approximate CSS selector for locating the element.
    pub selector: String,

    /// How to fix the finding.
    pub recommendation: &'static str,
}
