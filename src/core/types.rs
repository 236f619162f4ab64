//! Shared types used across loomcheck modules
//!
//! The step vocabulary: wait predicates, interaction targets and actions,
//! and the tri-state visibility result.

use serde::{Deserialize, Serialize};

/// A predicate a wait step polls the rendered page for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    /// Visible text anywhere on the page
    Text(String),
    /// A CSS-style selector matching at least one element
    Selector(String),
}

impl Condition {
    /// Create a text condition
    pub fn text(t: impl Into<String>) -> Self {
        Self::Text(t.into())
    }

    /// Create a selector condition
    pub fn selector(s: impl Into<String>) -> Self {
        Self::Selector(s.into())
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::Text(t) => write!(f, "text \"{}\"", t),
            Condition::Selector(s) => write!(f, "selector \"{}\"", s),
        }
    }
}

/// Target of an interaction or visibility query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locator {
    /// CSS-style selector (Playwright extensions like :has-text() pass through)
    Css(String),
    /// Exact text content match
    Text(String),
}

impl Locator {
    /// Create a CSS locator
    pub fn css(s: impl Into<String>) -> Self {
        Self::Css(s.into())
    }

    /// Create a text locator
    pub fn text(t: impl Into<String>) -> Self {
        Self::Text(t.into())
    }

    /// Selector string understood by the browser CLI
    pub fn as_selector(&self) -> String {
        match self {
            Locator::Css(s) => s.clone(),
            Locator::Text(t) => format!("text={}", t),
        }
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locator::Css(s) => write!(f, "{}", s),
            Locator::Text(t) => write!(f, "text={}", t),
        }
    }
}

/// What an interaction step does once its target is located
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Click the element
    Click,
    /// Choose an option value in a select element
    SelectOption(String),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Click => write!(f, "click"),
            Action::SelectOption(v) => write!(f, "select '{}'", v),
        }
    }
}

/// Polarity of a soft layout check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expectation {
    /// The target should be present and visible
    Present,
    /// The target should be absent or not visible
    Absent,
}

/// Result of the explicit capability query behind guarded interactions
///
/// Replaces an inline is_visible() branch with a value the step policy
/// can match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Present in the DOM and rendered
    Visible,
    /// Present in the DOM but not rendered
    Hidden,
    /// No matching element in the DOM
    Absent,
}

impl Visibility {
    /// Whether a guarded interaction should act
    pub fn is_actionable(&self) -> bool {
        matches!(self, Visibility::Visible)
    }

    /// Whether an Expectation is satisfied by this state
    pub fn satisfies(&self, expect: Expectation) -> bool {
        match expect {
            Expectation::Present => matches!(self, Visibility::Visible),
            Expectation::Absent => !matches!(self, Visibility::Visible),
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Visible => write!(f, "visible"),
            Visibility::Hidden => write!(f, "hidden"),
            Visibility::Absent => write!(f, "absent"),
        }
    }
}
