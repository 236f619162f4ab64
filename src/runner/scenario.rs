//! Scenario model
//!
//! A scenario is an ordered list of steps against one logical page or flow.
//! Steps run strictly in declaration order and have no independent lifecycle.

use serde::{Deserialize, Serialize};

use crate::core::{Action, Condition, Expectation, Locator};

/// One atomic browser action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// Load a route (joined onto the configured base URL)
    Navigate { path: String },
    /// Required wait; the only hard-failure point of a run
    WaitFor {
        condition: Condition,
        /// Per-step override of the configured default timeout
        timeout_ms: Option<u64>,
    },
    /// Locate an element and act on it
    Interact {
        locator: Locator,
        action: Action,
        /// When set, act only if the target is present-and-visible,
        /// otherwise skip silently
        guarded: bool,
        /// Condition waited for after the action ran (skipped with it)
        confirm: Option<Condition>,
    },
    /// Full-page screenshot into the output directory
    Capture { file: String },
    /// Soft presence/absence check; reported, never fatal
    Check {
        locator: Locator,
        expect: Expectation,
    },
}

/// One named sequence of verification steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Human-readable name shown in progress output
    pub name: String,
    /// Stable identifier used for --only filtering
    pub slug: String,
    /// Steps in execution order
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Start a new scenario
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            steps: Vec::new(),
        }
    }

    /// Append a navigation step
    pub fn navigate(mut self, path: impl Into<String>) -> Self {
        self.steps.push(Step::Navigate { path: path.into() });
        self
    }

    /// Append a required wait for visible text
    pub fn wait_text(mut self, text: impl Into<String>) -> Self {
        self.steps.push(Step::WaitFor {
            condition: Condition::text(text),
            timeout_ms: None,
        });
        self
    }

    /// Append a required wait for a selector
    pub fn wait_selector(mut self, selector: impl Into<String>) -> Self {
        self.steps.push(Step::WaitFor {
            condition: Condition::selector(selector),
            timeout_ms: None,
        });
        self
    }

    /// Append a required wait with an explicit timeout
    pub fn wait_with_timeout(mut self, condition: Condition, timeout_ms: u64) -> Self {
        self.steps.push(Step::WaitFor {
            condition,
            timeout_ms: Some(timeout_ms),
        });
        self
    }

    /// Append an unguarded click
    pub fn click(mut self, locator: Locator) -> Self {
        self.steps.push(Step::Interact {
            locator,
            action: Action::Click,
            guarded: false,
            confirm: None,
        });
        self
    }

    /// Append a guarded click, confirmed by a follow-up wait when it acts
    pub fn click_if_visible(mut self, locator: Locator, confirm: Option<Condition>) -> Self {
        self.steps.push(Step::Interact {
            locator,
            action: Action::Click,
            guarded: true,
            confirm,
        });
        self
    }

    /// Append an unguarded select-option interaction
    pub fn select(mut self, locator: Locator, value: impl Into<String>) -> Self {
        self.steps.push(Step::Interact {
            locator,
            action: Action::SelectOption(value.into()),
            guarded: false,
            confirm: None,
        });
        self
    }

    /// Append a screenshot step
    pub fn capture(mut self, file: impl Into<String>) -> Self {
        self.steps.push(Step::Capture { file: file.into() });
        self
    }

    /// Append a soft check that the target is present and visible
    pub fn check_present(mut self, locator: Locator) -> Self {
        self.steps.push(Step::Check {
            locator,
            expect: Expectation::Present,
        });
        self
    }

    /// Append a soft check that the target is absent or not visible
    pub fn check_absent(mut self, locator: Locator) -> Self {
        self.steps.push(Step::Check {
            locator,
            expect: Expectation::Absent,
        });
        self
    }
}
