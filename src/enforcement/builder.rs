//! Builder API for creating switch rules.

use crate::enforcement::context::SwitchContext;
use crate::enforcement::rules::{SwitchCheck, SwitchRules};
use crate::enforcement::violations::SwitchViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating switch rules
pub struct SwitchRulesBuilder {
    allow_past_dates: bool,
    required_checks: Vec<SwitchCheck>,
}

impl SwitchRulesBuilder {
    pub fn new() -> Self {
        Self {
            allow_past_dates: false,
            required_checks: Vec::new(),
        }
    }

    /// Permit switching shifts dated before today
    pub fn allow_past_dates(mut self, allow: bool) -> Self {
        self.allow_past_dates = allow;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&SwitchContext<'_>) -> Validation<(), NonEmptyVec<SwitchViolation>>
            + Send
            + Sync
            + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&SwitchContext<'_>) -> bool + Send + Sync + 'static,
    {
        let check = move |ctx: &SwitchContext<'_>| {
            if predicate(ctx) {
                Validation::success(())
            } else {
                Validation::fail(SwitchViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    pub fn build(self) -> SwitchRules {
        SwitchRules {
            allow_past_dates: self.allow_past_dates,
            required_checks: self.required_checks,
        }
    }
}

impl Default for SwitchRulesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
