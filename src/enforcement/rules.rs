//! Switch rules evaluated with Validation.

use crate::enforcement::context::SwitchContext;
use crate::enforcement::violations::SwitchViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for custom switch checks
pub type SwitchCheck =
    Box<dyn Fn(&SwitchContext<'_>) -> Validation<(), NonEmptyVec<SwitchViolation>> + Send + Sync>;

/// Preconditions for a switch.
/// Uses Validation to report ALL violations, not only the first.
pub struct SwitchRules {
    pub(crate) allow_past_dates: bool,
    pub(crate) required_checks: Vec<SwitchCheck>,
}

impl SwitchRules {
    /// Enforce the built-in and custom checks, accumulating every violation.
    pub fn enforce(&self, context: &SwitchContext<'_>) -> Validation<(), NonEmptyVec<SwitchViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<SwitchViolation>>> = Vec::new();

        // An unresolved current type leaves nothing to undo back to
        let identity = match context.shift.shift_type_id() {
            None => Validation::fail(SwitchViolation::UnresolvedShiftType),
            Some(current) if current == context.new_type.id => {
                Validation::fail(SwitchViolation::SameShiftType)
            }
            Some(_) => Validation::success(()),
        };
        checks.push(identity);

        if !self.allow_past_dates {
            let check = if context.shift.date < context.today {
                Validation::fail(SwitchViolation::PastDate {
                    date: context.shift.date,
                    today: context.today,
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(context));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Same as [`enforce`](Self::enforce), flattened into a `Result`.
    pub fn check(&self, context: &SwitchContext<'_>) -> Result<(), Vec<SwitchViolation>> {
        match self.enforce(context) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
        }
    }
}

impl Default for SwitchRules {
    fn default() -> Self {
        crate::enforcement::builder::SwitchRulesBuilder::new().build()
    }
}
