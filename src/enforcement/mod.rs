//! Validation-based preconditions for shift switches.
//!
//! Switch requests are checked with Stillwater's `Validation` type so a
//! caller learns about every problem with a request at once (same type
//! *and* a past date, say) instead of fixing them one round trip at a time.
//!
//! # Example
//!
//! ```rust
//! use shiftledger::enforcement::{SwitchRules, SwitchRulesBuilder};
//!
//! let rules: SwitchRules = SwitchRulesBuilder::new()
//!     .require_pred(|ctx| ctx.reason.is_some(), "A reason is required".to_string())
//!     .build();
//! ```

pub mod builder;
pub mod context;
pub mod rules;
pub mod violations;

pub use builder::SwitchRulesBuilder;
pub use context::SwitchContext;
pub use rules::{SwitchCheck, SwitchRules};
pub use violations::SwitchViolation;
