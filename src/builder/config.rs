//! Engine configuration.

use crate::builder::error::BuildError;
use crate::checkpoint::CheckpointFormat;
use crate::model::UserIdentity;
use serde::{Deserialize, Serialize};

/// Default bound on each of the undo and redo stacks.
pub const DEFAULT_CAPACITY: usize = 50;

/// Tunables for a [`ShiftEngine`](crate::engine::ShiftEngine).
///
/// Every field has a default, so partial JSON documents are accepted.
///
/// ```rust
/// use shiftledger::builder::EngineConfig;
///
/// let config = EngineConfig::from_json(r#"{ "capacity": 20 }"#).unwrap();
/// assert_eq!(config.capacity, 20);
/// assert_eq!(config.identity.user_id, "local");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub capacity: usize,
    pub checkpoint_format: CheckpointFormat,
    /// Recorded as the author of every audit entry
    pub identity: UserIdentity,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            checkpoint_format: CheckpointFormat::default(),
            identity: UserIdentity::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| BuildError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        if self.capacity == 0 {
            return Err(BuildError::ZeroCapacity);
        }
        Ok(())
    }
}
