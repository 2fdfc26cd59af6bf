//! # Network Configuration
//!
//! Tunables for a [`Network`](crate::network::Network). Every field has a
//! default, so a partial JSON document is enough:
//!
//! ```text
//! { "recommendation_threshold": 3 }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default number of mutual friends a candidate needs to be recommended
pub const DEFAULT_RECOMMENDATION_THRESHOLD: usize = 2;

/// Configuration for a social network instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Minimum number of mutual friends before a friend-of-friend is
    /// recommended
    pub recommendation_threshold: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            recommendation_threshold: DEFAULT_RECOMMENDATION_THRESHOLD,
        }
    }
}

impl NetworkConfig {
    /// Check the configuration for values the network cannot work with
    pub fn validate(&self) -> Result<()> {
        // Candidates always have at least one mutual friend.
        if self.recommendation_threshold == 0 {
            return Err(Error::InvalidConfig(
                "recommendation_threshold must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Decode and validate a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Encode to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
