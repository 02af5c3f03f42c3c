//! core::config::schema
//!
//! Configuration file schema.
//!
//! # Strictness
//!
//! Unknown fields are rejected at parse time so a typo in a config file
//! surfaces as an error instead of silently falling back to a default.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Default loan period in days.
pub const DEFAULT_LOAN_PERIOD_DAYS: u32 = 14;

/// Default borrow limit for regular members.
pub const DEFAULT_REGULAR_LIMIT: u32 = 3;

/// Default borrow limit for premium members.
pub const DEFAULT_PREMIUM_LIMIT: u32 = 5;

/// User-level configuration.
///
/// All fields are optional; absent fields fall back to the defaults above.
///
/// ```toml
/// loan_period_days = 21
///
/// [limits]
/// regular = 3
/// premium = 6
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    /// Loan duration in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_period_days: Option<u32>,

    /// Per-tier default borrow limits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<LimitsConfig>,
}

/// Per-tier default borrow limits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    /// Default limit for regular members.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular: Option<u32>,

    /// Default limit for premium members.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium: Option<u32>,
}

impl GlobalConfig {
    /// Validate configured values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a zero loan period or a zero
    /// borrow limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.loan_period_days == Some(0) {
            return Err(ConfigError::InvalidValue(
                "loan_period_days must be at least 1".to_string(),
            ));
        }
        if let Some(limits) = &self.limits {
            if limits.regular == Some(0) {
                return Err(ConfigError::InvalidValue(
                    "limits.regular must be at least 1".to_string(),
                ));
            }
            if limits.premium == Some(0) {
                return Err(ConfigError::InvalidValue(
                    "limits.premium must be at least 1".to_string(),
                ));
            }
        }
        Ok(())
    }
}
