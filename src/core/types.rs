//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`BookId`] - Store-issued book identifier
//! - [`MemberId`] - Store-issued member identifier
//! - [`BorrowLimit`] - Validated per-member loan ceiling
//! - [`LoanPeriod`] - Validated loan duration in days
//! - [`MembershipTier`] - Membership level controlling the default limit
//!
//! # Validation
//!
//! Value types enforce validity at construction time. A zero borrow limit or
//! a zero-day loan period cannot be represented.
//!
//! # Examples
//!
//! ```
//! use circulate::core::types::{BorrowLimit, LoanPeriod, MembershipTier};
//!
//! let limit = BorrowLimit::new(3).unwrap();
//! assert_eq!(limit.get(), 3);
//!
//! let period = LoanPeriod::new(14).unwrap();
//! assert_eq!(period.days(), 14);
//!
//! // Invalid constructions fail at creation time
//! assert!(BorrowLimit::new(0).is_err());
//! assert!(LoanPeriod::new(0).is_err());
//!
//! let tier: MembershipTier = "premium".parse().unwrap();
//! assert_eq!(tier, MembershipTier::Premium);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("borrow limit must be at least 1")]
    InvalidBorrowLimit,

    #[error("loan period must be at least 1 day")]
    InvalidLoanPeriod,

    #[error("unknown membership tier: {0}")]
    UnknownTier(String),
}

/// A book identifier.
///
/// Ids are issued monotonically by the book store on creation and are never
/// reused or reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u64);

impl BookId {
    /// Wrap a raw id. Only stores should mint fresh ids.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw numeric id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A member identifier.
///
/// Ids are issued monotonically by the member store on creation and are never
/// reused or reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(u64);

impl MemberId {
    /// Wrap a raw id. Only stores should mint fresh ids.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw numeric id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The maximum number of simultaneous active loans a member may hold.
///
/// Always at least 1.
///
/// # Example
///
/// ```
/// use circulate::core::types::BorrowLimit;
///
/// let limit = BorrowLimit::new(5).unwrap();
/// assert_eq!(limit.get(), 5);
/// assert!(BorrowLimit::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct BorrowLimit(u32);

impl BorrowLimit {
    /// Create a new validated borrow limit.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidBorrowLimit` for a limit of 0.
    pub fn new(limit: u32) -> Result<Self, TypeError> {
        if limit == 0 {
            return Err(TypeError::InvalidBorrowLimit);
        }
        Ok(Self(limit))
    }

    /// Get the limit as a plain count.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for BorrowLimit {
    type Error = TypeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BorrowLimit> for u32 {
    fn from(limit: BorrowLimit) -> Self {
        limit.0
    }
}

impl std::fmt::Display for BorrowLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The duration of a loan, in whole days.
///
/// Always at least 1 day.
///
/// # Example
///
/// ```
/// use circulate::core::types::LoanPeriod;
///
/// let period = LoanPeriod::new(14).unwrap();
/// assert_eq!(period.days(), 14);
/// assert!(LoanPeriod::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct LoanPeriod(u32);

impl LoanPeriod {
    /// Create a new validated loan period.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidLoanPeriod` for a period of 0 days.
    pub fn new(days: u32) -> Result<Self, TypeError> {
        if days == 0 {
            return Err(TypeError::InvalidLoanPeriod);
        }
        Ok(Self(days))
    }

    /// Get the period length in days.
    pub const fn days(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for LoanPeriod {
    type Error = TypeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LoanPeriod> for u32 {
    fn from(period: LoanPeriod) -> Self {
        period.0
    }
}

impl std::fmt::Display for LoanPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} days", self.0)
    }
}

/// Membership level.
///
/// The tier selects a default borrow limit (configurable, see
/// [`crate::core::config`]); an explicit per-member limit overrides it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipTier {
    #[default]
    Regular,
    Premium,
}

impl MembershipTier {
    /// Get the tier name as a string slice.
    pub const fn as_str(self) -> &'static str {
        match self {
            MembershipTier::Regular => "regular",
            MembershipTier::Premium => "premium",
        }
    }
}

impl std::str::FromStr for MembershipTier {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "regular" => Ok(MembershipTier::Regular),
            "premium" => Ok(MembershipTier::Premium),
            other => Err(TypeError::UnknownTier(other.to_string())),
        }
    }
}

impl std::fmt::Display for MembershipTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
