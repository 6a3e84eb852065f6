use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::NumberingError;

/// Origin category of a finding. The origin decides which identifier prefix
/// and which scope key the finding's number is drawn from: findings raised by
/// an audit are numbered under that audit, all other origins are numbered per
/// prefix and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingSource {
    Audit,
    Employee,
    Customer,
    Inspection,
    Supplier,
}

impl FindingSource {
    /// Prefix embedded in rendered identifiers for this origin.
    pub fn prefix(&self) -> &'static str {
        match self {
            FindingSource::Audit => "AUDIT",
            FindingSource::Employee => "EMP",
            FindingSource::Customer => "CLI",
            FindingSource::Inspection => "INS",
            FindingSource::Supplier => "SUP",
        }
    }

    /// Inverse of [`prefix`](Self::prefix), used when decomposing an
    /// identifier back into its fields.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "AUDIT" => Some(FindingSource::Audit),
            "EMP" => Some(FindingSource::Employee),
            "CLI" => Some(FindingSource::Customer),
            "INS" => Some(FindingSource::Inspection),
            "SUP" => Some(FindingSource::Supplier),
            _ => None,
        }
    }
}

impl std::fmt::Display for FindingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindingSource::Audit => write!(f, "audit"),
            FindingSource::Employee => write!(f, "employee"),
            FindingSource::Customer => write!(f, "customer"),
            FindingSource::Inspection => write!(f, "inspection"),
            FindingSource::Supplier => write!(f, "supplier"),
        }
    }
}

impl FromStr for FindingSource {
    type Err = NumberingError;

    /// Boundary for externally supplied origin strings; anything outside the
    /// five recognized origins is a caller error, not retryable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "audit" => Ok(FindingSource::Audit),
            "employee" => Ok(FindingSource::Employee),
            "customer" => Ok(FindingSource::Customer),
            "inspection" => Ok(FindingSource::Inspection),
            "supplier" => Ok(FindingSource::Supplier),
            _ => Err(NumberingError::InvalidSource(s.to_string())),
        }
    }
}
