use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The kinds of compliance entities that carry a generated number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Audit,
    Finding,
    CorrectiveAction,
    EmployeeDeclaration,
    CustomerSurvey,
}

impl EntityKind {
    /// Prefix used when composing the scope key for a counter of this kind.
    pub fn scope_prefix(&self) -> &'static str {
        match self {
            EntityKind::Audit => "audit",
            EntityKind::Finding => "finding",
            EntityKind::CorrectiveAction => "action",
            EntityKind::EmployeeDeclaration => "employee",
            EntityKind::CustomerSurvey => "customer",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Audit => write!(f, "Audit"),
            EntityKind::Finding => write!(f, "Finding"),
            EntityKind::CorrectiveAction => write!(f, "CorrectiveAction"),
            EntityKind::EmployeeDeclaration => write!(f, "EmployeeDeclaration"),
            EntityKind::CustomerSurvey => write!(f, "CustomerSurvey"),
        }
    }
}

impl FromStr for EntityKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Audit" => Ok(EntityKind::Audit),
            "Finding" => Ok(EntityKind::Finding),
            "CorrectiveAction" => Ok(EntityKind::CorrectiveAction),
            "EmployeeDeclaration" => Ok(EntityKind::EmployeeDeclaration),
            "CustomerSurvey" => Ok(EntityKind::CustomerSurvey),
            _ => Err(()),
        }
    }
}
