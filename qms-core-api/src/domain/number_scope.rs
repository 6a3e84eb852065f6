use crate::domain::entity_kind::EntityKind;
use crate::domain::finding_source::FindingSource;

/// Which sequence a number is drawn from, together with the context needed to
/// render it. Kind and context are fused into one closed enum so that an
/// impossible combination (an audit scoped to a parent, an action without
/// one) does not typecheck.
///
/// `SourcedFinding` covers findings raised outside an audit; findings raised
/// by an audit use `AuditFinding` and are numbered under that audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberScope<'a> {
    Audit { year: i32 },
    AuditFinding { audit_number: &'a str },
    SourcedFinding { source: FindingSource, year: i32 },
    CorrectiveAction { finding_number: &'a str },
    EmployeeDeclaration { year: i32 },
    CustomerSurvey { year: i32 },
}

impl NumberScope<'_> {
    pub fn kind(&self) -> EntityKind {
        match self {
            NumberScope::Audit { .. } => EntityKind::Audit,
            NumberScope::AuditFinding { .. } | NumberScope::SourcedFinding { .. } => {
                EntityKind::Finding
            }
            NumberScope::CorrectiveAction { .. } => EntityKind::CorrectiveAction,
            NumberScope::EmployeeDeclaration { .. } => EntityKind::EmployeeDeclaration,
            NumberScope::CustomerSurvey { .. } => EntityKind::CustomerSurvey,
        }
    }
}
