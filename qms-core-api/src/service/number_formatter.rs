//! Pure rendering and parsing of compliance identifiers.
//!
//! Five formats exist, one per numbered entity kind:
//!
//! - Audit: `AUDIT-{year}-{seq}`
//! - Finding raised by an audit: `{auditNumber}-HALL-{seq}`
//! - Finding raised elsewhere: `{EMP|CLI|INS|SUP}-{year}-HALL-{seq}`
//! - Corrective action: `{findingNumber}-ACC-{seq}`
//! - Employee declaration: `EMP-{year}-{seq}`
//! - Customer survey: `CLI-{year}-{seq}`
//!
//! Sequences are zero-padded to three digits; the padding is a minimum
//! width, values of 1000 and above keep all their digits. Every function in
//! this module is side-effect free and never consults the store.

use regex::Regex;
use std::sync::LazyLock;
use uuid::Uuid;

use crate::domain::entity_kind::EntityKind;
use crate::domain::finding_source::FindingSource;
use crate::domain::number_scope::NumberScope;
use crate::domain::structured_identifier::StructuredIdentifier;
use crate::error::NotRecognized;

static AUDIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^AUDIT-(\d{4})-(\d{3,})$").unwrap());

static AUDIT_FINDING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(AUDIT-(\d{4})-\d{3,})-HALL-(\d{3,})$").unwrap());

// Accepts both the prefix-and-year shape (`EMP-2024-HALL-001`) and the shape
// carrying the full source entity number (`EMP-2024-001-HALL-001`); both occur
// in stored data. Rendering always produces the former.
static SOURCED_FINDING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(EMP|CLI|INS|SUP)-(\d{4})(?:-\d{3,})?-HALL-(\d{3,})$").unwrap());

static ACTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.+)-ACC-(\d{3,})$").unwrap());

static EMPLOYEE_DECLARATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^EMP-(\d{4})-(\d{3,})$").unwrap());

static CUSTOMER_SURVEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^CLI-(\d{4})-(\d{3,})$").unwrap());

/// Composes the key addressing the counter a number is drawn from.
///
/// The organization id is folded into every key, so counters of two tenants
/// never collide even when year and parent context are identical.
pub fn scope_key_for(organization_id: Uuid, scope: &NumberScope<'_>) -> String {
    let prefix = scope.kind().scope_prefix();
    match scope {
        NumberScope::Audit { year }
        | NumberScope::EmployeeDeclaration { year }
        | NumberScope::CustomerSurvey { year } => {
            format!("{prefix}_{organization_id}_{year}")
        }
        NumberScope::AuditFinding { audit_number } => {
            format!("{prefix}_{organization_id}_{audit_number}")
        }
        NumberScope::SourcedFinding { source, year } => {
            format!("{prefix}_{organization_id}_{}-{year}", source.prefix())
        }
        NumberScope::CorrectiveAction { finding_number } => {
            format!("{prefix}_{organization_id}_{finding_number}")
        }
    }
}

/// Renders the final identifier for a scope and an issued sequence value.
pub fn render(scope: &NumberScope<'_>, sequence: i64) -> String {
    match scope {
        NumberScope::Audit { year } => format!("AUDIT-{year:04}-{sequence:03}"),
        NumberScope::AuditFinding { audit_number } => {
            format!("{audit_number}-HALL-{sequence:03}")
        }
        NumberScope::SourcedFinding { source, year } => {
            format!("{}-{year:04}-HALL-{sequence:03}", source.prefix())
        }
        NumberScope::CorrectiveAction { finding_number } => {
            format!("{finding_number}-ACC-{sequence:03}")
        }
        NumberScope::EmployeeDeclaration { year } => format!("EMP-{year:04}-{sequence:03}"),
        NumberScope::CustomerSurvey { year } => format!("CLI-{year:04}-{sequence:03}"),
    }
}

/// Decomposes an identifier into its structured fields.
///
/// Exactly one format matches any well-formed identifier; anything else is
/// [`NotRecognized`]. A corrective action is only recognized when its
/// embedded parent is itself a well-formed finding number.
pub fn parse(identifier: &str) -> Result<StructuredIdentifier, NotRecognized> {
    if let Some(caps) = ACTION_RE.captures(identifier) {
        let finding_number = caps.get(1).ok_or(NotRecognized)?.as_str();
        let sequence = parse_sequence(caps.get(2).ok_or(NotRecognized)?.as_str())?;
        let finding = parse_finding(finding_number).ok_or(NotRecognized)?;
        return Ok(StructuredIdentifier {
            kind: EntityKind::CorrectiveAction,
            year: finding.year,
            sequence,
            parent_number: Some(finding_number.to_string()),
            source: None,
        });
    }

    if let Some(finding) = parse_finding(identifier) {
        return Ok(finding);
    }

    if let Some(caps) = AUDIT_RE.captures(identifier) {
        return Ok(StructuredIdentifier {
            kind: EntityKind::Audit,
            year: Some(parse_year(caps.get(1).ok_or(NotRecognized)?.as_str())?),
            sequence: parse_sequence(caps.get(2).ok_or(NotRecognized)?.as_str())?,
            parent_number: None,
            source: None,
        });
    }

    if let Some(caps) = EMPLOYEE_DECLARATION_RE.captures(identifier) {
        return Ok(StructuredIdentifier {
            kind: EntityKind::EmployeeDeclaration,
            year: Some(parse_year(caps.get(1).ok_or(NotRecognized)?.as_str())?),
            sequence: parse_sequence(caps.get(2).ok_or(NotRecognized)?.as_str())?,
            parent_number: None,
            source: None,
        });
    }

    if let Some(caps) = CUSTOMER_SURVEY_RE.captures(identifier) {
        return Ok(StructuredIdentifier {
            kind: EntityKind::CustomerSurvey,
            year: Some(parse_year(caps.get(1).ok_or(NotRecognized)?.as_str())?),
            sequence: parse_sequence(caps.get(2).ok_or(NotRecognized)?.as_str())?,
            parent_number: None,
            source: None,
        });
    }

    Err(NotRecognized)
}

fn parse_finding(identifier: &str) -> Option<StructuredIdentifier> {
    if let Some(caps) = AUDIT_FINDING_RE.captures(identifier) {
        return Some(StructuredIdentifier {
            kind: EntityKind::Finding,
            year: parse_year(caps.get(2)?.as_str()).ok(),
            sequence: parse_sequence(caps.get(3)?.as_str()).ok()?,
            parent_number: Some(caps.get(1)?.as_str().to_string()),
            source: Some(FindingSource::Audit),
        });
    }

    if let Some(caps) = SOURCED_FINDING_RE.captures(identifier) {
        let source = FindingSource::from_prefix(caps.get(1)?.as_str())?;
        return Some(StructuredIdentifier {
            kind: EntityKind::Finding,
            year: parse_year(caps.get(2)?.as_str()).ok(),
            sequence: parse_sequence(caps.get(3)?.as_str()).ok()?,
            parent_number: None,
            source: Some(source),
        });
    }

    None
}

fn parse_year(digits: &str) -> Result<i32, NotRecognized> {
    digits.parse::<i32>().map_err(|_| NotRecognized)
}

fn parse_sequence(digits: &str) -> Result<i64, NotRecognized> {
    digits.parse::<i64>().map_err(|_| NotRecognized)
}
