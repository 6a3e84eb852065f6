use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::entity_kind::EntityKind;
use crate::domain::finding_source::FindingSource;
use crate::error::NotRecognized;
use crate::service::number_formatter;

/// The decomposed form of a rendered identifier.
///
/// Ancestry is self-describing: the parent identifier of a finding or a
/// corrective action is a string prefix of the child identifier, so the full
/// chain can be rebuilt from `parent_number` without a store lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredIdentifier {
    pub kind: EntityKind,
    /// Year embedded in the identifier, when the format carries one. For a
    /// corrective action this is the year of the finding it belongs to.
    pub year: Option<i32>,
    pub sequence: i64,
    /// Embedded parent identifier: the audit number for an audit-sourced
    /// finding, the finding number for a corrective action.
    pub parent_number: Option<String>,
    /// Origin of a finding; `None` for every other kind.
    pub source: Option<FindingSource>,
}

impl FromStr for StructuredIdentifier {
    type Err = NotRecognized;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        number_formatter::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_delegates_to_the_formatter() {
        let parsed: StructuredIdentifier = "AUDIT-2024-001".parse().unwrap();
        assert_eq!(parsed.kind, EntityKind::Audit);
        assert!("garbage".parse::<StructuredIdentifier>().is_err());
    }

    #[test]
    fn serializes_with_stable_field_names() {
        let parsed: StructuredIdentifier = "EMP-2024-HALL-003".parse().unwrap();
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["kind"], "Finding");
        assert_eq!(json["source"], "employee");
        assert_eq!(json["sequence"], 3);

        let back: StructuredIdentifier = serde_json::from_value(json).unwrap();
        assert_eq!(back, parsed);
    }
}
