//! Static reconstruction of an entity's ancestry from its identifier alone.
//!
//! Parent identifiers are embedded textually in child identifiers, so the
//! chain from a corrective action back to its finding and audit is
//! recoverable without a store lookup.

use crate::domain::entity_kind::EntityKind;
use crate::domain::finding_source::FindingSource;
use crate::error::NotRecognized;
use crate::service::number_formatter;

/// Resolves the full ancestry of an identifier, root first, ending with the
/// identifier itself.
///
/// A corrective action resolves through its finding (and, for audit-sourced
/// findings, through the audit); findings raised outside an audit and all
/// top-level kinds have no ancestors. Malformed input yields
/// [`NotRecognized`], never a partial chain.
pub fn resolve_chain(identifier: &str) -> Result<Vec<String>, NotRecognized> {
    let parsed = number_formatter::parse(identifier)?;

    match parsed.kind {
        EntityKind::CorrectiveAction => {
            let parent = parsed.parent_number.ok_or(NotRecognized)?;
            let mut chain = resolve_chain(&parent)?;
            chain.push(identifier.to_string());
            Ok(chain)
        }
        EntityKind::Finding if parsed.source == Some(FindingSource::Audit) => {
            let parent = parsed.parent_number.ok_or(NotRecognized)?;
            Ok(vec![parent, identifier.to_string()])
        }
        _ => Ok(vec![identifier.to_string()]),
    }
}

/// Extends a parent's already-known chain with a freshly issued identifier.
///
/// Entity-creation flows persist the result as the denormalized
/// `traceability_chain` of the new entity; [`resolve_chain`] remains the
/// authoritative fallback when no parent chain is at hand.
pub fn traceability_chain_for(parent_chain: &[String], identifier: &str) -> Vec<String> {
    let mut chain = Vec::with_capacity(parent_chain.len() + 1);
    chain.extend_from_slice(parent_chain);
    chain.push(identifier.to_string());
    chain
}
