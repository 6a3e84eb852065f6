use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// # Documentation
/// - One row per numbering sequence, addressed by its scope key.
/// - The scope key is `{entityKindPrefix}_{organizationId}_{scopeDiscriminator}`;
///   the tenant id is folded into the key, so two tenants never share a row.
/// - Created lazily by the first issuance (atomic upsert at 1) and mutated
///   only by atomic increments afterwards; rows are never deleted and
///   sequence values are never reused, even when the business entity a number
///   was issued for is later removed.
/// - `organization_id` duplicates the tenant already embedded in the key so
///   counters can be listed and filtered per tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterModel {
    pub counter_key: HeaplessString<120>,
    pub organization_id: Uuid,
    pub sequence: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_the_scope_key_as_a_plain_string() {
        let model = CounterModel {
            counter_key: HeaplessString::try_from("audit_00000000-0000-0000-0000-000000000000_2024")
                .unwrap(),
            organization_id: Uuid::nil(),
            sequence: 7,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(
            json["counter_key"],
            "audit_00000000-0000-0000-0000-000000000000_2024"
        );
        assert_eq!(json["sequence"], 7);
    }
}
