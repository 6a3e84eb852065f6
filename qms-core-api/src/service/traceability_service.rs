use async_trait::async_trait;
use chrono::{Datelike, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::finding_source::FindingSource;
use crate::domain::number_scope::NumberScope;
use crate::error::{NumberingError, NumberingResult};
use crate::service::counter_store::CounterStore;
use crate::service::number_formatter;

/// Current calendar year (UTC), the usual minting context for top-level
/// entities.
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Issues the next identifier for each numbered entity kind.
///
/// One instance serves one tenant. Every operation draws from the counter
/// addressed by the scope key of the requested kind and context, then renders
/// the final identifier. The caller persists the returned string on the new
/// business entity together with its traceability chain; a number issued here
/// but never persisted by the caller is permanently burned, so a retry after
/// a transient failure must re-request a fresh number rather than reuse a
/// previously returned one.
#[async_trait]
pub trait TraceabilityService: Send + Sync {
    async fn next_audit_number(&self, year: i32) -> NumberingResult<String>;

    /// Next finding number for the given origin. Audit-sourced findings are
    /// numbered under their audit and require `source_audit_number`; all
    /// other origins are numbered per prefix and year.
    async fn next_finding_number(
        &self,
        source: FindingSource,
        year: i32,
        source_audit_number: Option<&str>,
    ) -> NumberingResult<String>;

    async fn next_action_number(&self, parent_finding_number: &str) -> NumberingResult<String>;

    async fn next_employee_declaration_number(&self, year: i32) -> NumberingResult<String>;

    async fn next_customer_survey_number(&self, year: i32) -> NumberingResult<String>;
}

pub struct TraceabilityServiceImpl<S: CounterStore> {
    counter_store: Arc<S>,
    organization_id: Uuid,
}

impl<S: CounterStore> TraceabilityServiceImpl<S> {
    pub fn new(counter_store: Arc<S>, organization_id: Uuid) -> Self {
        Self {
            counter_store,
            organization_id,
        }
    }

    pub fn organization_id(&self) -> Uuid {
        self.organization_id
    }

    async fn mint(&self, scope: NumberScope<'_>) -> NumberingResult<String> {
        let counter_key = number_formatter::scope_key_for(self.organization_id, &scope);
        let sequence = self
            .counter_store
            .increment_and_get(&counter_key, self.organization_id)
            .await?;
        Ok(number_formatter::render(&scope, sequence))
    }
}

#[async_trait]
impl<S: CounterStore> TraceabilityService for TraceabilityServiceImpl<S> {
    async fn next_audit_number(&self, year: i32) -> NumberingResult<String> {
        self.mint(NumberScope::Audit { year }).await
    }

    async fn next_finding_number(
        &self,
        source: FindingSource,
        year: i32,
        source_audit_number: Option<&str>,
    ) -> NumberingResult<String> {
        match source {
            FindingSource::Audit => {
                let audit_number = source_audit_number
                    .filter(|number| !number.is_empty())
                    .ok_or_else(|| {
                        NumberingError::MissingParent(
                            "audit number is required for an audit-sourced finding".to_string(),
                        )
                    })?;
                self.mint(NumberScope::AuditFinding { audit_number }).await
            }
            _ => self.mint(NumberScope::SourcedFinding { source, year }).await,
        }
    }

    async fn next_action_number(&self, parent_finding_number: &str) -> NumberingResult<String> {
        if parent_finding_number.is_empty() {
            return Err(NumberingError::MissingParent(
                "finding number is required for a corrective action".to_string(),
            ));
        }
        self.mint(NumberScope::CorrectiveAction {
            finding_number: parent_finding_number,
        })
        .await
    }

    async fn next_employee_declaration_number(&self, year: i32) -> NumberingResult<String> {
        self.mint(NumberScope::EmployeeDeclaration { year }).await
    }

    async fn next_customer_survey_number(&self, year: i32) -> NumberingResult<String> {
        self.mint(NumberScope::CustomerSurvey { year }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    /// In-memory stand-in for the persistent counter store. The whole map is
    /// guarded by one async mutex, so each increment is indivisible.
    #[derive(Default)]
    struct InMemoryCounterStore {
        counters: Mutex<HashMap<String, i64>>,
    }

    #[async_trait]
    impl CounterStore for InMemoryCounterStore {
        async fn increment_and_get(
            &self,
            counter_key: &str,
            _organization_id: Uuid,
        ) -> NumberingResult<i64> {
            if counter_key.is_empty() {
                return Err(NumberingError::InvalidKey(
                    "counter key must not be empty".to_string(),
                ));
            }
            let mut counters = self.counters.lock().await;
            let sequence = counters.entry(counter_key.to_string()).or_insert(0);
            *sequence += 1;
            Ok(*sequence)
        }
    }

    struct UnavailableCounterStore;

    #[async_trait]
    impl CounterStore for UnavailableCounterStore {
        async fn increment_and_get(
            &self,
            _counter_key: &str,
            _organization_id: Uuid,
        ) -> NumberingResult<i64> {
            Err(NumberingError::StoreUnavailable(
                "connection refused".to_string(),
            ))
        }
    }

    fn service_for(
        store: Arc<InMemoryCounterStore>,
        organization_id: Uuid,
    ) -> TraceabilityServiceImpl<InMemoryCounterStore> {
        TraceabilityServiceImpl::new(store, organization_id)
    }

    #[tokio::test]
    async fn audit_numbers_increment_within_a_year() {
        let service = service_for(Arc::default(), Uuid::new_v4());

        assert_eq!(service.next_audit_number(2024).await.unwrap(), "AUDIT-2024-001");
        assert_eq!(service.next_audit_number(2024).await.unwrap(), "AUDIT-2024-002");
        // A new year starts a fresh sequence.
        assert_eq!(service.next_audit_number(2025).await.unwrap(), "AUDIT-2025-001");
    }

    #[tokio::test]
    async fn findings_are_numbered_under_their_audit() {
        let service = service_for(Arc::default(), Uuid::new_v4());

        let audit = service.next_audit_number(2024).await.unwrap();
        let first = service
            .next_finding_number(FindingSource::Audit, 2024, Some(&audit))
            .await
            .unwrap();
        let second = service
            .next_finding_number(FindingSource::Audit, 2024, Some(&audit))
            .await
            .unwrap();

        assert_eq!(first, "AUDIT-2024-001-HALL-001");
        assert_eq!(second, "AUDIT-2024-001-HALL-002");
    }

    #[tokio::test]
    async fn non_audit_findings_are_numbered_per_source_and_year() {
        let service = service_for(Arc::default(), Uuid::new_v4());

        let employee = service
            .next_finding_number(FindingSource::Employee, 2024, None)
            .await
            .unwrap();
        let supplier = service
            .next_finding_number(FindingSource::Supplier, 2024, None)
            .await
            .unwrap();

        assert_eq!(employee, "EMP-2024-HALL-001");
        assert_eq!(supplier, "SUP-2024-HALL-001");
    }

    #[tokio::test]
    async fn audit_sourced_finding_requires_the_audit_number() {
        let service = service_for(Arc::default(), Uuid::new_v4());

        for missing in [None, Some("")] {
            let err = service
                .next_finding_number(FindingSource::Audit, 2024, missing)
                .await
                .unwrap_err();
            assert!(matches!(err, NumberingError::MissingParent(_)));
        }
    }

    #[tokio::test]
    async fn actions_are_numbered_under_their_finding() {
        let service = service_for(Arc::default(), Uuid::new_v4());

        let first = service
            .next_action_number("AUDIT-2024-001-HALL-001")
            .await
            .unwrap();
        let second = service
            .next_action_number("AUDIT-2024-001-HALL-001")
            .await
            .unwrap();

        assert_eq!(first, "AUDIT-2024-001-HALL-001-ACC-001");
        assert_eq!(second, "AUDIT-2024-001-HALL-001-ACC-002");
    }

    #[tokio::test]
    async fn action_without_parent_is_rejected() {
        let service = service_for(Arc::default(), Uuid::new_v4());

        let err = service.next_action_number("").await.unwrap_err();
        assert!(matches!(err, NumberingError::MissingParent(_)));
    }

    #[tokio::test]
    async fn declaration_and_survey_streams_are_independent() {
        let service = service_for(Arc::default(), Uuid::new_v4());

        assert_eq!(
            service.next_employee_declaration_number(2024).await.unwrap(),
            "EMP-2024-001"
        );
        assert_eq!(
            service.next_customer_survey_number(2024).await.unwrap(),
            "CLI-2024-001"
        );
        assert_eq!(
            service.next_employee_declaration_number(2024).await.unwrap(),
            "EMP-2024-002"
        );
    }

    #[tokio::test]
    async fn organizations_draw_from_independent_counters() {
        let store = Arc::new(InMemoryCounterStore::default());
        let service_a = service_for(store.clone(), Uuid::new_v4());
        let service_b = service_for(store.clone(), Uuid::new_v4());

        service_a.next_audit_number(2024).await.unwrap();
        let second_a = service_a.next_audit_number(2024).await.unwrap();
        let first_b = service_b.next_audit_number(2024).await.unwrap();

        assert_eq!(second_a, "AUDIT-2024-002");
        // Tenant B's counter is untouched by tenant A's issuances.
        assert_eq!(first_b, "AUDIT-2024-001");
        assert_eq!(store.counters.lock().await.len(), 2);
    }

    #[tokio::test]
    async fn concurrent_issuance_yields_distinct_sequences() {
        let store = Arc::new(InMemoryCounterStore::default());
        let organization_id = Uuid::new_v4();

        let mut handles = Vec::new();
        for _ in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let service = TraceabilityServiceImpl::new(store, organization_id);
                service.next_audit_number(2024).await.unwrap()
            }));
        }

        let mut numbers = Vec::new();
        for handle in handles {
            numbers.push(handle.await.unwrap());
        }
        numbers.sort();
        numbers.dedup();
        assert_eq!(numbers.len(), 32);

        let expected: Vec<String> = (1..=32).map(|n| format!("AUDIT-2024-{n:03}")).collect();
        assert_eq!(numbers, expected);
    }

    #[tokio::test]
    async fn store_failures_propagate_unchanged() {
        let service =
            TraceabilityServiceImpl::new(Arc::new(UnavailableCounterStore), Uuid::new_v4());

        let err = service.next_audit_number(2024).await.unwrap_err();
        assert!(matches!(err, NumberingError::StoreUnavailable(_)));
    }
}
