//! The access-resolution facade.
//!
//! [`AccessResolver`] is what the gateway's coordination layer calls: it
//! validates inputs, performs the bulk snapshot reads, fixes the evaluation
//! instant, and delegates to the pure resolution functions. It holds no state
//! of its own beyond the injected collaborators, so concurrent calls are
//! fully independent.

use std::collections::BTreeSet;

use crate::clock::Clock;
use crate::error::AccessResult;
use crate::store::ReferenceDataStore;
use crate::{hierarchy, patient_access, validation};

/// Resolves organisation access questions over a store and a clock.
#[derive(Clone, Debug)]
pub struct AccessResolver<S, C> {
    store: S,
    clock: C,
}

impl<S, C> AccessResolver<S, C>
where
    S: ReferenceDataStore,
    C: Clock,
{
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Resolves the full set of organisation codes the consumer may access:
    /// each directly granted organisation plus its currently-active
    /// descendants.
    ///
    /// Issues exactly two bulk reads (grants, then nodes); validation happens
    /// first, so an invalid id never reaches the store. An unknown consumer
    /// yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns `AccessError::EmptyConsumerId` for a blank id, or a
    /// `StoreError` propagated unchanged from the storage collaborator.
    pub fn resolve_accessible_organisations(
        &self,
        consumer_id: &str,
    ) -> AccessResult<BTreeSet<String>> {
        let consumer_id = validation::validate_consumer_id(consumer_id)?;

        let grants = self.store.load_consumer_access_grants()?;
        let nodes = self.store.load_organisation_nodes()?;
        let now = self.clock.now();

        Ok(hierarchy::expand_accessible_organisations(
            consumer_id.as_str(),
            &grants,
            &nodes,
            now,
        ))
    }

    /// Decides whether any of the candidate organisations currently holds an
    /// effective care relationship with the patient.
    ///
    /// Issues one bulk read of the patient-organisation links after both
    /// inputs validate. Absence of any link yields `false`, not an error.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the failing input (blank patient id,
    /// empty code set, blank code), or a `StoreError` propagated unchanged.
    pub fn organisations_have_access_to_patient<T: AsRef<str>>(
        &self,
        patient_id: &str,
        organisation_codes: &[T],
    ) -> AccessResult<bool> {
        let patient_id = validation::validate_patient_id(patient_id)?;
        let organisation_codes = validation::validate_organisation_codes(organisation_codes)?;

        let links = self.store.load_patient_organisation_links()?;
        let now = self.clock.now();

        Ok(patient_access::organisations_have_access(
            patient_id.as_str(),
            &organisation_codes,
            &links,
            now,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::AccessError;
    use crate::model::{ConsumerAccessGrant, OrganisationNode, PatientOrganisationLink};
    use crate::store::{InMemoryStore, StoreError};
    use chrono::{DateTime, Duration, Utc};

    fn now() -> DateTime<Utc> {
        "2024-06-01T12:00:00Z".parse().expect("valid instant")
    }

    fn node(code: &str, path: &str) -> OrganisationNode {
        OrganisationNode {
            organisation_code: code.into(),
            organisation_name: format!("Org {code}"),
            hierarchy_path: path.parse().expect("valid path"),
            relationship_with_parent_start: None,
            relationship_with_parent_end: None,
        }
    }

    fn fixture_store() -> InMemoryStore {
        InMemoryStore {
            grants: vec![ConsumerAccessGrant {
                consumer_id: "c1".into(),
                organisation_code: "ROOT".into(),
            }],
            nodes: vec![
                node("ROOT", "/1/"),
                node("CHILD", "/1/1/"),
                node("UNRELATED", "/2/"),
            ],
            links: vec![PatientOrganisationLink {
                nhs_number: "9000000009".into(),
                organisation_code: "CHILD".into(),
                effective_from: Some(now() - Duration::days(1)),
            }],
        }
    }

    /// A store whose every read fails, to prove validation precedes I/O and
    /// that storage failures pass through unchanged.
    struct FailingStore;

    impl ReferenceDataStore for FailingStore {
        fn load_consumer_access_grants(&self) -> Result<Vec<ConsumerAccessGrant>, StoreError> {
            Err(StoreError::message("grants unavailable"))
        }

        fn load_organisation_nodes(&self) -> Result<Vec<OrganisationNode>, StoreError> {
            Err(StoreError::message("nodes unavailable"))
        }

        fn load_patient_organisation_links(
            &self,
        ) -> Result<Vec<PatientOrganisationLink>, StoreError> {
            Err(StoreError::message("links unavailable"))
        }
    }

    #[test]
    fn resolves_grants_through_the_store_snapshot() {
        // Collaborators may be borrowed; the resolver does not need to own them.
        let store = fixture_store();
        let clock = FixedClock(now());
        let resolver = AccessResolver::new(&store, &clock);

        let resolved = resolver
            .resolve_accessible_organisations("c1")
            .expect("resolution succeeds");
        let resolved: Vec<&str> = resolved.iter().map(String::as_str).collect();
        assert_eq!(resolved, ["CHILD", "ROOT"]);
    }

    #[test]
    fn checks_patient_access_through_the_store_snapshot() {
        let resolver = AccessResolver::new(fixture_store(), FixedClock(now()));

        assert!(resolver
            .organisations_have_access_to_patient("9000000009", &["CHILD"])
            .expect("check succeeds"));
        assert!(!resolver
            .organisations_have_access_to_patient("9000000009", &["UNRELATED"])
            .expect("check succeeds"));
    }

    #[test]
    fn validation_failures_never_reach_the_store() {
        let resolver = AccessResolver::new(FailingStore, FixedClock(now()));

        assert!(matches!(
            resolver.resolve_accessible_organisations("  "),
            Err(AccessError::EmptyConsumerId)
        ));
        assert!(matches!(
            resolver.organisations_have_access_to_patient("", &["A"]),
            Err(AccessError::EmptyPatientId)
        ));
        assert!(matches!(
            resolver.organisations_have_access_to_patient::<&str>("9000000009", &[]),
            Err(AccessError::EmptyOrganisationCodes)
        ));
        assert!(matches!(
            resolver.organisations_have_access_to_patient("9000000009", &["A", ""]),
            Err(AccessError::BlankOrganisationCode)
        ));
    }

    #[test]
    fn store_failures_propagate_unchanged() {
        let resolver = AccessResolver::new(FailingStore, FixedClock(now()));

        let err = resolver
            .resolve_accessible_organisations("c1")
            .expect_err("store failure surfaces");
        assert!(matches!(err, AccessError::Store(_)));
        assert_eq!(err.to_string(), "grants unavailable");

        let err = resolver
            .organisations_have_access_to_patient("9000000009", &["A"])
            .expect_err("store failure surfaces");
        assert_eq!(err.to_string(), "links unavailable");
    }
}
