//! The storage collaborator.
//!
//! Resolution works over full point-in-time snapshots: each resolver call
//! performs one bulk read per referenced collection and then filters in
//! memory, so the number of storage round trips is bounded regardless of how
//! many grants or nodes exist. Persistence mechanics (the gateway's CRUD
//! services, ORM, paging) live behind this trait and are not part of the
//! core.

use crate::model::{ConsumerAccessGrant, OrganisationNode, PatientOrganisationLink};

/// An error raised by the storage collaborator, propagated unchanged.
///
/// The core neither retries nor reinterprets storage failures; it stops
/// issuing reads at the first failure and hands the error back.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct StoreError(Box<dyn std::error::Error + Send + Sync>);

impl StoreError {
    pub fn new(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(source))
    }

    /// Wraps a bare message, for collaborators without a structured error.
    pub fn message(msg: impl Into<String>) -> Self {
        Self(msg.into().into())
    }
}

/// Bulk reads over the gateway's reference data.
///
/// Each method returns the complete collection as a snapshot. Implementations
/// may be backed by a database, a cache, or in-memory fixtures; the resolvers
/// only require that a call observes one consistent copy.
pub trait ReferenceDataStore {
    fn load_consumer_access_grants(&self) -> Result<Vec<ConsumerAccessGrant>, StoreError>;

    fn load_organisation_nodes(&self) -> Result<Vec<OrganisationNode>, StoreError>;

    fn load_patient_organisation_links(&self) -> Result<Vec<PatientOrganisationLink>, StoreError>;
}

/// A snapshot held directly in memory.
///
/// The backing store for tests and for embedders that already hold the
/// reference data (for example a process-level cache refreshed out of band).
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    pub grants: Vec<ConsumerAccessGrant>,
    pub nodes: Vec<OrganisationNode>,
    pub links: Vec<PatientOrganisationLink>,
}

impl ReferenceDataStore for InMemoryStore {
    fn load_consumer_access_grants(&self) -> Result<Vec<ConsumerAccessGrant>, StoreError> {
        Ok(self.grants.clone())
    }

    fn load_organisation_nodes(&self) -> Result<Vec<OrganisationNode>, StoreError> {
        Ok(self.nodes.clone())
    }

    fn load_patient_organisation_links(&self) -> Result<Vec<PatientOrganisationLink>, StoreError> {
        Ok(self.links.clone())
    }
}

impl<S: ReferenceDataStore + ?Sized> ReferenceDataStore for &S {
    fn load_consumer_access_grants(&self) -> Result<Vec<ConsumerAccessGrant>, StoreError> {
        (**self).load_consumer_access_grants()
    }

    fn load_organisation_nodes(&self) -> Result<Vec<OrganisationNode>, StoreError> {
        (**self).load_organisation_nodes()
    }

    fn load_patient_organisation_links(&self) -> Result<Vec<PatientOrganisationLink>, StoreError> {
        (**self).load_patient_organisation_links()
    }
}
