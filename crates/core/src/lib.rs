//! # Gateway Core
//!
//! Organisation-access resolution for the healthcare data-access gateway.
//!
//! This crate answers two authorization questions at query time:
//! - which organisations may a consumer currently see data for, expanding
//!   direct grants through the time-windowed organisation hierarchy
//!   ([`resolver::AccessResolver::resolve_accessible_organisations`])
//! - does any of a set of organisations currently hold an effective care
//!   relationship with a patient
//!   ([`resolver::AccessResolver::organisations_have_access_to_patient`])
//!
//! Both are pure computations over full reference-data snapshots supplied by
//! a storage collaborator ([`store::ReferenceDataStore`]) and evaluated
//! against an injected clock ([`clock::Clock`]).
//!
//! **No API concerns**: HTTP/gRPC routing, FHIR parameter extraction,
//! persistence and audit stamping belong to the surrounding gateway services,
//! not here.

pub mod clock;
pub mod error;
pub mod hierarchy;
pub mod model;
pub mod patient_access;
pub mod resolver;
pub mod store;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{AccessError, AccessResult};
pub use model::{ConsumerAccessGrant, OrganisationNode, PatientOrganisationLink};
pub use resolver::AccessResolver;
pub use store::{InMemoryStore, ReferenceDataStore, StoreError};
