//! Input validation.
//!
//! Required inputs are checked before any storage read is attempted, so an
//! invalid call never costs a round trip. Each check reports the specific
//! failing field and returns the trimmed, validated value for the resolvers
//! to match against. "Not found" is deliberately not a validation concern
//! (absence is a legitimate outcome of a pure lookup).

use gateway_types::NonEmptyText;

use crate::{AccessError, AccessResult};

/// Validates that a consumer id is present and non-blank.
///
/// # Errors
///
/// Returns `AccessError::EmptyConsumerId` if the id is empty or whitespace.
pub fn validate_consumer_id(consumer_id: &str) -> AccessResult<NonEmptyText> {
    NonEmptyText::new(consumer_id).map_err(|_| AccessError::EmptyConsumerId)
}

/// Validates that a patient identifier is present and non-blank.
///
/// The identifier may be a pseudonymised token, so no format beyond
/// non-blankness is enforced here.
///
/// # Errors
///
/// Returns `AccessError::EmptyPatientId` if the identifier is empty or
/// whitespace.
pub fn validate_patient_id(patient_id: &str) -> AccessResult<NonEmptyText> {
    NonEmptyText::new(patient_id).map_err(|_| AccessError::EmptyPatientId)
}

/// Validates a candidate organisation-code set.
///
/// An empty set is a caller error, not a `false` access decision: the checker
/// answers "do any of these organisations have access", which presupposes at
/// least one organisation to ask about.
///
/// # Errors
///
/// Returns `AccessError::EmptyOrganisationCodes` for an empty collection and
/// `AccessError::BlankOrganisationCode` if any member is blank.
pub fn validate_organisation_codes<S: AsRef<str>>(codes: &[S]) -> AccessResult<Vec<NonEmptyText>> {
    if codes.is_empty() {
        return Err(AccessError::EmptyOrganisationCodes);
    }
    codes
        .iter()
        .map(|code| NonEmptyText::new(code).map_err(|_| AccessError::BlankOrganisationCode))
        .collect()
}
