//! Patient-access check.
//!
//! Given the organisations a caller is acting for, decide whether any of them
//! currently holds an effective care relationship with a patient. This is a
//! pure existence check over the link snapshot; absence of a link is a
//! negative answer, never an error.

use chrono::{DateTime, Utc};

use crate::model::PatientOrganisationLink;

/// Returns `true` if at least one candidate organisation has an effective
/// link to the patient at `now`.
///
/// A link whose effective-from instant is strictly in the future does not
/// grant access yet. There are no partial-match semantics: one effective link
/// suffices, and which organisation matched is not reported.
pub fn organisations_have_access<S: AsRef<str>>(
    patient_id: &str,
    organisation_codes: &[S],
    links: &[PatientOrganisationLink],
    now: DateTime<Utc>,
) -> bool {
    let granted = links
        .iter()
        .filter(|link| link.nhs_number == patient_id)
        .any(|link| {
            organisation_codes
                .iter()
                .any(|code| code.as_ref() == link.organisation_code)
                && link.effective_at(now)
        });

    tracing::debug!(
        patient_id,
        candidates = organisation_codes.len(),
        granted,
        "evaluated patient access"
    );

    granted
}
