use crate::store::StoreError;

/// Errors surfaced by the access-resolution core.
///
/// Validation variants identify the failing input field so callers can return
/// a fixable "invalid input" result. Absence of data is never an error:
/// unknown consumers, dangling organisation codes and unlinked patients yield
/// empty sets or `false` from the resolvers.
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    #[error("consumer id cannot be empty")]
    EmptyConsumerId,
    #[error("patient identifier cannot be empty")]
    EmptyPatientId,
    #[error("at least one organisation code is required")]
    EmptyOrganisationCodes,
    #[error("organisation code cannot be blank")]
    BlankOrganisationCode,
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type AccessResult<T> = std::result::Result<T, AccessError>;
