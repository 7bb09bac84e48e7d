//! Token issuance strategy

use std::fmt::Debug;

use super::entity::IssuedToken;
use crate::domain::DomainError;
use crate::domain::credential::CredentialRecord;

/// Turns an authenticated identity into a token
///
/// Implementations decide whether the token embeds the identity. A signed,
/// time-bound implementation can replace the static one without touching the
/// login contract.
pub trait TokenIssuer: Send + Sync + Debug {
    fn issue(&self, identity: &CredentialRecord) -> Result<IssuedToken, DomainError>;
}
