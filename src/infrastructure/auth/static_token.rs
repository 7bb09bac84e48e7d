//! Static token issuance

use crate::domain::DomainError;
use crate::domain::credential::CredentialRecord;
use crate::domain::token::{IssuedToken, TokenIssuer};

/// Token used when configuration does not name one
pub const DEFAULT_STATIC_TOKEN: &str = "example_token";

/// Issues the same bearer token to every authenticated identity
///
/// The token carries no identity, role or expiry and never changes for the
/// lifetime of the issuer.
#[derive(Clone)]
pub struct StaticTokenIssuer {
    token: String,
}

impl StaticTokenIssuer {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for StaticTokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenIssuer")
            .field("token", &"[hidden]")
            .finish()
    }
}

impl TokenIssuer for StaticTokenIssuer {
    fn issue(&self, _identity: &CredentialRecord) -> Result<IssuedToken, DomainError> {
        Ok(IssuedToken::bearer(self.token.clone()))
    }
}
