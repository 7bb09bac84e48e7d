//! Credential record and role types

use serde::{Deserialize, Serialize};

/// Role attached to a credential record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A username/password/role triple held by the credential store
///
/// The password is stored as-is and compared by plain equality. It is never
/// serialized.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    username: String,
    #[serde(skip_serializing)]
    password: String,
    role: Role,
}

impl CredentialRecord {
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Exact, case-sensitive match on both fields
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl std::fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("username", &self.username)
            .field("password", &"[hidden]")
            .field("role", &self.role)
            .finish()
    }
}

/// Records every fresh process starts with unless configuration overrides them
pub fn seed_records() -> Vec<CredentialRecord> {
    vec![
        CredentialRecord::new("admin", "admin", Role::Admin),
        CredentialRecord::new("user", "password", Role::User),
    ]
}
