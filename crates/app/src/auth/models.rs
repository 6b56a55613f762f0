//! Auth data models.

use jiff::Timestamp;
use uuid::Uuid;

use crate::auth::ApiTokenVersion;

/// Role required to list the whole client directory.
pub const USER_ROLE: &str = "user";

/// Authenticated caller resolved from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Token the caller authenticated with.
    pub token_uuid: Uuid,

    /// Roles granted to the token.
    pub roles: Vec<String>,
}

impl Principal {
    /// Whether the caller holds `role`.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|granted| granted == role)
    }
}

/// API token data used during bearer authentication.
#[derive(Debug, Clone)]
pub(crate) struct ActiveApiToken {
    /// Token format/hash version.
    pub version: ApiTokenVersion,

    /// SHA-256 verifier for the token secret material.
    pub token_hash: String,

    /// Roles granted to the token.
    pub roles: Vec<String>,
}

/// API token metadata persisted in storage.
#[derive(Debug, Clone)]
pub struct ApiTokenMetadata {
    pub uuid: Uuid,
    pub version: ApiTokenVersion,
    pub roles: Vec<String>,
    pub created_at: Timestamp,
    pub last_used_at: Option<Timestamp>,
    pub revoked_at: Option<Timestamp>,
}

/// New API token persistence payload.
#[derive(Debug, Clone)]
pub(crate) struct NewApiToken {
    pub uuid: Uuid,
    pub version: ApiTokenVersion,
    pub token_hash: String,
    pub roles: Vec<String>,
}

/// API token issuance result with one-time raw token.
#[derive(Debug, Clone)]
pub struct IssuedApiToken {
    pub token: String,
    pub metadata: ApiTokenMetadata,
}
