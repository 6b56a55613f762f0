//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::auth::{
    ApiTokenMetadata, ApiTokenVersion, AuthServiceError, IssuedApiToken, Principal,
    build_verifier, format_api_token, generate_api_token_secret,
    models::NewApiToken,
    parse_api_token,
    repository::PgAuthRepository,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }

    /// Issue a new API token granting `roles`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insertion fails.
    pub async fn issue_api_token(
        &self,
        roles: Vec<String>,
    ) -> Result<IssuedApiToken, AuthServiceError> {
        let token_uuid = Uuid::now_v7();
        let version = ApiTokenVersion::V1;
        let secret = generate_api_token_secret();
        let token = format_api_token(token_uuid, version, &secret);

        let metadata = self
            .repository
            .create_api_token(&NewApiToken {
                uuid: token_uuid,
                version,
                token_hash: build_verifier(&token_uuid, version, &secret),
                roles,
            })
            .await?;

        Ok(IssuedApiToken { token, metadata })
    }

    /// List every issued token, revoked ones included.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_api_tokens(&self) -> Result<Vec<ApiTokenMetadata>, AuthServiceError> {
        Ok(self.repository.list_api_tokens().await?)
    }

    /// Revoke a token by UUID. Returns `true` if the token was active.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn revoke_api_token(&self, token_uuid: Uuid) -> Result<bool, AuthServiceError> {
        Ok(self.repository.revoke_api_token(token_uuid).await?)
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Principal, AuthServiceError> {
        let parsed_token =
            parse_api_token(bearer_token).map_err(|_malformed| AuthServiceError::NotFound)?;

        let token = self
            .repository
            .find_active_api_token(parsed_token.token_uuid, parsed_token.version)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        let verifier = build_verifier(
            &parsed_token.token_uuid,
            parsed_token.version,
            &parsed_token.secret,
        );

        if token.version != parsed_token.version || verifier != token.token_hash {
            return Err(AuthServiceError::NotFound);
        }

        // Best-effort metadata update; auth success should not depend on this write.
        if let Err(source) = self
            .repository
            .touch_api_token(parsed_token.token_uuid)
            .await
        {
            warn!("failed to record api token use: {source}");
        }

        Ok(Principal {
            token_uuid: parsed_token.token_uuid,
            roles: token.roles,
        })
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a raw bearer token into the caller's principal.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Principal, AuthServiceError>;
}
