use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use std::convert::Infallible;
use subtle::ConstantTimeEq;

use crate::server::{
    error::{auth::AuthError, AppError},
    hypermedia::capability::{AuthorizationOracle, CapabilitySet, ADMIN},
    state::AppState,
};

const BEARER_PREFIX: &str = "Bearer ";

pub enum Permission {
    Admin,
}

/// Caller of the current request, resolved once from the `Authorization` header.
///
/// Reads are public, so extraction never fails: a request without a token is an
/// anonymous caller. Mutating handlers pass the caller to [`AuthGuard`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caller {
    authenticated: bool,
    capabilities: CapabilitySet,
}

impl Caller {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Resolves a caller from a raw `Authorization` header value.
    ///
    /// A bearer token equal to `admin_token` grants `ADMIN`. Any other bearer token
    /// authenticates the caller without capabilities.
    pub fn resolve(header: Option<&str>, admin_token: &str) -> Self {
        let Some(token) = header.and_then(|value| value.strip_prefix(BEARER_PREFIX)) else {
            return Self::anonymous();
        };

        let token = token.trim();
        if token.is_empty() {
            return Self::anonymous();
        }

        let capabilities = if is_admin_token(token, admin_token) {
            CapabilitySet::admin()
        } else {
            CapabilitySet::anonymous()
        };

        Self {
            authenticated: true,
            capabilities,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }
}

/// Compares a presented token with the configured one in constant time.
///
/// Only the length comparison short-circuits. An empty configured token matches nothing.
fn is_admin_token(token: &str, admin_token: &str) -> bool {
    !admin_token.is_empty() && bool::from(token.as_bytes().ct_eq(admin_token.as_bytes()))
}

impl AuthorizationOracle for Caller {
    fn has_capability(&self, capability: &str) -> bool {
        self.capabilities.has_capability(capability)
    }
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        Ok(Self::resolve(header, &state.admin_token))
    }
}

pub struct AuthGuard<'a> {
    caller: &'a Caller,
}

impl<'a> AuthGuard<'a> {
    pub fn new(caller: &'a Caller) -> Self {
        Self { caller }
    }

    /// Checks that the caller holds every permission.
    ///
    /// # Returns
    /// - `Ok(())`: Caller may proceed
    /// - `Err(AuthError::MissingCredentials)`: No bearer token was sent
    /// - `Err(AuthError::AccessDenied)`: Token does not grant a required permission
    pub fn require(&self, permissions: &[Permission]) -> Result<(), AppError> {
        if !self.caller.is_authenticated() {
            return Err(AuthError::MissingCredentials.into());
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !self.caller.has_capability(ADMIN) {
                        return Err(AuthError::AccessDenied(
                            "Caller attempted a mutating operation without the ADMIN capability"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(())
    }
}
