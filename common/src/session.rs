//! The signed-in user, as seen by the gateways and the form.
//!
//! Sessions are owned by the host platform. Components receive one as a
//! capability when they are built and never reach for global state.

use serde::Deserialize;

pub trait SessionProvider {
    /// Bearer token for service calls. Empty when nobody is signed in.
    fn access_token(&self) -> String;

    /// Name recorded as `createdBy` on libraries this user creates.
    fn user_name(&self) -> Option<String>;
}

/// Fixed credentials, for tests and for embedding hosts that hand them over directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSession {
    pub token: String,
    pub user: Option<String>,
}

impl SessionProvider for StaticSession {
    fn access_token(&self) -> String {
        self.token.clone()
    }

    fn user_name(&self) -> Option<String> {
        self.user.clone()
    }
}

/// Shape of the token document the platform keeps in local storage.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenStorage {
    pub access_token: Option<AccessToken>,
    pub id_token: Option<IdToken>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessToken {
    pub access_token: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IdToken {
    pub claims: IdClaims,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IdClaims {
    pub name: Option<String>,
    pub preferred_username: Option<String>,
}

impl TokenStorage {
    pub fn parse(raw: &str) -> Option<TokenStorage> {
        serde_json::from_str(raw).ok()
    }

    pub fn access_token(&self) -> String {
        self.access_token
            .as_ref()
            .map(|t| t.access_token.clone())
            .unwrap_or_default()
    }

    pub fn user_name(&self) -> Option<String> {
        let claims = &self.id_token.as_ref()?.claims;
        claims
            .name
            .clone()
            .or_else(|| claims.preferred_username.clone())
    }
}
