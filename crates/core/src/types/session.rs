//! Authenticated session types.

use serde::{Deserialize, Serialize};

use super::{IdentityId, Role};

/// Storage key the serialized [`Session`] lives under.
pub const SESSION_STORAGE_KEY: &str = "recircle_user";

/// Prefix of the opaque demo credential handed out on login.
pub const DEMO_TOKEN_PREFIX: &str = "demo_token_";

/// An account known to an identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: IdentityId,
    pub role: Role,
    pub username: String,
    pub name: String,
    pub location: String,
    pub points: u32,
    pub status: String,
}

/// The current authenticated identity.
///
/// Persisted verbatim as JSON under [`SESSION_STORAGE_KEY`] and restored on
/// the next request. The token is an opaque demo credential, not a secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: IdentityId,
    pub role: Role,
    pub username: String,
    pub name: String,
    pub location: String,
    pub points: u32,
    pub status: String,
    pub token: String,
}

impl Session {
    /// Build a session for a verified identity.
    #[must_use]
    pub fn for_identity(identity: Identity) -> Self {
        let token = format!("{DEMO_TOKEN_PREFIX}{}", identity.id);
        Self {
            id: identity.id,
            role: identity.role,
            username: identity.username,
            name: identity.name,
            location: identity.location,
            points: identity.points,
            status: identity.status,
            token,
        }
    }

    /// Whether the session belongs to the given role.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            id: IdentityId::new(1),
            role: Role::Partner,
            username: "ngo1".to_string(),
            name: "Community Aid".to_string(),
            location: "New York".to_string(),
            points: 150,
            status: "approved".to_string(),
        }
    }

    #[test]
    fn test_session_for_identity_sets_token() {
        let session = Session::for_identity(identity());
        assert_eq!(session.token, "demo_token_1");
        assert_eq!(session.role, Role::Partner);
        assert!(session.has_role(Role::Partner));
        assert!(!session.has_role(Role::Admin));
    }

    #[test]
    fn test_session_json_shape() {
        let session = Session::for_identity(identity());
        let value = serde_json::to_value(&session).unwrap_or_default();
        assert_eq!(value["role"], "partner");
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Community Aid");
    }
}
