//! Identity verification.
//!
//! Logins are checked by an [`IdentityProvider`]. The only provider shipped
//! is [`DemoIdentityProvider`], a fixed table of demo accounts with plain
//! passwords. It exists so the dashboard can be explored without a backend
//! account system and must not guard anything real.

mod error;

pub use error::AuthError;

use std::future::Future;

use recircle_core::{Identity, IdentityId, Role};

/// Verifies a login attempt.
pub trait IdentityProvider: Send + Sync {
    /// Look up the identity matching all three of username, password and role.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if no account matches.
    fn verify(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> impl Future<Output = Result<Identity, AuthError>> + Send;
}

struct DemoAccount {
    username: &'static str,
    password: &'static str,
    role: Role,
    id: i64,
    name: &'static str,
    location: &'static str,
    points: u32,
}

const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        username: "admin",
        password: "admin123",
        role: Role::Admin,
        id: 100,
        name: "ReCircle Admin",
        location: "New York",
        points: 0,
    },
    DemoAccount {
        username: "ngo1",
        password: "test",
        role: Role::Partner,
        id: 1,
        name: "Community Aid",
        location: "New York",
        points: 150,
    },
    DemoAccount {
        username: "ngo2",
        password: "test",
        role: Role::Partner,
        id: 2,
        name: "Green Cycle",
        location: "Los Angeles",
        points: 100,
    },
    DemoAccount {
        username: "donor1",
        password: "test",
        role: Role::Customer,
        id: 10,
        name: "Jamie Donor",
        location: "Boston",
        points: 0,
    },
];

/// Credentials shown on the login page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoLogin {
    pub username: &'static str,
    pub password: &'static str,
    pub role: Role,
}

/// Demo accounts bundled with the dashboard. Not a security boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoIdentityProvider;

impl DemoIdentityProvider {
    /// Every demo account's credentials, in table order.
    pub fn accounts() -> impl Iterator<Item = DemoLogin> {
        DEMO_ACCOUNTS.iter().map(|a| DemoLogin {
            username: a.username,
            password: a.password,
            role: a.role,
        })
    }

    fn lookup(username: &str, password: &str, role: Role) -> Option<Identity> {
        DEMO_ACCOUNTS
            .iter()
            .find(|a| a.username == username && a.password == password && a.role == role)
            .map(|a| Identity {
                id: IdentityId::new(a.id),
                role: a.role,
                username: a.username.to_string(),
                name: a.name.to_string(),
                location: a.location.to_string(),
                points: a.points,
                status: "approved".to_string(),
            })
    }
}

impl IdentityProvider for DemoIdentityProvider {
    async fn verify(&self, username: &str, password: &str, role: Role) -> Result<Identity, AuthError> {
        Self::lookup(username, password, role).ok_or(AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_verify_known_triple() {
        let identity = DemoIdentityProvider
            .verify("ngo1", "test", Role::Partner)
            .await
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(identity.id, IdentityId::new(1));
        assert_eq!(identity.name, "Community Aid");
        assert_eq!(identity.points, 150);
    }

    #[tokio::test]
    async fn test_verify_admin() {
        let identity = DemoIdentityProvider
            .verify("admin", "admin123", Role::Admin)
            .await
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(identity.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_verify_wrong_role() {
        let result = DemoIdentityProvider
            .verify("ngo1", "test", Role::Admin)
            .await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_verify_wrong_password() {
        let result = DemoIdentityProvider
            .verify("admin", "admin", Role::Admin)
            .await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_verify_requires_exact_username() {
        for username in [" admin ", "admin ", "Admin"] {
            let result = DemoIdentityProvider
                .verify(username, "admin123", Role::Admin)
                .await;
            assert!(
                matches!(result, Err(AuthError::InvalidCredentials)),
                "{username:?} should not match"
            );
        }
    }

    #[tokio::test]
    async fn test_listed_accounts_all_verify() {
        for account in DemoIdentityProvider::accounts() {
            let identity = DemoIdentityProvider
                .verify(account.username, account.password, account.role)
                .await
                .unwrap_or_else(|e| panic!("{}: {e}", account.username));
            assert_eq!(identity.role, account.role);
        }
    }

    #[test]
    fn test_accounts_cover_every_role() {
        for role in Role::ALL {
            assert!(DemoIdentityProvider::accounts().any(|a| a.role == role));
        }
    }
}
