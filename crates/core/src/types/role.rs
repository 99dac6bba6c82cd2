//! Account roles.

use serde::{Deserialize, Serialize};

/// Role of an authenticated account.
///
/// The role decides which widgets the dashboard mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Submits donations.
    Customer,
    /// Organization that browses and claims donated items.
    Partner,
    /// Reviews partner approvals and platform metrics.
    Admin,
}

impl Role {
    /// All roles, in the order they are offered on the login form.
    pub const ALL: [Self; 3] = [Self::Customer, Self::Partner, Self::Admin];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Partner => "Partner",
            Self::Admin => "Admin",
        }
    }

    /// Wire value, as stored in sessions and submitted by forms.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Partner => "partner",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "partner" => Ok(Self::Partner),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}
