//! Dashboard services.
//!
//! # Services
//!
//! - `auth` - Identity verification against the bundled demo table
//! - `session` - Per-browser session store (login, logout, restore)

pub mod auth;
pub mod session;

pub use auth::{AuthError, DemoIdentityProvider, DemoLogin, IdentityProvider};
pub use session::{MemoryStorage, SessionStorage, SessionStore, StorageError};
