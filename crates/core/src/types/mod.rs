//! Core types for ReCircle.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod item;
pub mod role;
pub mod session;

pub use category::{Category, ItemStatus};
pub use id::*;
pub use item::Item;
pub use role::Role;
pub use session::{DEMO_TOKEN_PREFIX, Identity, SESSION_STORAGE_KEY, Session};
