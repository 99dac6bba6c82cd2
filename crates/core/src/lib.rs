//! ReCircle Core - Shared domain types and rules.
//!
//! This crate provides the types and pure rules used by the dashboard:
//! - `dashboard` - Server-rendered dashboard for donors, partners and admins
//! - `integration-tests` - Black-box tests against a stub backend
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no session storage. Anything that talks to the network lives in
//! the dashboard crate.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, roles, categories, items and sessions
//! - [`classify`] - Keyword category classifier
//! - [`chat`] - Keyword chat auto-responder
//! - [`donation`] - Donation form defaults and validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod chat;
pub mod classify;
pub mod donation;
pub mod types;

pub use classify::classify;
pub use donation::{Donation, DonationForm, ValidationError};
pub use types::*;
