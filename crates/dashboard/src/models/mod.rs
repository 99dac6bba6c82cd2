//! Per-browser state kept in the cookie session.

pub mod session;

pub use session::keys as session_keys;
