//! Fetch-with-fallback resources.
//!
//! A [`RemoteResource`] is the outcome of loading one piece of remote data.
//! It moves `Idle -> Loading -> Success | Error` once per fetch. On error the
//! value is the caller's fallback, so once a load finishes there is always
//! something to render.

mod polled;

pub use polled::{PollHandle, PolledResource, Snapshot, Ticket};

use std::fmt::Display;

/// Where a resource is in its fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// The result of loading remote data, with a fallback on failure.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteResource<T> {
    status: ResourceStatus,
    value: Option<T>,
    error_message: Option<String>,
}

impl<T> Default for RemoteResource<T> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<T> RemoteResource<T> {
    /// A resource that has not been fetched.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            status: ResourceStatus::Idle,
            value: None,
            error_message: None,
        }
    }

    /// Mark a fetch as in flight. The previous value, if any, is kept.
    #[must_use]
    pub fn loading(self) -> Self {
        Self {
            status: ResourceStatus::Loading,
            ..self
        }
    }

    /// Finish a fetch with fetched data.
    #[must_use]
    pub fn succeed(self, value: T) -> Self {
        Self {
            status: ResourceStatus::Success,
            value: Some(value),
            error_message: None,
        }
    }

    /// Finish a fetch with an error, substituting `fallback`.
    #[must_use]
    pub fn fail(self, message: impl Into<String>, fallback: T) -> Self {
        Self {
            status: ResourceStatus::Error,
            value: Some(fallback),
            error_message: Some(message.into()),
        }
    }

    /// Finish a fetch from a result.
    ///
    /// Errors are logged at `warn` with the resource name.
    #[must_use]
    pub fn resolve<E: Display>(self, name: &str, result: Result<T, E>, fallback: T) -> Self {
        match result {
            Ok(value) => self.succeed(value),
            Err(e) => {
                tracing::warn!(resource = name, error = %e, "Load failed, using fallback data");
                self.fail(e.to_string(), fallback)
            }
        }
    }

    #[must_use]
    pub const fn status(&self) -> ResourceStatus {
        self.status
    }

    /// The fetched or fallback value; `None` only before the first finish.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Whether the value is demo data standing in for a failed fetch.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.status == ResourceStatus::Error
    }

    /// Whether a fetch has finished, successfully or not.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        matches!(self.status, ResourceStatus::Success | ResourceStatus::Error)
    }

    #[must_use]
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Transform the value, keeping status and error.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RemoteResource<U> {
        RemoteResource {
            status: self.status,
            value: self.value.map(f),
            error_message: self.error_message,
        }
    }
}
