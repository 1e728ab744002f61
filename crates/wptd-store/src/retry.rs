//! Bounded retry with exponential backoff, layered around the store traits.
//!
//! The index algorithm stays retry-free; jobs wrap their store in
//! [`Retrying`] so transient listing/publish failures are re-attempted in
//! place. The final failure surfaces unchanged.

use std::time::Duration;
use tracing::warn;
use wptd_core::WptdError;

use crate::{ObjectLister, ObjectPublisher};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
    pub backoff_multiplier_percent: u16,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff_ms: 250,
            max_backoff_ms: 2_000,
            backoff_multiplier_percent: 200,
        }
    }
}

impl RetryPolicy {
    /// Run `operation` up to `max_attempts` times, sleeping between
    /// attempts. `max_attempts` is clamped to at least one.
    pub fn run<T>(
        &self,
        label: &str,
        mut operation: impl FnMut() -> Result<T, WptdError>,
    ) -> Result<T, WptdError> {
        let attempts = self.max_attempts.max(1);
        let mut backoff_ms = self.initial_backoff_ms;
        let mut attempt = 0;

        loop {
            attempt += 1;
            match operation() {
                Ok(value) => return Ok(value),
                Err(e) if attempt >= attempts => return Err(e),
                Err(e) => {
                    warn!(
                        "{} failed (attempt {}/{}), retrying in {}ms: {}",
                        label, attempt, attempts, backoff_ms, e
                    );
                    std::thread::sleep(Duration::from_millis(backoff_ms));
                    backoff_ms = (backoff_ms
                        .saturating_mul(u64::from(self.backoff_multiplier_percent))
                        / 100)
                        .min(self.max_backoff_ms);
                }
            }
        }
    }
}

/// Store wrapper applying a [`RetryPolicy`] to every capability call.
pub struct Retrying<S> {
    inner: S,
    policy: RetryPolicy,
}

impl<S> Retrying<S> {
    pub fn new(inner: S, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ObjectLister> ObjectLister for Retrying<S> {
    fn list_children(&self, prefix: Option<&str>) -> Result<Vec<String>, WptdError> {
        self.policy
            .run("list_children", || self.inner.list_children(prefix))
    }
}

impl<S: ObjectPublisher> ObjectPublisher for Retrying<S> {
    fn put_object(
        &self,
        name: &str,
        content: &[u8],
        content_type: &str,
    ) -> Result<(), WptdError> {
        self.policy
            .run("put_object", || self.inner.put_object(name, content, content_type))
    }
}
