//! Trait abstraction for the submission boundary to enable mocking in tests

use crate::schema::Registration;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Proof that a registration was accepted downstream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
}

/// Receiving side of a successful submission.
///
/// The form controller hands over a validated [`Registration`] and gets
/// back a [`Receipt`]; what happens downstream (HTTP call, queue, log)
/// is the implementor's business.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Registrar: Send + Sync {
    /// Hand over a validated registration
    async fn register(&self, registration: &Registration) -> Result<Receipt>;
}
