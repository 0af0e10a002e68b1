//! Registrar that records accepted registrations in the application log

use super::traits::{Receipt, Registrar};
use crate::schema::Registration;
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

/// Default registrar: logs the accepted registration and mints a
/// receipt. The password never reaches the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingRegistrar;

impl LoggingRegistrar {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Registrar for LoggingRegistrar {
    async fn register(&self, registration: &Registration) -> Result<Receipt> {
        let receipt = Receipt {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
        };
        info!(
            id = %receipt.id,
            name = %registration.name,
            email = %registration.email,
            phone = %registration.phone,
            address = %registration.address,
            date_of_birth = %registration.date_of_birth,
            subscribe = registration.subscribe,
            "registration accepted"
        );
        debug!(
            password_len = registration.password.chars().count(),
            "credential received"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_registration() -> Registration {
        Registration {
            name: "Alice".to_string(),
            email: "a@b.com".to_string(),
            phone: "1234567890".to_string(),
            address: "123 Main Street Ave".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            password: "longpass1".to_string(),
            subscribe: true,
        }
    }

    #[tokio::test]
    async fn test_register_returns_receipt() {
        let registrar = LoggingRegistrar::new();
        let receipt = registrar.register(&sample_registration()).await.unwrap();
        assert!(receipt.received_at <= Utc::now());
    }

    #[tokio::test]
    async fn test_receipts_are_unique() {
        let registrar = LoggingRegistrar::new();
        let registration = sample_registration();
        let first = registrar.register(&registration).await.unwrap();
        let second = registrar.register(&registration).await.unwrap();
        assert_ne!(first.id, second.id);
    }
}
