//! Slot booking business logic
//!
//! The slot occupation and the booking insert run in one database
//! transaction so a failure in either rolls both back. Payment happens
//! before the transaction, matching the provider-facing contract: a
//! declined payment never touches the slot.

use std::sync::Arc;

use chrono::Utc;
use log::info;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, Set, TransactionError,
    TransactionTrait,
};

use crate::domain::{Booking, DomainError, DomainResult, RepositoryProvider};
use crate::infrastructure::database::entities::{booking, slot};

use super::payment::{PaymentDetails, PaymentProcessor};

/// Service for booking slots and reading booking history
pub struct BookingService {
    db: DatabaseConnection,
    repos: Arc<dyn RepositoryProvider>,
    payment: Arc<dyn PaymentProcessor>,
}

impl BookingService {
    pub fn new(
        db: DatabaseConnection,
        repos: Arc<dyn RepositoryProvider>,
        payment: Arc<dyn PaymentProcessor>,
    ) -> Self {
        Self { db, repos, payment }
    }

    /// Pay for and book an available slot. Returns the persisted booking.
    pub async fn book_slot(
        &self,
        user_id: &str,
        slot_id: i32,
        details: PaymentDetails,
    ) -> DomainResult<Booking> {
        if details.amount <= 0.0 {
            return Err(DomainError::Validation(
                "Payment amount must be positive".to_string(),
            ));
        }

        let payment = self.payment.process(&details);
        if !payment.success {
            return Err(DomainError::Payment(
                payment.message.unwrap_or_else(|| "Payment failed".to_string()),
            ));
        }

        let user_id = user_id.to_string();
        let amount = details.amount;
        let model = self
            .db
            .transaction::<_, booking::Model, DomainError>(move |txn| {
                Box::pin(async move {
                    let found = slot::Entity::find_by_id(slot_id).one(txn).await?;
                    let found = match found {
                        Some(s) if s.status == "available" => s,
                        _ => {
                            return Err(DomainError::Validation(
                                "Slot not available".to_string(),
                            ))
                        }
                    };

                    let mut active: slot::ActiveModel = found.into();
                    active.status = Set("occupied".to_string());
                    active.update(txn).await?;

                    let new_booking = booking::ActiveModel {
                        id: NotSet,
                        user_id: Set(user_id),
                        slot_id: Set(slot_id),
                        booking_time: Set(Utc::now()),
                        amount: Set(amount),
                    };
                    Ok(new_booking.insert(txn).await?)
                })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Connection(db) => db.into(),
                TransactionError::Transaction(e) => e,
            })?;

        info!(
            "Booking {} confirmed for slot {} (tx {})",
            model.id,
            slot_id,
            payment.transaction_id.as_deref().unwrap_or("-")
        );

        Ok(Booking {
            id: model.id,
            user_id: model.user_id,
            slot_id: model.slot_id,
            booking_time: model.booking_time,
            amount: model.amount,
        })
    }

    /// All bookings for a user, most recent first
    pub async fn history(&self, user_id: &str) -> DomainResult<Vec<Booking>> {
        self.repos.bookings().find_by_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::payment::{PaymentResult, StubPaymentProcessor};
    use crate::domain::{ChargingStation, Slot, SlotStatus};
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::SeaOrmRepositoryProvider;
    use crate::domain::User;
    use chrono::TimeZone;
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;

    struct DecliningProcessor;

    impl PaymentProcessor for DecliningProcessor {
        fn process(&self, _details: &PaymentDetails) -> PaymentResult {
            PaymentResult::failure("card declined")
        }
    }

    async fn setup(
        payment: Arc<dyn PaymentProcessor>,
    ) -> (BookingService, Arc<dyn RepositoryProvider>, String, i32) {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

        let user = User::new("alice", "hash");
        let user_id = user.id.clone();
        repos.users().save(user).await.unwrap();

        let station = repos
            .stations()
            .save(ChargingStation::new("S1", "L1", 2))
            .await
            .unwrap();
        let start = chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = chrono::Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap();
        let slot = repos
            .slots()
            .save(Slot::new(station.id, start, end).unwrap())
            .await
            .unwrap();

        (
            BookingService::new(db, repos.clone(), payment),
            repos,
            user_id,
            slot.id,
        )
    }

    #[tokio::test]
    async fn test_book_slot_persists_booking_and_occupies_slot() {
        let (svc, repos, user_id, slot_id) = setup(Arc::new(StubPaymentProcessor)).await;

        let booking = svc
            .book_slot(&user_id, slot_id, PaymentDetails { amount: 25.0 })
            .await
            .unwrap();
        assert!(booking.id > 0);
        assert_eq!(booking.amount, 25.0);

        let slot = repos.slots().find_by_id(slot_id).await.unwrap().unwrap();
        assert_eq!(slot.status, SlotStatus::Occupied);

        let history = svc.history(&user_id).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, booking.id);
    }

    #[tokio::test]
    async fn test_book_occupied_slot_fails_without_booking() {
        let (svc, _repos, user_id, slot_id) = setup(Arc::new(StubPaymentProcessor)).await;

        svc.book_slot(&user_id, slot_id, PaymentDetails { amount: 25.0 })
            .await
            .unwrap();
        let err = svc
            .book_slot(&user_id, slot_id, PaymentDetails { amount: 25.0 })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let history = svc.history(&user_id).await.unwrap();
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    async fn test_declined_payment_books_nothing() {
        let (svc, repos, user_id, slot_id) = setup(Arc::new(DecliningProcessor)).await;

        let err = svc
            .book_slot(&user_id, slot_id, PaymentDetails { amount: 25.0 })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Payment(_)));

        // slot untouched, no booking row
        let slot = repos.slots().find_by_id(slot_id).await.unwrap().unwrap();
        assert_eq!(slot.status, SlotStatus::Available);
        assert!(svc.history(&user_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_positive_amount_rejected() {
        let (svc, _repos, user_id, slot_id) = setup(Arc::new(StubPaymentProcessor)).await;
        let err = svc
            .book_slot(&user_id, slot_id, PaymentDetails { amount: 0.0 })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_unknown_slot_rejected() {
        let (svc, _repos, user_id, _slot_id) = setup(Arc::new(StubPaymentProcessor)).await;
        let err = svc
            .book_slot(&user_id, 999, PaymentDetails { amount: 25.0 })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
