//! Business logic services

pub mod booking;
pub mod notification;
pub mod payment;
pub mod session;
pub mod station;

pub use booking::BookingService;
pub use notification::{NotificationResult, NotificationService};
pub use payment::{PaymentDetails, PaymentProcessor, PaymentResult, StubPaymentProcessor};
pub use session::SessionService;
pub use station::StationService;
