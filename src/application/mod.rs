//! Business logic and use cases

pub mod services;

pub use services::{
    BookingService, NotificationService, PaymentDetails, PaymentProcessor, SessionService,
    StationService, StubPaymentProcessor,
};
