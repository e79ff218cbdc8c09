//! Request-facing parameter structs for the list endpoints.
//!
//! Each resource has a `*FilterParams` struct deserialised straight from the
//! query string (camelCase keys, all fields optional) and validated before the
//! service layer runs. `into_query` converts the validated params into the
//! typed repository list query. Unknown enum or sort values fail
//! deserialisation, so they never reach the store.

pub mod audit_log;
pub mod landlord;
pub mod notification;
pub mod payment;
pub mod property;
pub mod tour;
pub mod user;

pub use audit_log::AuditLogFilterParams;
pub use landlord::LandlordFilterParams;
pub use notification::NotificationFilterParams;
pub use payment::PaymentFilterParams;
pub use property::PropertyFilterParams;
pub use tour::TourFilterParams;
pub use user::UserFilterParams;
