//! Domain entities exchanged between the repository, service and HTTP layers.

pub mod audit_log;
pub mod landlord;
pub mod notification;
pub mod payment;
pub mod property;
pub mod tour;
pub mod types;
pub mod user;
