//! Service layer: thin orchestration between validated requests and the
//! repository traits. Functions are generic over the repository so tests can
//! substitute mocks.

pub mod audit_log;
pub mod errors;
pub mod landlord;
pub mod notification;
pub mod payment;
pub mod property;
pub mod tour;
pub mod user;

pub use errors::{ServiceError, ServiceResult};
