//! Typed HTTP client for the REST API plus the optimistic list cache used by
//! front-end tooling.

pub mod api;
pub mod cache;
pub mod keys;

pub use api::{ApiClient, ClientError};
pub use cache::{ListCache, MutationState, OptimisticMutation};
pub use keys::{QueryKey, Resource};
