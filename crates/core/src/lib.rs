//! Domain logic for the Glyco diabetes self-management service.
//!
//! Nothing in this crate touches the database or the network. Handlers in
//! `glyco-api` call into it and hand the results to `glyco-db`.

pub mod error;
pub mod glucose;
pub mod notifications;
pub mod roles;
pub mod types;
pub mod validation;
