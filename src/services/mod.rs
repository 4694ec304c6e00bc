//! Per-service route tables.
//!
//! Each service instantiates the shared handling contract with its own
//! endpoint paths, schemas and messages. Tables are built once at startup
//! and handed to the listener; nothing registers routes globally.

pub mod auth;
pub mod payment;
pub mod products;
