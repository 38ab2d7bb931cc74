//! Phonebook Library
//!
//! This library crate holds everything behind the `phonebook` binary (`main.rs`).
//!
//! ## Architecture Modules
//! - **`contacts`**: The `Contact` entity, id generation and the create-time validation rules
//!   (required fields, case-insensitive name uniqueness).
//! - **`storage`**: The `ContactStore` persistence adapter with an ephemeral `MemoryStore`
//!   and a durable, sled-backed `SledStore`.
//! - **`api`**: Axum handlers and router for the REST surface, plus request logging.
//! - **`config`**: CLI/environment settings and backend selection.

pub mod api;
pub mod config;
pub mod contacts;
pub mod storage;
