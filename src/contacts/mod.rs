//! Contact Domain Module
//!
//! Defines the phonebook entity and the rules that every new entry must satisfy
//! before it is handed to a store.
//!
//! ## Responsibilities
//! - **Entity**: The `Contact` record and its `ContactId`.
//! - **Identity**: Random id generation for the in-memory store.
//! - **Validation**: Required-field checks and case-insensitive name uniqueness.
//!
//! ## Submodules
//! - **`types`**: Entity, identifier and request input types.
//! - **`identity`**: The id generator used by `MemoryStore`.
//! - **`validation`**: The create-time checks applied by the POST handler.

pub mod identity;
pub mod types;
pub mod validation;
