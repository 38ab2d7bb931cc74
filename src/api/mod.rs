//! HTTP API Module
//!
//! Exposes the phonebook over REST using Axum.
//!
//! ## Endpoints
//! - `GET /`: Welcome page.
//! - `GET /api/persons`: All contacts as a JSON array.
//! - `GET /api/persons/:id`: One contact, or 404 with an empty body.
//! - `DELETE /api/persons/:id`: Remove a contact (204 even when it did not exist).
//! - `POST /api/persons`: Validate and create a contact.
//! - `GET /info`: Contact count and the server's current time.
//!
//! ## Submodules
//! - **`error`**: `ApiError` and its mapping onto status codes and `{"error": ...}` bodies.
//! - **`extract`**: `ContactPayload`, the create-request body extractor.
//! - **`handlers`**: One async handler per route.
//! - **`routes`**: Router assembly and the request-logging middleware.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;

pub use routes::build_router;
