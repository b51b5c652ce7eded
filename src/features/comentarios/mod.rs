//! Comments feature: timestamped notes attached to tickets.
//!
//! Comments are create-only; no update or delete is exposed.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ComentarioService;
