//! Request/response boundary of the topic service.
//!
//! # Purpose
//! Exposes one handler per administrative operation. Handlers use Axum
//! extractors so a dispatch layer can mount them directly, and translate every
//! store fault into a distinguishable client-fault `ApiError`.
pub mod error;
pub mod permissions;
pub mod tags;
pub mod topics;
pub mod types;
