//! Topic service administrative-plane emulator.
//!
//! # Purpose
//! Exposes an in-memory registry of pub/sub topics (attributes, tags, and
//! permission statements) together with the request/response boundary that an
//! HTTP dispatch layer mounts, so client code can be exercised against the
//! service's validation, idempotency, and pagination rules without a network.
//!
//! # Notes
//! Module boundaries mirror the layering of the emulated service: plain data in
//! `model`, the registry contract and backend in `store`, fault mapping in `api`.
pub mod api;
pub mod app;
pub mod config;
pub mod model;
pub mod observability;
pub mod store;
