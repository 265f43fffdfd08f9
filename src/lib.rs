//! Password Hashing Service Library
//!
//! This library crate defines the core modules of the in-memory password
//! hashing service. It serves as the foundation for the binary executable
//! (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of four loosely coupled subsystems:
//!
//! - **`digest`**: The pure hashing logic. Computes SHA-512 digests of
//!   passwords and encodes them as base64 strings.
//! - **`store`**: The in-memory state layer. Holds the identifier allocator,
//!   the digest map, and the request statistics accumulators, each with its
//!   own independent synchronization.
//! - **`service`**: The orchestration layer. Ties identifier allocation,
//!   delayed digest writes, and the one-shot shutdown sequence together.
//! - **`api`**: HTTP request handlers and DTOs for the Axum web server.

pub mod api;
pub mod digest;
pub mod service;
pub mod store;
