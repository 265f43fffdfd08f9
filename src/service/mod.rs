//! Service Module
//!
//! The orchestration layer between the HTTP handlers and the store.
//!
//! ## Overview
//! - **`hasher`**: Allocates identifiers synchronously and schedules the
//!   digest computation and store write to run after a fixed delay on a
//!   detached task, decoupled from the HTTP response.
//! - **`shutdown`**: One-shot irreversible shutdown sequence. Once initiated,
//!   every endpoint refuses new work while in-flight delayed writes drain,
//!   then process termination is signaled.

pub mod hasher;
pub mod shutdown;
