//! In-Memory Store Module
//!
//! Holds the three independently synchronized pieces of shared state.
//!
//! ## Core Concepts
//! - **Allocation**: `IdAllocator` hands out monotonically increasing 64-bit
//!   identifiers, one per creation request, with no duplicates or gaps.
//! - **Storage**: `HashStore` maps identifiers to digest strings. Writes land
//!   asynchronously after a fixed delay, so reads may race ahead of them.
//! - **Statistics**: `RequestStats` accumulates the request count and total
//!   latency behind a single mutex so snapshots are never torn.
//!
//! Each piece carries its own lock or atomic; contention on one never blocks
//! the others.

pub mod allocator;
pub mod memory;
pub mod stats;

#[cfg(test)]
mod tests;
