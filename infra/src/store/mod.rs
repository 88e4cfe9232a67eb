//! Code store backings
//!
//! - `memory` - process-local map with optional file snapshot, plus an
//!   in-process FIFO queue; used by single-process deployments and tests
//! - `redis` - identity-keyed Redis store for two-process deployments
//! - `queue` - code-keyed Redis FIFO queue with an auxiliary expiry guard

pub mod memory;
pub mod queue;
pub mod redis;

pub use memory::{MemoryCodeQueue, MemoryCodeStore};
pub use queue::RedisCodeQueue;
pub use redis::RedisCodeStore;
