//! Store traits bridging the bot and web processes
//!
//! The code store is the only shared state between the two binaries.
//! Two lookup contracts exist, matching the two deployment variants:
//! identity-keyed ([`CodeStore`]) and code-keyed FIFO ([`CodeQueue`]).
//! The profile store is a write-only sink for verified users.

pub mod code;
pub mod profile;

pub use code::{CodeQueue, CodeStore};
pub use profile::ProfileStore;
