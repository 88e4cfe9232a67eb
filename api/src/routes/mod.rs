//! Route handlers
//!
//! - `verify` - code redemption and session establishment
//! - `session` - session status and logout

pub mod session;
pub mod verify;

pub use verify::AppState;
