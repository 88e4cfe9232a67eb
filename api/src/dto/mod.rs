//! Request and response DTOs

pub mod verify;

pub use verify::{SessionStatusResponse, VerifyRequest, VerifyResponse};
