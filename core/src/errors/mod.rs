//! Error types for the domain layer

mod domain;

pub use domain::{DomainError, DomainResult};
