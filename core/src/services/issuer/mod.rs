//! Code issuance service

mod config;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use config::IssuerConfig;
pub use service::{Issuer, IssuerService, QueueIssuerService};
pub use types::IssuedCode;
