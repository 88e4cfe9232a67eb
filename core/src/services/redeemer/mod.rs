//! Code redemption service

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::{QueueRedeemerService, Redeemer, RedeemerService};
pub use types::{RedeemRequest, RedeemedUser};
