//! Business services
//!
//! - `issuer` - generates codes and writes them to the code store
//! - `redeemer` - validates submitted codes and records verified users
//! - `session` - signs and verifies web session tokens

pub mod issuer;
pub mod redeemer;
pub mod session;

pub use issuer::{IssuedCode, Issuer, IssuerConfig, IssuerService, QueueIssuerService};
pub use redeemer::{
    QueueRedeemerService, RedeemRequest, RedeemedUser, Redeemer, RedeemerService,
};
pub use session::{SessionClaims, SessionService};
