//! Domain entities

pub mod verification_record;
pub mod verified_profile;

pub use verification_record::{ProfileMetadata, VerificationRecord, CODE_LENGTH};
pub use verified_profile::{ProfileStatus, VerifiedProfile};
