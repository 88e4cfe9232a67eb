//! Tests for the issuer service
