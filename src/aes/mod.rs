// Copyright (C) Microsoft Corporation. All rights reserved.

//! AES-GCM authenticated encryption.
//!
//! The only AES mode exposed by this core is GCM: the key-management service
//! in front of it always wants authenticated encryption for AES keys, and
//! the unauthenticated block modes are reserved for the SM4 engine.
//!
//! # Security Considerations
//!
//! - Never reuse the same key-IV pair for different plaintexts
//! - On decrypt, a [`CryptoError::MacMismatch`] means the output buffer
//!   contents are untrustworthy and must be discarded

mod gcm;

pub use gcm::*;

pub(crate) use super::*;

#[cfg(test)]
mod tests;
