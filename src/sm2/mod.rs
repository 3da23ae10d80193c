// Copyright (C) Microsoft Corporation. All rights reserved.

//! SM2 identity-bound signature generation and verification.
//!
//! SM2 (GB/T 32918) differs from plain ECDSA in that the signed digest is
//! computed over `ZA || message`, where ZA binds the signer identity and the
//! public key into the hash. The signer and verifier must agree on the
//! identity string or verification fails. Signatures are the fixed 64-byte
//! concatenation of the big-endian r and s components.

mod sign;

pub use sign::*;

pub(crate) use super::*;

/// SM2 signature size in bytes (`r || s`, each 32 bytes big-endian).
pub const SM2_SIGNATURE_SIZE: usize = 64;

/// Default signer identity from GB/T 32918 used when a protocol does not
/// assign one.
pub const SM2_DEFAULT_IDENTITY: &str = "1234567812345678";

#[cfg(test)]
mod tests;
