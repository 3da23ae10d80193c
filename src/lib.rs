// Copyright (C) Microsoft Corporation. All rights reserved.

//! Stateless cryptographic operation core for enclave-hosted key management.
//!
//! This crate implements the in-enclave half of a key management service:
//! given already-unwrapped key material and a fully specified request, it
//! performs exactly one cryptographic operation and returns a status plus the
//! populated caller-provided output. It includes support for:
//!
//! - **AES-GCM**: Authenticated encryption/decryption with associated data
//! - **SM4**: Unauthenticated encryption/decryption in CTR and CBC modes
//! - **RSA**: Sign/verify with PKCS#1 v1.5 and PSS padding
//! - **ECDSA**: Digest-then-sign over NIST curves
//! - **SM2**: Identity-bound sign/verify (ZA-augmented digest)
//!
//! # Design
//!
//! Every operation is synchronous, reentrant, and call-scoped: cipher and
//! digest contexts are created at the start of a call and dropped before it
//! returns, on success and error paths alike. Transient digests and secret
//! key bytes live in zeroizing buffers so nothing sensitive outlives the
//! call. Key generation, wrapping, attestation, and transport are the
//! caller's concern; this crate only borrows materialized key objects.
//!
//! # Buffer Conventions
//!
//! Operations take caller-allocated output buffers and never grow them.
//! Passing `None` for an output performs a size query; passing `Some(buf)`
//! performs the operation and returns the exact number of bytes written.

mod digest;
mod key;

mod aes;
mod ecc;
mod rsa;
mod sm2;
mod sm4;

mod traits;

pub use aes::*;
pub use digest::*;
pub use ecc::*;
pub use key::*;
pub use rsa::*;
pub use sm2::*;
pub use sm4::*;
use thiserror::Error;
pub use traits::*;

/// Status vocabulary shared by every operation in this crate.
///
/// Success is expressed as `Ok(..)`; each variant below is a terminal
/// classification made at the point of failure, after all contexts allocated
/// by the call have been released and sensitive scratch buffers wiped. No
/// partial results are ever returned alongside an error.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum CryptoError {
    /// A required input was empty or malformed, a key/IV/tag had the wrong
    /// size for the selected algorithm, an output buffer was undersized, or
    /// the key is too small for the chosen padding mode.
    #[error("invalid parameter")]
    InvalidParameter,

    /// Allocation of a cryptographic context or key wrapper failed.
    #[error("out of memory")]
    OutOfMemory,

    /// AEAD authentication failed. The decrypted output is untrustworthy and
    /// must be discarded by the caller; this is deliberately distinct from
    /// [`CryptoError::Unexpected`] so it cannot be misread as a retryable
    /// internal fault.
    #[error("authentication tag mismatch")]
    MacMismatch,

    /// Any other internal failure: context initialization, digest, padding
    /// configuration, or a signature primitive error.
    #[error("unexpected cryptographic failure")]
    Unexpected,
}

/// Outcome of a signature or tag verification that completed without an
/// internal error.
///
/// Verification primitives have three results: valid, well-formed but
/// mismatched, and malformed/internal failure. The first two are successful
/// call outcomes carried by this type; the third is a [`CryptoError`]. A
/// signature whose encoding cannot even be parsed counts as [`Invalid`],
/// not as an error: a flipped byte in a signature is a mismatch.
///
/// [`Invalid`]: Verification::Invalid
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Verification {
    /// The signature is authentic for the given key and message.
    Valid,
    /// The signature is well formed but does not match the key and message.
    Invalid,
}

impl Verification {
    /// Returns `true` for [`Verification::Valid`].
    pub fn is_valid(self) -> bool {
        self == Verification::Valid
    }
}

impl From<bool> for Verification {
    fn from(valid: bool) -> Self {
        if valid {
            Verification::Valid
        } else {
            Verification::Invalid
        }
    }
}
