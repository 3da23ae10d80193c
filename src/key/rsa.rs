// Copyright (C) Microsoft Corporation. All rights reserved.

//! RSA key handles.
//!
//! The signing engine works against `EVP_PKEY`-style contexts, so each
//! operation wraps the low-level RSA key into a fresh `PKey` at the start of
//! the call and drops it on return. The wrapper is call-scoped by design;
//! these handles only own the underlying (reference-counted) RSA key.

use openssl::pkey::{PKey, Private, Public};
use openssl::rsa::Rsa;

use super::*;

/// An RSA private key for signature generation.
pub struct RsaPrivateKey {
    rsa: Rsa<Private>,
}

impl RsaPrivateKey {
    /// Wraps an already-materialized OpenSSL RSA private key.
    pub fn new(rsa: Rsa<Private>) -> Self {
        Self { rsa }
    }

    /// Returns the modulus size in bytes (also the signature size).
    pub fn size(&self) -> usize {
        self.rsa.size() as usize
    }

    /// Builds the call-scoped `PKey` wrapper for one signing operation.
    pub(crate) fn pkey(&self) -> Result<PKey<Private>, CryptoError> {
        PKey::from_rsa(self.rsa.clone()).map_err(|e| {
            tracing::error!(openssl_error_stack = ?e, "RSA private key wrap failed");
            CryptoError::OutOfMemory
        })
    }
}

/// An RSA public key for signature verification.
pub struct RsaPublicKey {
    rsa: Rsa<Public>,
}

impl RsaPublicKey {
    /// Wraps an already-materialized OpenSSL RSA public key.
    pub fn new(rsa: Rsa<Public>) -> Self {
        Self { rsa }
    }

    /// Returns the modulus size in bytes.
    pub fn size(&self) -> usize {
        self.rsa.size() as usize
    }

    /// Builds the call-scoped `PKey` wrapper for one verification.
    pub(crate) fn pkey(&self) -> Result<PKey<Public>, CryptoError> {
        PKey::from_rsa(self.rsa.clone()).map_err(|e| {
            tracing::error!(openssl_error_stack = ?e, "RSA public key wrap failed");
            CryptoError::OutOfMemory
        })
    }
}
