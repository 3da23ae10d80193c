// Copyright (C) Microsoft Corporation. All rights reserved.

//! Digest algorithm selection for the signature engines.
//!
//! Each digest-and-sign operation takes a [`DigestAlgo`] naming the hash to
//! bind into the signature. The SHA-2 family serves the RSA and ECDSA
//! engines; SM3 serves the SM2 engine.

use openssl::hash::MessageDigest;
use openssl::md::{Md, MdRef};
use zeroize::{Zeroize, Zeroizing};

use super::*;

/// Digest algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgo {
    /// SHA-224, 28-byte output.
    Sha224,
    /// SHA-256, 32-byte output.
    Sha256,
    /// SHA-384, 48-byte output.
    Sha384,
    /// SHA-512, 64-byte output.
    Sha512,
    /// SM3, 32-byte output. Required by the SM2 engine.
    Sm3,
}

impl DigestAlgo {
    /// Returns the digest output size in bytes.
    pub fn size(self) -> usize {
        match self {
            DigestAlgo::Sha224 => 28,
            DigestAlgo::Sha256 => 32,
            DigestAlgo::Sha384 => 48,
            DigestAlgo::Sha512 => 64,
            DigestAlgo::Sm3 => 32,
        }
    }

    /// Returns the OpenSSL message digest for the `EVP_DigestSign`/`Verify`
    /// family of contexts.
    pub(crate) fn md(self) -> &'static MdRef {
        match self {
            DigestAlgo::Sha224 => Md::sha224(),
            DigestAlgo::Sha256 => Md::sha256(),
            DigestAlgo::Sha384 => Md::sha384(),
            DigestAlgo::Sha512 => Md::sha512(),
            DigestAlgo::Sm3 => Md::sm3(),
        }
    }

    /// Returns the OpenSSL message digest for standalone hashing.
    pub(crate) fn message_digest(self) -> MessageDigest {
        match self {
            DigestAlgo::Sha224 => MessageDigest::sha224(),
            DigestAlgo::Sha256 => MessageDigest::sha256(),
            DigestAlgo::Sha384 => MessageDigest::sha384(),
            DigestAlgo::Sha512 => MessageDigest::sha512(),
            DigestAlgo::Sm3 => MessageDigest::sm3(),
        }
    }

    /// Computes the digest of `data` into a zeroizing buffer.
    ///
    /// The intermediate OpenSSL digest output is wiped before this returns;
    /// the returned buffer zeroes itself when dropped, so the digest never
    /// outlives the operation that needed it, on any exit path.
    pub(crate) fn compute(self, data: &[u8]) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
        let mut hasher = openssl::hash::Hasher::new(self.message_digest()).map_err(|e| {
            tracing::error!(openssl_error_stack = ?e, "digest context init failed");
            CryptoError::OutOfMemory
        })?;
        hasher.update(data).map_err(|e| {
            tracing::error!(openssl_error_stack = ?e, "digest update failed");
            CryptoError::Unexpected
        })?;
        let mut bytes = hasher.finish().map_err(|e| {
            tracing::error!(openssl_error_stack = ?e, "digest finalize failed");
            CryptoError::Unexpected
        })?;
        let digest = Zeroizing::new(bytes.to_vec());
        bytes.zeroize();
        Ok(digest)
    }
}
