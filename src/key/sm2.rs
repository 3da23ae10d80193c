// Copyright (C) Microsoft Corporation. All rights reserved.

//! SM2 key handles for the identity-bound signing engine.
//!
//! The SM2 backend materializes its own curve objects per call, so these
//! handles hold the raw encodings: a 32-byte big-endian private scalar
//! (zeroized on drop) and a 65-byte uncompressed public point.

use zeroize::Zeroizing;

use super::*;

/// Length of an SM2 private scalar in bytes.
pub const SM2_PRIVATE_KEY_SIZE: usize = 32;

/// Length of an uncompressed SM2 public point (`0x04 || x || y`).
pub const SM2_PUBLIC_KEY_SIZE: usize = 65;

/// An SM2 private key for identity-bound signature generation.
pub struct Sm2PrivateKey {
    scalar: Zeroizing<Vec<u8>>,
}

impl Sm2PrivateKey {
    /// Creates a key from a 32-byte big-endian private scalar.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidParameter`] if the length is wrong.
    pub fn from_bytes(scalar: &[u8]) -> Result<Self, CryptoError> {
        if scalar.len() != SM2_PRIVATE_KEY_SIZE {
            return Err(CryptoError::InvalidParameter);
        }
        Ok(Self {
            scalar: Zeroizing::new(scalar.to_vec()),
        })
    }

    /// Returns the raw scalar bytes.
    pub(crate) fn bytes(&self) -> &[u8] {
        &self.scalar
    }
}

/// An SM2 public key for identity-bound signature verification.
pub struct Sm2PublicKey {
    point: Vec<u8>,
}

impl Sm2PublicKey {
    /// Creates a key from a 65-byte uncompressed point encoding.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidParameter`] if the length is wrong or
    /// the encoding does not carry the uncompressed-point prefix.
    pub fn from_bytes(point: &[u8]) -> Result<Self, CryptoError> {
        if point.len() != SM2_PUBLIC_KEY_SIZE || point[0] != 0x04 {
            return Err(CryptoError::InvalidParameter);
        }
        Ok(Self {
            point: point.to_vec(),
        })
    }

    /// Returns the raw point encoding.
    pub(crate) fn bytes(&self) -> &[u8] {
        &self.point
    }
}
