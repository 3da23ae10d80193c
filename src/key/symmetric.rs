// Copyright (C) Microsoft Corporation. All rights reserved.

//! Raw symmetric key material.

use zeroize::Zeroizing;

use super::*;

/// A symmetric key for the AES-GCM and SM4 engines.
///
/// Holds raw key bytes in a zeroizing buffer: the material is overwritten
/// with zeros when the key is dropped. The accepted lengths are the AES key
/// sizes (16, 24, or 32 bytes); SM4 additionally requires exactly 16 bytes,
/// which the SM4 engines enforce per call.
pub struct SymmetricKey {
    bytes: Zeroizing<Vec<u8>>,
}

impl SymmetricKey {
    /// Creates a key from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidParameter`] if the length is not 16, 24,
    /// or 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        match bytes.len() {
            16 | 24 | 32 => Ok(Self {
                bytes: Zeroizing::new(bytes.to_vec()),
            }),
            _ => Err(CryptoError::InvalidParameter),
        }
    }

    /// Returns the key length in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the raw key bytes.
    pub(crate) fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
