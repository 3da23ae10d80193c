// Copyright (C) Microsoft Corporation. All rights reserved.

//! SM4 cipher-block-chaining (CBC) mode implementation.
//!
//! Padding here is content-length-derived on both sides: PKCS#7 padding is
//! enabled only when the input length is not a multiple of the block size.
//! On decrypt, a ciphertext whose length is an exact block multiple skips
//! the finalize call entirely; with the encrypt policy above, such a
//! ciphertext never carries padding that finalize would need to strip, and
//! invoking finalize with padding enabled would fail the unpad check. Both
//! halves of the policy must stay in lockstep for round trips to work.

use openssl::symm::{Cipher, Crypter, Mode};

use super::*;

/// SM4-CBC algorithm instance.
///
/// When padding was applied on the encrypt side (plaintext length not a
/// block multiple), the decrypt pass reports the padded length and the
/// caller truncates to its declared plaintext length; the padding decision
/// is not recoverable from the ciphertext alone.
pub struct Sm4CbcAlgo {
    iv: Vec<u8>,
}

impl Sm4CbcAlgo {
    /// Creates an SM4-CBC instance over the given IV.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidParameter`] if the IV is not exactly
    /// [`SM4_BLOCK_SIZE`] bytes.
    pub fn new(iv: &[u8]) -> Result<Self, CryptoError> {
        if iv.len() != SM4_BLOCK_SIZE {
            return Err(CryptoError::InvalidParameter);
        }
        Ok(Self { iv: iv.to_vec() })
    }

    fn crypter(&self, key: &SymmetricKey, mode: Mode, pad: bool) -> Result<Crypter, CryptoError> {
        if key.size() != SM4_KEY_SIZE {
            return Err(CryptoError::InvalidParameter);
        }
        let mut crypter = Crypter::new(Cipher::sm4_cbc(), mode, key.bytes(), Some(&self.iv))
            .map_err(|e| {
                tracing::error!(openssl_error_stack = ?e, "SM4-CBC context init failed");
                CryptoError::Unexpected
            })?;
        crypter.pad(pad);
        Ok(crypter)
    }
}

impl EncryptOp for Sm4CbcAlgo {
    type Key = SymmetricKey;

    /// Encrypts `input`, padding only when the plaintext length is not a
    /// block multiple.
    ///
    /// The size query returns `input.len() + SM4_BLOCK_SIZE`: the block
    /// cipher update requires one block of headroom regardless of whether
    /// padding will be applied. The returned count is the exact ciphertext
    /// length.
    fn encrypt(
        &mut self,
        key: &Self::Key,
        input: &[u8],
        output: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError> {
        let required = input.len() + SM4_BLOCK_SIZE;
        let Some(output) = output else {
            return Ok(required);
        };
        if output.len() < required {
            return Err(CryptoError::InvalidParameter);
        }

        let pad = input.len() % SM4_BLOCK_SIZE != 0;
        let mut crypter = self.crypter(key, Mode::Encrypt, pad)?;
        let mut count = crypter.update(input, output).map_err(|e| {
            tracing::error!(openssl_error_stack = ?e, "SM4-CBC encrypt update failed");
            CryptoError::Unexpected
        })?;
        count += crypter.finalize(&mut output[count..]).map_err(|e| {
            tracing::error!(openssl_error_stack = ?e, "SM4-CBC encrypt finalize failed");
            CryptoError::Unexpected
        })?;
        Ok(count)
    }
}

impl DecryptOp for Sm4CbcAlgo {
    type Key = SymmetricKey;

    /// Decrypts `input`, mirroring the encrypt-side padding policy.
    ///
    /// When the ciphertext length is an exact block multiple the finalize
    /// call is skipped; the update pass has already produced every block
    /// and finalize would only attempt to strip padding that was never
    /// applied.
    fn decrypt(
        &mut self,
        key: &Self::Key,
        input: &[u8],
        output: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError> {
        let required = input.len() + SM4_BLOCK_SIZE;
        let Some(output) = output else {
            return Ok(required);
        };
        if output.len() < required {
            return Err(CryptoError::InvalidParameter);
        }

        let pad = input.len() % SM4_BLOCK_SIZE != 0;
        let mut crypter = self.crypter(key, Mode::Decrypt, pad)?;
        let mut count = crypter.update(input, output).map_err(|e| {
            tracing::error!(openssl_error_stack = ?e, "SM4-CBC decrypt update failed");
            CryptoError::Unexpected
        })?;
        if input.len() % SM4_BLOCK_SIZE != 0 {
            count += crypter.finalize(&mut output[count..]).map_err(|e| {
                tracing::error!(openssl_error_stack = ?e, "SM4-CBC decrypt finalize failed");
                CryptoError::Unexpected
            })?;
        }
        Ok(count)
    }
}
