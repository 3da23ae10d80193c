// Copyright (C) Microsoft Corporation. All rights reserved.

//! SM4 counter (CTR) mode implementation.

use openssl::symm::{Cipher, Crypter, Mode};

use super::*;

/// SM4-CTR algorithm instance.
///
/// CTR mode turns the block cipher into a stream cipher: output length
/// equals input length for every input, no padding is ever applied, and the
/// encrypt and decrypt transforms are the same keystream XOR. Both
/// [`EncryptOp`] and [`DecryptOp`] are implemented on this type and drive
/// the identical single-pass update/finalize sequence.
pub struct Sm4CtrAlgo {
    iv: Vec<u8>,
}

impl Sm4CtrAlgo {
    /// Creates an SM4-CTR instance over the given initial counter block.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidParameter`] if the counter block is not
    /// exactly [`SM4_BLOCK_SIZE`] bytes.
    pub fn new(iv: &[u8]) -> Result<Self, CryptoError> {
        if iv.len() != SM4_BLOCK_SIZE {
            return Err(CryptoError::InvalidParameter);
        }
        Ok(Self { iv: iv.to_vec() })
    }

    /// Runs the single CTR pass over `input`.
    fn transform(
        &self,
        key: &SymmetricKey,
        mode: Mode,
        input: &[u8],
        output: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError> {
        if key.size() != SM4_KEY_SIZE {
            return Err(CryptoError::InvalidParameter);
        }
        let Some(output) = output else {
            return Ok(input.len());
        };
        if output.len() < input.len() {
            return Err(CryptoError::InvalidParameter);
        }

        let mut crypter = Crypter::new(Cipher::sm4_ctr(), mode, key.bytes(), Some(&self.iv))
            .map_err(|e| {
                tracing::error!(openssl_error_stack = ?e, "SM4-CTR context init failed");
                CryptoError::Unexpected
            })?;
        let mut count = crypter
            .update(input, &mut output[..input.len()])
            .map_err(|e| {
                tracing::error!(openssl_error_stack = ?e, "SM4-CTR update failed");
                CryptoError::Unexpected
            })?;
        count += crypter.finalize(&mut output[count..]).map_err(|e| {
            tracing::error!(openssl_error_stack = ?e, "SM4-CTR finalize failed");
            CryptoError::Unexpected
        })?;
        Ok(count)
    }
}

impl EncryptOp for Sm4CtrAlgo {
    type Key = SymmetricKey;

    /// Encrypts `input`; the ciphertext length equals the plaintext length.
    fn encrypt(
        &mut self,
        key: &Self::Key,
        input: &[u8],
        output: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError> {
        self.transform(key, Mode::Encrypt, input, output)
    }
}

impl DecryptOp for Sm4CtrAlgo {
    type Key = SymmetricKey;

    /// Decrypts `input`; the plaintext length equals the ciphertext length.
    fn decrypt(
        &mut self,
        key: &Self::Key,
        input: &[u8],
        output: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError> {
        self.transform(key, Mode::Decrypt, input, output)
    }
}
