// Copyright (C) Microsoft Corporation. All rights reserved.

//! Encryption operation wrapper.

use super::*;

/// Encryption operation wrapper.
///
/// Provides a unified entry point over the algorithm-specific
/// [`EncryptOp`] implementations.
pub struct Encrypter;

impl Encrypter {
    /// Performs a single-operation encryption.
    ///
    /// # Arguments
    ///
    /// * `algo` - The encryption algorithm implementation
    /// * `key` - The key to encrypt with
    /// * `input` - Plaintext to encrypt
    /// * `output` - Optional output buffer. If `None`, only calculates the
    ///   required size.
    ///
    /// # Errors
    ///
    /// Returns an error if the output buffer is too small, the key does not
    /// fit the algorithm, or the underlying cipher fails.
    pub fn encrypt<Algo: EncryptOp>(
        algo: &mut Algo,
        key: &Algo::Key,
        input: &[u8],
        output: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError> {
        algo.encrypt(key, input, output)
    }

    /// Performs a single-operation encryption and returns the result as a
    /// vector, sized by a preceding size query.
    pub fn encrypt_vec<Algo: EncryptOp>(
        algo: &mut Algo,
        key: &Algo::Key,
        input: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let len = Self::encrypt(algo, key, input, None)?;
        let mut output = vec![0u8; len];
        let written = Self::encrypt(algo, key, input, Some(&mut output))?;
        output.truncate(written);
        Ok(output)
    }
}
