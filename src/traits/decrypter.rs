// Copyright (C) Microsoft Corporation. All rights reserved.

//! Decryption operation wrapper.

use super::*;

/// Decryption operation wrapper.
///
/// Provides a unified entry point over the algorithm-specific
/// [`DecryptOp`] implementations.
pub struct Decrypter;

impl Decrypter {
    /// Performs a single-operation decryption.
    ///
    /// # Arguments
    ///
    /// * `algo` - The decryption algorithm implementation
    /// * `key` - The key to decrypt with
    /// * `input` - Ciphertext to decrypt
    /// * `output` - Optional output buffer. If `None`, only calculates the
    ///   required size.
    ///
    /// # Errors
    ///
    /// Returns an error if the output buffer is too small, the key does not
    /// fit the algorithm, authentication fails for an AEAD mode, or the
    /// underlying cipher fails.
    pub fn decrypt<Algo: DecryptOp>(
        algo: &mut Algo,
        key: &Algo::Key,
        input: &[u8],
        output: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError> {
        algo.decrypt(key, input, output)
    }

    /// Performs a single-operation decryption and returns the result as a
    /// vector, sized by a preceding size query.
    pub fn decrypt_vec<Algo: DecryptOp>(
        algo: &mut Algo,
        key: &Algo::Key,
        input: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let len = Self::decrypt(algo, key, input, None)?;
        let mut output = vec![0u8; len];
        let written = Self::decrypt(algo, key, input, Some(&mut output))?;
        output.truncate(written);
        Ok(output)
    }
}
