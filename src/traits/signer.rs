// Copyright (C) Microsoft Corporation. All rights reserved.

//! Signature operation wrapper.

use super::*;

/// Signature operation wrapper.
///
/// Provides a unified entry point over the algorithm-specific
/// [`SignOp`] implementations.
pub struct Signer;

impl Signer {
    /// Performs single-operation signing.
    ///
    /// # Arguments
    ///
    /// * `algo` - The signing algorithm implementation
    /// * `key` - The private key to sign with
    /// * `data` - Message to sign
    /// * `signature` - Optional output buffer. If `None`, only calculates
    ///   the required size.
    ///
    /// # Errors
    ///
    /// Returns an error if the signature buffer is too small, the key is
    /// unsuitable for the configured mode, or the underlying primitive
    /// fails.
    pub fn sign<Algo: SignOp>(
        algo: &mut Algo,
        key: &Algo::Key,
        data: &[u8],
        signature: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError> {
        algo.sign(key, data, signature)
    }

    /// Performs single-operation signing and returns the signature as a
    /// vector, sized by a preceding size query.
    pub fn sign_vec<Algo: SignOp>(
        algo: &mut Algo,
        key: &Algo::Key,
        data: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let sig_len = Self::sign(algo, key, data, None)?;
        let mut signature = vec![0u8; sig_len];
        let written = Self::sign(algo, key, data, Some(&mut signature))?;
        signature.truncate(written);
        Ok(signature)
    }
}
