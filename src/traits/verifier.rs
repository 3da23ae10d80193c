// Copyright (C) Microsoft Corporation. All rights reserved.

//! Verification operation wrapper.

use super::*;

/// Verification operation wrapper.
///
/// Provides a unified entry point over the algorithm-specific
/// [`VerifyOp`] implementations.
pub struct Verifier;

impl Verifier {
    /// Performs single-operation signature verification.
    ///
    /// # Arguments
    ///
    /// * `algo` - The verification algorithm implementation
    /// * `key` - The public key to verify against
    /// * `data` - Message that was signed
    /// * `signature` - The signature to verify
    ///
    /// # Returns
    ///
    /// [`Verification::Valid`] for an authentic signature,
    /// [`Verification::Invalid`] for a well-formed mismatch.
    ///
    /// # Errors
    ///
    /// Returns an error only for internal failures, never for a mismatched
    /// signature.
    pub fn verify<Algo: VerifyOp>(
        algo: &mut Algo,
        key: &Algo::Key,
        data: &[u8],
        signature: &[u8],
    ) -> Result<Verification, CryptoError> {
        algo.verify(key, data, signature)
    }
}
