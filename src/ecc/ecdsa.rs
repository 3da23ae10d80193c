// Copyright (C) Microsoft Corporation. All rights reserved.

//! ECDSA digest-then-sign implementation.

use openssl::ecdsa::EcdsaSig;

use super::*;

/// ECDSA algorithm instance.
///
/// Combines a digest algorithm with the raw EC signing primitive. The
/// message digest is computed into a zeroizing buffer and wiped as soon as
/// the signing or verification call returns.
pub struct EcdsaAlgo {
    digest: DigestAlgo,
}

impl EcdsaAlgo {
    /// Creates an ECDSA instance with the given digest algorithm.
    ///
    /// The digest output size should match the curve order size (SHA-256
    /// with P-256, SHA-384 with P-384); mismatches are accepted and handled
    /// by truncation in the underlying primitive, per the ECDSA standard.
    pub fn new(digest: DigestAlgo) -> Self {
        Self { digest }
    }

    /// Upper bound on the DER signature size for the key's curve.
    ///
    /// DER encoding is a SEQUENCE of the two order-sized integers, each of
    /// which may need a leading zero byte; the actual signature is usually a
    /// byte or two shorter than this bound.
    fn max_signature_size(order_bits: usize) -> usize {
        let order_size = (order_bits + 7) / 8;
        2 * (order_size + 3) + 3
    }
}

impl SignOp for EcdsaAlgo {
    type Key = EcPrivateKey;

    /// Signs `data`, hashing it with the configured digest first.
    ///
    /// The size query returns an upper bound: ECDSA signatures are DER
    /// encoded and their exact length is only known once the signature
    /// exists. The return value from the signing call is the exact length.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidParameter`] if `data` is empty or the
    /// signature buffer is undersized.
    fn sign(
        &mut self,
        key: &Self::Key,
        data: &[u8],
        signature: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError> {
        if data.is_empty() {
            return Err(CryptoError::InvalidParameter);
        }
        let max_len = Self::max_signature_size(key.ec_key().group().order_bits() as usize);
        let Some(signature) = signature else {
            return Ok(max_len);
        };
        if signature.len() < max_len {
            return Err(CryptoError::InvalidParameter);
        }

        let digest = self.digest.compute(data)?;
        let sig = EcdsaSig::sign(&digest, key.ec_key()).map_err(|e| {
            tracing::error!(openssl_error_stack = ?e, "ECDSA sign failed");
            CryptoError::Unexpected
        })?;
        let der = sig.to_der().map_err(|e| {
            tracing::error!(openssl_error_stack = ?e, "ECDSA signature encoding failed");
            CryptoError::Unexpected
        })?;
        signature[..der.len()].copy_from_slice(&der);
        Ok(der.len())
    }
}

impl VerifyOp for EcdsaAlgo {
    type Key = EcPublicKey;

    /// Verifies a DER-encoded `signature` over `data`.
    ///
    /// A signature that does not parse as DER verifies as
    /// [`Verification::Invalid`]; corruption anywhere in the signature is a
    /// mismatch, not an internal failure.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidParameter`] if `data` is empty.
    fn verify(
        &mut self,
        key: &Self::Key,
        data: &[u8],
        signature: &[u8],
    ) -> Result<Verification, CryptoError> {
        if data.is_empty() {
            return Err(CryptoError::InvalidParameter);
        }
        let Ok(sig) = EcdsaSig::from_der(signature) else {
            return Ok(Verification::Invalid);
        };

        let digest = self.digest.compute(data)?;
        let valid = sig.verify(&digest, key.ec_key()).map_err(|e| {
            tracing::error!(openssl_error_stack = ?e, "ECDSA verify failed");
            CryptoError::Unexpected
        })?;
        Ok(valid.into())
    }
}
