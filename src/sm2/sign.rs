// Copyright (C) Microsoft Corporation. All rights reserved.

//! SM2 digest-then-sign implementation over the libsm backend.

use libsm::sm2::signature::{SigCtx, Signature};
use zeroize::Zeroizing;

use super::*;

/// SM2 algorithm instance.
///
/// Carries the signer identity bound into the ZA digest. The curve context
/// is materialized per call and dropped on return, like the cipher and
/// digest contexts elsewhere in this crate.
pub struct Sm2SignAlgo {
    identity: String,
}

impl Sm2SignAlgo {
    /// Creates an SM2 instance with the given identity and digest algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidParameter`] for any digest other than
    /// [`DigestAlgo::Sm3`]; the ZA construction is defined over SM3 only.
    pub fn new(identity: &str, digest: DigestAlgo) -> Result<Self, CryptoError> {
        if digest != DigestAlgo::Sm3 {
            return Err(CryptoError::InvalidParameter);
        }
        Ok(Self {
            identity: identity.to_string(),
        })
    }

    /// Computes the ZA-augmented SM3 digest of `data` into a zeroizing
    /// buffer.
    fn za_digest(
        &self,
        ctx: &SigCtx,
        pk: &libsm::sm2::ecc::Point,
        data: &[u8],
    ) -> Result<Zeroizing<[u8; 32]>, CryptoError> {
        let digest = ctx.hash(&self.identity, pk, data).map_err(|e| {
            tracing::error!(error = ?e, "SM2 ZA digest failed");
            CryptoError::Unexpected
        })?;
        Ok(Zeroizing::new(digest))
    }
}

impl SignOp for Sm2SignAlgo {
    type Key = Sm2PrivateKey;

    /// Signs `data` with the ZA-augmented SM3 digest.
    ///
    /// The public key is derived from the private scalar because ZA binds
    /// the public point into the digest. Signatures are always exactly
    /// [`SM2_SIGNATURE_SIZE`] bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidParameter`] if `data` is empty, the
    /// signature buffer is undersized, or the private scalar is not a valid
    /// curve scalar.
    fn sign(
        &mut self,
        key: &Self::Key,
        data: &[u8],
        signature: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError> {
        if data.is_empty() {
            return Err(CryptoError::InvalidParameter);
        }
        let Some(signature) = signature else {
            return Ok(SM2_SIGNATURE_SIZE);
        };
        if signature.len() < SM2_SIGNATURE_SIZE {
            return Err(CryptoError::InvalidParameter);
        }

        let ctx = SigCtx::new();
        let sk = key.bytes();
        let sk = ctx.load_seckey(sk).map_err(|e| {
            tracing::error!(error = ?e, "SM2 private scalar rejected");
            CryptoError::InvalidParameter
        })?;
        let pk = ctx.pk_from_sk(&sk).map_err(|e| {
            tracing::error!(error = ?e, "SM2 public point derivation failed");
            CryptoError::Unexpected
        })?;

        let digest = self.za_digest(&ctx, &pk, data)?;
        let sig = ctx.sign_raw(&digest[..], &sk).map_err(|e| {
            tracing::error!(error = ?e, "SM2 sign failed");
            CryptoError::Unexpected
        })?;

        // Fixed-width encoding: each component left-padded to 32 bytes.
        let r = sig.get_r().to_bytes_be();
        let s = sig.get_s().to_bytes_be();
        if r.len() > 32 || s.len() > 32 {
            tracing::error!("SM2 signature component exceeds the order size");
            return Err(CryptoError::Unexpected);
        }
        let out = &mut signature[..SM2_SIGNATURE_SIZE];
        out.fill(0);
        out[32 - r.len()..32].copy_from_slice(&r);
        out[64 - s.len()..64].copy_from_slice(&s);
        Ok(SM2_SIGNATURE_SIZE)
    }
}

impl VerifyOp for Sm2SignAlgo {
    type Key = Sm2PublicKey;

    /// Verifies a 64-byte `r || s` signature over `data`.
    ///
    /// The same identity used at signing time must be configured here; a
    /// different identity produces a different ZA digest and the signature
    /// verifies as [`Verification::Invalid`].
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidParameter`] if `data` is empty, the
    /// signature is not exactly [`SM2_SIGNATURE_SIZE`] bytes, or the public
    /// point does not decode onto the curve.
    fn verify(
        &mut self,
        key: &Self::Key,
        data: &[u8],
        signature: &[u8],
    ) -> Result<Verification, CryptoError> {
        if data.is_empty() || signature.len() != SM2_SIGNATURE_SIZE {
            return Err(CryptoError::InvalidParameter);
        }

        let ctx = SigCtx::new();
        let pk = ctx.load_pubkey(key.bytes()).map_err(|e| {
            tracing::error!(error = ?e, "SM2 public point rejected");
            CryptoError::InvalidParameter
        })?;

        let digest = self.za_digest(&ctx, &pk, data)?;
        let sig = Signature::new(&signature[..32], &signature[32..]);

        // Out-of-range r or s surfaces from the backend as an error; a
        // corrupted component is a mismatch, not an internal failure.
        match ctx.verify_raw(&digest[..], &pk, &sig) {
            Ok(valid) => Ok(valid.into()),
            Err(_) => Ok(Verification::Invalid),
        }
    }
}
