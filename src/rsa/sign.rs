// Copyright (C) Microsoft Corporation. All rights reserved.

//! RSA digest-and-sign implementation.

use openssl::md_ctx::{MdCtx, MdCtxRef};
use openssl::pkey_ctx::PkeyCtxRef;
use openssl::rsa::Padding;
use openssl::sign::RsaPssSaltlen;

use super::*;

/// RSA padding scheme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsaPadding {
    /// PKCS#1 v1.5, the deterministic scheme.
    Pkcs1,
    /// PSS, the randomized scheme.
    Pss,
}

/// RSA digest-and-sign algorithm instance.
///
/// Configures the padding scheme, the digest bound into the signature, and
/// the PSS salt length. Signing hashes the message internally; callers pass
/// the raw message, never a precomputed digest.
pub struct RsaSignAlgo {
    padding: RsaPadding,
    digest: DigestAlgo,
    /// PSS salt length in bytes; `None` means "same as the digest size".
    /// Ignored for PKCS#1.
    salt_len: Option<usize>,
}

impl RsaSignAlgo {
    /// Creates an RSA instance with PKCS#1 v1.5 padding.
    pub fn with_pkcs1(digest: DigestAlgo) -> Self {
        Self {
            padding: RsaPadding::Pkcs1,
            digest,
            salt_len: None,
        }
    }

    /// Creates an RSA instance with PSS padding and a salt as long as the
    /// digest output.
    pub fn with_pss(digest: DigestAlgo) -> Self {
        Self {
            padding: RsaPadding::Pss,
            digest,
            salt_len: None,
        }
    }

    /// Creates an RSA instance with PSS padding and an explicit salt length.
    ///
    /// The verifier must configure the same salt length the signer used;
    /// this constructor is how a verifier matches a non-default signer.
    pub fn with_pss_saltlen(digest: DigestAlgo, salt_len: usize) -> Self {
        Self {
            padding: RsaPadding::Pss,
            digest,
            salt_len: Some(salt_len),
        }
    }

    /// Rejects PSS against a modulus too small for the digest.
    ///
    /// The PSS encoding needs two digest-length blocks plus two bytes of
    /// framing inside the modulus. A key that cannot fit them would fail
    /// deep inside the padding code; classify it as a caller error up front.
    fn check_key_size(&self, key_size: usize) -> Result<(), CryptoError> {
        if self.padding == RsaPadding::Pss && 2 * self.digest.size() + 2 > key_size {
            return Err(CryptoError::InvalidParameter);
        }
        Ok(())
    }

    /// Configures padding and PSS parameters on the key context returned by
    /// the digest-sign/verify init.
    fn configure_pkey_ctx<T>(&self, pkey_ctx: &mut PkeyCtxRef<T>) -> Result<(), CryptoError> {
        let padding = match self.padding {
            RsaPadding::Pkcs1 => Padding::PKCS1,
            RsaPadding::Pss => Padding::PKCS1_PSS,
        };
        pkey_ctx.set_rsa_padding(padding).map_err(|e| {
            tracing::error!(openssl_error_stack = ?e, "RSA padding config failed");
            CryptoError::Unexpected
        })?;
        if self.padding == RsaPadding::Pss {
            let salt_len = self.salt_len.unwrap_or_else(|| self.digest.size());
            pkey_ctx
                .set_rsa_pss_saltlen(RsaPssSaltlen::custom(salt_len as i32))
                .map_err(|e| {
                    tracing::error!(openssl_error_stack = ?e, "PSS salt length config failed");
                    CryptoError::Unexpected
                })?;
            pkey_ctx.set_rsa_mgf1_md(self.digest.md()).map_err(|e| {
                tracing::error!(openssl_error_stack = ?e, "PSS MGF1 digest config failed");
                CryptoError::Unexpected
            })?;
        }
        Ok(())
    }
}

impl SignOp for RsaSignAlgo {
    type Key = RsaPrivateKey;

    /// Signs `data`, hashing it with the configured digest first.
    ///
    /// The signature size equals the key modulus size. The sign call is
    /// two-pass: the first pass asks the context for the signature length,
    /// the second produces the signature.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidParameter`] if `data` is empty, the
    /// signature buffer is undersized, or a PSS modulus cannot fit the
    /// digest and salt.
    fn sign(
        &mut self,
        key: &Self::Key,
        data: &[u8],
        signature: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError> {
        fn len(ctx: &mut MdCtxRef, data: &[u8]) -> Result<usize, CryptoError> {
            ctx.digest_sign(data, None).map_err(|e| {
                tracing::error!(openssl_error_stack = ?e, "RSA signature length query failed");
                CryptoError::Unexpected
            })
        }

        if data.is_empty() {
            return Err(CryptoError::InvalidParameter);
        }
        self.check_key_size(key.size())?;

        let pkey = key.pkey()?;
        let mut ctx = MdCtx::new().map_err(|e| {
            tracing::error!(openssl_error_stack = ?e, "RSA sign context allocation failed");
            CryptoError::OutOfMemory
        })?;
        let pkey_ctx = ctx
            .digest_sign_init(Some(self.digest.md()), &pkey)
            .map_err(|e| {
                tracing::error!(openssl_error_stack = ?e, "RSA sign init failed");
                CryptoError::Unexpected
            })?;
        self.configure_pkey_ctx(pkey_ctx)?;

        let sig_len = len(&mut ctx, data)?;

        if let Some(signature) = signature {
            if signature.len() < sig_len {
                return Err(CryptoError::InvalidParameter);
            }
            let len = ctx
                .digest_sign(data, Some(&mut signature[..sig_len]))
                .map_err(|e| {
                    tracing::error!(openssl_error_stack = ?e, "RSA sign failed");
                    CryptoError::Unexpected
                })?;
            return Ok(len);
        }

        Ok(sig_len)
    }
}

impl VerifyOp for RsaSignAlgo {
    type Key = RsaPublicKey;

    /// Verifies `signature` over `data`.
    ///
    /// A signature that is well formed but wrong for the key and message
    /// verifies as [`Verification::Invalid`]; only backend failures surface
    /// as errors.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidParameter`] if `data` is empty or a PSS
    /// modulus cannot fit the digest and salt.
    fn verify(
        &mut self,
        key: &Self::Key,
        data: &[u8],
        signature: &[u8],
    ) -> Result<Verification, CryptoError> {
        if data.is_empty() {
            return Err(CryptoError::InvalidParameter);
        }
        self.check_key_size(key.size())?;

        let pkey = key.pkey()?;
        let mut ctx = MdCtx::new().map_err(|e| {
            tracing::error!(openssl_error_stack = ?e, "RSA verify context allocation failed");
            CryptoError::OutOfMemory
        })?;
        let pkey_ctx = ctx
            .digest_verify_init(Some(self.digest.md()), &pkey)
            .map_err(|e| {
                tracing::error!(openssl_error_stack = ?e, "RSA verify init failed");
                CryptoError::Unexpected
            })?;
        self.configure_pkey_ctx(pkey_ctx)?;

        ctx.digest_verify_update(data).map_err(|e| {
            tracing::error!(openssl_error_stack = ?e, "RSA verify update failed");
            CryptoError::Unexpected
        })?;

        // The backend reports a mismatched signature through the same error
        // path as an internal fault on the final call, so the split matters:
        // update failures above stay errors, a failed final is a mismatch.
        match ctx.digest_verify_final(signature) {
            Ok(valid) => Ok(valid.into()),
            Err(_) => Ok(Verification::Invalid),
        }
    }
}
