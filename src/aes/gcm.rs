// Copyright (C) Microsoft Corporation. All rights reserved.

//! AES-GCM (Galois/Counter Mode) implementation.

use openssl::cipher::{Cipher, CipherRef};
use openssl::cipher_ctx::CipherCtx;

use super::*;

/// AES-GCM algorithm instance.
///
/// Carries the per-operation mode parameters: IV, optional additional
/// authenticated data, and the 16-byte authentication tag. The tag is an
/// output of [`EncryptOp::encrypt`] (read it back with [`AesGcmAlgo::tag`])
/// and an input to [`DecryptOp::decrypt`].
///
/// The key size selects the cipher: 16, 24, or 32 bytes for AES-128/192/256.
pub struct AesGcmAlgo {
    aad: Option<Vec<u8>>,
    iv: Vec<u8>,
    tag: Vec<u8>,
}

impl AesGcmAlgo {
    /// Authentication tag size in bytes. GCM tags in this core are always
    /// full length.
    pub const TAG_SIZE: usize = 16;

    /// Default IV size in bytes. Other non-zero lengths are accepted and
    /// configured on the cipher context before the key/IV bind.
    pub const DEFAULT_IV_SIZE: usize = 12;

    /// Creates an AES-GCM instance for encryption.
    ///
    /// # Arguments
    ///
    /// * `iv` - Initialization vector; 12 bytes unless the caller explicitly
    ///   chose another length.
    /// * `aad` - Optional additional authenticated data. Authenticated but
    ///   never written to the output.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidParameter`] if the IV is empty.
    pub fn for_encrypt(iv: &[u8], aad: Option<&[u8]>) -> Result<Self, CryptoError> {
        if iv.is_empty() {
            return Err(CryptoError::InvalidParameter);
        }
        Ok(Self {
            aad: aad.map(|a| a.to_vec()),
            iv: iv.to_vec(),
            tag: vec![0u8; Self::TAG_SIZE],
        })
    }

    /// Creates an AES-GCM instance for decryption.
    ///
    /// # Arguments
    ///
    /// * `iv` - Initialization vector used at encryption time.
    /// * `tag` - The 16-byte authentication tag to verify against.
    /// * `aad` - The additional authenticated data used at encryption time,
    ///   if any.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidParameter`] if the IV is empty or the
    /// tag is not exactly [`AesGcmAlgo::TAG_SIZE`] bytes.
    pub fn for_decrypt(iv: &[u8], tag: &[u8], aad: Option<&[u8]>) -> Result<Self, CryptoError> {
        if iv.is_empty() || tag.len() != Self::TAG_SIZE {
            return Err(CryptoError::InvalidParameter);
        }
        Ok(Self {
            aad: aad.map(|a| a.to_vec()),
            iv: iv.to_vec(),
            tag: tag.to_vec(),
        })
    }

    /// Returns the authentication tag produced by the last encryption.
    pub fn tag(&self) -> &[u8] {
        &self.tag
    }

    fn cipher(key: &SymmetricKey) -> Result<&'static CipherRef, CryptoError> {
        match key.size() {
            16 => Ok(Cipher::aes_128_gcm()),
            24 => Ok(Cipher::aes_192_gcm()),
            32 => Ok(Cipher::aes_256_gcm()),
            _ => Err(CryptoError::InvalidParameter),
        }
    }

    /// Creates the cipher context and binds cipher, IV length, key, and IV.
    ///
    /// The bind is two-phase: the cipher is selected first so that a
    /// non-default IV length can be configured, then the key and IV are
    /// loaded. The context is call-scoped; dropping it releases the OpenSSL
    /// resources on every exit path.
    fn init_ctx(&self, key: &SymmetricKey, encrypt: bool) -> Result<CipherCtx, CryptoError> {
        let cipher = Self::cipher(key)?;
        let mut ctx = CipherCtx::new().map_err(|e| {
            tracing::error!(openssl_error_stack = ?e, "GCM cipher context allocation failed");
            CryptoError::Unexpected
        })?;

        let first = if encrypt {
            ctx.encrypt_init(Some(cipher), None, None)
        } else {
            ctx.decrypt_init(Some(cipher), None, None)
        };
        first.map_err(|e| {
            tracing::error!(openssl_error_stack = ?e, "GCM cipher init failed");
            CryptoError::Unexpected
        })?;

        if self.iv.len() != Self::DEFAULT_IV_SIZE {
            ctx.set_iv_length(self.iv.len()).map_err(|e| {
                tracing::error!(openssl_error_stack = ?e, "GCM IV length config failed");
                CryptoError::Unexpected
            })?;
        }

        let bind = if encrypt {
            ctx.encrypt_init(None, Some(key.bytes()), Some(&self.iv))
        } else {
            ctx.decrypt_init(None, Some(key.bytes()), Some(&self.iv))
        };
        bind.map_err(|e| {
            tracing::error!(openssl_error_stack = ?e, "GCM key/IV bind failed");
            CryptoError::Unexpected
        })?;

        if let Some(aad) = &self.aad {
            if !aad.is_empty() {
                ctx.cipher_update(aad, None).map_err(|e| {
                    tracing::error!(openssl_error_stack = ?e, "GCM AAD update failed");
                    CryptoError::Unexpected
                })?;
            }
        }
        Ok(ctx)
    }
}

impl EncryptOp for AesGcmAlgo {
    type Key = SymmetricKey;

    /// Encrypts `input` and computes the authentication tag.
    ///
    /// The ciphertext is exactly as long as the plaintext; the tag is
    /// retrieved separately via [`AesGcmAlgo::tag`] after this returns.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidParameter`] if the plaintext is empty
    /// or the output buffer is smaller than the plaintext.
    fn encrypt(
        &mut self,
        key: &Self::Key,
        input: &[u8],
        output: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError> {
        if input.is_empty() {
            return Err(CryptoError::InvalidParameter);
        }
        let Some(output) = output else {
            return Ok(input.len());
        };
        if output.len() < input.len() {
            return Err(CryptoError::InvalidParameter);
        }

        let mut ctx = self.init_ctx(key, true)?;
        let count = ctx
            .cipher_update(input, Some(&mut output[..input.len()]))
            .map_err(|e| {
                tracing::error!(openssl_error_stack = ?e, "GCM encrypt update failed");
                CryptoError::Unexpected
            })?;
        let mut final_block = [0u8; 16];
        ctx.cipher_final(&mut final_block).map_err(|e| {
            tracing::error!(openssl_error_stack = ?e, "GCM encrypt finalize failed");
            CryptoError::Unexpected
        })?;
        ctx.tag(&mut self.tag).map_err(|e| {
            tracing::error!(openssl_error_stack = ?e, "GCM tag extraction failed");
            CryptoError::Unexpected
        })?;
        Ok(count)
    }
}

impl DecryptOp for AesGcmAlgo {
    type Key = SymmetricKey;

    /// Decrypts `input` and verifies the authentication tag.
    ///
    /// The tag is bound to the context after the ciphertext is processed and
    /// before finalization; finalization performs the authenticity check.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidParameter`] if the ciphertext is empty
    /// or the output buffer is smaller than the ciphertext, and
    /// [`CryptoError::MacMismatch`] if tag verification fails. On a tag
    /// mismatch the bytes already written to `output` are untrustworthy and
    /// must be discarded.
    fn decrypt(
        &mut self,
        key: &Self::Key,
        input: &[u8],
        output: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError> {
        if input.is_empty() {
            return Err(CryptoError::InvalidParameter);
        }
        let Some(output) = output else {
            return Ok(input.len());
        };
        if output.len() < input.len() {
            return Err(CryptoError::InvalidParameter);
        }

        let mut ctx = self.init_ctx(key, false)?;
        let count = ctx
            .cipher_update(input, Some(&mut output[..input.len()]))
            .map_err(|e| {
                tracing::error!(openssl_error_stack = ?e, "GCM decrypt update failed");
                CryptoError::Unexpected
            })?;
        ctx.set_tag(&self.tag).map_err(|e| {
            tracing::error!(openssl_error_stack = ?e, "GCM tag bind failed");
            CryptoError::Unexpected
        })?;

        // A failed finalize is the tag check failing, nothing else.
        let mut final_block = [0u8; 16];
        ctx.cipher_final(&mut final_block)
            .map_err(|_| CryptoError::MacMismatch)?;
        Ok(count)
    }
}
