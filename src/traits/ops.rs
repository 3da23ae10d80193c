// Copyright (C) Microsoft Corporation. All rights reserved.

//! Core operation trait definitions.

use super::*;

/// A one-shot encryption operation.
pub trait EncryptOp {
    /// The key family this operation accepts.
    type Key;

    /// Encrypts `input` into `output`.
    ///
    /// With `output` set to `None`, returns the required output buffer size
    /// without touching the cipher. Otherwise returns the number of bytes
    /// written.
    fn encrypt(
        &mut self,
        key: &Self::Key,
        input: &[u8],
        output: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError>;
}

/// A one-shot decryption operation.
pub trait DecryptOp {
    /// The key family this operation accepts.
    type Key;

    /// Decrypts `input` into `output`.
    ///
    /// With `output` set to `None`, returns the required output buffer size
    /// without touching the cipher. Otherwise returns the number of bytes
    /// written.
    fn decrypt(
        &mut self,
        key: &Self::Key,
        input: &[u8],
        output: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError>;
}

/// A one-shot signature generation operation.
pub trait SignOp {
    /// The private key family this operation accepts.
    type Key;

    /// Signs `data` into `signature`.
    ///
    /// With `signature` set to `None`, returns the signature size to
    /// allocate; for variable-length encodings this is an upper bound.
    /// Otherwise returns the exact number of bytes written.
    fn sign(
        &mut self,
        key: &Self::Key,
        data: &[u8],
        signature: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError>;
}

/// A one-shot signature verification operation.
pub trait VerifyOp {
    /// The public key family this operation accepts.
    type Key;

    /// Verifies `signature` over `data`.
    ///
    /// Returns [`Verification::Valid`] for an authentic signature and
    /// [`Verification::Invalid`] for a well-formed mismatch; internal
    /// failures are errors. The three outcomes never collapse into each
    /// other.
    fn verify(
        &mut self,
        key: &Self::Key,
        data: &[u8],
        signature: &[u8],
    ) -> Result<Verification, CryptoError>;
}
