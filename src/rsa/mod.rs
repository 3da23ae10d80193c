// Copyright (C) Microsoft Corporation. All rights reserved.

//! RSA signature generation and verification.
//!
//! Supports PKCS#1 v1.5 and PSS padding over the SHA-2 digest family. The
//! signature size always equals the key modulus size; PSS additionally
//! requires the modulus to leave room for the digest, salt, and trailer.

mod sign;

pub use sign::*;

pub(crate) use super::*;

#[cfg(test)]
mod tests;
