// Copyright (C) Microsoft Corporation. All rights reserved.

//! ECDSA signature generation and verification.
//!
//! Signing is digest-then-sign: the message is hashed with the configured
//! digest algorithm, then the hash is signed with the EC private key. The
//! signature is DER encoded (a SEQUENCE of the two integers r and s), so
//! its exact length varies by a few bytes from one signature to the next.

mod ecdsa;

pub use ecdsa::*;

pub(crate) use super::*;

#[cfg(test)]
mod tests;
