// Copyright (C) Microsoft Corporation. All rights reserved.

//! Elliptic-curve key handles for the ECDSA engine.

use openssl::ec::EcKey;
use openssl::pkey::{Private, Public};

use super::*;

/// An EC private key for ECDSA signature generation.
pub struct EcPrivateKey {
    key: EcKey<Private>,
}

impl EcPrivateKey {
    /// Wraps an already-materialized OpenSSL EC private key.
    pub fn new(key: EcKey<Private>) -> Self {
        Self { key }
    }

    /// Returns the underlying key for the raw signing primitive.
    pub(crate) fn ec_key(&self) -> &EcKey<Private> {
        &self.key
    }
}

/// An EC public key for ECDSA signature verification.
pub struct EcPublicKey {
    key: EcKey<Public>,
}

impl EcPublicKey {
    /// Wraps an already-materialized OpenSSL EC public key.
    pub fn new(key: EcKey<Public>) -> Self {
        Self { key }
    }

    /// Returns the underlying key for the raw verification primitive.
    pub(crate) fn ec_key(&self) -> &EcKey<Public> {
        &self.key
    }
}
