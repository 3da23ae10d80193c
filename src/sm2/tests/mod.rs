// Copyright (C) Microsoft Corporation. All rights reserved.

mod sign_tests;

use libsm::sm2::signature::SigCtx;

use super::*;

/// Generates a fresh keypair in the raw encodings the key handles expect.
pub fn test_keypair() -> (Sm2PrivateKey, Sm2PublicKey) {
    let ctx = SigCtx::new();
    let (pk, sk) = ctx.new_keypair().expect("Failed to generate SM2 keypair");
    let scalar = ctx.serialize_seckey(&sk).expect("Failed to encode scalar");
    let point = ctx
        .serialize_pubkey(&pk, false)
        .expect("Failed to encode point");
    (
        Sm2PrivateKey::from_bytes(&scalar).expect("Failed to create private key"),
        Sm2PublicKey::from_bytes(&point).expect("Failed to create public key"),
    )
}
