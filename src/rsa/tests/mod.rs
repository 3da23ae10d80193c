// Copyright (C) Microsoft Corporation. All rights reserved.


use openssl::rsa::Rsa;

use super::*;

/// Generates a fresh keypair for one test.
pub fn test_keypair(bits: u32) -> (RsaPrivateKey, RsaPublicKey) {
    let rsa = Rsa::generate(bits).expect("Failed to generate RSA key");
    let der = rsa
        .public_key_to_der()
        .expect("Failed to encode public key");
    let public = Rsa::public_key_from_der(&der).expect("Failed to decode public key");
    (RsaPrivateKey::new(rsa), RsaPublicKey::new(public))
}
