// Copyright (C) Microsoft Corporation. All rights reserved.


use openssl::ec::{EcGroup, EcKey};
use openssl::nid::Nid;

use super::*;

/// Generates a fresh keypair on the given curve for one test.
pub fn test_keypair(curve: Nid) -> (EcPrivateKey, EcPublicKey) {
    let group = EcGroup::from_curve_name(curve).expect("Failed to load curve");
    let private = EcKey::generate(&group).expect("Failed to generate EC key");
    let public =
        EcKey::from_public_key(&group, private.public_key()).expect("Failed to extract public key");
    (EcPrivateKey::new(private), EcPublicKey::new(public))
}
