// Copyright (C) Microsoft Corporation. All rights reserved.

mod cbc_tests;
mod ctr_tests;

use super::*;

/// Standard SM4 key from the GB/T 32907 worked example.
pub fn test_key() -> SymmetricKey {
    let bytes = hex::decode("0123456789abcdeffedcba9876543210").expect("Bad key hex");
    SymmetricKey::from_bytes(&bytes).expect("Failed to create SM4 key")
}

pub fn test_iv() -> Vec<u8> {
    hex::decode("000102030405060708090a0b0c0d0e0f").expect("Bad IV hex")
}
