// Copyright (C) Microsoft Corporation. All rights reserved.

use super::*;

#[test]
fn test_sm2_sign_verify_default_identity() {
    let (private, public) = test_keypair();
    let message = b"SM2 identity-bound signature";

    let mut algo = Sm2SignAlgo::new(SM2_DEFAULT_IDENTITY, DigestAlgo::Sm3)
        .expect("Failed to create SM2 algo");
    let signature = Signer::sign_vec(&mut algo, &private, message).expect("Failed to sign");
    assert_eq!(signature.len(), SM2_SIGNATURE_SIZE, "Signatures are r || s");

    let result = Verifier::verify(&mut algo, &public, message, &signature)
        .expect("Verification should complete");
    assert_eq!(result, Verification::Valid);

    let result = Verifier::verify(&mut algo, &public, b"a different message", &signature)
        .expect("Verification should complete");
    assert_eq!(result, Verification::Invalid);
}

#[test]
fn test_sm2_identity_binding() {
    // The identity is part of the signed digest: verifying under any other
    // identity must fail even with the right key and message.
    let (private, public) = test_keypair();
    let message = b"bound to alice@example.com";

    let mut signer_algo =
        Sm2SignAlgo::new("alice@example.com", DigestAlgo::Sm3).expect("Failed to create SM2 algo");
    let signature = Signer::sign_vec(&mut signer_algo, &private, message).expect("Failed to sign");

    let result = Verifier::verify(&mut signer_algo, &public, message, &signature)
        .expect("Verification should complete");
    assert_eq!(result, Verification::Valid);

    let mut other_algo =
        Sm2SignAlgo::new("mallory@example.com", DigestAlgo::Sm3).expect("Failed to create SM2 algo");
    let result = Verifier::verify(&mut other_algo, &public, message, &signature)
        .expect("Verification should complete");
    assert_eq!(result, Verification::Invalid);
}

#[test]
fn test_sm2_corrupted_signature_is_invalid() {
    let (private, public) = test_keypair();
    let message = b"corruption is a mismatch, not an error";

    let mut algo = Sm2SignAlgo::new(SM2_DEFAULT_IDENTITY, DigestAlgo::Sm3)
        .expect("Failed to create SM2 algo");
    let mut signature = Signer::sign_vec(&mut algo, &private, message).expect("Failed to sign");
    signature[10] ^= 0x40;

    let result = Verifier::verify(&mut algo, &public, message, &signature)
        .expect("Verification should complete without error");
    assert_eq!(result, Verification::Invalid);
}

#[test]
fn test_sm2_wrong_key_is_invalid() {
    let (private, _) = test_keypair();
    let (_, other_public) = test_keypair();
    let message = b"signed under a different key";

    let mut algo = Sm2SignAlgo::new(SM2_DEFAULT_IDENTITY, DigestAlgo::Sm3)
        .expect("Failed to create SM2 algo");
    let signature = Signer::sign_vec(&mut algo, &private, message).expect("Failed to sign");

    let result = Verifier::verify(&mut algo, &other_public, message, &signature)
        .expect("Verification should complete");
    assert_eq!(result, Verification::Invalid);
}

#[test]
fn test_sm2_requires_sm3() {
    for digest in [DigestAlgo::Sha256, DigestAlgo::Sha384, DigestAlgo::Sha512] {
        assert_eq!(
            Sm2SignAlgo::new(SM2_DEFAULT_IDENTITY, digest).err(),
            Some(CryptoError::InvalidParameter),
            "SM2 must reject {digest:?}"
        );
    }
}

#[test]
fn test_sm2_parameter_validation() {
    let (private, public) = test_keypair();

    let mut algo = Sm2SignAlgo::new(SM2_DEFAULT_IDENTITY, DigestAlgo::Sm3)
        .expect("Failed to create SM2 algo");

    let len = algo
        .sign(&private, b"message", None)
        .expect("Size query should succeed");
    assert_eq!(len, SM2_SIGNATURE_SIZE);

    let err = algo
        .sign(&private, b"", None)
        .expect_err("Empty message should be rejected");
    assert_eq!(err, CryptoError::InvalidParameter);

    let mut small = [0u8; 32];
    let err = algo
        .sign(&private, b"message", Some(&mut small))
        .expect_err("Undersized signature buffer should be rejected");
    assert_eq!(err, CryptoError::InvalidParameter);

    let err = algo
        .verify(&public, b"message", &[0u8; 63])
        .expect_err("Wrong-length signature should be rejected");
    assert_eq!(err, CryptoError::InvalidParameter);
}

#[test]
fn test_sm2_key_encoding_validation() {
    assert_eq!(
        Sm2PrivateKey::from_bytes(&[0u8; 31]).err(),
        Some(CryptoError::InvalidParameter),
        "Short scalar should be rejected"
    );

    let mut point = [0u8; SM2_PUBLIC_KEY_SIZE];
    point[0] = 0x02; // compressed prefix
    assert_eq!(
        Sm2PublicKey::from_bytes(&point).err(),
        Some(CryptoError::InvalidParameter),
        "Compressed point encoding should be rejected"
    );
}
