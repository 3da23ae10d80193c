// Copyright (C) Microsoft Corporation. All rights reserved.

use super::*;

#[test]
fn test_sm4_ctr_round_trip() {
    let key = test_key();
    let iv = test_iv();
    let plaintext = b"SM4-CTR round trip message, longer than one block.";

    let mut algo = Sm4CtrAlgo::new(&iv).expect("Failed to create SM4-CTR algo");
    let ciphertext = Encrypter::encrypt_vec(&mut algo, &key, plaintext).expect("Failed to encrypt");
    assert_eq!(
        ciphertext.len(),
        plaintext.len(),
        "CTR output length equals input length"
    );
    assert_ne!(&ciphertext[..], &plaintext[..]);

    let mut algo = Sm4CtrAlgo::new(&iv).expect("Failed to create SM4-CTR algo");
    let decrypted = Decrypter::decrypt_vec(&mut algo, &key, &ciphertext).expect("Failed to decrypt");
    assert_eq!(&decrypted[..], &plaintext[..]);
}

#[test]
fn test_sm4_ctr_length_sweep() {
    // Stream mode: every length round-trips with output length equal to
    // input length, block boundaries included.
    let key = test_key();
    let iv = test_iv();

    for len in [0usize, 1, 15, 16, 17, 32, 33, 255] {
        let plaintext: Vec<u8> = (0..len).map(|i| i as u8).collect();

        let mut algo = Sm4CtrAlgo::new(&iv).expect("Failed to create SM4-CTR algo");
        let ciphertext =
            Encrypter::encrypt_vec(&mut algo, &key, &plaintext).expect("Failed to encrypt");
        assert_eq!(ciphertext.len(), len, "Length mismatch at {len}");

        let mut algo = Sm4CtrAlgo::new(&iv).expect("Failed to create SM4-CTR algo");
        let decrypted =
            Decrypter::decrypt_vec(&mut algo, &key, &ciphertext).expect("Failed to decrypt");
        assert_eq!(decrypted, plaintext, "Round trip failed at {len}");
    }
}

#[test]
fn test_sm4_ctr_encrypt_decrypt_symmetric() {
    // The CTR transform is its own inverse: decrypting the plaintext with
    // the same key and counter produces the ciphertext.
    let key = test_key();
    let iv = test_iv();
    let plaintext = b"the keystream does not care about direction";

    let mut algo = Sm4CtrAlgo::new(&iv).expect("Failed to create SM4-CTR algo");
    let ciphertext = Encrypter::encrypt_vec(&mut algo, &key, plaintext).expect("Failed to encrypt");

    let mut algo = Sm4CtrAlgo::new(&iv).expect("Failed to create SM4-CTR algo");
    let via_decrypt =
        Decrypter::decrypt_vec(&mut algo, &key, plaintext).expect("Failed to decrypt");
    assert_eq!(
        ciphertext, via_decrypt,
        "Encrypt and decrypt should be the same transform"
    );
}

#[test]
fn test_sm4_ctr_size_query() {
    let key = test_key();
    let iv = test_iv();
    let input = [0u8; 37];

    let mut algo = Sm4CtrAlgo::new(&iv).expect("Failed to create SM4-CTR algo");
    let len = algo
        .encrypt(&key, &input, None)
        .expect("Size query should succeed");
    assert_eq!(len, input.len());
}

#[test]
fn test_sm4_ctr_parameter_validation() {
    assert_eq!(
        Sm4CtrAlgo::new(&[0u8; 8]).err(),
        Some(CryptoError::InvalidParameter),
        "Short counter block should be rejected"
    );

    // SM4 keys are exactly 16 bytes; a 32-byte symmetric key is valid for
    // AES but not here.
    let key = SymmetricKey::from_bytes(&[0u8; 32]).expect("Failed to create key");
    let iv = test_iv();
    let mut algo = Sm4CtrAlgo::new(&iv).expect("Failed to create SM4-CTR algo");
    let mut output = [0u8; 16];
    let err = algo
        .encrypt(&key, &[0u8; 16], Some(&mut output))
        .expect_err("32-byte key should be rejected");
    assert_eq!(err, CryptoError::InvalidParameter);

    // Undersized output buffer.
    let key = test_key();
    let mut algo = Sm4CtrAlgo::new(&iv).expect("Failed to create SM4-CTR algo");
    let mut small = [0u8; 4];
    let err = algo
        .encrypt(&key, &[0u8; 16], Some(&mut small))
        .expect_err("Undersized output should be rejected");
    assert_eq!(err, CryptoError::InvalidParameter);
}
