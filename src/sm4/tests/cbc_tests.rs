// Copyright (C) Microsoft Corporation. All rights reserved.

use super::*;

#[test]
fn test_sm4_cbc_round_trip_block_multiple() {
    // Exact block multiple: no padding on encrypt, finalize skipped on
    // decrypt, plaintext comes back byte for byte.
    let key = test_key();
    let iv = test_iv();
    let plaintext = [0x5au8; 32];

    let mut algo = Sm4CbcAlgo::new(&iv).expect("Failed to create SM4-CBC algo");
    let ciphertext =
        Encrypter::encrypt_vec(&mut algo, &key, &plaintext).expect("Failed to encrypt");
    assert_eq!(
        ciphertext.len(),
        plaintext.len(),
        "Block-multiple plaintext must not grow"
    );

    let mut algo = Sm4CbcAlgo::new(&iv).expect("Failed to create SM4-CBC algo");
    let decrypted =
        Decrypter::decrypt_vec(&mut algo, &key, &ciphertext).expect("Failed to decrypt");
    assert_eq!(&decrypted[..], &plaintext[..]);
}

#[test]
fn test_sm4_cbc_round_trip_partial_block() {
    // Non-multiple plaintext: the ciphertext is padded up to the next block
    // and the decrypt reports the padded length. The caller owns the
    // truncation; the tail is the PKCS#7 fill.
    let key = test_key();
    let iv = test_iv();
    let plaintext = b"twenty byte message!";
    assert_eq!(plaintext.len(), 20);

    let mut algo = Sm4CbcAlgo::new(&iv).expect("Failed to create SM4-CBC algo");
    let ciphertext = Encrypter::encrypt_vec(&mut algo, &key, plaintext).expect("Failed to encrypt");
    assert_eq!(ciphertext.len(), 32, "20 bytes pad up to two blocks");

    let mut algo = Sm4CbcAlgo::new(&iv).expect("Failed to create SM4-CBC algo");
    let decrypted =
        Decrypter::decrypt_vec(&mut algo, &key, &ciphertext).expect("Failed to decrypt");
    assert_eq!(decrypted.len(), 32, "Decrypt reports the padded length");
    assert_eq!(&decrypted[..20], plaintext);
    assert!(
        decrypted[20..].iter().all(|&b| b == 12),
        "Tail should be the PKCS#7 fill byte"
    );
}

#[test]
fn test_sm4_cbc_length_sweep() {
    let key = test_key();
    let iv = test_iv();

    for len in [0usize, 1, 15, 16, 17, 31, 32, 33, 64] {
        let plaintext: Vec<u8> = (0..len).map(|i| i as u8).collect();

        let mut algo = Sm4CbcAlgo::new(&iv).expect("Failed to create SM4-CBC algo");
        let ciphertext =
            Encrypter::encrypt_vec(&mut algo, &key, &plaintext).expect("Failed to encrypt");
        let expected_ct_len = if len % SM4_BLOCK_SIZE == 0 {
            len
        } else {
            (len / SM4_BLOCK_SIZE + 1) * SM4_BLOCK_SIZE
        };
        assert_eq!(ciphertext.len(), expected_ct_len, "Ciphertext length at {len}");

        let mut algo = Sm4CbcAlgo::new(&iv).expect("Failed to create SM4-CBC algo");
        let decrypted =
            Decrypter::decrypt_vec(&mut algo, &key, &ciphertext).expect("Failed to decrypt");
        assert_eq!(&decrypted[..len], &plaintext[..], "Round trip failed at {len}");
    }
}

#[test]
fn test_sm4_cbc_size_query() {
    let key = test_key();
    let iv = test_iv();
    let input = [0u8; 20];

    let mut algo = Sm4CbcAlgo::new(&iv).expect("Failed to create SM4-CBC algo");
    let len = algo
        .encrypt(&key, &input, None)
        .expect("Size query should succeed");
    assert_eq!(
        len,
        input.len() + SM4_BLOCK_SIZE,
        "CBC requires one block of headroom"
    );
}

#[test]
fn test_sm4_cbc_parameter_validation() {
    assert_eq!(
        Sm4CbcAlgo::new(&[0u8; 15]).err(),
        Some(CryptoError::InvalidParameter),
        "Short IV should be rejected"
    );

    let key = SymmetricKey::from_bytes(&[0u8; 24]).expect("Failed to create key");
    let iv = test_iv();
    let mut algo = Sm4CbcAlgo::new(&iv).expect("Failed to create SM4-CBC algo");
    let mut output = [0u8; 48];
    let err = algo
        .encrypt(&key, &[0u8; 16], Some(&mut output))
        .expect_err("24-byte key should be rejected");
    assert_eq!(err, CryptoError::InvalidParameter);

    let key = test_key();
    let mut algo = Sm4CbcAlgo::new(&iv).expect("Failed to create SM4-CBC algo");
    let mut small = [0u8; 16];
    let err = algo
        .encrypt(&key, &[0u8; 16], Some(&mut small))
        .expect_err("Buffer without headroom should be rejected");
    assert_eq!(err, CryptoError::InvalidParameter);
}
