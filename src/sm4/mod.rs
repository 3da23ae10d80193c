// Copyright (C) Microsoft Corporation. All rights reserved.

//! SM4 block cipher modes (CTR and CBC).
//!
//! SM4 is the GB/T 32907 block cipher with a 128-bit key and 128-bit block.
//! Both modes here are unauthenticated: CTR is a stream construction with
//! identical encrypt/decrypt passes, CBC applies PKCS#7 padding only when
//! the input length is not a block multiple (the service's wire format
//! derives the padding decision from content length, and the decrypt side
//! mirrors it, including the skipped finalize at exact block multiples).

mod cbc;
mod ctr;

pub use cbc::*;
pub use ctr::*;

pub(crate) use super::*;

/// SM4 key size in bytes.
pub const SM4_KEY_SIZE: usize = 16;

/// SM4 block (and IV) size in bytes.
pub const SM4_BLOCK_SIZE: usize = 16;

#[cfg(test)]
mod tests;
