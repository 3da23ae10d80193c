// Copyright (C) Microsoft Corporation. All rights reserved.

//! Operation traits and high-level wrappers.
//!
//! Every engine in this crate implements one or more of the operation traits
//! defined here, keyed by an associated key type so a cipher can only be
//! driven with the key family it expects. The [`Encrypter`], [`Decrypter`],
//! [`Signer`], and [`Verifier`] wrappers consolidate the per-algorithm
//! implementations behind one calling convention.
//!
//! # Buffer Management
//!
//! Transforming operations support two buffer patterns:
//! - Pass `None` to query the required output buffer size
//! - Pass `Some(buffer)` to perform the operation
//!
//! The returned count is always the exact number of bytes written (or, for a
//! size query, the number of bytes the caller must provide).

mod ops;

mod decrypter;
mod encrypter;

mod signer;
mod verifier;

pub use decrypter::*;
pub use encrypter::*;
pub use ops::*;
pub use signer::*;
pub use verifier::*;

use super::*;
