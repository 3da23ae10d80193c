// Copyright (C) Microsoft Corporation. All rights reserved.

//! Key objects consumed by the operation engines.
//!
//! Keys arrive in this crate already unwrapped and validated by the
//! surrounding service; the types here are thin, borrow-only handles around
//! that material. An operation borrows a key for the duration of one call
//! and never retains or mutates it, so a key object may be shared freely
//! across concurrent operations.
//!
//! Key generation, sealing, and import/export encodings are deliberately
//! absent: they belong to the collaborators that call into this core.

mod ec;
mod rsa;
mod sm2;
mod symmetric;

pub use ec::*;
pub use rsa::*;
pub use sm2::*;
pub use symmetric::*;

use super::*;
