//! AES-CBC encryption primitives.
//!
//! This module is intentionally free of operator and params dependencies.
//! It provides the low-level cipher used by the `encrypt` operator, behind
//! the [`SymmetricCipher`] trait so tests can substitute a double for the
//! real implementation.
//!
//! # Ciphertext format
//!
//! ```text
//! base64(iv || ciphertext)
//! ```
//!
//! A fresh random 128-bit IV is generated per call and carried inside the
//! encoded output so the value is self-contained.

pub mod cipher;

pub use cipher::{AesCipher, CipherError, SymmetricCipher, VALID_KEY_LENGTHS};
