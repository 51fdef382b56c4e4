//! Anonymization operators for detected PII text spans.
//!
//! An [`Operator`] is a named, typed transformation applied to a single
//! sensitive span. This crate provides the `encrypt` operator: it validates
//! the supplied symmetric key (128, 192 or 256 bits) and replaces the span
//! with AES-CBC ciphertext. Span detection, operator dispatch, and
//! decryption live in other components; each call here is pure, synchronous
//! and stateless.

pub mod crypto;
pub mod error;
pub mod operators;

pub use error::AnonymizerError;
pub use operators::{Encrypt, Operator, OperatorType, ParamValue, Params};
