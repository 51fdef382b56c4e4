//! The operator contract applied to detected PII spans.
//!
//! Each operator is a named, typed transformation of a single text span.
//! Dispatch (deciding which operator runs for which entity) happens in the
//! surrounding engine; this crate only defines the seam and the `encrypt`
//! implementation.

pub mod encrypt;
pub mod params;

pub use encrypt::Encrypt;
pub use params::{ParamValue, Params};

use crate::error::AnonymizerError;

/// Whether an operator anonymizes text or reverses a prior anonymization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorType {
    /// Transforms plaintext spans into anonymized replacements.
    Anonymize,
    /// Restores previously anonymized spans.
    Deanonymize,
}

/// A transformation applied to one detected sensitive text span.
pub trait Operator {
    /// Transform `text` using the supplied parameters.
    ///
    /// # Errors
    ///
    /// Returns [`AnonymizerError::InvalidParam`] if a required parameter is
    /// missing or malformed, or [`AnonymizerError::EncryptionFailure`] if
    /// the transformation itself fails.
    fn operate(&self, text: &str, params: &Params) -> Result<String, AnonymizerError>;

    /// Check the supplied parameters without transforming anything.
    ///
    /// # Errors
    ///
    /// Returns [`AnonymizerError::InvalidParam`] describing the first
    /// parameter that failed validation.
    fn validate(&self, params: &Params) -> Result<(), AnonymizerError>;

    /// Fixed name under which this operator is requested.
    fn operator_name(&self) -> &'static str;

    /// Whether this operator anonymizes or de-anonymizes.
    fn operator_type(&self) -> OperatorType;
}
