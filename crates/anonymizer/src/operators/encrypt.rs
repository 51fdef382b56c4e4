//! The `encrypt` operator: anonymize a span by replacing it with ciphertext.

use tracing::debug;

use crate::crypto::{AesCipher, CipherError, SymmetricCipher};
use crate::error::AnonymizerError;
use crate::operators::params::Params;
use crate::operators::{Operator, OperatorType};

/// User-facing message for a key that is not an accepted AES size.
const INVALID_KEY_MSG: &str = "Invalid input, key must be of length 128, 192 or 256 bits";

/// Name of the parameter carrying the symmetric key.
const KEY_PARAM: &str = "key";

/// Anonymizes a text span by encrypting it under a caller-supplied AES key.
///
/// The key may be textual or raw bytes; it must be 128, 192 or 256 bits
/// long. Whether a given length is acceptable is decided by the cipher's
/// [`SymmetricCipher::is_valid_key_size`], not recomputed here, so the
/// cipher library stays the single authority on key validity.
#[derive(Debug, Clone, Default)]
pub struct Encrypt<C: SymmetricCipher = AesCipher> {
    cipher: C,
}

impl Encrypt<AesCipher> {
    /// Create an `encrypt` operator backed by the real AES-CBC cipher.
    pub fn new() -> Self {
        Self { cipher: AesCipher }
    }
}

impl<C: SymmetricCipher> Encrypt<C> {
    /// Create an `encrypt` operator backed by an arbitrary cipher.
    ///
    /// Exists so tests can inject a double; production callers want
    /// [`Encrypt::new`].
    pub fn with_cipher(cipher: C) -> Self {
        Self { cipher }
    }
}

impl<C: SymmetricCipher> Operator for Encrypt<C> {
    fn operate(&self, text: &str, params: &Params) -> Result<String, AnonymizerError> {
        let key = params.required(KEY_PARAM)?;
        debug!(operator = self.operator_name(), "encrypting span");
        self.cipher
            .encrypt(key.as_bytes(), text)
            .map_err(|e| match e {
                CipherError::InvalidKeyLength(_) => {
                    AnonymizerError::invalid_param(INVALID_KEY_MSG)
                }
            })
    }

    fn validate(&self, params: &Params) -> Result<(), AnonymizerError> {
        let key = params.required(KEY_PARAM)?;
        if !self.cipher.is_valid_key_size(key.as_bytes()) {
            return Err(AnonymizerError::invalid_param(INVALID_KEY_MSG));
        }
        Ok(())
    }

    fn operator_name(&self) -> &'static str {
        "encrypt"
    }

    fn operator_type(&self) -> OperatorType {
        OperatorType::Anonymize
    }
}
