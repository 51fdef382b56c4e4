//! AES-CBC encryption of individual text spans.
//!
//! **Algorithm choice:** AES-CBC with PKCS#7 padding and a fresh random IV
//! per call, matching the ciphertext shape consumers of the anonymized
//! output already expect. All three AES key sizes (128/192/256 bits) are
//! accepted; the key decides which variant runs.

use aes::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};
use aes::{Aes128, Aes192, Aes256};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::{rngs::OsRng, RngCore};
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

/// Byte length of an AES block, and of the CBC initialisation vector.
pub const IV_LEN: usize = 16;

/// Key byte lengths accepted by AES: 16, 24 or 32 bytes (128/192/256 bits).
pub const VALID_KEY_LENGTHS: [usize; 3] = [16, 24, 32];

/// Errors produced by the cipher layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    /// The key is not one of the [`VALID_KEY_LENGTHS`].
    #[error("invalid key length: {0} bytes is not an AES key size")]
    InvalidKeyLength(usize),
}

/// The minimal cipher capability consumed by the `encrypt` operator.
///
/// Keeping this seam small lets tests substitute a double for the real
/// cryptographic implementation, and keeps key-size authority with the
/// cipher rather than with callers' own length arithmetic.
#[cfg_attr(test, automock)]
pub trait SymmetricCipher {
    /// Encrypt `text` under `key`, returning an opaque ciphertext string.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKeyLength`] if `key` is not an AES key
    /// size.
    fn encrypt(&self, key: &[u8], text: &str) -> Result<String, CipherError>;

    /// Returns `true` if `key` has a length this cipher will accept.
    fn is_valid_key_size(&self, key: &[u8]) -> bool;
}

/// Stateless AES-CBC implementation of [`SymmetricCipher`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AesCipher;

impl SymmetricCipher for AesCipher {
    fn encrypt(&self, key: &[u8], text: &str) -> Result<String, CipherError> {
        // Use OsRng for a cryptographically secure random IV.
        let mut iv = [0u8; IV_LEN];
        OsRng.fill_bytes(&mut iv);

        let ciphertext = match key.len() {
            16 => cbc::Encryptor::<Aes128>::new_from_slices(key, &iv)
                .map_err(|_| CipherError::InvalidKeyLength(key.len()))?
                .encrypt_padded_vec_mut::<Pkcs7>(text.as_bytes()),
            24 => cbc::Encryptor::<Aes192>::new_from_slices(key, &iv)
                .map_err(|_| CipherError::InvalidKeyLength(key.len()))?
                .encrypt_padded_vec_mut::<Pkcs7>(text.as_bytes()),
            32 => cbc::Encryptor::<Aes256>::new_from_slices(key, &iv)
                .map_err(|_| CipherError::InvalidKeyLength(key.len()))?
                .encrypt_padded_vec_mut::<Pkcs7>(text.as_bytes()),
            n => return Err(CipherError::InvalidKeyLength(n)),
        };

        // The IV travels inside the encoded value so output is self-contained.
        let mut out = Vec::with_capacity(IV_LEN + ciphertext.len());
        out.extend_from_slice(&iv);
        out.extend_from_slice(&ciphertext);
        Ok(STANDARD.encode(out))
    }

    fn is_valid_key_size(&self, key: &[u8]) -> bool {
        VALID_KEY_LENGTHS.contains(&key.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_all_aes_key_sizes() {
        let cipher = AesCipher;
        for len in VALID_KEY_LENGTHS {
            let key = vec![0x42u8; len];
            assert!(cipher.is_valid_key_size(&key));
            assert!(cipher.encrypt(&key, "123-45-6789").is_ok());
        }
    }

    #[test]
    fn rejects_non_aes_key_sizes() {
        let cipher = AesCipher;
        for len in [0, 3, 15, 17, 31, 33, 64] {
            let key = vec![0x42u8; len];
            assert!(!cipher.is_valid_key_size(&key));
            assert_eq!(
                cipher.encrypt(&key, "x"),
                Err(CipherError::InvalidKeyLength(len))
            );
        }
    }

    #[test]
    fn output_is_base64_of_iv_and_block_aligned_ciphertext() {
        let cipher = AesCipher;
        let key = [0x11u8; 16];
        let encoded = cipher.encrypt(&key, "text").unwrap();
        let raw = STANDARD.decode(encoded).unwrap();
        assert!(raw.len() > IV_LEN);
        assert_eq!((raw.len() - IV_LEN) % 16, 0);
        // "text" pads to exactly one block.
        assert_eq!(raw.len(), IV_LEN + 16);
    }

    #[test]
    fn fresh_iv_per_call() {
        let cipher = AesCipher;
        let key = [0x11u8; 32];
        let a = cipher.encrypt(&key, "same plaintext").unwrap();
        let b = cipher.encrypt(&key, "same plaintext").unwrap();
        assert_ne!(a, b);
    }
}
