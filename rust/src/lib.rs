//! Configuration bundles for encrypting and decrypting container image layers.
//! Each key-management scheme (JWE, PKCS7, GPG, PKCS#11, private keys) has a
//! constructor that validates its inputs structurally and returns a
//! [`CryptoConfig`] for an external cryptographic engine to consume. No
//! cryptography happens in this crate.

pub mod config;
pub mod crypto;
pub mod error;

pub use config::{ConstructorLimits, DEFAULT_MAX_PKCS11_ENCRYPT_MODULES};
pub use crypto::blob::Blob;
pub use crypto::bundle::{CryptoConfig, DecryptConfig, EncryptConfig};
pub use crypto::constructors::{
    decrypt_with_gpg_priv_keys, decrypt_with_parameters, decrypt_with_pkcs11,
    decrypt_with_priv_keys, decrypt_with_x509s, encrypt_with_gpg, encrypt_with_jwe,
    encrypt_with_parameters, encrypt_with_pkcs11, encrypt_with_pkcs11_limited,
    encrypt_with_pkcs7,
};
pub use crypto::parameters::{keys, ParameterSet};
pub use crypto::schemes::{DecryptScheme, EncryptScheme};
pub use error::{ConfigError, Result};
