//! One constructor per key-management scheme and direction. Each returns a
//! bundle with only its own direction populated; combining directions is done
//! with [`CryptoConfig::combine`].
//!
//! Validation is structural only. Pairing is checked before any count limit,
//! so a PKCS#11 call with two modules and one pin reports the mismatch.

use tracing::{debug, warn};

use super::blob::{collect_blobs, Blob};
use super::bundle::{CryptoConfig, DecryptConfig, EncryptConfig};
use super::parameters::{keys, ParameterSet};
use super::schemes::{DecryptScheme, EncryptScheme};
use crate::config::ConstructorLimits;
use crate::error::{ConfigError, Result};

fn encrypting(scheme: EncryptScheme) -> CryptoConfig {
    CryptoConfig::encrypting(EncryptConfig::new(vec![scheme], None))
}

fn decrypting(scheme: DecryptScheme) -> CryptoConfig {
    CryptoConfig::decrypting(DecryptConfig::new(vec![scheme]))
}

fn ensure_paired(left: &str, left_blobs: &[Blob], right: &str, right_blobs: &[Blob]) -> Result<()> {
    if left_blobs.len() != right_blobs.len() {
        warn!(
            left,
            left_len = left_blobs.len(),
            right,
            right_len = right_blobs.len(),
            "rejecting unpaired sequences"
        );
        return Err(ConfigError::length_mismatch(
            left,
            left_blobs.len(),
            right,
            right_blobs.len(),
        ));
    }
    Ok(())
}

/// Encrypts to JWE recipients given by public key.
pub fn encrypt_with_jwe<I, B>(public_keys: I) -> Result<CryptoConfig>
where
    I: IntoIterator<Item = B>,
    B: Into<Blob>,
{
    let public_keys = collect_blobs(public_keys);
    debug!(scheme = "jwe", pubkeys = public_keys.len(), "building encrypt config");
    Ok(encrypting(EncryptScheme::Jwe { public_keys }))
}

/// Encrypts to PKCS7 recipients given by X.509 certificate.
pub fn encrypt_with_pkcs7<I, B>(x509s: I) -> Result<CryptoConfig>
where
    I: IntoIterator<Item = B>,
    B: Into<Blob>,
{
    let x509s = collect_blobs(x509s);
    debug!(scheme = "pkcs7", x509s = x509s.len(), "building encrypt config");
    Ok(encrypting(EncryptScheme::Pkcs7 { x509s }))
}

/// Encrypts to GPG recipients found in the given public keyring.
pub fn encrypt_with_gpg<I, B>(recipients: I, pubkey_ring: impl Into<Blob>) -> Result<CryptoConfig>
where
    I: IntoIterator<Item = B>,
    B: Into<Blob>,
{
    let recipients = collect_blobs(recipients);
    let pubkey_ring = pubkey_ring.into();
    debug!(
        scheme = "gpg",
        recipients = recipients.len(),
        pubkey_ring_bytes = pubkey_ring.len(),
        "building encrypt config"
    );
    Ok(encrypting(EncryptScheme::Gpg {
        recipients,
        pubkey_ring,
    }))
}

/// Encrypts through PKCS#11 modules, each paired with its pin, using the
/// default [`ConstructorLimits`]: exactly one module.
pub fn encrypt_with_pkcs11<M, MB, P, PB>(modules: M, pins: P) -> Result<CryptoConfig>
where
    M: IntoIterator<Item = MB>,
    MB: Into<Blob>,
    P: IntoIterator<Item = PB>,
    PB: Into<Blob>,
{
    encrypt_with_pkcs11_limited(modules, pins, &ConstructorLimits::default())
}

/// Like [`encrypt_with_pkcs11`] with an explicit module limit.
///
/// Fails with [`ConfigError::InvalidArgument`] when the module and pin counts
/// differ, then with [`ConfigError::UnsupportedConfiguration`] when no module
/// is given or more than `limits.max_pkcs11_encrypt_modules` are.
pub fn encrypt_with_pkcs11_limited<M, MB, P, PB>(
    modules: M,
    pins: P,
    limits: &ConstructorLimits,
) -> Result<CryptoConfig>
where
    M: IntoIterator<Item = MB>,
    MB: Into<Blob>,
    P: IntoIterator<Item = PB>,
    PB: Into<Blob>,
{
    let modules = collect_blobs(modules);
    let pins = collect_blobs(pins);
    ensure_paired(keys::MODULES, &modules, keys::PINS, &pins)?;

    let max = limits.max_pkcs11_encrypt_modules;
    if modules.is_empty() || modules.len() > max {
        warn!(modules = modules.len(), max, "rejecting pkcs11 module count");
        return Err(ConfigError::UnsupportedConfiguration(format!(
            "pkcs11 encryption supports between 1 and {max} modules, got {}",
            modules.len()
        )));
    }

    debug!(scheme = "pkcs11", modules = modules.len(), "building encrypt config");
    Ok(encrypting(EncryptScheme::Pkcs11 { modules, pins }))
}

/// Encrypts with an arbitrary parameter set. `decrypt_parameters` is embedded
/// in the encrypt side when non-empty.
pub fn encrypt_with_parameters(
    parameters: ParameterSet,
    decrypt_parameters: ParameterSet,
) -> Result<CryptoConfig> {
    debug!(scheme = "custom", keys = parameters.len(), "building encrypt config");
    let embedded = (!decrypt_parameters.is_empty()).then(|| {
        DecryptConfig::new(vec![DecryptScheme::Custom {
            parameters: decrypt_parameters,
        }])
    });
    Ok(CryptoConfig::encrypting(EncryptConfig::new(
        vec![EncryptScheme::Custom { parameters }],
        embedded,
    )))
}

/// Decrypts with private keys, each paired with a password. Use an empty
/// password for keys that are not protected.
pub fn decrypt_with_priv_keys<K, KB, P, PB>(private_keys: K, passwords: P) -> Result<CryptoConfig>
where
    K: IntoIterator<Item = KB>,
    KB: Into<Blob>,
    P: IntoIterator<Item = PB>,
    PB: Into<Blob>,
{
    let private_keys = collect_blobs(private_keys);
    let passwords = collect_blobs(passwords);
    ensure_paired(keys::PRIVKEYS, &private_keys, keys::PRIVKEYS_PASSWORDS, &passwords)?;

    debug!(scheme = "private-keys", privkeys = private_keys.len(), "building decrypt config");
    Ok(decrypting(DecryptScheme::PrivateKeys {
        private_keys,
        passwords,
    }))
}

pub fn decrypt_with_x509s<I, B>(x509s: I) -> Result<CryptoConfig>
where
    I: IntoIterator<Item = B>,
    B: Into<Blob>,
{
    let x509s = collect_blobs(x509s);
    debug!(scheme = "x509", x509s = x509s.len(), "building decrypt config");
    Ok(decrypting(DecryptScheme::X509 { x509s }))
}

/// Decrypts with GPG private keys and their passwords. The two counts are
/// not required to match.
pub fn decrypt_with_gpg_priv_keys<K, KB, P, PB>(private_keys: K, passwords: P) -> Result<CryptoConfig>
where
    K: IntoIterator<Item = KB>,
    KB: Into<Blob>,
    P: IntoIterator<Item = PB>,
    PB: Into<Blob>,
{
    let private_keys = collect_blobs(private_keys);
    let passwords = collect_blobs(passwords);
    debug!(
        scheme = "gpg-private-keys",
        privkeys = private_keys.len(),
        passwords = passwords.len(),
        "building decrypt config"
    );
    Ok(decrypting(DecryptScheme::GpgPrivateKeys {
        private_keys,
        passwords,
    }))
}

/// Decrypts through PKCS#11 modules and their pins. Any number of modules is
/// accepted and the two counts are not required to match.
pub fn decrypt_with_pkcs11<M, MB, P, PB>(modules: M, pins: P) -> Result<CryptoConfig>
where
    M: IntoIterator<Item = MB>,
    MB: Into<Blob>,
    P: IntoIterator<Item = PB>,
    PB: Into<Blob>,
{
    let modules = collect_blobs(modules);
    let pins = collect_blobs(pins);
    debug!(
        scheme = "pkcs11",
        modules = modules.len(),
        pins = pins.len(),
        "building decrypt config"
    );
    Ok(decrypting(DecryptScheme::Pkcs11 { modules, pins }))
}

pub fn decrypt_with_parameters(parameters: ParameterSet) -> Result<CryptoConfig> {
    debug!(scheme = "custom", keys = parameters.len(), "building decrypt config");
    Ok(decrypting(DecryptScheme::Custom { parameters }))
}
