//! Typed key-management schemes. Each variant knows its own fields and
//! renders them into the string-keyed [`ParameterSet`] engines read. The
//! `Custom` variants carry raw parameter sets for schemes this crate does
//! not model yet.

use serde::Serialize;

use super::blob::Blob;
use super::parameters::{keys, ParameterSet};

/// Material for encrypting to one or more recipients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "scheme")]
pub enum EncryptScheme {
    /// JWE recipients identified by public key.
    Jwe { public_keys: Vec<Blob> },
    /// PKCS7 recipients identified by X.509 certificate.
    Pkcs7 { x509s: Vec<Blob> },
    /// GPG recipients looked up in a single public keyring.
    Gpg {
        recipients: Vec<Blob>,
        pubkey_ring: Blob,
    },
    /// PKCS#11 modules, paired positionally with their pins.
    Pkcs11 { modules: Vec<Blob>, pins: Vec<Blob> },
    Custom { parameters: ParameterSet },
}

impl EncryptScheme {
    pub fn name(&self) -> &'static str {
        match self {
            EncryptScheme::Jwe { .. } => "jwe",
            EncryptScheme::Pkcs7 { .. } => "pkcs7",
            EncryptScheme::Gpg { .. } => "gpg",
            EncryptScheme::Pkcs11 { .. } => "pkcs11",
            EncryptScheme::Custom { .. } => "custom",
        }
    }

    pub fn parameters(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        match self {
            EncryptScheme::Jwe { public_keys } => params.insert(keys::PUBKEYS, public_keys.clone()),
            EncryptScheme::Pkcs7 { x509s } => params.insert(keys::X509S, x509s.clone()),
            EncryptScheme::Gpg {
                recipients,
                pubkey_ring,
            } => {
                params.insert(keys::GPG_RECIPIENTS, recipients.clone());
                params.insert(keys::GPG_PUBKEYRINGFILE, vec![pubkey_ring.clone()]);
            }
            EncryptScheme::Pkcs11 { modules, pins } => {
                params.insert(keys::MODULES, modules.clone());
                params.insert(keys::PINS, pins.clone());
            }
            EncryptScheme::Custom { parameters } => return parameters.clone(),
        }
        params
    }
}

/// Material for decrypting data that was previously encrypted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "scheme")]
pub enum DecryptScheme {
    /// Private keys, paired positionally with passwords. An empty password
    /// blob marks an unprotected key.
    PrivateKeys {
        private_keys: Vec<Blob>,
        passwords: Vec<Blob>,
    },
    X509 { x509s: Vec<Blob> },
    /// GPG private keys with their passwords. Lengths are not checked.
    GpgPrivateKeys {
        private_keys: Vec<Blob>,
        passwords: Vec<Blob>,
    },
    /// PKCS#11 modules with their pins. Lengths are not checked.
    Pkcs11 { modules: Vec<Blob>, pins: Vec<Blob> },
    Custom { parameters: ParameterSet },
}

impl DecryptScheme {
    pub fn name(&self) -> &'static str {
        match self {
            DecryptScheme::PrivateKeys { .. } => "private-keys",
            DecryptScheme::X509 { .. } => "x509",
            DecryptScheme::GpgPrivateKeys { .. } => "gpg-private-keys",
            DecryptScheme::Pkcs11 { .. } => "pkcs11",
            DecryptScheme::Custom { .. } => "custom",
        }
    }

    pub fn parameters(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        match self {
            DecryptScheme::PrivateKeys {
                private_keys,
                passwords,
            } => {
                params.insert(keys::PRIVKEYS, private_keys.clone());
                params.insert(keys::PRIVKEYS_PASSWORDS, passwords.clone());
            }
            DecryptScheme::X509 { x509s } => params.insert(keys::X509S, x509s.clone()),
            DecryptScheme::GpgPrivateKeys {
                private_keys,
                passwords,
            } => {
                params.insert(keys::GPG_PRIVATEKEYS, private_keys.clone());
                params.insert(keys::GPG_PRIVATEKEYS_PASSWORDS, passwords.clone());
            }
            DecryptScheme::Pkcs11 { modules, pins } => {
                params.insert(keys::MODULES, modules.clone());
                params.insert(keys::PINS, pins.clone());
            }
            DecryptScheme::Custom { parameters } => return parameters.clone(),
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::{DecryptScheme, EncryptScheme};
    use crate::crypto::blob::Blob;
    use crate::crypto::parameters::keys;

    #[test]
    fn gpg_wraps_keyring_in_single_entry() {
        let scheme = EncryptScheme::Gpg {
            recipients: vec![Blob::from("alice"), Blob::from("bob")],
            pubkey_ring: Blob::from("ring"),
        };
        let params = scheme.parameters();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get(keys::GPG_RECIPIENTS).map(<[Blob]>::len), Some(2));
        assert_eq!(params.get(keys::GPG_PUBKEYRINGFILE), Some(&[Blob::from("ring")][..]));
    }

    #[test]
    fn decrypt_schemes_use_their_own_keys() {
        let scheme = DecryptScheme::GpgPrivateKeys {
            private_keys: vec![Blob::from("k")],
            passwords: vec![],
        };
        let params = scheme.parameters();
        assert!(params.contains_key(keys::GPG_PRIVATEKEYS));
        assert!(params.contains_key(keys::GPG_PRIVATEKEYS_PASSWORDS));
        assert!(!params.contains_key(keys::PRIVKEYS));
        assert_eq!(scheme.name(), "gpg-private-keys");
    }

    #[test]
    fn serializes_with_scheme_tag() {
        let scheme = EncryptScheme::Pkcs7 {
            x509s: vec![Blob::from("cert")],
        };
        let encoded = serde_json::to_value(&scheme).expect("scheme serializes");
        assert_eq!(
            encoded,
            serde_json::json!({ "scheme": "pkcs7", "x509s": ["Y2VydA"] })
        );
    }
}
