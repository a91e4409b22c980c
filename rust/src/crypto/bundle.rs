//! Per-direction configuration and the aggregate bundle handed to an engine.
//! A direction that was never configured is `None`; the parameter views still
//! report an empty set for it so engines can look keys up uniformly.

use serde::Serialize;

use super::parameters::ParameterSet;
use super::schemes::{DecryptScheme, EncryptScheme};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecryptConfig {
    schemes: Vec<DecryptScheme>,
}

impl DecryptConfig {
    pub(crate) fn new(schemes: Vec<DecryptScheme>) -> Self {
        Self { schemes }
    }

    pub fn schemes(&self) -> &[DecryptScheme] {
        &self.schemes
    }

    /// Parameters of every scheme, sequences under a shared key concatenated
    /// in scheme order.
    pub fn parameters(&self) -> ParameterSet {
        merged(self.schemes.iter().map(DecryptScheme::parameters))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EncryptConfig {
    schemes: Vec<EncryptScheme>,
    /// Lets the encrypting party unwrap what it produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    decrypt_config: Option<DecryptConfig>,
}

impl EncryptConfig {
    pub(crate) fn new(schemes: Vec<EncryptScheme>, decrypt_config: Option<DecryptConfig>) -> Self {
        Self {
            schemes,
            decrypt_config,
        }
    }

    pub fn schemes(&self) -> &[EncryptScheme] {
        &self.schemes
    }

    pub fn decrypt_config(&self) -> Option<&DecryptConfig> {
        self.decrypt_config.as_ref()
    }

    pub fn parameters(&self) -> ParameterSet {
        merged(self.schemes.iter().map(EncryptScheme::parameters))
    }
}

/// One encrypt side and one decrypt side, either of which may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CryptoConfig {
    encrypt_config: Option<EncryptConfig>,
    decrypt_config: Option<DecryptConfig>,
}

impl CryptoConfig {
    pub(crate) fn encrypting(encrypt_config: EncryptConfig) -> Self {
        Self {
            encrypt_config: Some(encrypt_config),
            decrypt_config: None,
        }
    }

    pub(crate) fn decrypting(decrypt_config: DecryptConfig) -> Self {
        Self {
            encrypt_config: None,
            decrypt_config: Some(decrypt_config),
        }
    }

    pub fn encrypt_config(&self) -> Option<&EncryptConfig> {
        self.encrypt_config.as_ref()
    }

    pub fn decrypt_config(&self) -> Option<&DecryptConfig> {
        self.decrypt_config.as_ref()
    }

    pub fn encrypt_parameters(&self) -> ParameterSet {
        self.encrypt_config
            .as_ref()
            .map(EncryptConfig::parameters)
            .unwrap_or_default()
    }

    pub fn decrypt_parameters(&self) -> ParameterSet {
        self.decrypt_config
            .as_ref()
            .map(DecryptConfig::parameters)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.encrypt_config.is_none() && self.decrypt_config.is_none()
    }

    /// Builds one bundle out of several, typically one encrypt-side and one
    /// decrypt-side constructor result. Schemes keep their input order. The
    /// combined decrypt side is also embedded in the encrypt side, so a
    /// combined bundle can unwrap what it encrypts.
    pub fn combine<I>(configs: I) -> CryptoConfig
    where
        I: IntoIterator<Item = CryptoConfig>,
    {
        let mut encrypt_schemes = Vec::new();
        let mut decrypt_schemes = Vec::new();

        for config in configs {
            if let Some(ec) = config.encrypt_config {
                encrypt_schemes.extend(ec.schemes);
                if let Some(embedded) = ec.decrypt_config {
                    push_unique(&mut decrypt_schemes, embedded.schemes);
                }
            }
            if let Some(dc) = config.decrypt_config {
                push_unique(&mut decrypt_schemes, dc.schemes);
            }
        }

        let decrypt_config = if decrypt_schemes.is_empty() {
            None
        } else {
            Some(DecryptConfig::new(decrypt_schemes))
        };
        let encrypt_config = if encrypt_schemes.is_empty() {
            None
        } else {
            Some(EncryptConfig::new(encrypt_schemes, decrypt_config.clone()))
        };

        tracing::debug!(
            encrypt_schemes = encrypt_config.as_ref().map_or(0, |ec| ec.schemes.len()),
            decrypt_schemes = decrypt_config.as_ref().map_or(0, |dc| dc.schemes.len()),
            "combined crypto configs"
        );

        CryptoConfig {
            encrypt_config,
            decrypt_config,
        }
    }
}

fn merged(sets: impl Iterator<Item = ParameterSet>) -> ParameterSet {
    let mut params = ParameterSet::new();
    for set in sets {
        params.append(&set);
    }
    params
}

// An encrypt side produced by `combine` embeds the decrypt side it was
// combined with; re-combining must not count those schemes twice.
fn push_unique(target: &mut Vec<DecryptScheme>, schemes: Vec<DecryptScheme>) {
    for scheme in schemes {
        if !target.contains(&scheme) {
            target.push(scheme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CryptoConfig, DecryptConfig, EncryptConfig};
    use crate::crypto::blob::Blob;
    use crate::crypto::parameters::keys;
    use crate::crypto::schemes::{DecryptScheme, EncryptScheme};

    fn jwe(public_keys: &[&str]) -> CryptoConfig {
        CryptoConfig::encrypting(EncryptConfig::new(
            vec![EncryptScheme::Jwe {
                public_keys: public_keys.iter().map(|k| Blob::from(*k)).collect(),
            }],
            None,
        ))
    }

    fn x509(certs: &[&str]) -> CryptoConfig {
        CryptoConfig::decrypting(DecryptConfig::new(vec![DecryptScheme::X509 {
            x509s: certs.iter().map(|c| Blob::from(*c)).collect(),
        }]))
    }

    #[test]
    fn absent_side_reports_empty_parameters() {
        let config = x509(&["cert1"]);
        assert!(config.encrypt_config().is_none());
        assert!(config.encrypt_parameters().is_empty());
        assert!(!config.is_empty());
        assert!(CryptoConfig::default().is_empty());
    }

    #[test]
    fn combine_merges_both_directions() {
        let combined = CryptoConfig::combine(vec![jwe(&["key1"]), x509(&["cert1"]), jwe(&["key2"])]);

        let ec = combined.encrypt_config().expect("encrypt side present");
        assert_eq!(ec.schemes().len(), 2);
        assert_eq!(
            ec.parameters().get(keys::PUBKEYS),
            Some(&[Blob::from("key1"), Blob::from("key2")][..])
        );
        assert_eq!(ec.decrypt_config(), combined.decrypt_config());
        assert_eq!(
            combined.decrypt_parameters().get(keys::X509S),
            Some(&[Blob::from("cert1")][..])
        );
    }

    #[test]
    fn combine_keeps_missing_sides_absent() {
        let combined = CryptoConfig::combine(vec![x509(&["a"]), x509(&["b"])]);
        assert!(combined.encrypt_config().is_none());
        assert_eq!(combined.decrypt_config().map(|dc| dc.schemes().len()), Some(2));
        assert!(CryptoConfig::combine(Vec::new()).is_empty());
    }

    #[test]
    fn recombining_does_not_duplicate_embedded_decrypt_schemes() {
        let once = CryptoConfig::combine(vec![jwe(&["key1"]), x509(&["cert1"])]);
        let twice = CryptoConfig::combine(vec![once.clone()]);
        assert_eq!(once, twice);
    }
}
