//! String-keyed parameter sets, the shape an encryption engine reads.
//! Sequences under different keys can be positionally paired, so the order
//! of blobs under one key is always preserved.

use std::collections::BTreeMap;

use serde::Serialize;

use super::blob::Blob;

/// Key names understood by the encryption engines.
pub mod keys {
    pub const PUBKEYS: &str = "pubkeys";
    pub const X509S: &str = "x509s";
    pub const GPG_RECIPIENTS: &str = "gpg-recipients";
    pub const GPG_PUBKEYRINGFILE: &str = "gpg-pubkeyringfile";
    pub const MODULES: &str = "modules";
    pub const PINS: &str = "pins";
    pub const PRIVKEYS: &str = "privkeys";
    pub const PRIVKEYS_PASSWORDS: &str = "privkeys-passwords";
    pub const GPG_PRIVATEKEYS: &str = "gpg-privatekeys";
    pub const GPG_PRIVATEKEYS_PASSWORDS: &str = "gpg-privatekeys-passwords";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParameterSet(BTreeMap<String, Vec<Blob>>);

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&[Blob]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Blob])> {
        self.0.iter().map(|(key, blobs)| (key.as_str(), blobs.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn insert(&mut self, key: &str, blobs: Vec<Blob>) {
        self.0.insert(key.to_string(), blobs);
    }

    /// Appends every sequence of `other` after the sequence stored under the
    /// same key, creating keys that are missing.
    pub(crate) fn append(&mut self, other: &ParameterSet) {
        for (key, blobs) in &other.0 {
            self.0
                .entry(key.clone())
                .or_default()
                .extend(blobs.iter().cloned());
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<Blob>)> for ParameterSet {
    fn from_iter<T: IntoIterator<Item = (K, Vec<Blob>)>>(iter: T) -> Self {
        ParameterSet(iter.into_iter().map(|(key, blobs)| (key.into(), blobs)).collect())
    }
}
