//! Opaque binary values carried inside a parameter set. A blob may hold a pin,
//! a password or a private key, so its memory is wiped on drop and its `Debug`
//! output never shows the content.

use std::fmt;

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine};
use serde::{Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Immutable owned byte string. There is no mutable access once built.
#[derive(Clone, PartialEq, Eq, Hash, Default, Zeroize, ZeroizeOnDrop)]
pub struct Blob(Vec<u8>);

impl Blob {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Copies the content out. The copy is not zeroized by this crate.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.clone()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blob(<{} bytes>)", self.0.len())
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Blob {
    fn from(value: Vec<u8>) -> Self {
        Blob(value)
    }
}

impl From<&Vec<u8>> for Blob {
    fn from(value: &Vec<u8>) -> Self {
        Blob(value.clone())
    }
}

impl From<&[u8]> for Blob {
    fn from(value: &[u8]) -> Self {
        Blob(value.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Blob {
    fn from(value: &[u8; N]) -> Self {
        Blob(value.to_vec())
    }
}

impl From<&str> for Blob {
    fn from(value: &str) -> Self {
        Blob(value.as_bytes().to_vec())
    }
}

impl From<String> for Blob {
    fn from(value: String) -> Self {
        Blob(value.into_bytes())
    }
}

impl From<&Blob> for Blob {
    fn from(value: &Blob) -> Self {
        value.clone()
    }
}

impl Serialize for Blob {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD_NO_PAD.encode(&self.0))
    }
}

/// Collects any iterator of blob-like values, preserving order.
pub(crate) fn collect_blobs<I, B>(values: I) -> Vec<Blob>
where
    I: IntoIterator<Item = B>,
    B: Into<Blob>,
{
    values.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::{collect_blobs, Blob};

    #[test]
    fn debug_hides_content() {
        let pin = Blob::from("1234");
        let rendered = format!("{pin:?}");
        assert_eq!(rendered, "Blob(<4 bytes>)");
        assert!(!rendered.contains("1234"));
    }

    #[test]
    fn conversions_keep_bytes() {
        assert_eq!(Blob::from(b"key1").as_bytes(), b"key1");
        assert_eq!(Blob::from(vec![0u8, 255]).as_bytes(), &[0u8, 255]);
        assert_eq!(Blob::from(String::from("cert")).to_vec(), b"cert".to_vec());
        assert!(Blob::from(Vec::new()).is_empty());
    }

    #[test]
    fn collect_preserves_order() {
        let blobs = collect_blobs(["a", "b", "c"]);
        let bytes: Vec<&[u8]> = blobs.iter().map(Blob::as_bytes).collect();
        assert_eq!(bytes, vec![&b"a"[..], &b"b"[..], &b"c"[..]]);
    }

    #[test]
    fn serializes_as_unpadded_base64() {
        let encoded = serde_json::to_string(&Blob::from("key1")).expect("blob serializes");
        assert_eq!(encoded, "\"a2V5MQ\"");
    }
}
