//! Tunable limits applied by the scheme constructors. Loading these from a
//! file or command line is left to the caller; the struct is plain serde data
//! so any format the caller already uses will do.

use serde::{Deserialize, Serialize};

/// How many PKCS#11 modules the encrypt path accepts. Multi-module encryption
/// is experimental, so only a single module is allowed by default.
pub const DEFAULT_MAX_PKCS11_ENCRYPT_MODULES: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConstructorLimits {
    /// Upper bound on modules passed to the PKCS#11 encrypt constructor.
    /// The lower bound is always one.
    pub max_pkcs11_encrypt_modules: usize,
}

impl Default for ConstructorLimits {
    fn default() -> Self {
        Self {
            max_pkcs11_encrypt_modules: DEFAULT_MAX_PKCS11_ENCRYPT_MODULES,
        }
    }
}
