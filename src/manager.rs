//! Key Manager - dispatches generation and validation by product name.

use crate::error::KeyError;
use crate::keygen::{RetailSimpleScheme, Scheme, Windows95OemScheme, Windows98RetailScheme};
use rand::RngCore;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Registry of product key schemes keyed by product name.
///
/// Several names may share one scheme instance. Registering a name twice
/// replaces the earlier entry.
#[derive(Debug, Default, Clone)]
pub struct KeyManager {
    schemes: BTreeMap<String, Arc<dyn Scheme>>,
}

impl KeyManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager holding the built-in products.
    pub fn with_default_schemes() -> Self {
        let mut manager = Self::new();
        register_default_schemes(&mut manager);
        manager
    }

    /// Register `scheme` under `name`, replacing any existing entry.
    pub fn register(&mut self, name: impl Into<String>, scheme: Arc<dyn Scheme>) {
        let name = name.into();
        debug!(name = %name, scheme = ?scheme, "registering key scheme");
        if self.schemes.insert(name.clone(), scheme).is_some() {
            debug!(name = %name, "replaced existing key scheme");
        }
    }

    /// Look up the scheme registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Scheme>> {
        self.schemes.get(name)
    }

    fn scheme(&self, name: &str) -> Result<&Arc<dyn Scheme>, KeyError> {
        self.get(name).ok_or_else(|| {
            warn!(name, "unknown key scheme requested");
            KeyError::UnknownScheme {
                name: name.to_string(),
            }
        })
    }

    /// Generate a key for the named product.
    ///
    /// # Errors
    /// Returns [`KeyError::UnknownScheme`] if nothing is registered under `name`.
    pub fn generate(&self, name: &str) -> Result<String, KeyError> {
        let key = self.scheme(name)?.generate();
        debug!(name, key = %key, "generated key");
        Ok(key)
    }

    /// Generate a key for the named product from an explicit randomness source.
    ///
    /// # Errors
    /// Returns [`KeyError::UnknownScheme`] if nothing is registered under `name`.
    pub fn generate_with(&self, name: &str, rng: &mut dyn RngCore) -> Result<String, KeyError> {
        let key = self.scheme(name)?.generate_with(rng);
        debug!(name, key = %key, "generated key");
        Ok(key)
    }

    /// Validate a key against the named product's format.
    ///
    /// # Errors
    /// Returns [`KeyError::UnknownScheme`] if nothing is registered under `name`.
    /// A malformed key is reported as `Ok(false)`.
    pub fn validate(&self, name: &str, key: &str) -> Result<bool, KeyError> {
        let valid = self.scheme(name)?.validate(key);
        debug!(name, key, valid, "validated key");
        Ok(valid)
    }

    /// Registered product names in lexicographic order.
    pub fn scheme_names(&self) -> Vec<&str> {
        self.schemes.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}

/// Register the five built-in products.
///
/// Windows 98 OEM keys use exactly the Windows 95 OEM format, so both
/// names point at the same instance.
pub fn register_default_schemes(manager: &mut KeyManager) {
    let oem: Arc<dyn Scheme> = Arc::new(Windows95OemScheme);

    manager.register("Windows 95 OEM", Arc::clone(&oem));
    manager.register("Windows 98 OEM", oem);
    manager.register(
        "Windows 95 Retail",
        Arc::new(RetailSimpleScheme::new("Windows 95 Retail")),
    );
    manager.register(
        "Office 97 Retail",
        Arc::new(RetailSimpleScheme::new("Office 97 Retail")),
    );
    manager.register("Windows 98 Retail", Arc::new(Windows98RetailScheme));
}
