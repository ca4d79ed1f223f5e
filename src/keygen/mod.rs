//! Key generation module

pub mod oem;
pub mod retail;
pub mod validation;

pub use oem::Windows95OemScheme;
pub use retail::{RetailSimpleScheme, Windows98RetailScheme};

use rand::RngCore;
use std::fmt::Debug;

/// One product key format: a grammar plus a checksum rule.
///
/// Schemes are stateless, so a single instance can be shared between
/// several registry entries and threads.
pub trait Scheme: Debug + Send + Sync {
    /// Generate a key using the given randomness source.
    ///
    /// Never fails; constraints are met by retrying draws.
    fn generate_with(&self, rng: &mut dyn RngCore) -> String;

    /// Check a key against this format.
    ///
    /// Any malformed input yields `false`.
    fn validate(&self, key: &str) -> bool;

    /// Generate a key using the thread-local generator.
    fn generate(&self) -> String {
        self.generate_with(&mut rand::thread_rng())
    }
}
