//! RetroKeyGen - generate and validate retro product keys
//!
//! Each supported product uses a simple historical key format: a fixed
//! grammar plus a digit-sum checksum modulo 7. The [`KeyManager`] maps
//! product names to [`Scheme`] implementations and dispatches to them.
//!
//! ```
//! use retro_key_gen::KeyManager;
//!
//! let manager = KeyManager::with_default_schemes();
//! let key = manager.generate("Windows 95 Retail").unwrap();
//! assert!(manager.validate("Windows 95 Retail", &key).unwrap());
//! ```

pub mod checksum;
pub mod error;
pub mod keygen;
pub mod manager;
pub mod types;

pub use error::KeyError;
pub use keygen::{RetailSimpleScheme, Scheme, Windows95OemScheme, Windows98RetailScheme};
pub use manager::{register_default_schemes, KeyManager};
