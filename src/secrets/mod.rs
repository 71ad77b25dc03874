//! Secret masking.
//!
//! - [`OutputMasker`] - Masks registered token values in arbitrary text
//! - [`redact_url`] - Hides the password component of a URL
//!
//! # Example
//!
//! ```
//! use gogs_mirror::secrets::OutputMasker;
//!
//! let mut masker = OutputMasker::new();
//! masker.add_secret("super-secret-value");
//! let output = masker.mask("The key is super-secret-value here");
//! assert!(!output.contains("super-secret-value"));
//! ```

pub mod mask;

pub use mask::{redact_url, OutputMasker};
