//! Primitive surface of the provider set up at startup.
//!
//! These are the provider's own modules, re-exported unchanged. Callers that
//! need FIPS-approved behaviour should check [`crate::is_enabled`] after
//! [`crate::init`] has run; nothing here enforces it.
//!
//! ```rust,no_run
//! use fipsgate::primitives::digest;
//!
//! fipsgate::init();
//! let sum = digest::digest(&digest::SHA256, b"abc");
//! assert_eq!(sum.as_ref().len(), 32);
//! ```

pub use aws_lc_rs::{aead, agreement, digest, hkdf, hmac, rand, signature};
