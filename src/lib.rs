//! Bidirectional one-to-one hash maps.
//!
//! A [`Bijection`] keeps a forward set of keys and a backward set of values in lockstep, so
//! either side can be looked up, inserted, or removed at hashmap speed. Inserting a pair that
//! collides with existing pairs on either side evicts them, and the reverse direction is always
//! one call away as a live [`Inverse`] or [`InverseMut`] view.

#![deny(unused_imports, missing_debug_implementations, unreachable_pub)]
#![cfg_attr(doc, deny(missing_docs, rustdoc::broken_intra_doc_links))]
#![warn(rust_2018_idioms)]

/// The main data struct
pub mod bijection;
pub use crate::bijection::*;

/// Live views of a bijection in the other direction
pub mod inverse;
pub use crate::inverse::*;

/// The result of inserting into a bijection
pub mod evicted;
pub use crate::evicted::*;

/// Traits for code that works on either direction of a bijection
pub mod mapping;
pub use crate::mapping::*;

/// The crate's error type
pub mod error;
pub use crate::error::*;

/// Various helpful functions
pub(crate) mod utils;

#[cfg(feature = "serde")]
mod serde;
