#![cfg_attr(not(feature = "std"), no_std)]
//! A crate for KZG polynomial and vector commitments over a powers-of-tau SRS.
#![deny(unused_import_braces, unused_qualifications, trivial_casts)]
#![deny(trivial_numeric_casts, variant_size_differences)]
#![deny(stable_features, unreachable_pub, non_shorthand_field_patterns)]
#![deny(unused_attributes, unused_mut)]
#![deny(missing_docs)]
#![deny(unused_imports)]
#![deny(renamed_and_removed_lints, stable_features, unused_allocation)]
#![deny(unused_comparisons, bare_trait_objects, unused_must_use)]
#![forbid(unsafe_code)]
#![doc = include_str!("../../README.md")]

#[allow(unused)]
#[macro_use]
extern crate derivative;
#[macro_use]
extern crate ark_std;

pub use ark_poly::{DenseUVPolynomial, Polynomial};

/// Errors surfaced by the commitment, opening, and SRS-access operations.
pub mod error;
pub use error::*;

pub(crate) mod utils;
pub use utils::field_element_from_be_bytes;

/// Read-only access to the powers-of-tau structured reference string.
pub mod srs;
pub use srs::*;

/// The core [[KZG10]][kzg] construction.
///
/// [kzg]: http://cacr.uwaterloo.ca/techreports/2010/cacr2010-10.pdf
pub mod kzg10;
pub use kzg10::*;

/// Vector commitments obtained by interpolating the vector over a
/// root-of-unity evaluation domain and committing to the interpolant.
pub mod vector;
pub use vector::*;
