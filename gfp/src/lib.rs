#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

#[cfg(test)]
extern crate std;

mod dev;
mod element;
mod error;
mod modulus;

pub use crate::{
    element::FieldElement,
    error::{Error, Result},
    modulus::Modulus,
};
pub use bigint;
#[cfg(feature = "rand_core")]
pub use rand_core;
pub use subtle;
#[cfg(feature = "zeroize")]
pub use zeroize;

use bigint::{U64, U128, U256};

/// Element of a field whose modulus fits in 64 bits.
pub type FieldElement64 = FieldElement<{ U64::LIMBS }>;

/// Element of a field whose modulus fits in 128 bits.
pub type FieldElement128 = FieldElement<{ U128::LIMBS }>;

/// Element of a field whose modulus fits in 256 bits.
pub type FieldElement256 = FieldElement<{ U256::LIMBS }>;

/// Modulus of at most 64 bits.
pub type Modulus64 = Modulus<{ U64::LIMBS }>;

/// Modulus of at most 128 bits.
pub type Modulus128 = Modulus<{ U128::LIMBS }>;

/// Modulus of at most 256 bits.
pub type Modulus256 = Modulus<{ U256::LIMBS }>;
