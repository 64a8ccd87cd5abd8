#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fundamental physical constants and frequency conversions.
pub mod constants;
/// Shared numerical primitives (complex scalars, principal-branch powers).
pub mod math;
/// Construction and evaluation error types.
pub mod errors;
/// Permittivity models and the evaluation interface.
pub mod models;
/// Material quantities derived from a permittivity (conductivity, index, impedance).
pub mod materials;
/// Frequency grids, vectorized evaluation and post-processing helpers.
pub mod sweep;

/// Common exports for downstream crates.
pub mod prelude;
