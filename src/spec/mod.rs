//! Spec layer: the argument spec document and its typed parameter tree.
//!
//! This module is intentionally separate from tree building and rendering.
//! It owns:
//! - Scalar (values of `required` and `choices`)
//! - ParameterTree (ordered, validated `options` mapping)
//! - document loading and the `argument_specs.main.options` lookup

pub mod document;
pub mod params;
pub mod scalar;

pub use document::{extract_parameters, load_document};
pub use params::{Parameter, ParameterTree};
pub use scalar::Scalar;
