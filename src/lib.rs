//! # Survey Profile Aligner
//!
//! This library turns an unordered cloud of 3D survey samples (for example
//! bathymetric soundings along a transect) into a canonically oriented point
//! set suitable for flat-plane profile plotting. Repeated runs on the same
//! or slightly perturbed data produce a consistent, comparable layout.
//!
//! The main components are:
//! - `align`: the four-stage canonicalization pipeline
//!   (furthest pair, axis alignment, centroid leveling, origin
//!   normalization) composed by `align::canonicalize`.
//! - `math`: `Point3` and the vector operations the pipeline is built on.
//! - `data`: comma-separated point-table parsing and full-precision export.
//! - `plot`: projection of the canonical set to pixel coordinates, with
//!   vertical exaggeration and a nearest-point query.
//! - `chart`: HTML chart export of a projected profile.
//!
//! The pipeline is a rigid transform: every stage preserves pairwise
//! distances, and the output keeps the input's length and row order.

pub mod align;
pub mod chart;
pub mod data;
pub mod math;
pub mod plot;
pub mod text;
