#![warn(missing_docs)]

//! Procedural mesh generators for the procad component families.
//!
//! One pure function per family, each mapping a sparse [`Dimensions`]
//! record to a [`Mesh`](procad_mesh::Mesh). Generators share no state and
//! never fail: every dimension they read has a literal family-specific
//! default, and values declared out of range are the caller's concern
//! (the engine validates before dispatch).
//!
//! Geometry is a deliberate preview-quality approximation, not an exact
//! curved-surface model: curved surfaces are sampled at fixed segment
//! counts, and several families carry flat-face normal simplifications
//! documented on the individual generators.
//!
//! [`Dimensions`]: procad_spec::Dimensions

mod boxes;
mod gear;
mod round;

pub use boxes::{bracket, cube, generic_solid, plate, prism, pyramid};
pub use gear::gear;
pub use round::{bearing, bolt, cone, cylinder, shaft, sphere};
