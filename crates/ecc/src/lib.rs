//! Affine short Weierstrass points, the group traits the pairing layer is written against, and
//! multi-scalar multiplication.

pub use zkv_algebra as algebra;

mod affine_point;
pub use affine_point::*;
mod group;
pub use group::*;
mod msm;
pub use msm::*;

/// Weierstrass curve traits and the macros declaring curve point types.
pub mod weierstrass;

#[cfg(test)]
mod tests;
