//! Route geometry components: the sole collaborators the scheduler
//! consults about geography.

/// Haversine-based leg distance/duration estimator.
pub mod estimator;
/// Linear coordinate interpolation for mid-leg stop placement.
pub mod interpolate;

pub use estimator::estimate;
pub use interpolate::interpolate;
