//! Core compute primitives.
//!
//! The dense row-major [`Matrix`] is the shared numeric type between the
//! nutrition feature block, the scaler and the neighbor index.

mod matrix;

pub use matrix::Matrix;
