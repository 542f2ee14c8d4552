//! Submission transport module

mod transport;

pub use transport::*;
