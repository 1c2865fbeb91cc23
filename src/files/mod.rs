//! File helpers shared by the transforms: page naming and atomic replacement.

pub mod atomic;
pub mod filename;

pub use atomic::write_atomic;
pub use filename::{sanitize, NamespaceName};
