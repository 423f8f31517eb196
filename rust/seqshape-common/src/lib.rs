//! Core definitions shared by the seqshape crates: the error type and the
//! crate-wide `Result` alias.

pub mod error;
pub mod result;

pub use result::Result;
