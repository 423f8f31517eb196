//! Shaping operations over nested sequences.
//!
//! The crate works on sequences of [`Element`]s, where each element is a scalar,
//! a nested sequence, a fixed-length object array, or a dense scalar array. It
//! provides three families of operations:
//!
//! - [`flatten`] and [`flatten_levels`]: collapse nesting one level at a time,
//!   either completely or up to a level budget.
//! - [`transpose`]: turn an `i`-by-`j` sequence of rows into a `j`-by-`i` one,
//!   with defined behavior for ragged rows.
//! - [`ensure_size`]: pad a growable sequence with `None` up to a length.
//!
//! Every sequence is classified by its first element (see [`classify`]); all
//! elements of a sequence are expected to share that kind, and a sequence that
//! does not is reported as an error rather than partially processed.
//!
//! Inputs are borrowed as slices, so both `Vec<Element<T>>` and fixed-length
//! arrays are accepted. Outputs are always freshly allocated vectors, and only
//! [`ensure_size`] mutates its argument.
//!
//! Typed counterparts operate directly on rows of plain values:
//! [`flatten_scalar_arrays`], [`transpose_rows`] and [`transpose_scalar_arrays`].
//!
//! # Example
//!
//! ```
//! use seqshape::{Element, flatten, scalars, transpose};
//!
//! let matrix = vec![
//!     Element::nested(scalars([1, 2, 3])),
//!     Element::nested(scalars([4, 5, 6])),
//! ];
//!
//! assert_eq!(flatten(&matrix).unwrap(), scalars([1, 2, 3, 4, 5, 6]));
//! assert_eq!(
//!     transpose(&matrix).unwrap(),
//!     vec![
//!         Element::nested(scalars([1, 4])),
//!         Element::nested(scalars([2, 5])),
//!         Element::nested(scalars([3, 6])),
//!     ]
//! );
//! ```

pub mod element;
pub mod flatten;
pub mod resize;
pub mod scalar;
pub mod transpose;

pub use element::{Element, ElementKind, classify, depth, scalars};
pub use flatten::{flatten, flatten_levels, flatten_scalar_arrays};
pub use resize::{ensure_size, ensure_size_with};
pub use scalar::{Scalar, ScalarArray, ScalarKind};
pub use transpose::{transpose, transpose_rows, transpose_scalar_arrays};

pub use seqshape_common::{
    Result,
    error::{Error, ErrorKind},
};
