//! Collapsing nested sequences into flat ones.
//!
//! Flattening proceeds one level at a time: the sequence is classified by its
//! first element, every child is concatenated in order into a fresh sequence,
//! and the result is classified again. Scalar arrays are a terminal case: they
//! are concatenated into a single dense array instead of being unwrapped.

use std::borrow::Cow;

use seqshape_common::Result;

use crate::{
    element::{Element, ElementKind, classify, container_rows, scalar_rows},
    scalar::{Scalar, ScalarArray, ScalarKind, with_scalar_type},
};

/// Flattens `seq` until its elements are scalars.
///
/// A sequence whose elements are scalar arrays becomes a one-element sequence
/// holding the concatenation of all of them. Element order is preserved,
/// outer first and then inner left to right.
///
/// # Errors
///
/// Returns a kind mismatch if, at a level whose first element is a container
/// or a scalar array, some element does not have the same kind as that first
/// element. A level whose first element is a scalar ends flattening and is
/// returned as is, so its remaining elements are not checked: `[1, [2]]`
/// comes back unchanged.
pub fn flatten<T: Clone>(seq: &[Element<T>]) -> Result<Vec<Element<T>>> {
    flatten_impl(seq, None)
}

/// Flattens at most `level` levels of `seq`.
///
/// `level == 0` returns a copy of `seq`. Reaching a sequence of scalar arrays
/// with budget left concatenates them in a single step, regardless of how much
/// budget remains.
pub fn flatten_levels<T: Clone>(seq: &[Element<T>], level: usize) -> Result<Vec<Element<T>>> {
    flatten_impl(seq, Some(level))
}

/// Concatenates `arrays` into one dense array, returned as the sole element of
/// the output.
///
/// The output always has exactly one element, even for an empty input.
pub fn flatten_scalar_arrays<S, A>(arrays: &[A]) -> Vec<Vec<S>>
where
    S: Scalar,
    A: AsRef<[S]>,
{
    vec![concat_scalars(arrays)]
}

enum Unwrapped<T> {
    /// The sequence is already flat.
    Done,
    /// One level was removed.
    Level(Vec<Element<T>>),
    /// Scalar arrays were packed into one.
    Packed(ScalarArray),
}

fn flatten_impl<T: Clone>(seq: &[Element<T>], limit: Option<usize>) -> Result<Vec<Element<T>>> {
    let mut current = Cow::Borrowed(seq);
    let mut remaining = limit;
    let mut level = 0usize;
    while remaining != Some(0) {
        match unwrap_level(&current)? {
            Unwrapped::Done => break,
            Unwrapped::Level(next) => {
                log::trace!(
                    "flatten: level {level} unwrapped {} elements into {}",
                    current.len(),
                    next.len()
                );
                current = Cow::Owned(next);
                remaining = remaining.map(|r| r - 1);
                level += 1;
            }
            Unwrapped::Packed(array) => {
                log::trace!(
                    "flatten: level {level} packed {} scalar arrays into {} values",
                    current.len(),
                    array.len()
                );
                return Ok(vec![Element::ScalarArray(array)]);
            }
        }
    }
    Ok(current.into_owned())
}

fn unwrap_level<T: Clone>(seq: &[Element<T>]) -> Result<Unwrapped<T>> {
    match classify(seq) {
        ElementKind::Scalar => Ok(Unwrapped::Done),
        ElementKind::ScalarArray(kind) => pack_scalar_arrays(seq, kind).map(Unwrapped::Packed),
        kind => concat_children(seq, kind).map(Unwrapped::Level),
    }
}

fn concat_children<T: Clone>(seq: &[Element<T>], kind: ElementKind) -> Result<Vec<Element<T>>> {
    let rows = container_rows(seq, kind, "flatten")?;
    let mut flat = Vec::with_capacity(rows.iter().map(|row| row.len()).sum());
    for row in rows {
        flat.extend_from_slice(row);
    }
    Ok(flat)
}

fn pack_scalar_arrays<T>(seq: &[Element<T>], kind: ScalarKind) -> Result<ScalarArray> {
    with_scalar_type!(kind, S => {
        let rows = scalar_rows::<S, T>(seq, "flatten")?;
        Ok(S::into_array(concat_scalars(rows.as_slice())))
    })
}

fn concat_scalars<S: Scalar, A: AsRef<[S]>>(arrays: &[A]) -> Vec<S> {
    let size = arrays.iter().map(|a| a.as_ref().len()).sum();
    let mut flat = Vec::with_capacity(size);
    for array in arrays {
        flat.extend_from_slice(array.as_ref());
    }
    flat
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::scalars;

    fn rows(values: &[&[i32]]) -> Vec<Element<i32>> {
        values
            .iter()
            .map(|row| Element::nested(scalars(row.iter().copied())))
            .collect()
    }

    #[test]
    fn test_flatten_two_levels() {
        let seq = rows(&[&[1, 2], &[3, 4]]);
        assert_eq!(flatten(&seq).unwrap(), scalars([1, 2, 3, 4]));
    }

    #[test]
    fn test_flatten_three_levels() {
        let seq = vec![
            Element::nested(rows(&[&[1], &[2]])),
            Element::nested(rows(&[&[3], &[4]])),
        ];
        assert_eq!(flatten(&seq).unwrap(), scalars([1, 2, 3, 4]));
    }

    #[test]
    fn test_flatten_one_level() {
        let seq = vec![
            Element::nested(rows(&[&[1], &[2]])),
            Element::nested(rows(&[&[3], &[4]])),
        ];
        assert_eq!(
            flatten_levels(&seq, 1).unwrap(),
            rows(&[&[1], &[2], &[3], &[4]])
        );
    }

    #[test]
    fn test_flatten_level_zero_is_identity() {
        let seq = rows(&[&[1, 2], &[3]]);
        assert_eq!(flatten_levels(&seq, 0).unwrap(), seq);
    }

    #[test]
    fn test_flatten_empty() {
        let seq: Vec<Element<i32>> = vec![];
        assert!(flatten(&seq).unwrap().is_empty());
        for level in 0..4 {
            assert!(flatten_levels(&seq, level).unwrap().is_empty());
        }
    }

    #[test]
    fn test_flatten_scalars_is_identity() {
        let seq = scalars(["a", "b", "c"]);
        assert_eq!(flatten(&seq).unwrap(), seq);
    }

    #[test]
    fn test_flatten_empty_children() {
        let seq = vec![
            Element::nested(scalars([1])),
            Element::nested([]),
            Element::nested(scalars([2, 3])),
        ];
        assert_eq!(flatten(&seq).unwrap(), scalars([1, 2, 3]));
    }

    #[test]
    fn test_flatten_object_arrays() {
        let seq = [
            Element::object_array(scalars(["x", "y"])),
            Element::object_array(scalars(["z"])),
        ];
        assert_eq!(flatten(&seq).unwrap(), scalars(["x", "y", "z"]));
    }

    #[test]
    fn test_flatten_scalar_arrays_packs() {
        let seq: Vec<Element<()>> = vec![
            Element::scalar_array(vec![1i32, 2, 3]),
            Element::scalar_array(vec![4i32, 5]),
        ];
        let flat = flatten(&seq).unwrap();
        assert_eq!(flat, vec![Element::scalar_array(vec![1i32, 2, 3, 4, 5])]);
    }

    #[test]
    fn test_flatten_nested_scalar_arrays() {
        let seq: Vec<Element<()>> = vec![
            Element::nested([Element::scalar_array(vec!['a', 'b'])]),
            Element::nested([Element::scalar_array(vec!['c'])]),
        ];
        assert_eq!(
            flatten(&seq).unwrap(),
            vec![Element::scalar_array(vec!['a', 'b', 'c'])]
        );
        // One level only unwraps the outer sequences.
        assert_eq!(
            flatten_levels(&seq, 1).unwrap(),
            vec![
                Element::scalar_array(vec!['a', 'b']),
                Element::scalar_array(vec!['c'])
            ]
        );
        // The packing step fires with any remaining budget.
        assert_eq!(
            flatten_levels(&seq, 2).unwrap(),
            vec![Element::scalar_array(vec!['a', 'b', 'c'])]
        );
    }

    #[test]
    fn test_flatten_levels_packs_scalar_arrays_with_budget_one() {
        let seq: Vec<Element<()>> = vec![
            Element::scalar_array(vec![1.0f64]),
            Element::scalar_array(vec![2.0f64]),
        ];
        assert_eq!(
            flatten_levels(&seq, 1).unwrap(),
            vec![Element::scalar_array(vec![1.0f64, 2.0])]
        );
        assert_eq!(flatten_levels(&seq, 0).unwrap(), seq);
    }

    #[test]
    fn test_flatten_scalar_led_level_is_not_checked() {
        let seq = vec![Element::scalar(1), Element::nested(scalars([2]))];
        assert_eq!(flatten(&seq).unwrap(), seq);
        assert_eq!(flatten_levels(&seq, 3).unwrap(), seq);
    }

    #[test]
    fn test_flatten_mixed_kinds_fails() {
        let seq = vec![Element::nested(scalars([1])), Element::scalar(2)];
        let err = flatten(&seq).unwrap_err();
        assert!(err.is_kind_mismatch());

        let seq: Vec<Element<()>> = vec![
            Element::scalar_array(vec![1i32]),
            Element::scalar_array(vec![true]),
        ];
        assert!(flatten(&seq).unwrap_err().is_kind_mismatch());
    }

    #[test]
    fn test_flatten_does_not_touch_input() {
        let seq = rows(&[&[1, 2], &[3]]);
        let before = seq.clone();
        let _ = flatten(&seq).unwrap();
        assert_eq!(seq, before);
    }

    #[test]
    fn test_flatten_scalar_arrays_typed() {
        let arrays = [vec![1i32, 2, 3], vec![4, 5]];
        assert_eq!(
            flatten_scalar_arrays::<i32, _>(&arrays),
            vec![vec![1, 2, 3, 4, 5]]
        );

        let none: [Vec<i16>; 0] = [];
        assert_eq!(
            flatten_scalar_arrays::<i16, _>(&none),
            vec![Vec::<i16>::new()]
        );
    }

    #[test]
    fn test_concat_children_rejects_scalar_kind() {
        let seq = scalars([1]);
        assert!(concat_children(&seq, ElementKind::Scalar).is_err());
    }
}
