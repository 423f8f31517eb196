//! Matrix transposition of two-level sequences, including ragged ones.
//!
//! Output column `j` collects `rows[i][j]` for `i = 0, 1, ...` and stops at the
//! first row that is too short to have a cell `j`; later rows never contribute
//! to that column even when they are long enough. The column count starts at
//! the length of the first row and is raised whenever a longer row is visited
//! before a column stops, so such rows can add columns to the output.

use seqshape_common::{Result, error::Error};

use crate::{
    element::{Element, ElementKind, classify, container_rows, scalar_rows},
    scalar::{Scalar, ScalarKind, with_scalar_type},
};

/// Transposes an `i`-by-`j` sequence of rows into a `j`-by-`i` one.
///
/// Rows may be nested sequences, object arrays or scalar arrays. Nested and
/// object-array rows produce [`Element::Nested`] columns. Scalar-array rows
/// produce scalar-array columns of the same kind, each `i` values long; cells
/// skipped by the ragged early exit hold the default value of the kind.
///
/// An empty sequence, or one whose elements are scalars, is returned unchanged.
///
/// # Errors
///
/// Returns a kind mismatch if a row does not have the same kind as the first row.
pub fn transpose<T: Clone>(seq: &[Element<T>]) -> Result<Vec<Element<T>>> {
    match classify(seq) {
        ElementKind::Scalar => Ok(seq.to_vec()),
        ElementKind::ScalarArray(kind) => transpose_scalar_elements(seq, kind),
        kind => {
            let rows = container_rows(seq, kind, "transpose")?;
            let columns = build_columns(&rows)?;
            Ok(columns.into_iter().map(Element::Nested).collect())
        }
    }
}

/// Transposes plain rows. Column `j` is truncated at the first row shorter
/// than `j + 1`.
pub fn transpose_rows<X, R>(rows: &[R]) -> Vec<Vec<X>>
where
    X: Clone,
    R: AsRef<[X]>,
{
    let extents = column_extents::<X, R>(rows);
    extents
        .iter()
        .enumerate()
        .map(|(j, &extent)| {
            rows[..extent]
                .iter()
                .map(|row| row.as_ref()[j].clone())
                .collect()
        })
        .collect()
}

/// Transposes rows of scalars. Every output column is exactly `rows.len()`
/// values long, padded with `S::default()` past the point where the column
/// stopped.
pub fn transpose_scalar_arrays<S, A>(rows: &[A]) -> Vec<Vec<S>>
where
    S: Scalar,
    A: AsRef<[S]>,
{
    let extents = column_extents::<S, A>(rows);
    extents
        .iter()
        .enumerate()
        .map(|(j, &extent)| {
            let mut column = vec![S::default(); rows.len()];
            for (cell, row) in column.iter_mut().zip(&rows[..extent]) {
                *cell = row.as_ref()[j];
            }
            column
        })
        .collect()
}

/// Computes, for each output column, how many leading rows contribute to it.
pub(crate) fn column_extents<X, R: AsRef<[X]>>(rows: &[R]) -> Vec<usize> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };
    let mut columns = first.as_ref().len();
    let mut extents = Vec::with_capacity(columns);
    let mut j = 0;
    while j < columns {
        let mut extent = 0;
        for row in rows {
            let len = row.as_ref().len();
            columns = columns.max(len);
            if len <= j {
                break;
            }
            extent += 1;
        }
        extents.push(extent);
        j += 1;
    }
    if extents.iter().any(|&extent| extent < rows.len()) {
        log::debug!(
            "transpose: ragged input of {} rows, column extents {:?}",
            rows.len(),
            extents
        );
    }
    extents
}

fn build_columns<T: Clone>(rows: &[&[Element<T>]]) -> Result<Vec<Vec<Element<T>>>> {
    let extents = column_extents::<Element<T>, _>(rows);
    log::trace!(
        "transpose: {} rows into {} columns",
        rows.len(),
        extents.len()
    );
    extents
        .iter()
        .enumerate()
        .map(|(j, &extent)| {
            rows[..extent]
                .iter()
                .map(|row| {
                    row.get(j)
                        .cloned()
                        .ok_or_else(|| Error::index_out_of_range("transpose", j, row.len()))
                })
                .collect()
        })
        .collect()
}

fn transpose_scalar_elements<T>(seq: &[Element<T>], kind: ScalarKind) -> Result<Vec<Element<T>>> {
    with_scalar_type!(kind, S => {
        let rows = scalar_rows::<S, T>(seq, "transpose")?;
        Ok(transpose_scalar_arrays::<S, _>(rows.as_slice())
            .into_iter()
            .map(|column| Element::ScalarArray(S::into_array(column)))
            .collect())
    })
}
