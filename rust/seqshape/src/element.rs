//! The element model shared by all shaping operations, and the classifier that
//! decides how a sequence is unwrapped or transposed.
//!
//! A sequence is any `&[Element<T>]`: a growable `Vec<Element<T>>` and a
//! fixed-length `Box<[Element<T>]>` or `[Element<T>; N]` are both accepted as
//! input, while outputs are always `Vec<Element<T>>`.

use seqshape_common::{Result, error::Error, result::kind_mismatch};

use crate::scalar::{Scalar, ScalarArray, ScalarKind};

/// One element of a sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element<T> {
    /// An atomic value.
    Scalar(T),
    /// A growable child sequence.
    Nested(Vec<Element<T>>),
    /// A dense buffer of scalar values. Never unwrapped element by element.
    ScalarArray(ScalarArray),
    /// A fixed-length child sequence.
    ObjectArray(Box<[Element<T>]>),
}

/// The kind of a sequence, as decided by its first element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    Scalar,
    Nested,
    ScalarArray(ScalarKind),
    ObjectArray,
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Scalar => "scalar",
            ElementKind::Nested => "nested sequence",
            ElementKind::ScalarArray(kind) => kind.name(),
            ElementKind::ObjectArray => "object array",
        }
    }

    /// `true` for kinds whose contents are unwrapped element by element.
    pub fn is_container(&self) -> bool {
        matches!(self, ElementKind::Nested | ElementKind::ObjectArray)
    }
}

impl<T> Element<T> {
    pub fn scalar(value: T) -> Element<T> {
        Element::Scalar(value)
    }

    pub fn nested(elements: impl IntoIterator<Item = Element<T>>) -> Element<T> {
        Element::Nested(elements.into_iter().collect())
    }

    pub fn object_array(elements: impl Into<Box<[Element<T>]>>) -> Element<T> {
        Element::ObjectArray(elements.into())
    }

    pub fn scalar_array(array: impl Into<ScalarArray>) -> Element<T> {
        Element::ScalarArray(array.into())
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Scalar(_) => ElementKind::Scalar,
            Element::Nested(_) => ElementKind::Nested,
            Element::ScalarArray(array) => ElementKind::ScalarArray(array.kind()),
            Element::ObjectArray(_) => ElementKind::ObjectArray,
        }
    }

    /// Returns the contents of a nested sequence or object array.
    pub fn children(&self) -> Option<&[Element<T>]> {
        match self {
            Element::Nested(elements) => Some(elements),
            Element::ObjectArray(elements) => Some(elements),
            Element::Scalar(_) | Element::ScalarArray(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&T> {
        match self {
            Element::Scalar(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_scalar_array(&self) -> Option<&ScalarArray> {
        match self {
            Element::ScalarArray(array) => Some(array),
            _ => None,
        }
    }

    /// Number of nesting levels below this element.
    ///
    /// A scalar has depth 0, a scalar array depth 1, and a container one more
    /// than its deepest child (an empty container has depth 1).
    pub fn depth(&self) -> usize {
        match self {
            Element::Scalar(_) => 0,
            Element::ScalarArray(_) => 1,
            Element::Nested(elements) => 1 + max_depth(elements),
            Element::ObjectArray(elements) => 1 + max_depth(elements),
        }
    }
}

impl<T> From<ScalarArray> for Element<T> {
    fn from(array: ScalarArray) -> Element<T> {
        Element::ScalarArray(array)
    }
}

/// Wraps every value as an [`Element::Scalar`].
pub fn scalars<T>(values: impl IntoIterator<Item = T>) -> Vec<Element<T>> {
    values.into_iter().map(Element::Scalar).collect()
}

/// Classifies `seq` by its first element. An empty sequence is [`ElementKind::Scalar`].
pub fn classify<T>(seq: &[Element<T>]) -> ElementKind {
    seq.first().map_or(ElementKind::Scalar, Element::kind)
}

/// Nesting depth of a sequence: one more than its deepest element.
pub fn depth<T>(seq: &[Element<T>]) -> usize {
    1 + max_depth(seq)
}

fn max_depth<T>(elements: &[Element<T>]) -> usize {
    elements.iter().map(Element::depth).max().unwrap_or(0)
}

/// Borrows the children of every element of `seq`, which must all be of the
/// container kind `kind`.
pub(crate) fn container_rows<'a, T>(
    seq: &'a [Element<T>],
    kind: ElementKind,
    context: &str,
) -> Result<Vec<&'a [Element<T>]>> {
    if !kind.is_container() {
        return Err(Error::logic(format!(
            "{context}: {} is not a container kind",
            kind.name()
        )));
    }
    seq.iter()
        .enumerate()
        .map(|(index, element)| match element.children() {
            Some(children) if element.kind() == kind => Ok(children),
            _ => kind_mismatch(context, index, kind.name(), element.kind().name()),
        })
        .collect()
}

/// Borrows every element of `seq` as a typed scalar slice of `S`.
pub(crate) fn scalar_rows<'a, S: Scalar, T>(
    seq: &'a [Element<T>],
    context: &str,
) -> Result<Vec<&'a [S]>> {
    seq.iter()
        .enumerate()
        .map(|(index, element)| {
            match element.as_scalar_array().and_then(ScalarArray::as_slice::<S>) {
                Some(values) => Ok(values),
                None => kind_mismatch(context, index, S::KIND.name(), element.kind().name()),
            }
        })
        .collect()
}
