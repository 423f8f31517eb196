//! Dense buffers of scalar values.
//!
//! A [`ScalarArray`] is the leaf form that shaping operations never descend into:
//! flattening a sequence of scalar arrays concatenates them into one buffer, and
//! transposing them produces buffers of the same [`ScalarKind`].

/// Evaluates `$body` with `$S` bound to the Rust type of the given [`ScalarKind`].
macro_rules! with_scalar_type {
    ($kind:expr, $S:ident => $body:expr) => {
        match $kind {
            $crate::scalar::ScalarKind::Boolean => {
                type $S = bool;
                $body
            }
            $crate::scalar::ScalarKind::Char => {
                type $S = char;
                $body
            }
            $crate::scalar::ScalarKind::Int8 => {
                type $S = i8;
                $body
            }
            $crate::scalar::ScalarKind::Int16 => {
                type $S = i16;
                $body
            }
            $crate::scalar::ScalarKind::Int32 => {
                type $S = i32;
                $body
            }
            $crate::scalar::ScalarKind::Int64 => {
                type $S = i64;
                $body
            }
            $crate::scalar::ScalarKind::Float32 => {
                type $S = f32;
                $body
            }
            $crate::scalar::ScalarKind::Float64 => {
                type $S = f64;
                $body
            }
        }
    };
}

pub(crate) use with_scalar_type;

/// The scalar element types a [`ScalarArray`] can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalarKind {
    Boolean,
    Char,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
}

impl ScalarKind {
    pub fn name(&self) -> &'static str {
        match self {
            ScalarKind::Boolean => "boolean array",
            ScalarKind::Char => "char array",
            ScalarKind::Int8 => "int8 array",
            ScalarKind::Int16 => "int16 array",
            ScalarKind::Int32 => "int32 array",
            ScalarKind::Int64 => "int64 array",
            ScalarKind::Float32 => "float32 array",
            ScalarKind::Float64 => "float64 array",
        }
    }
}

/// A fixed-length, densely packed array of one [`ScalarKind`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalarArray {
    Boolean(Vec<bool>),
    Char(Vec<char>),
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

impl ScalarArray {
    /// Creates an array of `len` default values (`false`, `'\0'`, zero).
    pub fn default_filled(kind: ScalarKind, len: usize) -> ScalarArray {
        with_scalar_type!(kind, S => S::into_array(vec![S::default(); len]))
    }

    pub fn kind(&self) -> ScalarKind {
        match self {
            ScalarArray::Boolean(_) => ScalarKind::Boolean,
            ScalarArray::Char(_) => ScalarKind::Char,
            ScalarArray::Int8(_) => ScalarKind::Int8,
            ScalarArray::Int16(_) => ScalarKind::Int16,
            ScalarArray::Int32(_) => ScalarKind::Int32,
            ScalarArray::Int64(_) => ScalarKind::Int64,
            ScalarArray::Float32(_) => ScalarKind::Float32,
            ScalarArray::Float64(_) => ScalarKind::Float64,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ScalarArray::Boolean(v) => v.len(),
            ScalarArray::Char(v) => v.len(),
            ScalarArray::Int8(v) => v.len(),
            ScalarArray::Int16(v) => v.len(),
            ScalarArray::Int32(v) => v.len(),
            ScalarArray::Int64(v) => v.len(),
            ScalarArray::Float32(v) => v.len(),
            ScalarArray::Float64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the typed contents, or `None` if `S` does not match the array's kind.
    pub fn as_slice<S: Scalar>(&self) -> Option<&[S]> {
        S::slice_of(self)
    }
}

/// A Rust scalar type that maps onto one [`ScalarKind`].
///
/// Generic shaping code is written once against this trait; the runtime
/// [`ScalarKind`] of a [`ScalarArray`] is turned back into a type parameter
/// with `with_scalar_type!`.
pub trait Scalar: Copy + Default + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    const KIND: ScalarKind;

    fn slice_of(array: &ScalarArray) -> Option<&[Self]>;

    fn into_array(values: Vec<Self>) -> ScalarArray;
}

macro_rules! impl_scalar {
    ($T:ty, $variant:ident) => {
        impl Scalar for $T {
            const KIND: ScalarKind = ScalarKind::$variant;

            fn slice_of(array: &ScalarArray) -> Option<&[$T]> {
                match array {
                    ScalarArray::$variant(values) => Some(values.as_slice()),
                    _ => None,
                }
            }

            fn into_array(values: Vec<$T>) -> ScalarArray {
                ScalarArray::$variant(values)
            }
        }

        impl From<Vec<$T>> for ScalarArray {
            fn from(values: Vec<$T>) -> ScalarArray {
                ScalarArray::$variant(values)
            }
        }
    };
}

impl_scalar!(bool, Boolean);
impl_scalar!(char, Char);
impl_scalar!(i8, Int8);
impl_scalar!(i16, Int16);
impl_scalar!(i32, Int32);
impl_scalar!(i64, Int64);
impl_scalar!(f32, Float32);
impl_scalar!(f64, Float64);
