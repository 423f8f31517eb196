use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn kind_mismatch(
        context: impl Into<String>,
        index: usize,
        expected: &'static str,
        found: &'static str,
    ) -> Error {
        Error(
            ErrorKind::KindMismatch {
                context: context.into(),
                index,
                expected,
                found,
            }
            .into(),
        )
    }

    pub fn index_out_of_range(context: impl Into<String>, index: usize, len: usize) -> Error {
        Error(
            ErrorKind::IndexOutOfRange {
                context: context.into(),
                index,
                len,
            }
            .into(),
        )
    }

    pub fn logic(message: impl Into<String>) -> Error {
        Error(
            ErrorKind::LogicAssertion {
                message: message.into(),
            }
            .into(),
        )
    }

    /// Returns `true` if this error reports input that mixes element kinds.
    pub fn is_kind_mismatch(&self) -> bool {
        matches!(self.kind(), ErrorKind::KindMismatch { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("{context}: element {index} is {found}, expected {expected}")]
    KindMismatch {
        context: String,
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{context}: index {index} out of range for length {len}")]
    IndexOutOfRange {
        context: String,
        index: usize,
        len: usize,
    },

    #[error("should never happen: {message}")]
    LogicAssertion { message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
