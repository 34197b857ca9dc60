//! Error types for ncursesw-shim.

use thiserror::Error;

/// Result type alias for shim operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while rendering headers or checking generated bindings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An enumerated attribute is absent from the generated bindings.
    #[error("symbol `{0}` is not defined by the generated bindings")]
    MissingSymbol(String),

    /// A generated constant holds a different value than the library macro.
    #[error("symbol `{name}` has value {found:#x}, expected {expected:#x}")]
    ValueMismatch {
        /// The symbol name.
        name: String,
        /// The value from the attribute table.
        expected: u64,
        /// The value found in the generated bindings.
        found: u64,
    },

    /// A generated constant was declared with the wrong type.
    #[error("symbol `{name}` has type `{found}`, expected `{expected}`")]
    TypeMismatch {
        /// The symbol name.
        name: String,
        /// The declared C type from the attribute table.
        expected: String,
        /// The type found in the generated bindings.
        found: String,
    },

    /// The same constant was declared more than once.
    #[error("symbol `{0}` is declared more than once")]
    DuplicateSymbol(String),

    /// A constant initializer could not be read as an integer.
    #[error("invalid integer literal `{literal}` for `{name}`")]
    InvalidLiteral {
        /// The symbol name.
        name: String,
        /// The literal as written.
        literal: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0:?}")]
    Io(std::io::ErrorKind),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.kind())
    }
}
