//! Error types for the symsolve crate

use thiserror::Error;

/// Violations of the algebraic or enumeration contracts.
///
/// These never describe a game condition; they mean a basis, a realization
/// or a traversal broke one of the laws the engine relies on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DomainError {
    #[error("group closure exceeded {limit} elements; the basis does not generate a finite group")]
    UnboundedClosure { limit: usize },

    #[error("group law '{law}' fails: {detail}")]
    AxiomViolation { law: &'static str, detail: String },

    #[error("struggle {moves} was recorded twice")]
    DuplicateStruggle { moves: String },

    #[error("rotation {rotate} is out of range; quarter turns must be below 4")]
    InvalidRotation { rotate: u8 },

    #[error("move {position} has no symmetric image among the legal moves")]
    EmptyClass { position: String },
}

/// Main error type for the symsolve crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move at {position}: {reason}")]
    IllegalMove { position: String, reason: String },

    #[error("invalid selector '{selector}': not among the declared starting players")]
    InvalidSelector { selector: String },

    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at cell {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid player '{player}' in label '{label}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String, label: String },

    #[error("invalid position '{input}' (expected 'X,Y' with coordinates below {size})")]
    InvalidPosition { input: String, size: usize },

    #[error("board '{label}' cannot arise in play: {reason}")]
    UnreachableBoard { label: String, reason: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error is one of the algebraic contract violations.
    pub fn is_domain_error(&self) -> bool {
        matches!(self, Error::Domain(_))
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
