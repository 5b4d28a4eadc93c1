use core::fmt;

/// Result alias for `cleave`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by graph construction and community detection.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input was empty.
    EmptyInput,

    /// An edge-list line could not be parsed.
    InvalidEdge {
        /// 1-based line number in the input.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// Invalid number of communities requested.
    InvalidClusterCount {
        /// Requested count.
        requested: usize,
        /// Number of nodes in the graph.
        n_nodes: usize,
    },

    /// Invalid parameter value.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },

    /// A file could not be opened, read, or written.
    Io {
        /// Path of the offending file.
        path: String,
        /// Underlying OS error message.
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::InvalidEdge { line, reason } => {
                write!(f, "invalid edge on line {line}: {reason}")
            }
            Error::InvalidClusterCount { requested, n_nodes } => {
                write!(f, "cannot split {n_nodes} nodes into {requested} communities")
            }
            Error::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{name}': {message}")
            }
            Error::Io { path, message } => write!(f, "{path}: {message}"),
        }
    }
}

impl std::error::Error for Error {}
