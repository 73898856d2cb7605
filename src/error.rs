use thiserror::Error;

/// Failure modes of the element-wise batch entry points.
///
/// The scalar evaluators are infallible by contract (domain violations
/// propagate as NaN/Inf); the only thing that can go wrong is handing the
/// batch API slices that cannot be broadcast together.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BroadcastError {
    #[error("mismatched input lengths: {left} vs {right}")]
    MismatchedLengths { left: usize, right: usize },
}

/// CLI-level errors.
#[cfg(feature = "cli")]
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error reading from stdin: {source}")]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in input document: {source}")]
    ParseStatesJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not serialize output to JSON: {source}")]
    SerializeOutput {
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing input data: provide --sa/--ct/--p or --input")]
    MissingInputData,
}
