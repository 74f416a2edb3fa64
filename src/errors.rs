use thiserror::Error;

use crate::function_calling::FunctionError;

/// Defines errors that can occur while turning a model response into tool-call turns.
///
/// None of these are recovered locally. They propagate to the caller that owns
/// the conversation loop, which decides what to tell the user.
///
/// # Example: Handling Extraction Errors
///
/// ```
/// use genai_tool_turns::{GenerateContentResponse, ToolTurnError, extract_function_calls};
///
/// let response = GenerateContentResponse::default();
/// match extract_function_calls(&response) {
///     Err(ToolTurnError::InvalidCandidateCount { count }) => assert_eq!(count, 0),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ToolTurnError {
    /// The response did not contain exactly one candidate.
    #[error(
        "Invalid number of candidates: automatic function calling only works with 1 candidate, but {count} were provided"
    )]
    InvalidCandidateCount {
        /// Number of candidates observed in the response
        count: usize,
    },
    /// A function call named a declaration that has no callable implementation.
    ///
    /// The registry is built from the same model that produced the calls, so this
    /// indicates the model was bound to declaration-only functions.
    #[error("Function call '{name}' could not be resolved to a callable function")]
    UnresolvedFunctionCall {
        /// Name of the function the model asked for
        name: String,
    },
    /// Two bound tools declare a function with the same name.
    #[error("A function declaration named '{name}' is already defined")]
    DuplicateFunction {
        /// The duplicated function name
        name: String,
    },
    /// A callable function returned an error.
    #[error("Function '{name}' failed: {source}")]
    FunctionExecution {
        /// Name of the function that failed
        name: String,
        #[source]
        source: FunctionError,
    },
    /// A response part had a type this crate does not understand.
    ///
    /// Only produced when the `strict-unknown` feature is enabled.
    #[error("Unsupported part type in response: '{part_type}'")]
    UnsupportedPart {
        /// The unrecognized part key from the wire format
        part_type: String,
    },
}

impl ToolTurnError {
    /// Returns the function name this error refers to, if any.
    #[must_use]
    pub fn function_name(&self) -> Option<&str> {
        match self {
            Self::UnresolvedFunctionCall { name }
            | Self::DuplicateFunction { name }
            | Self::FunctionExecution { name, .. } => Some(name),
            Self::InvalidCandidateCount { .. } | Self::UnsupportedPart { .. } => None,
        }
    }
}
