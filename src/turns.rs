//! Automatic function calling turns.
//!
//! [`extract_function_calls`] reads the function calls out of a response, and
//! [`generate_tool_call_turns`] executes them against the model's bound tools and
//! extends the conversation history with:
//!
//! 1. the model's turn, exactly as the candidate returned it, and
//! 2. one `user` turn holding a function response per call, in call order.
//!
//! The caller's history is never modified. Sending the updated history back to
//! the model is left to the caller's conversation loop.
//!
//! Building turns is not idempotent: running it twice on the same inputs executes
//! the tools twice and yields two copies of the appended turns.

use std::borrow::Cow;

use log::{debug, error};

use crate::ToolTurnError;
use crate::content::{Content, FunctionCall, Part};
use crate::model::Model;
use crate::response::{Candidate, GenerateContentResponse};

/// The outcome of [`generate_tool_call_turns`].
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct ToolCallTurns<'a> {
    /// The conversation after this step.
    ///
    /// Borrowed (the caller's own slice) when nothing was appended.
    pub history: Cow<'a, [Content]>,
    /// The function response parts, in call order, or `None` when no function
    /// was executed.
    pub function_responses: Option<Vec<Part>>,
}

impl<'a> ToolCallTurns<'a> {
    fn unchanged(history: &'a [Content]) -> Self {
        Self {
            history: Cow::Borrowed(history),
            function_responses: None,
        }
    }

    /// Returns `true` if any function was executed.
    #[must_use]
    pub fn has_function_responses(&self) -> bool {
        self.function_responses.is_some()
    }

    /// Splits into the history and the function response parts.
    #[must_use]
    pub fn into_parts(self) -> (Cow<'a, [Content]>, Option<Vec<Part>>) {
        (self.history, self.function_responses)
    }
}

fn single_candidate(response: &GenerateContentResponse) -> Result<&Candidate, ToolTurnError> {
    match response.candidates.as_slice() {
        [candidate] => Ok(candidate),
        candidates => Err(ToolTurnError::InvalidCandidateCount {
            count: candidates.len(),
        }),
    }
}

#[cfg(not(feature = "strict-unknown"))]
fn skip_unknown_part(part_type: &str) -> Result<(), ToolTurnError> {
    log::warn!(
        "Skipping part of unknown type '{}' while extracting function calls",
        part_type
    );
    Ok(())
}

#[cfg(feature = "strict-unknown")]
fn skip_unknown_part(part_type: &str) -> Result<(), ToolTurnError> {
    Err(ToolTurnError::UnsupportedPart {
        part_type: part_type.to_string(),
    })
}

fn calls_in(candidate: &Candidate) -> Result<Vec<&FunctionCall>, ToolTurnError> {
    let mut calls = Vec::new();
    for part in &candidate.content.parts {
        match part {
            Part::FunctionCall { function_call, .. } => calls.push(function_call),
            Part::Unknown { part_type, .. } if !part_type.is_empty() => {
                skip_unknown_part(part_type)?;
            }
            Part::Text { .. }
            | Part::InlineData { .. }
            | Part::FileData { .. }
            | Part::FunctionResponse { .. }
            | Part::ExecutableCode { .. }
            | Part::CodeExecutionResult { .. }
            | Part::Unknown { .. } => {}
        }
    }
    Ok(calls)
}

/// Extracts the function calls from a response, in the order the model made them.
///
/// Every part that is not a function call is skipped. Parts of an unknown type
/// are skipped with a warning, or rejected with
/// [`ToolTurnError::UnsupportedPart`] when the `strict-unknown` feature is on.
///
/// # Errors
///
/// Returns [`ToolTurnError::InvalidCandidateCount`] unless the response has
/// exactly one candidate.
///
/// # Example
///
/// ```
/// use genai_tool_turns::{Content, GenerateContentResponse, Part, extract_function_calls};
/// use serde_json::json;
///
/// let response = GenerateContentResponse::from_content(Content::model(vec![
///     Part::text("Checking both cities."),
///     Part::function_call("get_weather", json!({"city": "Paris"})),
///     Part::function_call("get_weather", json!({"city": "Rome"})),
/// ]));
///
/// let calls = extract_function_calls(&response)?;
/// assert_eq!(calls.len(), 2);
/// assert_eq!(calls[1].args["city"], "Rome");
/// # Ok::<(), genai_tool_turns::ToolTurnError>(())
/// ```
pub fn extract_function_calls(
    response: &GenerateContentResponse,
) -> Result<Vec<&FunctionCall>, ToolTurnError> {
    let calls = calls_in(single_candidate(response)?)?;
    debug!("Extracted {} function call(s) from response", calls.len());
    Ok(calls)
}

/// Executes the function calls in `response` and returns the extended history.
///
/// - If `model` has no tools bound, returns `history` unchanged (borrowed) and no
///   function responses. The response is not inspected.
/// - Otherwise the candidate's content is appended as the model's turn, even if
///   it holds no function calls.
/// - For each call, in order, the bound function runs to completion before the
///   next one starts. The results are appended as a single `user` turn and also
///   returned in [`ToolCallTurns::function_responses`].
///
/// # Errors
///
/// Any error aborts the whole step; no partially extended history is returned.
///
/// - [`ToolTurnError::DuplicateFunction`] if two bound functions share a name
/// - [`ToolTurnError::InvalidCandidateCount`] unless there is exactly one candidate
/// - [`ToolTurnError::UnresolvedFunctionCall`] if a call has no callable
///   implementation among the bound tools
/// - [`ToolTurnError::FunctionExecution`] if a function fails
pub async fn generate_tool_call_turns<'a>(
    model: &Model,
    response: &GenerateContentResponse,
    history: &'a [Content],
) -> Result<ToolCallTurns<'a>, ToolTurnError> {
    let Some(library) = model.function_library() else {
        debug!(
            "Model '{}' has no tools bound, leaving history unchanged",
            model.name()
        );
        return Ok(ToolCallTurns::unchanged(history));
    };
    let library = library?;

    let candidate = single_candidate(response)?;
    let function_calls = calls_in(candidate)?;

    let mut updated_history = Vec::with_capacity(history.len() + 2);
    updated_history.extend_from_slice(history);
    updated_history.push(candidate.content.clone());

    if function_calls.is_empty() {
        debug!("No function calls in response, appended model turn only");
        return Ok(ToolCallTurns {
            history: Cow::Owned(updated_history),
            function_responses: None,
        });
    }

    debug!("Executing {} function call(s)", function_calls.len());
    let mut function_responses = Vec::with_capacity(function_calls.len());
    for call in function_calls {
        let part = library.resolve(call).await?.ok_or_else(|| {
            error!(
                "Function call '{}' has no callable implementation among the model's tools",
                call.name
            );
            ToolTurnError::UnresolvedFunctionCall {
                name: call.name.clone(),
            }
        })?;
        function_responses.push(part);
    }

    updated_history.push(Content::user(function_responses.clone()));

    Ok(ToolCallTurns {
        history: Cow::Owned(updated_history),
        function_responses: Some(function_responses),
    })
}
