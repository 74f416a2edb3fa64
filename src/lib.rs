//! Automatic function calling turns for Gemini `generateContent` responses.
//!
//! Given a model response, this crate pulls out the function calls the model
//! requested, executes them with the functions bound to the model, and returns
//! the conversation history extended with the model's turn and a `user` turn of
//! function results, ready to send back to the model.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use genai_tool_turns::{
//!     CallableFunction, Content, FunctionDeclaration, FunctionError, GenerateContentResponse,
//!     Model, Part, generate_tool_call_turns,
//! };
//! use serde_json::{Value, json};
//!
//! struct Add;
//!
//! #[async_trait]
//! impl CallableFunction for Add {
//!     fn declaration(&self) -> FunctionDeclaration {
//!         FunctionDeclaration::new("add", "Adds two integers")
//!     }
//!
//!     async fn call(&self, args: Value) -> Result<Value, FunctionError> {
//!         let a = args["a"].as_i64().unwrap_or_default();
//!         let b = args["b"].as_i64().unwrap_or_default();
//!         Ok(json!(a + b))
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), genai_tool_turns::ToolTurnError> {
//! let model = Model::new("gemini-2.0-flash").with_function(Arc::new(Add));
//! let history = vec![Content::user(vec![Part::text("What is 5 + 3?")])];
//!
//! // Normally deserialized from the API's JSON response.
//! let response = GenerateContentResponse::from_content(Content::model(vec![
//!     Part::function_call("add", json!({"a": 5, "b": 3})),
//! ]));
//!
//! let turns = generate_tool_call_turns(&model, &response, &history).await?;
//! assert_eq!(turns.history.len(), 3);
//!
//! let responses = turns.function_responses.expect("one function was called");
//! assert_eq!(
//!     responses[0].as_function_response().map(|r| &r.response),
//!     Some(&json!({"result": 8}))
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade and installs no logger. Extraction
//! counts and per-function timings are emitted at `debug`, skipped unknown parts
//! at `warn`.
//!
//! # Features
//!
//! - `strict-unknown`: reject response parts of an unrecognized type during
//!   extraction instead of skipping them.

mod content;
mod errors;
mod function_calling;
mod model;
mod response;
mod turns;

pub use content::{
    Blob, CodeExecutionResult, Content, ExecutableCode, FileData, FunctionCall,
    FunctionResponse, Part, Role,
};
pub use errors::ToolTurnError;
pub use function_calling::{
    CallableFunction, FunctionDeclaration, FunctionError, FunctionLibrary, Tool, ToolFunction,
    ToolService,
};
pub use model::Model;
pub use response::{Candidate, GenerateContentResponse, UsageMetadata};
pub use turns::{ToolCallTurns, extract_function_calls, generate_tool_call_turns};
