//! Common test utilities shared across integration test files.
//!
//! Usage in test files:
//! ```ignore
//! mod common;
//! use common::*;
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use genai_tool_turns::{
    CallableFunction, Content, FunctionDeclaration, FunctionError, GenerateContentResponse, Part,
};
use serde_json::{Value, json};

/// Adds `a` and `b`, counting how many times it ran.
#[derive(Default)]
pub struct AddTool {
    pub calls: AtomicUsize,
}

#[async_trait]
impl CallableFunction for AddTool {
    fn declaration(&self) -> FunctionDeclaration {
        FunctionDeclaration::new("add", "Adds two integers").with_parameters(json!({
            "type": "object",
            "properties": {"a": {"type": "integer"}, "b": {"type": "integer"}},
            "required": ["a", "b"]
        }))
    }

    async fn call(&self, args: Value) -> Result<Value, FunctionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let a = args.get("a").and_then(Value::as_i64);
        let b = args.get("b").and_then(Value::as_i64);
        match (a, b) {
            (Some(a), Some(b)) => Ok(json!(a + b)),
            _ => Err(FunctionError::ArgumentMismatch(
                "'a' and 'b' must be integers".to_string(),
            )),
        }
    }
}

/// Returns a weather report object for `city`.
pub struct WeatherTool;

#[async_trait]
impl CallableFunction for WeatherTool {
    fn declaration(&self) -> FunctionDeclaration {
        FunctionDeclaration::new("get_weather", "Gets the weather for a city")
    }

    async fn call(&self, args: Value) -> Result<Value, FunctionError> {
        let city = args
            .get("city")
            .and_then(Value::as_str)
            .ok_or_else(|| FunctionError::ArgumentMismatch("Missing 'city'".to_string()))?;
        Ok(json!({"city": city, "forecast": "sunny"}))
    }
}

/// Records the name of every call into a shared log, to observe execution order.
pub struct RecordingTool {
    pub name: &'static str,
    pub log: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl CallableFunction for RecordingTool {
    fn declaration(&self) -> FunctionDeclaration {
        FunctionDeclaration::new(self.name, "Records that it was called")
    }

    async fn call(&self, args: Value) -> Result<Value, FunctionError> {
        tokio::task::yield_now().await;
        self.log
            .lock()
            .map_err(|e| FunctionError::ExecutionError(e.to_string().into()))?
            .push(format!("{}:{}", self.name, args["step"]));
        Ok(json!({"recorded": self.name}))
    }
}

/// Builds a single-candidate response whose model turn holds `parts`.
pub fn model_response(parts: Vec<Part>) -> GenerateContentResponse {
    GenerateContentResponse::from_content(Content::model(parts))
}

/// A short conversation to extend in tests.
pub fn sample_history() -> Vec<Content> {
    vec![
        Content::user(vec![Part::text("Hello")]),
        Content::model(vec![Part::text("Hi! How can I help?")]),
        Content::user(vec![Part::text("What is 5 + 3, and the weather in Oslo?")]),
    ]
}
