use async_trait::async_trait;
use log::debug;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::ToolTurnError;
use crate::content::{FunctionCall, FunctionResponse, Part};

/// Represents an error that can occur during function execution.
///
/// This enum is marked `#[non_exhaustive]` for forward compatibility.
/// New error variants may be added in future versions.
#[derive(Debug)]
#[non_exhaustive]
pub enum FunctionError {
    ArgumentMismatch(String),
    ExecutionError(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for FunctionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArgumentMismatch(msg) => write!(f, "Argument mismatch: {msg}"),
            Self::ExecutionError(err) => write!(f, "Function execution error: {err}"),
        }
    }
}

impl Error for FunctionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ExecutionError(err) => Some(err.as_ref()),
            Self::ArgumentMismatch(_) => None,
        }
    }
}

/// Describes a function the model may call.
///
/// # Example
///
/// ```
/// use genai_tool_turns::FunctionDeclaration;
/// use serde_json::json;
///
/// let decl = FunctionDeclaration::new("get_weather", "Get the current weather for a city")
///     .with_parameters(json!({
///         "type": "object",
///         "properties": {"city": {"type": "string"}},
///         "required": ["city"]
///     }));
/// assert_eq!(decl.name(), "get_weather");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDeclaration {
    name: String,
    #[serde(default)]
    description: String,
    /// JSON Schema for the arguments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parameters: Option<Value>,
}

impl FunctionDeclaration {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: None,
        }
    }

    /// Sets the JSON Schema describing the arguments.
    #[must_use]
    pub fn with_parameters(mut self, parameters: Value) -> Self {
        self.parameters = Some(parameters);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn parameters(&self) -> Option<&Value> {
        self.parameters.as_ref()
    }
}

/// A trait for functions that can be called by the model.
#[async_trait]
pub trait CallableFunction: Send + Sync {
    /// Returns the declaration of the function.
    fn declaration(&self) -> FunctionDeclaration;

    /// Executes the function with the given arguments.
    /// The arguments are provided as a serde_json::Value,
    /// and the function should return a serde_json::Value.
    async fn call(&self, args: Value) -> Result<Value, FunctionError>;
}

/// A provider of callable functions with shared state/dependencies.
///
/// Implement this trait on structs that need to give several tools access to the
/// same resources, such as a database handle or configuration, then bind them all
/// at once with [`Model::with_tool_service`](crate::Model::with_tool_service).
pub trait ToolService: Send + Sync {
    /// Returns the callable functions provided by this service.
    fn tools(&self) -> Vec<Arc<dyn CallableFunction>>;
}

/// One function bound to a model: either just a declaration, or a declaration
/// with an implementation behind it.
#[derive(Clone)]
pub enum ToolFunction {
    /// Declared to the model but not executable locally
    Declared(FunctionDeclaration),
    Callable(Arc<dyn CallableFunction>),
}

impl ToolFunction {
    #[must_use]
    pub fn declaration(&self) -> FunctionDeclaration {
        match self {
            Self::Declared(decl) => decl.clone(),
            Self::Callable(function) => function.declaration(),
        }
    }

    #[must_use]
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Callable(_))
    }
}

impl fmt::Debug for ToolFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declared(decl) => f.debug_tuple("Declared").field(&decl.name).finish(),
            Self::Callable(function) => f
                .debug_tuple("Callable")
                .field(&function.declaration().name)
                .finish(),
        }
    }
}

/// A group of functions bound to a model.
///
/// Serializes to the API's `{"functionDeclarations": [...]}` tool shape.
#[derive(Clone, Debug, Default)]
pub struct Tool {
    functions: Vec<ToolFunction>,
}

impl Tool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a function with an implementation.
    #[must_use]
    pub fn with_function(mut self, function: Arc<dyn CallableFunction>) -> Self {
        self.functions.push(ToolFunction::Callable(function));
        self
    }

    /// Adds a declaration the model can see but that has no local implementation.
    #[must_use]
    pub fn with_declaration(mut self, declaration: FunctionDeclaration) -> Self {
        self.functions.push(ToolFunction::Declared(declaration));
        self
    }

    #[must_use]
    pub fn functions(&self) -> &[ToolFunction] {
        &self.functions
    }

    #[must_use]
    pub fn declarations(&self) -> Vec<FunctionDeclaration> {
        self.functions.iter().map(ToolFunction::declaration).collect()
    }
}

impl From<&dyn ToolService> for Tool {
    fn from(service: &dyn ToolService) -> Self {
        service
            .tools()
            .into_iter()
            .fold(Tool::new(), Tool::with_function)
    }
}

impl Serialize for Tool {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("functionDeclarations", &self.declarations())?;
        map.end()
    }
}

/// Name-indexed view over a model's bound tools, used to execute function calls.
#[derive(Debug)]
pub struct FunctionLibrary {
    index: HashMap<String, ToolFunction>,
}

impl FunctionLibrary {
    /// Indexes every function of every tool by name.
    ///
    /// # Errors
    ///
    /// Returns [`ToolTurnError::DuplicateFunction`] if two functions share a name.
    pub fn new(tools: &[Tool]) -> Result<Self, ToolTurnError> {
        let mut index = HashMap::new();
        for function in tools.iter().flat_map(Tool::functions) {
            let name = function.declaration().name;
            match index.entry(name) {
                Entry::Occupied(entry) => {
                    return Err(ToolTurnError::DuplicateFunction {
                        name: entry.key().clone(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(function.clone());
                }
            }
        }
        Ok(Self { index })
    }

    /// Retrieves a function by its name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ToolFunction> {
        self.index.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Executes `call` and wraps its output in a function response part.
    ///
    /// Returns `Ok(None)` when the library has no implementation for the call,
    /// either because the name is unknown or because it is declaration-only.
    ///
    /// # Errors
    ///
    /// Returns [`ToolTurnError::FunctionExecution`] if the function fails.
    pub async fn resolve(&self, call: &FunctionCall) -> Result<Option<Part>, ToolTurnError> {
        let function = match self.index.get(&call.name) {
            Some(ToolFunction::Callable(function)) => function,
            Some(ToolFunction::Declared(_)) => {
                debug!("Function '{}' is declared but not callable", call.name);
                return Ok(None);
            }
            None => {
                debug!("Function '{}' is not in the library", call.name);
                return Ok(None);
            }
        };

        let start = Instant::now();
        let result = function.call(call.args.clone()).await;
        debug!("Function '{}' executed in {:?}", call.name, start.elapsed());

        let output = result.map_err(|source| ToolTurnError::FunctionExecution {
            name: call.name.clone(),
            source,
        })?;

        Ok(Some(
            FunctionResponse::new(call.name.clone(), output)
                .with_id(call.id.clone())
                .into(),
        ))
    }
}
