//! A model handle carrying the tools bound to it.

use std::sync::Arc;

use crate::ToolTurnError;
use crate::function_calling::{
    CallableFunction, FunctionDeclaration, FunctionLibrary, Tool, ToolService,
};

/// A model name plus the tools the model was given.
///
/// Tools are optional: a model with no tools never takes part in automatic
/// function calling, and [`generate_tool_call_turns`](crate::generate_tool_call_turns)
/// leaves the conversation untouched for it.
///
/// # Example
///
/// ```
/// use genai_tool_turns::{FunctionDeclaration, Model};
///
/// let plain = Model::new("gemini-2.0-flash");
/// assert!(plain.tools().is_none());
///
/// let with_tools = Model::new("gemini-2.0-flash")
///     .with_declaration(FunctionDeclaration::new("get_weather", "Weather for a city"));
/// assert_eq!(with_tools.tools().map(<[_]>::len), Some(1));
/// ```
#[derive(Clone, Debug)]
pub struct Model {
    name: String,
    tools: Option<Vec<Tool>>,
}

impl Model {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tools: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Binds a tool to the model.
    #[must_use]
    pub fn with_tool(mut self, tool: Tool) -> Self {
        self.tools.get_or_insert_with(Vec::new).push(tool);
        self
    }

    /// Binds a single callable function as its own tool.
    #[must_use]
    pub fn with_function(self, function: Arc<dyn CallableFunction>) -> Self {
        self.with_tool(Tool::new().with_function(function))
    }

    /// Binds a declaration with no local implementation.
    ///
    /// Calls to it cannot be executed automatically; see
    /// [`ToolTurnError::UnresolvedFunctionCall`].
    #[must_use]
    pub fn with_declaration(self, declaration: FunctionDeclaration) -> Self {
        self.with_tool(Tool::new().with_declaration(declaration))
    }

    /// Binds every function a [`ToolService`] provides as one tool.
    #[must_use]
    pub fn with_tool_service(self, service: &dyn ToolService) -> Self {
        self.with_tool(Tool::from(service))
    }

    /// Returns the bound tools, or `None` if no tool was ever bound.
    #[must_use]
    pub fn tools(&self) -> Option<&[Tool]> {
        self.tools.as_deref()
    }

    /// Builds the function library for the bound tools.
    ///
    /// Returns `None` if the model has no tools.
    #[must_use]
    pub fn function_library(&self) -> Option<Result<FunctionLibrary, ToolTurnError>> {
        self.tools.as_deref().map(FunctionLibrary::new)
    }
}
