//! Conversation content types for the `generateContent` API.
//!
//! This module contains [`Part`], the tagged union for everything that can appear
//! inside a conversation turn, along with [`Content`] (one turn) and [`Role`].
//! `Part` has hand-written serde implementations because the wire format keys
//! each part by a single field name instead of a `type` tag.

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

// =============================================================================
// Part payloads
// =============================================================================

/// A function call requested by the model.
///
/// # Example
///
/// ```
/// use genai_tool_turns::FunctionCall;
/// use serde_json::json;
///
/// let call = FunctionCall::new("get_weather", json!({"location": "Tokyo"}));
/// assert_eq!(call.name, "get_weather");
/// assert!(call.id.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCall {
    /// Unique identifier for this call, echoed back in the matching response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Name of the function to call
    pub name: String,
    /// Arguments as a JSON object, `Null` when the API sent none
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub args: Value,
}

impl FunctionCall {
    /// Creates a function call without an id.
    #[must_use]
    pub fn new(name: impl Into<String>, args: Value) -> Self {
        Self {
            id: None,
            name: name.into(),
            args,
        }
    }

    /// Sets the call id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// The result of executing a [`FunctionCall`], reported back to the model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    /// The id of the call being answered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Name of the function that produced this response
    pub name: String,
    /// The function output as a JSON object
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub response: Value,
}

impl FunctionResponse {
    /// Creates a function response.
    ///
    /// The API expects `response` to be a JSON object. Non-object values are
    /// wrapped as `{"result": value}`.
    ///
    /// ```
    /// use genai_tool_turns::FunctionResponse;
    /// use serde_json::json;
    ///
    /// let wrapped = FunctionResponse::new("add", json!(8));
    /// assert_eq!(wrapped.response, json!({"result": 8}));
    ///
    /// let as_is = FunctionResponse::new("add", json!({"sum": 8}));
    /// assert_eq!(as_is.response, json!({"sum": 8}));
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, response: Value) -> Self {
        let response = match response {
            Value::Object(_) => response,
            other => serde_json::json!({ "result": other }),
        };
        Self {
            id: None,
            name: name.into(),
            response,
        }
    }

    /// Sets the id of the call this response answers.
    #[must_use]
    pub fn with_id(mut self, id: Option<String>) -> Self {
        self.id = id;
        self
    }
}

/// Inline media bytes (base64-encoded).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    /// IANA media type, e.g. `image/png`
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

/// A reference to uploaded media.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileData {
    /// IANA media type of the file, if the API reported one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// URI of the uploaded file
    pub file_uri: String,
}

/// Code generated by the model for the code execution tool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutableCode {
    /// Programming language, e.g. `PYTHON`
    #[serde(default)]
    pub language: String,
    /// Source code to execute
    pub code: String,
}

/// Output of running an [`ExecutableCode`] part.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeExecutionResult {
    /// Outcome of the run, e.g. `OUTCOME_OK`
    #[serde(default)]
    pub outcome: String,
    /// Captured stdout, or the error message on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

// =============================================================================
// Part
// =============================================================================

/// One unit of a conversation turn.
///
/// Every known variant carries an `extra` map holding the fields of the part
/// object this crate does not model (for example `videoMetadata` next to
/// `fileData`). They are written back on serialization, so a model turn sent
/// back to the API matches the JSON it arrived as.
///
/// Unknown part types deserialize into [`Part::Unknown`], preserving the raw JSON.
/// An empty JSON object becomes an `Unknown` part with an empty `part_type`
/// (see [`Part::is_empty`]).
///
/// # Example
///
/// ```
/// use genai_tool_turns::Part;
/// use serde_json::json;
///
/// let part: Part = serde_json::from_value(json!({
///     "functionCall": {"name": "get_weather", "args": {"location": "Paris"}}
/// })).unwrap();
///
/// match &part {
///     Part::FunctionCall { function_call, .. } => assert_eq!(function_call.name, "get_weather"),
///     _ => panic!("expected a function call"),
/// }
/// ```
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Part {
    /// Plain text, or a thought summary when `thought` is `Some(true)`.
    Text {
        text: String,
        /// Marks the text as the model's thought summary rather than its answer
        thought: Option<bool>,
        /// Thought signature for reasoning continuity across turns
        thought_signature: Option<String>,
        extra: Map<String, Value>,
    },
    /// Inline media
    InlineData {
        inline_data: Blob,
        extra: Map<String, Value>,
    },
    /// Uploaded media reference
    FileData {
        file_data: FileData,
        extra: Map<String, Value>,
    },
    /// Function call (output from model)
    FunctionCall {
        function_call: FunctionCall,
        /// Thought signature for reasoning continuity across turns
        thought_signature: Option<String>,
        extra: Map<String, Value>,
    },
    /// Function result (input to model)
    FunctionResponse {
        function_response: FunctionResponse,
        extra: Map<String, Value>,
    },
    /// Code the model wants to run
    ExecutableCode {
        executable_code: ExecutableCode,
        extra: Map<String, Value>,
    },
    /// Result of running model code
    CodeExecutionResult {
        code_execution_result: CodeExecutionResult,
        extra: Map<String, Value>,
    },
    /// A part type this crate does not recognize.
    Unknown {
        /// The wire key of the unrecognized part, empty for `{}`
        part_type: String,
        /// The full JSON object, preserved for roundtrip
        data: Value,
    },
}

const TEXT: &str = "text";
const THOUGHT: &str = "thought";
const INLINE_DATA: &str = "inlineData";
const FILE_DATA: &str = "fileData";
const FUNCTION_CALL: &str = "functionCall";
const FUNCTION_RESPONSE: &str = "functionResponse";
const EXECUTABLE_CODE: &str = "executableCode";
const CODE_EXECUTION_RESULT: &str = "codeExecutionResult";
const THOUGHT_SIGNATURE: &str = "thoughtSignature";

impl Part {
    /// Creates a text part.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            thought: None,
            thought_signature: None,
            extra: Map::new(),
        }
    }

    /// Creates a function call part.
    #[must_use]
    pub fn function_call(name: impl Into<String>, args: Value) -> Self {
        FunctionCall::new(name, args).into()
    }

    /// Creates a function response part. See [`FunctionResponse::new`].
    #[must_use]
    pub fn function_response(name: impl Into<String>, response: Value) -> Self {
        FunctionResponse::new(name, response).into()
    }

    /// Returns the text if this is a text part.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Returns `true` if this is a text part holding a thought summary.
    #[must_use]
    pub fn is_thought(&self) -> bool {
        matches!(self, Self::Text { thought: Some(true), .. })
    }

    /// Returns the function call if this is a function call part.
    #[must_use]
    pub fn as_function_call(&self) -> Option<&FunctionCall> {
        match self {
            Self::FunctionCall { function_call, .. } => Some(function_call),
            _ => None,
        }
    }

    /// Returns the function response if this is a function response part.
    #[must_use]
    pub fn as_function_response(&self) -> Option<&FunctionResponse> {
        match self {
            Self::FunctionResponse {
                function_response, ..
            } => Some(function_response),
            _ => None,
        }
    }

    /// Returns the fields this crate does not model, or `None` for unknown parts.
    #[must_use]
    pub fn extra(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Text { extra, .. }
            | Self::InlineData { extra, .. }
            | Self::FileData { extra, .. }
            | Self::FunctionCall { extra, .. }
            | Self::FunctionResponse { extra, .. }
            | Self::ExecutableCode { extra, .. }
            | Self::CodeExecutionResult { extra, .. } => Some(extra),
            Self::Unknown { .. } => None,
        }
    }

    /// Returns `true` for a part that carries no data at all (`{}` on the wire).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Unknown { part_type, .. } if part_type.is_empty())
    }

    /// Returns the wire key if this is an unknown part.
    #[must_use]
    pub fn unknown_part_type(&self) -> Option<&str> {
        match self {
            Self::Unknown { part_type, .. } => Some(part_type),
            _ => None,
        }
    }
}

impl From<FunctionCall> for Part {
    fn from(function_call: FunctionCall) -> Self {
        Self::FunctionCall {
            function_call,
            thought_signature: None,
            extra: Map::new(),
        }
    }
}

impl From<FunctionResponse> for Part {
    fn from(function_response: FunctionResponse) -> Self {
        Self::FunctionResponse {
            function_response,
            extra: Map::new(),
        }
    }
}

impl Serialize for Part {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Unknown { data, .. } => data.serialize(serializer),
            Self::Text {
                text,
                thought,
                thought_signature,
                extra,
            } => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry(TEXT, text)?;
                if let Some(thought) = thought {
                    map.serialize_entry(THOUGHT, thought)?;
                }
                if let Some(signature) = thought_signature {
                    map.serialize_entry(THOUGHT_SIGNATURE, signature)?;
                }
                end_with_extra(map, extra)
            }
            Self::FunctionCall {
                function_call,
                thought_signature,
                extra,
            } => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry(FUNCTION_CALL, function_call)?;
                if let Some(signature) = thought_signature {
                    map.serialize_entry(THOUGHT_SIGNATURE, signature)?;
                }
                end_with_extra(map, extra)
            }
            Self::InlineData { inline_data, extra } => {
                single_entry(serializer, INLINE_DATA, inline_data, extra)
            }
            Self::FileData { file_data, extra } => {
                single_entry(serializer, FILE_DATA, file_data, extra)
            }
            Self::FunctionResponse {
                function_response,
                extra,
            } => single_entry(serializer, FUNCTION_RESPONSE, function_response, extra),
            Self::ExecutableCode {
                executable_code,
                extra,
            } => single_entry(serializer, EXECUTABLE_CODE, executable_code, extra),
            Self::CodeExecutionResult {
                code_execution_result,
                extra,
            } => single_entry(
                serializer,
                CODE_EXECUTION_RESULT,
                code_execution_result,
                extra,
            ),
        }
    }
}

fn single_entry<S, T>(
    serializer: S,
    key: &str,
    value: &T,
    extra: &Map<String, Value>,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    let mut map = serializer.serialize_map(Some(1 + extra.len()))?;
    map.serialize_entry(key, value)?;
    end_with_extra(map, extra)
}

fn end_with_extra<M>(mut map: M, extra: &Map<String, Value>) -> Result<M::Ok, M::Error>
where
    M: SerializeMap,
{
    for (key, value) in extra {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

/// Removes `key` from the part object and deserializes it.
fn take_field<T, E>(map: &mut Map<String, Value>, key: &str) -> Result<Option<T>, E>
where
    T: DeserializeOwned,
    E: serde::de::Error,
{
    map.remove(key)
        .map(serde_json::from_value)
        .transpose()
        .map_err(|e| E::custom(format!("part field '{key}': {e}")))
}

impl<'de> Deserialize<'de> for Part {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut map = match Value::deserialize(deserializer)? {
            Value::Object(map) => map,
            other => {
                return Err(D::Error::custom(format!(
                    "expected a part object, found {other}"
                )));
            }
        };

        if let Some(text) = take_field::<_, D::Error>(&mut map, TEXT)? {
            return Ok(Self::Text {
                text,
                thought: take_field::<_, D::Error>(&mut map, THOUGHT)?,
                thought_signature: take_field::<_, D::Error>(&mut map, THOUGHT_SIGNATURE)?,
                extra: map,
            });
        }
        if let Some(function_call) = take_field::<_, D::Error>(&mut map, FUNCTION_CALL)? {
            return Ok(Self::FunctionCall {
                function_call,
                thought_signature: take_field::<_, D::Error>(&mut map, THOUGHT_SIGNATURE)?,
                extra: map,
            });
        }
        if let Some(function_response) = take_field::<_, D::Error>(&mut map, FUNCTION_RESPONSE)? {
            return Ok(Self::FunctionResponse {
                function_response,
                extra: map,
            });
        }
        if let Some(inline_data) = take_field::<_, D::Error>(&mut map, INLINE_DATA)? {
            return Ok(Self::InlineData {
                inline_data,
                extra: map,
            });
        }
        if let Some(file_data) = take_field::<_, D::Error>(&mut map, FILE_DATA)? {
            return Ok(Self::FileData {
                file_data,
                extra: map,
            });
        }
        if let Some(executable_code) = take_field::<_, D::Error>(&mut map, EXECUTABLE_CODE)? {
            return Ok(Self::ExecutableCode {
                executable_code,
                extra: map,
            });
        }
        if let Some(code_execution_result) =
            take_field::<_, D::Error>(&mut map, CODE_EXECUTION_RESULT)?
        {
            return Ok(Self::CodeExecutionResult {
                code_execution_result,
                extra: map,
            });
        }

        Ok(unknown_part(map))
    }
}

fn unknown_part(map: Map<String, Value>) -> Part {
    let part_type = map
        .keys()
        .find(|key| key.as_str() != THOUGHT_SIGNATURE)
        .cloned()
        .unwrap_or_default();
    if !part_type.is_empty() {
        log::warn!(
            "Encountered unknown part type '{}' - using Unknown variant",
            part_type
        );
    }
    Part::Unknown {
        part_type,
        data: Value::Object(map),
    }
}

// =============================================================================
// Role and Content
// =============================================================================

/// Role of a conversation turn.
///
/// Unknown role strings deserialize into the `Unknown` variant rather than failing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Role {
    /// Content from the user, including tool results sent back to the model
    User,
    /// Content from the model
    Model,
    /// Unknown variant for forward compatibility
    Unknown {
        /// The unrecognized role string
        role_type: String,
    },
}

impl Role {
    /// Returns true if this is an unknown role.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }

    /// Returns the wire string for this role.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::User => "user",
            Self::Model => "model",
            Self::Unknown { role_type } => role_type,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "user" => Ok(Role::User),
            "model" => Ok(Role::Model),
            other => {
                log::warn!(
                    "Encountered unknown Role '{}' - using Unknown variant",
                    other
                );
                Ok(Role::Unknown {
                    role_type: other.to_string(),
                })
            }
        }
    }
}

/// A single turn in a conversation: a role and its ordered parts.
///
/// # Example
///
/// ```
/// use genai_tool_turns::{Content, Part, Role};
///
/// let turn = Content::user(vec![Part::text("What is 2+2?")]);
/// assert_eq!(turn.role, Some(Role::User));
/// assert_eq!(turn.text().as_deref(), Some("What is 2+2?"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Who produced this turn. The API omits it in some responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Creates a turn with the given role and parts.
    #[must_use]
    pub fn new(role: Role, parts: Vec<Part>) -> Self {
        Self {
            role: Some(role),
            parts,
        }
    }

    /// Creates a `user` turn.
    #[must_use]
    pub fn user(parts: Vec<Part>) -> Self {
        Self::new(Role::User, parts)
    }

    /// Creates a `model` turn.
    #[must_use]
    pub fn model(parts: Vec<Part>) -> Self {
        Self::new(Role::Model, parts)
    }

    /// Concatenates all text parts except thought summaries, or `None` if there are none.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let mut texts = self
            .parts
            .iter()
            .filter(|part| !part.is_thought())
            .filter_map(Part::as_text)
            .peekable();
        texts.peek()?;
        Some(texts.collect())
    }

    /// Iterates the function calls in this turn, in order.
    pub fn function_calls(&self) -> impl Iterator<Item = &FunctionCall> {
        self.parts.iter().filter_map(Part::as_function_call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_text_part() {
        let part: Part = serde_json::from_value(json!({"text": "Hello"})).unwrap();
        assert_eq!(part.as_text(), Some("Hello"));
    }

    #[test]
    fn test_deserialize_function_call_with_signature() {
        let part: Part = serde_json::from_value(json!({
            "functionCall": {"id": "call_1", "name": "get_weather", "args": {"city": "Oslo"}},
            "thoughtSignature": "sig-abc"
        }))
        .unwrap();

        match part {
            Part::FunctionCall {
                function_call,
                thought_signature,
                extra,
            } => {
                assert_eq!(function_call.id.as_deref(), Some("call_1"));
                assert_eq!(function_call.name, "get_weather");
                assert_eq!(function_call.args["city"], "Oslo");
                assert_eq!(thought_signature.as_deref(), Some("sig-abc"));
                assert!(extra.is_empty());
            }
            other => panic!("Expected FunctionCall variant, got {other:?}"),
        }
    }

    #[test]
    fn test_function_call_without_args_defaults_to_null() {
        let raw = json!({"functionCall": {"name": "get_time"}});
        let part: Part = serde_json::from_value(raw.clone()).unwrap();
        let call = part.as_function_call().expect("function call");
        assert_eq!(call.args, Value::Null);

        // A missing field is not written back as `null`.
        assert_eq!(serde_json::to_value(&part).unwrap(), raw);
    }

    #[test]
    fn test_function_response_without_response_omits_field() {
        let raw = json!({"functionResponse": {"name": "get_time"}});
        let part: Part = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(part.as_function_response().unwrap().response, Value::Null);
        assert_eq!(serde_json::to_value(&part).unwrap(), raw);
    }

    #[test]
    fn test_thought_text_part() {
        let part: Part = serde_json::from_value(json!({
            "text": "Let me think about which tool to use",
            "thought": true
        }))
        .unwrap();

        assert!(part.is_thought());
        assert_eq!(part.as_text(), Some("Let me think about which tool to use"));
        assert!(!Part::text("answer").is_thought());
    }

    #[test]
    fn test_sibling_fields_roundtrip() {
        let raw = json!([
            {"text": "Which tool?", "thought": true, "thoughtSignature": "sig-1"},
            {"functionCall": {"name": "ping", "args": {}}, "videoMetadata": {"startOffset": "1s"}},
            {"fileData": {"fileUri": "gs://bucket/clip.mp4"}, "videoMetadata": {"endOffset": "9s"}},
            {"inlineData": {"mimeType": "image/png", "data": "AAAA"}, "mediaResolution": "LOW"}
        ]);
        let parts: Vec<Part> = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(
            parts[1].extra().and_then(|extra| extra.get("videoMetadata")),
            Some(&json!({"startOffset": "1s"}))
        );
        assert!(parts[0].extra().is_some_and(Map::is_empty));
        assert_eq!(serde_json::to_value(&parts).unwrap(), raw);
    }

    #[test]
    fn test_malformed_known_field_is_rejected() {
        let result: Result<Part, _> =
            serde_json::from_value(json!({"text": "hi", "thought": "yes"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_function_call_keeps_signature() {
        let part = Part::FunctionCall {
            function_call: FunctionCall::new("add", json!({"a": 1})),
            thought_signature: Some("sig".to_string()),
            extra: Map::new(),
        };
        let value = serde_json::to_value(&part).unwrap();
        assert_eq!(
            value,
            json!({"functionCall": {"name": "add", "args": {"a": 1}}, "thoughtSignature": "sig"})
        );
    }

    #[test]
    fn test_serialize_function_response_uses_camel_case_key() {
        let part: Part = FunctionResponse::new("add", json!(3))
            .with_id(Some("call_9".to_string()))
            .into();
        let value = serde_json::to_value(&part).unwrap();
        assert_eq!(
            value,
            json!({"functionResponse": {"id": "call_9", "name": "add", "response": {"result": 3}}})
        );
    }

    #[test]
    fn test_unknown_part_is_preserved() {
        let raw = json!({"videoMetadata": {"startOffset": "1s"}});
        let part: Part = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(part.unknown_part_type(), Some("videoMetadata"));
        assert!(!part.is_empty());
        assert_eq!(serde_json::to_value(&part).unwrap(), raw);
    }

    #[test]
    fn test_empty_part() {
        let part: Part = serde_json::from_value(json!({})).unwrap();
        assert!(part.is_empty());
        assert_eq!(part.unknown_part_type(), Some(""));
    }

    #[test]
    fn test_non_object_part_is_rejected() {
        let result: Result<Part, _> = serde_json::from_value(json!("just text"));
        assert!(result.is_err());
    }

    #[test]
    fn test_code_execution_parts() {
        let parts: Vec<Part> = serde_json::from_value(json!([
            {"executableCode": {"language": "PYTHON", "code": "print(1)"}},
            {"codeExecutionResult": {"outcome": "OUTCOME_OK", "output": "1\n"}}
        ]))
        .unwrap();

        assert!(matches!(
            &parts[0],
            Part::ExecutableCode { executable_code, .. } if executable_code.code == "print(1)"
        ));
        assert!(matches!(
            &parts[1],
            Part::CodeExecutionResult { code_execution_result, .. }
                if code_execution_result.output.as_deref() == Some("1\n")
        ));
    }

    #[test]
    fn test_role_roundtrip_and_unknown() {
        let role: Role = serde_json::from_value(json!("model")).unwrap();
        assert_eq!(role, Role::Model);

        let role: Role = serde_json::from_value(json!("function")).unwrap();
        assert!(role.is_unknown());
        assert_eq!(role.to_string(), "function");
        assert_eq!(serde_json::to_value(&role).unwrap(), json!("function"));
    }

    #[test]
    fn test_content_without_role() {
        let content: Content =
            serde_json::from_value(json!({"parts": [{"text": "hi"}]})).unwrap();
        assert!(content.role.is_none());
        assert_eq!(serde_json::to_value(&content).unwrap(), json!({"parts": [{"text": "hi"}]}));
    }

    #[test]
    fn test_content_text_concatenates_parts() {
        let content = Content::model(vec![
            Part::text("Hello "),
            Part::function_call("noop", json!({})),
            Part::text("world"),
        ]);
        assert_eq!(content.text().as_deref(), Some("Hello world"));

        let calls_only = Content::model(vec![Part::function_call("noop", json!({}))]);
        assert_eq!(calls_only.text(), None);

        let with_thought: Content = serde_json::from_value(json!({"parts": [
            {"text": "planning", "thought": true},
            {"text": "done"}
        ]}))
        .unwrap();
        assert_eq!(with_thought.text().as_deref(), Some("done"));
    }

    #[test]
    fn test_content_function_calls_in_order() {
        let content = Content::model(vec![
            Part::function_call("first", json!({})),
            Part::text("between"),
            Part::function_call("second", json!({})),
        ]);
        let names: Vec<_> = content.function_calls().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
    }
}
