// MCP Tool Handlers
//
// This module implements the handlers for each MCP tool that the server
// exposes. The handler set is the advertised capability surface: built once
// at startup, never mutated.

use super::protocol::JsonRpcError;
use educore::ContentGenerator;
use serde_json::Value;

/// Default topic when the client omits one
const DEFAULT_TOPIC: &str = "Python";

/// Default subject when the client omits one
const DEFAULT_SUBJECT: &str = "Math";

/// Default question count
const DEFAULT_COUNT: usize = 5;

/// Declared bounds for the question count argument
const MIN_COUNT: usize = 1;
const MAX_COUNT: usize = 20;

/// Grade level applied when generating plans over the tool surface
const DEFAULT_GRADE_LEVEL: &str = "middle school";

/// Duration applied when generating plans over the tool surface
const DEFAULT_DURATION: &str = "1 hour";

/// Enum of all tool handlers
///
/// Instead of using trait objects (which don't work well with async),
/// we use an enum to dispatch to the appropriate handler.
#[derive(Clone)]
pub enum ToolHandler {
    /// Handler for multiple-choice question generation
    GenerateMcqs(GenerateMcqsHandler),
    /// Handler for lesson plan generation
    GenerateLessonPlan(GenerateLessonPlanHandler),
}

impl ToolHandler {
    /// Get the tool name
    pub fn name(&self) -> &str {
        match self {
            ToolHandler::GenerateMcqs(h) => h.name(),
            ToolHandler::GenerateLessonPlan(h) => h.name(),
        }
    }

    /// Get the tool description
    pub fn description(&self) -> &str {
        match self {
            ToolHandler::GenerateMcqs(h) => h.description(),
            ToolHandler::GenerateLessonPlan(h) => h.description(),
        }
    }

    /// Get the tool argument schema
    pub fn argument_schema(&self) -> Value {
        match self {
            ToolHandler::GenerateMcqs(h) => h.argument_schema(),
            ToolHandler::GenerateLessonPlan(h) => h.argument_schema(),
        }
    }

    /// Execute the tool
    pub async fn execute(
        &self,
        generator: &ContentGenerator,
        args: Value,
    ) -> Result<Value, JsonRpcError> {
        match self {
            ToolHandler::GenerateMcqs(h) => h.execute(generator, args).await,
            ToolHandler::GenerateLessonPlan(h) => h.execute(generator, args).await,
        }
    }
}

/// The full handler set, in advertisement order
pub fn default_handlers() -> Vec<ToolHandler> {
    vec![
        ToolHandler::GenerateMcqs(GenerateMcqsHandler),
        ToolHandler::GenerateLessonPlan(GenerateLessonPlanHandler),
    ]
}

/// Helper to extract a string argument with default
fn extract_string_or(args: &Value, key: &str, default: &str) -> Result<String, JsonRpcError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(default.to_string()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(JsonRpcError::invalid_params_with_suggestion(
            format!("Invalid string argument: {}", key),
            format!("Pass \"{}\" as a JSON string", key),
        )),
    }
}

/// Helper to extract an integer argument with default
fn extract_usize_or(args: &Value, key: &str, default: usize) -> Result<usize, JsonRpcError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(default),
        Some(v) => v
            .as_u64()
            // Saturate values beyond usize so callers clamp instead of
            // seeing a truncated count on 32-bit targets
            .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
            .ok_or_else(|| {
                JsonRpcError::invalid_params_with_suggestion(
                    format!("Invalid integer argument: {}", key),
                    format!("Pass \"{}\" as a non-negative JSON integer", key),
                )
            }),
    }
}

/// Handler for generate_mcqs
///
/// Generates multiple-choice questions for a given topic.
#[derive(Clone)]
pub struct GenerateMcqsHandler;

impl GenerateMcqsHandler {
    /// Returns the name of this tool
    pub fn name(&self) -> &str {
        "generate_mcqs"
    }

    /// Returns the description of this tool
    pub fn description(&self) -> &str {
        "Generate multiple choice questions for a given topic"
    }

    /// Returns the JSON schema for the arguments of this tool
    pub fn argument_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "The topic to generate questions for",
                    "default": DEFAULT_TOPIC
                },
                "count": {
                    "type": "integer",
                    "description": "Number of questions to generate",
                    "default": DEFAULT_COUNT,
                    "minimum": MIN_COUNT,
                    "maximum": MAX_COUNT
                }
            }
        })
    }

    /// Executes the tool
    pub async fn execute(
        &self,
        generator: &ContentGenerator,
        args: Value,
    ) -> Result<Value, JsonRpcError> {
        let topic = extract_string_or(&args, "topic", DEFAULT_TOPIC)?;
        let count = extract_usize_or(&args, "count", DEFAULT_COUNT)?.clamp(MIN_COUNT, MAX_COUNT);

        let set = generator
            .generate_mcqs(&topic, count, "medium")
            .map_err(|e| JsonRpcError::internal_error(e.to_string()))?;

        serde_json::to_value(set)
            .map_err(|e| JsonRpcError::internal_error(format!("Serialization error: {}", e)))
    }
}

/// Handler for generate_lesson_plan
///
/// Generates a lesson plan for a given subject.
#[derive(Clone)]
pub struct GenerateLessonPlanHandler;

impl GenerateLessonPlanHandler {
    /// Returns the name of this tool
    pub fn name(&self) -> &str {
        "generate_lesson_plan"
    }

    /// Returns the description of this tool
    pub fn description(&self) -> &str {
        "Generate a lesson plan for a given subject"
    }

    /// Returns the JSON schema for the arguments of this tool
    pub fn argument_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "subject": {
                    "type": "string",
                    "description": "The subject to create a lesson plan for",
                    "default": DEFAULT_SUBJECT
                }
            }
        })
    }

    /// Executes the tool
    pub async fn execute(
        &self,
        generator: &ContentGenerator,
        args: Value,
    ) -> Result<Value, JsonRpcError> {
        let subject = extract_string_or(&args, "subject", DEFAULT_SUBJECT)?;

        let plan = generator
            .generate_lesson_plan(&subject, DEFAULT_GRADE_LEVEL, DEFAULT_DURATION)
            .map_err(|e| JsonRpcError::internal_error(e.to_string()))?;

        serde_json::to_value(plan)
            .map_err(|e| JsonRpcError::internal_error(format!("Serialization error: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::protocol::error_codes;
    use rstest::rstest;

    #[test]
    fn test_handler_names() {
        assert_eq!(GenerateMcqsHandler.name(), "generate_mcqs");
        assert_eq!(GenerateLessonPlanHandler.name(), "generate_lesson_plan");
    }

    #[test]
    fn test_default_handlers_unique_names() {
        let handlers = default_handlers();
        let mut names: Vec<_> = handlers.iter().map(|h| h.name().to_string()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), handlers.len());
    }

    #[test]
    fn test_argument_schemas() {
        for handler in default_handlers() {
            let schema = handler.argument_schema();
            assert!(schema.is_object());
            assert_eq!(schema["type"], "object");
            assert!(schema.get("properties").is_some());
        }
    }

    #[test]
    fn test_extract_string_or() {
        let args = serde_json::json!({"topic": "Algebra"});
        assert_eq!(
            extract_string_or(&args, "topic", "Python").unwrap(),
            "Algebra"
        );
        assert_eq!(
            extract_string_or(&args, "missing", "Python").unwrap(),
            "Python"
        );
        assert!(extract_string_or(&serde_json::json!({"topic": 7}), "topic", "Python").is_err());
    }

    #[test]
    fn test_extract_usize_or() {
        let args = serde_json::json!({"count": 12});
        assert_eq!(extract_usize_or(&args, "count", 5).unwrap(), 12);
        assert_eq!(extract_usize_or(&args, "missing", 5).unwrap(), 5);
        assert_eq!(
            extract_usize_or(&serde_json::json!({"count": u64::MAX}), "count", 5).unwrap(),
            usize::MAX
        );
        assert!(extract_usize_or(&serde_json::json!({"count": -1}), "count", 5).is_err());
        assert!(extract_usize_or(&serde_json::json!({"count": "x"}), "count", 5).is_err());
    }

    #[tokio::test]
    async fn test_mcqs_execute_with_defaults() {
        let generator = ContentGenerator::new();
        let result = GenerateMcqsHandler
            .execute(&generator, serde_json::json!({}))
            .await
            .unwrap();

        let questions = result["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 5);
        assert!(questions[0]["question"]
            .as_str()
            .unwrap()
            .contains("Python"));
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(12, 12)]
    #[case(20, 20)]
    #[case(100, 20)]
    #[tokio::test]
    async fn test_mcqs_execute_clamps_count(#[case] requested: usize, #[case] expected: usize) {
        let generator = ContentGenerator::new();
        let result = GenerateMcqsHandler
            .execute(&generator, serde_json::json!({"count": requested}))
            .await
            .unwrap();
        assert_eq!(result["questions"].as_array().unwrap().len(), expected);
    }

    #[tokio::test]
    async fn test_mcqs_execute_clamps_count_beyond_u64_range() {
        let generator = ContentGenerator::new();
        let result = GenerateMcqsHandler
            .execute(&generator, serde_json::json!({"count": u64::MAX}))
            .await
            .unwrap();
        assert_eq!(result["questions"].as_array().unwrap().len(), MAX_COUNT);
    }

    #[tokio::test]
    async fn test_mcqs_execute_empty_topic_is_internal_error() {
        let generator = ContentGenerator::new();
        let err = GenerateMcqsHandler
            .execute(&generator, serde_json::json!({"topic": ""}))
            .await
            .unwrap_err();
        assert_eq!(err.code, error_codes::INTERNAL_ERROR);
    }

    #[tokio::test]
    async fn test_lesson_plan_execute_with_defaults() {
        let generator = ContentGenerator::new();
        let result = GenerateLessonPlanHandler
            .execute(&generator, serde_json::json!({}))
            .await
            .unwrap();

        assert_eq!(result["topic"], "Math");
        assert_eq!(result["grade_level"], "middle school");
        assert_eq!(result["duration"], "1 hour");
        assert_eq!(result["objectives"].as_array().unwrap().len(), 2);
    }
}
