//! Template-based content generator
//!
//! The generator is stateless across calls and safe to share behind an
//! `Arc`: both transports hold one process-lifetime instance.

use crate::content::{LessonPlan, Mcq, McqSet};
use thiserror::Error;
use tracing::debug;

/// Concepts rotated through when filling the question template
const CONCEPTS: &[&str] = &["loops", "functions", "variables", "classes"];

/// Fixed answer options for every generated question
const MCQ_OPTIONS: &[&str] = &[
    "A. Code repetition",
    "B. Data storage",
    "C. Both A and B",
    "D. None",
];

/// Label of the correct option in the fixed template
const MCQ_ANSWER: &str = "A";

/// Objective templates, `{topic}` substituted per call
const OBJECTIVE_TEMPLATES: &[&str] = &[
    "Understand {topic} fundamentals",
    "Apply {topic} in real-world scenarios",
];

/// Activity templates, `{topic}` substituted per call
const ACTIVITY_TEMPLATES: &[&str] = &[
    "Lecture: {topic} basics",
    "Hands-on {topic} exercises",
];

/// Content generation errors
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The topic or subject string was empty
    #[error("Topic must not be empty")]
    EmptyTopic,

    /// A question count of zero was requested
    #[error("Question count must be at least 1")]
    ZeroCount,
}

/// Template-based generator for questions and lesson plans
///
/// Holds no per-request state. Output is deterministic: the question
/// template rotates through a fixed concept list by index.
#[derive(Debug, Clone, Default)]
pub struct ContentGenerator;

impl ContentGenerator {
    /// Create a new generator instance
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generate `count` multiple-choice questions about `topic`
    ///
    /// The `difficulty` hint is accepted for interface parity with real
    /// generation backends; the template backend does not act on it.
    pub fn generate_mcqs(
        &self,
        topic: &str,
        count: usize,
        difficulty: &str,
    ) -> Result<McqSet, GenerateError> {
        if topic.trim().is_empty() {
            return Err(GenerateError::EmptyTopic);
        }
        if count == 0 {
            return Err(GenerateError::ZeroCount);
        }

        debug!(topic, count, difficulty, "generating mcqs");

        let questions = (0..count)
            .map(|i| {
                let concept = CONCEPTS[i % CONCEPTS.len()];
                Mcq {
                    question: format!("What is {} used for in {}?", concept, topic),
                    options: MCQ_OPTIONS.iter().map(|s| s.to_string()).collect(),
                    answer: MCQ_ANSWER.to_string(),
                }
            })
            .collect();

        Ok(McqSet { questions })
    }

    /// Generate a lesson plan for `subject`
    pub fn generate_lesson_plan(
        &self,
        subject: &str,
        grade_level: &str,
        duration: &str,
    ) -> Result<LessonPlan, GenerateError> {
        if subject.trim().is_empty() {
            return Err(GenerateError::EmptyTopic);
        }

        debug!(subject, grade_level, duration, "generating lesson plan");

        Ok(LessonPlan {
            topic: subject.to_string(),
            grade_level: grade_level.to_string(),
            duration: duration.to_string(),
            objectives: OBJECTIVE_TEMPLATES
                .iter()
                .map(|t| t.replace("{topic}", subject))
                .collect(),
            activities: ACTIVITY_TEMPLATES
                .iter()
                .map(|t| t.replace("{topic}", subject))
                .collect(),
        })
    }
}
