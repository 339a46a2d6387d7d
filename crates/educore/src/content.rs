//! Generated content types
//!
//! All content is request-scoped: produced fresh per call, serialized into
//! one response, never persisted.

use serde::{Deserialize, Serialize};

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mcq {
    /// Question text with the topic substituted in
    pub question: String,

    /// Answer options, always four entries labelled A through D
    pub options: Vec<String>,

    /// Label of the correct option
    pub answer: String,
}

/// A set of generated multiple-choice questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqSet {
    /// Generated questions, in generation order
    pub questions: Vec<Mcq>,
}

impl McqSet {
    /// Number of questions in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the set contains no questions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// A generated lesson plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPlan {
    /// Subject the plan covers
    pub topic: String,

    /// Target grade level
    pub grade_level: String,

    /// Planned duration
    pub duration: String,

    /// Learning objectives
    pub objectives: Vec<String>,

    /// Classroom activities
    pub activities: Vec<String>,
}
