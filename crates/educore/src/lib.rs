// educore - Content Generation
//
// Template-based generation of multiple-choice questions and lesson plans.
// This is the reference fallback backend: it substitutes a topic or subject
// into fixed sentence templates with no semantic understanding. Transports
// depend only on the two operation shapes, so a real generation backend can
// replace it without touching the dispatcher or HTTP layers.

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod content;
pub mod generator;

pub use content::{LessonPlan, Mcq, McqSet};
pub use generator::{ContentGenerator, GenerateError};
