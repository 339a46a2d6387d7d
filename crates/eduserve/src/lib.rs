//! eduserve - EduChain HTTP server
//!
//! Exposes the educore generation operations as typed POST endpoints:
//! `/tools/generate_mcqs` and `/resources/get_lesson_plan`. Generator
//! failures surface as HTTP 500 with the error message as the detail body.

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::EduServeServer;
