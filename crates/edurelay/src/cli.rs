// CLI Interface
//
// This module provides the command-line interface for the EduChain server.

use crate::mcp::McpServer;
use anyhow::{Context, Result as AnyhowResult};
use clap::{Parser, Subcommand};
use educore::ContentGenerator;
use std::sync::Arc;
use tracing::info;

/// EduChain - Educational Content Generation Server
#[derive(Parser, Debug)]
#[command(name = "edurelay")]
#[command(author = "EduChain Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate MCQs and lesson plans, or serve them over MCP stdio", long_about = None)]
#[command(subcommand_required = false)]
#[command(arg_required_else_help = false)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Compatibility flag for some AI tools (defaults to MCP stdio mode)
    #[arg(long = "stdio")]
    pub stdio: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate multiple-choice questions for a topic
    Mcq {
        /// Topic to generate questions for
        #[arg(value_name = "TOPIC")]
        topic: String,

        /// Number of questions to generate
        #[arg(long = "count", default_value = "5")]
        count: usize,

        /// Difficulty hint (easy, medium, hard)
        #[arg(long = "difficulty", default_value = "medium")]
        difficulty: String,
    },

    /// Generate a lesson plan for a subject
    Lesson {
        /// Subject to plan a lesson for
        #[arg(value_name = "SUBJECT")]
        subject: String,

        /// Target grade level
        #[arg(long = "grade-level", default_value = "middle school")]
        grade_level: String,

        /// Planned duration
        #[arg(long = "duration", default_value = "1 hour")]
        duration: String,
    },

    /// Run MCP server in stdio mode (for AI tool subprocess integration)
    Mcp {
        /// Compatibility flag for some AI tools
        #[arg(long = "stdio")]
        stdio: bool,
    },
}

impl Cli {
    /// Run the CLI
    pub async fn run(self) -> AnyhowResult<()> {
        init_logging_impl(self.verbose);

        // Default to Mcp if no command is provided or if --stdio is set
        let command = if self.stdio {
            Commands::Mcp { stdio: true }
        } else {
            self.command.unwrap_or(Commands::Mcp { stdio: false })
        };

        match command {
            Commands::Mcq {
                topic,
                count,
                difficulty,
            } => cmd_mcq_impl(&topic, count, &difficulty),
            Commands::Lesson {
                subject,
                grade_level,
                duration,
            } => cmd_lesson_impl(&subject, &grade_level, &duration),
            Commands::Mcp { .. } => cmd_mcp_stdio_impl().await,
        }
    }
}

/// Initialize logging implementation
///
/// Logs go to stderr: in stdio mode, stdout belongs to the protocol.
fn init_logging_impl(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Mcq command implementation
fn cmd_mcq_impl(topic: &str, count: usize, difficulty: &str) -> AnyhowResult<()> {
    let generator = ContentGenerator::new();
    let set = generator
        .generate_mcqs(topic, count, difficulty)
        .context("Failed to generate questions")?;

    println!(
        "{}",
        serde_json::to_string_pretty(&set).context("Failed to serialize questions")?
    );
    Ok(())
}

/// Lesson command implementation
fn cmd_lesson_impl(subject: &str, grade_level: &str, duration: &str) -> AnyhowResult<()> {
    let generator = ContentGenerator::new();
    let plan = generator
        .generate_lesson_plan(subject, grade_level, duration)
        .context("Failed to generate lesson plan")?;

    println!(
        "{}",
        serde_json::to_string_pretty(&plan).context("Failed to serialize lesson plan")?
    );
    Ok(())
}

/// MCP stdio command implementation
///
/// Reads newline-delimited JSON-RPC from stdin and writes responses to
/// stdout until the input stream closes.
async fn cmd_mcp_stdio_impl() -> AnyhowResult<()> {
    info!("Starting EduChain MCP stdio server");

    let server = McpServer::new(Arc::new(ContentGenerator::new()));
    server.serve_stdio().await
}

/// Main entry point for the CLI
pub async fn main() -> AnyhowResult<()> {
    let cli = Cli::parse();
    cli.run().await
}
