// Integration Tests for edurelay
//
// These tests drive the MCP dispatch loop end to end over in-memory
// streams: full lines in, full lines out, exactly as a subprocess client
// would see them.

use educore::ContentGenerator;
use edurelay::mcp::McpServer;
use serde_json::Value;
use std::io::Cursor;
use std::sync::Arc;

fn new_server() -> McpServer {
    McpServer::new(Arc::new(ContentGenerator::new()))
}

/// Feed newline-joined requests to the dispatch loop, return parsed
/// response lines.
async fn dispatch_lines(input: &str) -> Vec<Value> {
    let server = new_server();
    let mut output = Vec::new();
    server
        .serve(Cursor::new(input.as_bytes()), &mut output)
        .await
        .expect("dispatch loop failed");

    std::str::from_utf8(&output)
        .expect("output is utf-8")
        .lines()
        .map(|l| serde_json::from_str(l).expect("response line is JSON"))
        .collect()
}

// ============================================================================
// PROTOCOL ROUND-TRIP TESTS
// ============================================================================

mod round_trip_tests {
    use super::*;

    #[tokio::test]
    async fn test_mcq_scenario() {
        let responses = dispatch_lines(
            "{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"tools/call\",\"params\":{\"name\":\"generate_mcqs\",\"arguments\":{\"topic\":\"Algebra\",\"count\":3}}}\n",
        )
        .await;

        assert_eq!(responses.len(), 1);
        let response = &responses[0];
        assert_eq!(response["id"], 1);

        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        let payload: Value = serde_json::from_str(text).unwrap();
        let questions = payload["questions"].as_array().unwrap();

        assert_eq!(questions.len(), 3);
        for q in questions {
            assert!(q["question"].as_str().unwrap().contains("Algebra"));
            assert_eq!(q["options"].as_array().unwrap().len(), 4);
            assert!(q["answer"].is_string());
        }
    }

    #[tokio::test]
    async fn test_unknown_tool_scenario() {
        let server = new_server();
        let mut output = Vec::new();
        server
            .serve(
                Cursor::new(
                    &b"{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"tools/call\",\"params\":{\"name\":\"bogus_tool\",\"arguments\":{}}}\n"[..],
                ),
                &mut output,
            )
            .await
            .unwrap();

        let line = std::str::from_utf8(&output).unwrap().trim_end();
        assert_eq!(
            line,
            r#"{"jsonrpc":"2.0","id":2,"error":{"code":-32601,"message":"Unknown tool: bogus_tool"}}"#
        );
    }

    #[tokio::test]
    async fn test_listed_tools_all_callable_with_defaults() {
        let responses =
            dispatch_lines("{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"tools/list\"}\n").await;
        let tools = responses[0]["result"]["tools"].as_array().unwrap().clone();
        assert!(!tools.is_empty());

        // Call each advertised tool with no arguments: declared defaults
        // must be enough for the call to succeed.
        let mut input = String::new();
        for (i, tool) in tools.iter().enumerate() {
            input.push_str(&format!(
                "{{\"jsonrpc\":\"2.0\",\"id\":{},\"method\":\"tools/call\",\"params\":{{\"name\":\"{}\",\"arguments\":{{}}}}}}\n",
                i,
                tool["name"].as_str().unwrap(),
            ));
        }

        let responses = dispatch_lines(&input).await;
        assert_eq!(responses.len(), tools.len());
        for response in &responses {
            assert!(response.get("error").is_none());
            let content = response["result"]["content"].as_array().unwrap();
            assert!(!content.is_empty());
            assert_eq!(content[0]["type"], "text");
        }
    }

    #[tokio::test]
    async fn test_initialize_repeated_is_byte_identical() {
        let responses = dispatch_lines(concat!(
            "{\"jsonrpc\":\"2.0\",\"id\":9,\"method\":\"initialize\"}\n",
            "{\"jsonrpc\":\"2.0\",\"id\":9,\"method\":\"initialize\"}\n",
        ))
        .await;

        assert_eq!(responses.len(), 2);
        assert_eq!(
            serde_json::to_string(&responses[0]).unwrap(),
            serde_json::to_string(&responses[1]).unwrap()
        );
    }

    #[tokio::test]
    async fn test_request_id_types_echoed_verbatim() {
        let responses = dispatch_lines(concat!(
            "{\"jsonrpc\":\"2.0\",\"id\":\"str-id\",\"method\":\"initialize\"}\n",
            "{\"jsonrpc\":\"2.0\",\"id\":17,\"method\":\"initialize\"}\n",
            "{\"jsonrpc\":\"2.0\",\"id\":null,\"method\":\"initialize\"}\n",
        ))
        .await;

        assert_eq!(responses[0]["id"], "str-id");
        assert_eq!(responses[1]["id"], 17);
        assert!(responses[2]["id"].is_null());
    }
}

// ============================================================================
// FAILURE SEMANTICS TESTS
// ============================================================================

mod failure_tests {
    use super::*;

    #[tokio::test]
    async fn test_malformed_line_produces_no_output() {
        let responses = dispatch_lines("not json at all\n").await;
        assert!(responses.is_empty());
    }

    #[tokio::test]
    async fn test_loop_survives_malformed_lines() {
        let responses = dispatch_lines(concat!(
            "garbage{{{\n",
            "{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"initialize\"}\n",
        ))
        .await;

        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], 1);
    }

    #[tokio::test]
    async fn test_invalid_envelope_answers_with_recovered_id() {
        // Valid JSON that is not a valid envelope must not be dropped: the
        // id is recoverable, so an error response carries it back. A
        // missing jsonrpc key alone is tolerated and served normally.
        let responses = dispatch_lines(concat!(
            "{\"jsonrpc\":\"2.0\",\"id\":5}\n",
            "{\"id\":6,\"method\":\"tools/list\"}\n",
        ))
        .await;

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], 5);
        assert_eq!(responses[0]["error"]["code"], -32600);
        assert_eq!(responses[1]["id"], 6);
        assert!(responses[1].get("error").is_none());
        assert!(responses[1]["result"]["tools"].is_array());
    }

    #[tokio::test]
    async fn test_unknown_method_references_method_name() {
        let responses = dispatch_lines(
            "{\"jsonrpc\":\"2.0\",\"id\":4,\"method\":\"prompts/list\"}\n",
        )
        .await;

        let error = &responses[0]["error"];
        assert_eq!(error["code"], -32601);
        assert_eq!(error["message"], "Unknown method: prompts/list");
        assert!(responses[0].get("result").is_none());
    }

    #[tokio::test]
    async fn test_generator_failure_maps_to_internal_error() {
        // Empty topic is rejected by the generator; the loop must report
        // -32603 with the original message and keep serving.
        let responses = dispatch_lines(concat!(
            "{\"jsonrpc\":\"2.0\",\"id\":5,\"method\":\"tools/call\",\"params\":{\"name\":\"generate_mcqs\",\"arguments\":{\"topic\":\"\"}}}\n",
            "{\"jsonrpc\":\"2.0\",\"id\":6,\"method\":\"tools/list\"}\n",
        ))
        .await;

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["error"]["code"], -32603);
        assert!(responses[0]["error"]["message"]
            .as_str()
            .unwrap()
            .contains("empty"));
        assert_eq!(responses[0]["id"], 5);
        assert!(responses[1].get("error").is_none());
    }
}

// ============================================================================
// CLI PARSING TESTS
// ============================================================================

mod cli_tests {
    use clap::Parser;
    use edurelay::cli::{Cli, Commands};

    #[test]
    fn test_cli_defaults_to_mcp_mode() {
        let cli = Cli::parse_from(["edurelay"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_mcq_with_difficulty() {
        let cli = Cli::parse_from(["edurelay", "mcq", "Physics", "--difficulty", "hard"]);
        match cli.command {
            Some(Commands::Mcq { topic, difficulty, .. }) => {
                assert_eq!(topic, "Physics");
                assert_eq!(difficulty, "hard");
            }
            _ => panic!("Expected Mcq command"),
        }
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["edurelay", "-v", "mcp"]);
        assert!(cli.verbose);
    }
}
