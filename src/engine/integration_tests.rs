// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::backends::local::{LocalToolFactory, MathTool, RandTool};
use crate::backends::stub::{CountingTool, RecordingModel};
use crate::config::consts::DEFAULT_MODEL_KEY;
use crate::config::{ModelRegistry, ToolRegistry};
use crate::engine::{NodeDispatcher, PipelineExecutor, RunSummary};
use crate::errors::{DispatchError, FailureStrategy, PipelineError};
use crate::script::Script;
use crate::traits::{LanguageModel, Tool};

/// Integration tests running scripts end to end with the local tools
#[cfg(test)]
mod tests {
    use super::*;

    fn builtin_tools(base_path: Option<std::path::PathBuf>) -> ToolRegistry {
        let factory = LocalToolFactory::new(base_path);
        let mut tools = ToolRegistry::new();
        for name in LocalToolFactory::list_available_implementations() {
            tools.insert(name.to_string(), factory.create_tool(name).unwrap());
        }
        tools
    }

    fn echo_model() -> (Arc<RecordingModel>, ModelRegistry) {
        let model = Arc::new(RecordingModel::new(""));
        let mut models = ModelRegistry::new();
        models.insert(
            DEFAULT_MODEL_KEY.to_string(),
            model.clone() as Arc<dyn LanguageModel>,
        );
        (model, models)
    }

    fn executor_for(
        script: &Script,
        tools: ToolRegistry,
        models: ModelRegistry,
    ) -> PipelineExecutor {
        PipelineExecutor::new(
            script.nodes.clone(),
            script.defaults,
            NodeDispatcher::new(tools, models),
        )
    }

    async fn run_script(
        executor: &PipelineExecutor,
        script: &Script,
        strategy: FailureStrategy,
    ) -> (Result<RunSummary, PipelineError>, String, String) {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let result = executor
            .run_inputs(&script.inputs, strategy, &mut stdout, &mut stderr)
            .await;
        (
            result,
            String::from_utf8(stdout).unwrap(),
            String::from_utf8(stderr).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_math_tool_runs_once_between_passthroughs() {
        let script = Script::parse("1 :\n2 :\n3 : tool math\n0 2 + 2\n");
        let counting = Arc::new(CountingTool::new());
        let mut tools = ToolRegistry::new();
        tools.insert("math".to_string(), counting.clone() as Arc<dyn Tool>);

        let executor = executor_for(&script, tools, ModelRegistry::new());
        let (result, stdout, _) = run_script(&executor, &script, FailureStrategy::FailFast).await;

        assert!(result.is_ok());
        assert_eq!(counting.calls(), vec!["2 + 2".to_string()]);
        assert_eq!(stdout, "2 + 2\n");
    }

    #[tokio::test]
    async fn test_math_result_is_emitted() {
        let script = Script::parse("1 :\n2 :\n3 : tool math\n0 2 + 2\n");
        let mut tools = ToolRegistry::new();
        tools.insert("math".to_string(), Arc::new(MathTool::new()) as Arc<dyn Tool>);

        let executor = executor_for(&script, tools, ModelRegistry::new());
        let (result, stdout, stderr) =
            run_script(&executor, &script, FailureStrategy::FailFast).await;

        assert_eq!(result.unwrap(), RunSummary { processed: 1, failed: 0 });
        assert_eq!(stdout, "4\n");
        assert!(stderr.is_empty());
    }

    #[tokio::test]
    async fn test_rand_failure_reaches_err_node_as_message_text() {
        let script = Script::parse("2 : tool rand\n4 : err\n0 0\n");
        let mut tools = ToolRegistry::new();
        tools.insert("rand".to_string(), Arc::new(RandTool::with_seed(1)) as Arc<dyn Tool>);

        let executor = executor_for(&script, tools, ModelRegistry::new());
        let (result, stdout, stderr) =
            run_script(&executor, &script, FailureStrategy::FailFast).await;

        match result {
            Err(PipelineError::Dispatch(DispatchError::ToolFailed { name, .. })) => {
                assert_eq!(name, "rand")
            }
            other => panic!("expected rand failure, got {:?}", other),
        }
        assert!(stdout.is_empty());
        assert_eq!(stderr, "tool \"rand\" failed: max number must be positive\n");
    }

    #[tokio::test]
    async fn test_calculator_script() {
        let script = Script::from_file("scripts/calculator.gendo").unwrap();
        assert_eq!(script.inputs, vec!["What is 2 + 2?", "10 / 4"]);
        assert_eq!(script.defaults.error, Some(2));

        let (model, models) = echo_model();
        let executor = executor_for(&script, builtin_tools(None), models);
        let (result, stdout, stderr) =
            run_script(&executor, &script, FailureStrategy::FailFast).await;

        assert_eq!(result.unwrap().processed, 2);
        assert_eq!(stdout, "4\n2.5\n");
        assert!(stderr.is_empty());

        let prompts: Vec<String> = model.calls().into_iter().map(|(prompt, _)| prompt).collect();
        assert_eq!(
            prompts,
            vec![
                "Extract the arithmetic expression from the question",
                "Reply with the number only",
                "Extract the arithmetic expression from the question",
                "Reply with the number only",
            ]
        );
    }

    #[tokio::test]
    async fn test_dice_script_routes_errors_through_default_error_node() {
        let script = Script::from_file("scripts/dice.gendo").unwrap();
        assert_eq!(script.defaults.error, Some(7));

        let (model, models) = echo_model();
        let executor = executor_for(&script, builtin_tools(None), models);
        let (result, stdout, stderr) =
            run_script(&executor, &script, FailureStrategy::ContinueOnError).await;

        assert_eq!(result.unwrap(), RunSummary { processed: 2, failed: 1 });

        let roll: i64 = stdout.trim_end().parse().unwrap();
        assert!((0..6).contains(&roll));
        assert_eq!(stderr, "tool \"rand\" failed: max number must be positive\n");
        assert_eq!(
            model.calls(),
            vec![(
                "Explain this error to the user in one sentence".to_string(),
                "tool \"rand\" failed: max number must be positive".to_string(),
            )]
        );
    }

    #[tokio::test]
    async fn test_notes_script_writes_under_base_path() {
        let dir = tempfile::tempdir().unwrap();
        let script = Script::from_file("scripts/notes.gendo").unwrap();

        let executor = executor_for(
            &script,
            builtin_tools(Some(dir.path().to_path_buf())),
            ModelRegistry::new(),
        );
        let (result, stdout, _) = run_script(&executor, &script, FailureStrategy::FailFast).await;

        assert!(result.is_ok());
        assert!(stdout.starts_with("Successfully wrote to "));
        let written = std::fs::read_to_string(dir.path().join("note.txt")).unwrap();
        assert_eq!(written, "remember the milk");
    }

    #[tokio::test]
    async fn test_prompt_node_without_model_fails() {
        let script = Script::parse("1 : Summarize this\n9 : err\n0 long text\n");
        let executor = executor_for(&script, ToolRegistry::new(), ModelRegistry::new());
        let (result, _, stderr) = run_script(&executor, &script, FailureStrategy::FailFast).await;

        assert!(matches!(
            result,
            Err(PipelineError::Dispatch(DispatchError::NoModelAvailable))
        ));
        assert_eq!(stderr, "no model available\n");
    }

    #[tokio::test]
    async fn test_piped_lines_bypass_script_inputs() {
        let script = Script::parse("2 : tool math\n0 1 + 1\n");
        let executor = executor_for(&script, builtin_tools(None), ModelRegistry::new());
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();

        let summary = executor
            .run_reader(
                &b"3 * 3\n8 - 10\n"[..],
                FailureStrategy::FailFast,
                &mut stdout,
                &mut stderr,
            )
            .await
            .unwrap();

        assert_eq!(summary.processed, 2);
        assert_eq!(String::from_utf8(stdout).unwrap(), "9\n-2\n");
    }
}
